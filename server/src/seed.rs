// server/src/seed.rs

//! Sample catalog, inserted idempotently when `SEED_DB=true`. Useful for
//! demos and local development; a deployment with a real catalog leaves the
//! flag off.

use sqlx::PgPool;
use tracing::info;

use crate::errors::Result;

struct SeedRestaurant {
  id: &'static str,
  name: &'static str,
  description: &'static str,
  image: &'static str,
  cuisine_type: &'static str,
  rating: f64,
  delivery_time: &'static str,
  min_order_cents: i64,
}

struct SeedMenuItem {
  id: &'static str,
  restaurant_id: &'static str,
  name: &'static str,
  description: &'static str,
  price_cents: i64,
  image: &'static str,
  category: &'static str,
}

const RESTAURANTS: &[SeedRestaurant] = &[
  SeedRestaurant {
    id: "rest1",
    name: "The Burger House",
    description: "Best burgers in town with premium ingredients",
    image: "https://images.unsplash.com/photo-1571091718767-18b5b1457add?w=800&h=600&fit=crop",
    cuisine_type: "American",
    rating: 4.5,
    delivery_time: "25-35 min",
    min_order_cents: 1000,
  },
  SeedRestaurant {
    id: "rest2",
    name: "Pizza Paradise",
    description: "Authentic Italian pizza baked in wood-fired oven",
    image: "https://images.unsplash.com/photo-1513104890138-7c749659a591?w=800&h=600&fit=crop",
    cuisine_type: "Italian",
    rating: 4.8,
    delivery_time: "30-40 min",
    min_order_cents: 1500,
  },
  SeedRestaurant {
    id: "rest3",
    name: "Sushi Master",
    description: "Fresh sushi and Japanese cuisine",
    image: "https://images.unsplash.com/photo-1579584425555-c3ce17fd4351?w=800&h=600&fit=crop",
    cuisine_type: "Japanese",
    rating: 4.7,
    delivery_time: "35-45 min",
    min_order_cents: 2000,
  },
  SeedRestaurant {
    id: "rest4",
    name: "Taco Fiesta",
    description: "Authentic Mexican street food",
    image: "https://images.unsplash.com/photo-1565299585323-38d6b0865b47?w=800&h=600&fit=crop",
    cuisine_type: "Mexican",
    rating: 4.4,
    delivery_time: "20-30 min",
    min_order_cents: 1200,
  },
  SeedRestaurant {
    id: "rest5",
    name: "Spice Garden",
    description: "Aromatic Indian curries and tandoori",
    image: "https://images.unsplash.com/photo-1585937421612-70a008356fbe?w=800&h=600&fit=crop",
    cuisine_type: "Indian",
    rating: 4.6,
    delivery_time: "30-40 min",
    min_order_cents: 1500,
  },
  SeedRestaurant {
    id: "rest6",
    name: "Noodle Bar",
    description: "Delicious Asian noodles and stir-fry",
    image: "https://images.unsplash.com/photo-1612929633738-8fe44f7ec841?w=800&h=600&fit=crop",
    cuisine_type: "Asian",
    rating: 4.3,
    delivery_time: "20-30 min",
    min_order_cents: 1000,
  },
];

const MENU_ITEMS: &[SeedMenuItem] = &[
  // The Burger House
  SeedMenuItem {
    id: "menu1",
    restaurant_id: "rest1",
    name: "Classic Burger",
    description: "Beef patty, lettuce, tomato, cheese",
    price_cents: 1299,
    image: "https://images.unsplash.com/photo-1568901346375-23c9450c58cd?w=400&h=300&fit=crop",
    category: "Burgers",
  },
  SeedMenuItem {
    id: "menu2",
    restaurant_id: "rest1",
    name: "Bacon Deluxe",
    description: "Double patty, bacon, special sauce",
    price_cents: 1599,
    image: "https://images.unsplash.com/photo-1550547660-d9450f859349?w=400&h=300&fit=crop",
    category: "Burgers",
  },
  SeedMenuItem {
    id: "menu3",
    restaurant_id: "rest1",
    name: "Crispy Fries",
    description: "Golden french fries",
    price_cents: 499,
    image: "https://images.unsplash.com/photo-1573080496219-bb080dd4f877?w=400&h=300&fit=crop",
    category: "Sides",
  },
  SeedMenuItem {
    id: "menu4",
    restaurant_id: "rest1",
    name: "Onion Rings",
    description: "Crispy fried onion rings",
    price_cents: 599,
    image: "https://images.unsplash.com/photo-1639024471283-03518883512d?w=400&h=300&fit=crop",
    category: "Sides",
  },
  // Pizza Paradise
  SeedMenuItem {
    id: "menu5",
    restaurant_id: "rest2",
    name: "Margherita Pizza",
    description: "Tomato, mozzarella, basil",
    price_cents: 1499,
    image: "https://images.unsplash.com/photo-1574071318508-1cdbab80d002?w=400&h=300&fit=crop",
    category: "Pizza",
  },
  SeedMenuItem {
    id: "menu6",
    restaurant_id: "rest2",
    name: "Pepperoni Pizza",
    description: "Classic pepperoni and cheese",
    price_cents: 1699,
    image: "https://images.unsplash.com/photo-1628840042765-356cda07504e?w=400&h=300&fit=crop",
    category: "Pizza",
  },
  SeedMenuItem {
    id: "menu7",
    restaurant_id: "rest2",
    name: "Caesar Salad",
    description: "Fresh romaine, parmesan, croutons",
    price_cents: 899,
    image: "https://images.unsplash.com/photo-1546793665-c74683f339c1?w=400&h=300&fit=crop",
    category: "Salads",
  },
  // Sushi Master
  SeedMenuItem {
    id: "menu8",
    restaurant_id: "rest3",
    name: "California Roll",
    description: "Crab, avocado, cucumber",
    price_cents: 1199,
    image: "https://images.unsplash.com/photo-1579584425555-c3ce17fd4351?w=400&h=300&fit=crop",
    category: "Rolls",
  },
  SeedMenuItem {
    id: "menu9",
    restaurant_id: "rest3",
    name: "Spicy Tuna Roll",
    description: "Spicy tuna, cucumber, sriracha",
    price_cents: 1399,
    image: "https://images.unsplash.com/photo-1617196034796-73dfa7b1fd56?w=400&h=300&fit=crop",
    category: "Rolls",
  },
  SeedMenuItem {
    id: "menu10",
    restaurant_id: "rest3",
    name: "Miso Soup",
    description: "Traditional Japanese soup",
    price_cents: 499,
    image: "https://images.unsplash.com/photo-1547548061-9d2eeec21eef?w=400&h=300&fit=crop",
    category: "Appetizers",
  },
  // Taco Fiesta
  SeedMenuItem {
    id: "menu11",
    restaurant_id: "rest4",
    name: "Beef Tacos",
    description: "3 tacos with seasoned beef",
    price_cents: 999,
    image: "https://images.unsplash.com/photo-1565299585323-38d6b0865b47?w=400&h=300&fit=crop",
    category: "Tacos",
  },
  SeedMenuItem {
    id: "menu12",
    restaurant_id: "rest4",
    name: "Chicken Burrito",
    description: "Large burrito with grilled chicken",
    price_cents: 1199,
    image: "https://images.unsplash.com/photo-1626700051175-6818013e1d4f?w=400&h=300&fit=crop",
    category: "Burritos",
  },
  SeedMenuItem {
    id: "menu13",
    restaurant_id: "rest4",
    name: "Nachos Supreme",
    description: "Loaded nachos with all toppings",
    price_cents: 1099,
    image: "https://images.unsplash.com/photo-1513456852971-30c0b8199d4d?w=400&h=300&fit=crop",
    category: "Appetizers",
  },
  // Spice Garden
  SeedMenuItem {
    id: "menu14",
    restaurant_id: "rest5",
    name: "Butter Chicken",
    description: "Creamy tomato curry with chicken",
    price_cents: 1499,
    image: "https://images.unsplash.com/photo-1603894584373-5ac82b2ae398?w=400&h=300&fit=crop",
    category: "Curry",
  },
  SeedMenuItem {
    id: "menu15",
    restaurant_id: "rest5",
    name: "Tandoori Chicken",
    description: "Marinated and grilled chicken",
    price_cents: 1399,
    image: "https://images.unsplash.com/photo-1610057099443-fde8c4d50f91?w=400&h=300&fit=crop",
    category: "Tandoori",
  },
  SeedMenuItem {
    id: "menu16",
    restaurant_id: "rest5",
    name: "Garlic Naan",
    description: "Fresh baked bread with garlic",
    price_cents: 399,
    image: "https://images.unsplash.com/photo-1585937421612-70a008356fbe?w=400&h=300&fit=crop",
    category: "Breads",
  },
  // Noodle Bar
  SeedMenuItem {
    id: "menu17",
    restaurant_id: "rest6",
    name: "Pad Thai",
    description: "Thai rice noodles with shrimp",
    price_cents: 1299,
    image: "https://images.unsplash.com/photo-1559314809-0d155014e29e?w=400&h=300&fit=crop",
    category: "Noodles",
  },
  SeedMenuItem {
    id: "menu18",
    restaurant_id: "rest6",
    name: "Ramen Bowl",
    description: "Japanese noodle soup",
    price_cents: 1399,
    image: "https://images.unsplash.com/photo-1617093727343-374698b1b08d?w=400&h=300&fit=crop",
    category: "Noodles",
  },
  SeedMenuItem {
    id: "menu19",
    restaurant_id: "rest6",
    name: "Spring Rolls",
    description: "Fresh vegetable spring rolls",
    price_cents: 699,
    image: "https://images.unsplash.com/photo-1594756202469-9ff9799dd03b?w=400&h=300&fit=crop",
    category: "Appetizers",
  },
];

pub async fn seed_db(pool: &PgPool) -> Result<()> {
  let mut new_restaurants = 0;
  for r in RESTAURANTS {
    let result = sqlx::query(
      "INSERT INTO restaurants (id, name, description, image, cuisine_type, rating, delivery_time, min_order_cents) \
       VALUES ($1, $2, $3, $4, $5, $6, $7, $8) ON CONFLICT (id) DO NOTHING",
    )
    .bind(r.id)
    .bind(r.name)
    .bind(r.description)
    .bind(r.image)
    .bind(r.cuisine_type)
    .bind(r.rating)
    .bind(r.delivery_time)
    .bind(r.min_order_cents)
    .execute(pool)
    .await?;
    new_restaurants += result.rows_affected();
  }

  let mut new_items = 0;
  for m in MENU_ITEMS {
    let result = sqlx::query(
      "INSERT INTO menu_items (id, restaurant_id, name, description, price_cents, image, category, available) \
       VALUES ($1, $2, $3, $4, $5, $6, $7, TRUE) ON CONFLICT (id) DO NOTHING",
    )
    .bind(m.id)
    .bind(m.restaurant_id)
    .bind(m.name)
    .bind(m.description)
    .bind(m.price_cents)
    .bind(m.image)
    .bind(m.category)
    .execute(pool)
    .await?;
    new_items += result.rows_affected();
  }

  info!(
    "Seed catalog in place ({} new restaurants, {} new menu items).",
    new_restaurants, new_items
  );
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashSet;

  #[test]
  fn seed_ids_are_unique() {
    let restaurant_ids: HashSet<_> = RESTAURANTS.iter().map(|r| r.id).collect();
    assert_eq!(restaurant_ids.len(), RESTAURANTS.len());

    let item_ids: HashSet<_> = MENU_ITEMS.iter().map(|m| m.id).collect();
    assert_eq!(item_ids.len(), MENU_ITEMS.len());
  }

  #[test]
  fn every_menu_item_references_a_seeded_restaurant() {
    let restaurant_ids: HashSet<_> = RESTAURANTS.iter().map(|r| r.id).collect();
    for item in MENU_ITEMS {
      assert!(
        restaurant_ids.contains(item.restaurant_id),
        "menu item {} references unknown restaurant {}",
        item.id,
        item.restaurant_id
      );
    }
  }

  #[test]
  fn seed_amounts_are_positive_cents() {
    for item in MENU_ITEMS {
      assert!(item.price_cents > 0, "item {} has non-positive price", item.id);
    }
    for r in RESTAURANTS {
      assert!(r.min_order_cents >= 0);
      assert!(r.rating >= 0.0 && r.rating <= 5.0);
    }
  }
}

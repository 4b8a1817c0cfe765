// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use std::sync::Arc;

use quickbite_core::{
  CartManager, MemoryCatalog, MemoryStorage, MenuItem, OrderPlacer, Restaurant, UserLocks,
  DEFAULT_DELIVERY_FEE_CENTS,
};
use tracing::Level;
use uuid::Uuid;

// --- Test Environment ---

/// Everything a test needs, wired over the in-memory collaborators. The
/// storage/catalog handles are clones of what the engines hold, so tests can
/// inject outages or reprice the catalog mid-test.
pub struct TestEnv {
  pub storage: MemoryStorage,
  pub catalog: MemoryCatalog,
  pub manager: Arc<CartManager>,
  pub placer: Arc<OrderPlacer>,
}

pub fn test_env() -> TestEnv {
  test_env_with_fee(DEFAULT_DELIVERY_FEE_CENTS)
}

pub fn test_env_with_fee(delivery_fee_cents: i64) -> TestEnv {
  let storage = MemoryStorage::new();
  let catalog = MemoryCatalog::new();
  seed_catalog(&catalog);

  let locks = Arc::new(UserLocks::new());
  let manager = Arc::new(CartManager::new(
    Arc::new(storage.clone()),
    Arc::new(catalog.clone()),
    Arc::clone(&locks),
    delivery_fee_cents,
  ));
  let placer = Arc::new(OrderPlacer::new(
    Arc::new(storage.clone()),
    Arc::new(catalog.clone()),
    locks,
    delivery_fee_cents,
  ));

  TestEnv {
    storage,
    catalog,
    manager,
    placer,
  }
}

pub fn user() -> Uuid {
  Uuid::new_v4()
}

// --- Catalog Fixtures ---

pub const PIZZA_PALACE: &str = "pizza-palace";
pub const BURGER_BARN: &str = "burger-barn";

pub const MARGHERITA: &str = "margherita"; // 12.99 at Pizza Palace
pub const PEPPERONI: &str = "pepperoni"; // 15.99 at Pizza Palace
pub const PLAIN_PIE: &str = "plain-pie"; // 12.00 at Pizza Palace
pub const CLASSIC_BURGER: &str = "classic-burger"; // 10.99 at Burger Barn

pub fn seed_catalog(catalog: &MemoryCatalog) {
  catalog.upsert_restaurant(restaurant(PIZZA_PALACE, "Pizza Palace", "Italian"));
  catalog.upsert_restaurant(restaurant(BURGER_BARN, "Burger Barn", "American"));

  catalog.upsert_menu_item(menu_item(MARGHERITA, PIZZA_PALACE, "Margherita Pizza", 1299));
  catalog.upsert_menu_item(menu_item(PEPPERONI, PIZZA_PALACE, "Pepperoni Pizza", 1599));
  catalog.upsert_menu_item(menu_item(PLAIN_PIE, PIZZA_PALACE, "Plain Pie", 1200));
  catalog.upsert_menu_item(menu_item(CLASSIC_BURGER, BURGER_BARN, "Classic Burger", 1099));
}

pub fn restaurant(id: &str, name: &str, cuisine_type: &str) -> Restaurant {
  Restaurant {
    id: id.to_string(),
    name: name.to_string(),
    description: format!("{name} test fixture"),
    image: format!("https://example.com/{id}.jpg"),
    cuisine_type: cuisine_type.to_string(),
    rating: 4.5,
    delivery_time: "25-35 min".to_string(),
    min_order_cents: 1000,
  }
}

pub fn menu_item(id: &str, restaurant_id: &str, name: &str, price_cents: i64) -> MenuItem {
  MenuItem {
    id: id.to_string(),
    restaurant_id: restaurant_id.to_string(),
    name: name.to_string(),
    description: format!("{name} test fixture"),
    price_cents,
    image: format!("https://example.com/{id}.jpg"),
    category: "Mains".to_string(),
    available: true,
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

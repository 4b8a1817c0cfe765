// tests/placement_tests.rs
mod common; // Reference the common module

use common::*;
use quickbite_core::{money, Error, OrderStatus};
use serial_test::serial;

#[tokio::test]
#[serial]
async fn test_place_creates_order_and_resets_cart() {
  setup_tracing();
  let env = test_env();
  let user = user();

  env.manager.add_item(user, MARGHERITA, 2).await.unwrap();
  env.manager.add_item(user, PEPPERONI, 1).await.unwrap();
  let before = env.manager.cart(user).await.unwrap();

  let order = env.placer.place(user, "123 Main St").await.unwrap();

  assert_eq!(order.user_id, user);
  assert_eq!(order.restaurant_id, PIZZA_PALACE);
  assert_eq!(order.restaurant_name, "Pizza Palace");
  assert_eq!(order.delivery_address, "123 Main St");
  assert_eq!(order.status, OrderStatus::Placed);
  assert_eq!(order.items.len(), 2);
  // The stored total is the grand total the cart showed at checkout.
  assert_eq!(order.total_amount_cents, before.totals.total_cents);
  assert_eq!(order.total_amount_cents, 2 * 1299 + 1599 + 399);

  let after = env.manager.cart(user).await.unwrap();
  assert!(after.cart.items.is_empty());
  assert_eq!(after.cart.restaurant_id, None);
  assert_eq!(after.totals.total_cents, 0);
}

#[tokio::test]
#[serial]
async fn test_order_lines_are_frozen_copies_of_cart_lines() {
  setup_tracing();
  let env = test_env();
  let user = user();

  env.manager.add_item(user, MARGHERITA, 3).await.unwrap();
  let order = env.placer.place(user, "9 Elm Ave").await.unwrap();

  assert_eq!(order.items[0].menu_item_id, MARGHERITA);
  assert_eq!(order.items[0].name, "Margherita Pizza");
  assert_eq!(order.items[0].price_cents, 1299);
  assert_eq!(order.items[0].quantity, 3);

  // Repricing the catalog after placement changes nothing about the order.
  env.catalog.set_price(MARGHERITA, 1);
  let stored = env.placer.order(user, order.id).await.unwrap();
  assert_eq!(stored.items[0].price_cents, 1299);
  assert_eq!(stored.total_amount_cents, order.total_amount_cents);
}

#[tokio::test]
#[serial]
async fn test_place_with_empty_cart_fails_without_side_effects() {
  setup_tracing();
  let env = test_env();
  let user = user();

  let err = env.placer.place(user, "123 Main St").await.unwrap_err();
  assert!(matches!(err, Error::EmptyCart));

  assert!(env.placer.orders(user).await.unwrap().is_empty());
}

#[tokio::test]
#[serial]
async fn test_place_with_blank_address_fails_and_keeps_cart() {
  setup_tracing();
  let env = test_env();
  let user = user();

  env.manager.add_item(user, MARGHERITA, 1).await.unwrap();

  for address in ["", "   ", "\t\n"] {
    let err = env.placer.place(user, address).await.unwrap_err();
    assert!(matches!(err, Error::MissingAddress));
  }

  // The failed attempts left the cart alone.
  let view = env.manager.cart(user).await.unwrap();
  assert_eq!(view.cart.items.len(), 1);
  assert!(env.placer.orders(user).await.unwrap().is_empty());
}

#[tokio::test]
#[serial]
async fn test_place_trims_address_whitespace() {
  setup_tracing();
  let env = test_env();
  let user = user();

  env.manager.add_item(user, MARGHERITA, 1).await.unwrap();
  let order = env.placer.place(user, "  42 Oak Lane  ").await.unwrap();
  assert_eq!(order.delivery_address, "42 Oak Lane");
}

#[tokio::test]
#[serial]
async fn test_restaurant_name_falls_back_to_unknown() {
  setup_tracing();
  let env = test_env();
  let user = user();

  // An item whose restaurant the catalog has no record of.
  env.catalog.upsert_menu_item(menu_item("mystery-dish", "ghost-kitchen", "Mystery Dish", 500));
  env.manager.add_item(user, "mystery-dish", 1).await.unwrap();

  let order = env.placer.place(user, "1 Nowhere Rd").await.unwrap();
  assert_eq!(order.restaurant_id, "ghost-kitchen");
  assert_eq!(order.restaurant_name, "Unknown");
}

#[tokio::test]
#[serial]
async fn test_orders_are_listed_newest_first() {
  setup_tracing();
  let env = test_env();
  let user = user();

  let mut placed = Vec::new();
  for _ in 0..3 {
    env.manager.add_item(user, MARGHERITA, 1).await.unwrap();
    placed.push(env.placer.place(user, "123 Main St").await.unwrap());
    // Distinct timestamps so the ordering is observable.
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
  }

  let listed = env.placer.orders(user).await.unwrap();
  assert_eq!(listed.len(), 3);
  assert_eq!(listed[0].id, placed[2].id);
  assert_eq!(listed[1].id, placed[1].id);
  assert_eq!(listed[2].id, placed[0].id);
}

#[tokio::test]
#[serial]
async fn test_order_lookup_is_scoped_to_owner() {
  setup_tracing();
  let env = test_env();
  let owner = user();
  let stranger = user();

  env.manager.add_item(owner, MARGHERITA, 1).await.unwrap();
  let order = env.placer.place(owner, "123 Main St").await.unwrap();

  assert_eq!(env.placer.order(owner, order.id).await.unwrap().id, order.id);

  let err = env.placer.order(stranger, order.id).await.unwrap_err();
  assert!(matches!(err, Error::NotFound { entity: "Order", .. }));
  assert!(env.placer.orders(stranger).await.unwrap().is_empty());
}

#[tokio::test]
#[serial]
async fn test_placement_storage_outage_is_surfaced() {
  setup_tracing();
  let env = test_env();
  let user = user();

  env.manager.add_item(user, MARGHERITA, 1).await.unwrap();
  env.storage.set_outage("socket closed");

  let err = env.placer.place(user, "123 Main St").await.unwrap_err();
  assert!(matches!(err, Error::Unavailable { .. }));
  assert!(err.is_retryable());

  // Nothing was committed: once storage recovers the cart is still full and
  // no order exists.
  env.storage.clear_outage();
  assert_eq!(env.manager.cart(user).await.unwrap().cart.items.len(), 1);
  assert!(env.placer.orders(user).await.unwrap().is_empty());
}

// --- Status and money helpers (pure, no async) ---

#[test]
fn test_order_status_round_trips_known_values() {
  for (status, s) in [
    (OrderStatus::Placed, "placed"),
    (OrderStatus::Preparing, "preparing"),
    (OrderStatus::Delivered, "delivered"),
  ] {
    assert_eq!(status.as_str(), s);
    assert_eq!(OrderStatus::from(s.to_string()), status);
  }
}

#[test]
fn test_unknown_status_parses_open_world() {
  let status = OrderStatus::from("on_the_moon".to_string());
  assert_eq!(status, OrderStatus::Other("on_the_moon".to_string()));
  assert_eq!(status.as_str(), "on_the_moon"); // Rendered as-is, never an error
}

#[test]
fn test_format_cents_is_integer_exact() {
  assert_eq!(money::format_cents(0), "0.00");
  assert_eq!(money::format_cents(5), "0.05");
  assert_eq!(money::format_cents(1599), "15.99");
  assert_eq!(money::format_cents(120000), "1200.00");
  assert_eq!(money::format_cents(-1599), "-15.99");
}

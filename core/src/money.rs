// core/src/money.rs

//! Monetary amounts are integer cents end to end. Floating point never touches
//! an amount that gets stored or summed; two-decimal rendering is presentation
//! only.

/// Flat delivery surcharge applied to non-empty carts unless the operator
/// configures another amount.
pub const DEFAULT_DELIVERY_FEE_CENTS: i64 = 399;

/// Renders integer cents as a two-decimal string, e.g. `1599` -> `"15.99"`.
pub fn format_cents(cents: i64) -> String {
  let sign = if cents < 0 { "-" } else { "" };
  let abs = cents.unsigned_abs();
  format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

/// Line total for a single cart entry.
pub fn line_total(price_cents: i64, quantity: i32) -> i64 {
  price_cents * quantity as i64
}

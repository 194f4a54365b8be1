//! Integration tests for Cardapio.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p cardapio-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_properties` - Aggregation, totals, removal and ordering rules
//! - `checkout_flow` - Checkout gating, message format and delivery URL
//!
//! This crate only exposes fixtures shared by those tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

use cardapio_core::Price;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A small menu with prices that exercise decimal rounding.
pub const MENU: &[(&str, &str)] = &[
    ("Pizza", "30"),
    ("Suco", "5"),
    ("Hambúrguer Artesanal", "27.90"),
    ("Batata Frita", "12.5"),
    ("Refrigerante", "0.1"),
];

/// Price of a menu entry.
///
/// # Panics
///
/// Panics if the fixture price does not parse.
#[must_use]
pub fn price(text: &str) -> Price {
    Price::parse(text).expect("fixture price parses")
}

/// A seeded pseudo-random sequence of menu indices.
///
/// The same seed always yields the same sequence.
#[must_use]
pub fn shuffled_indices(seed: u64, len: usize) -> Vec<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(0..MENU.len())).collect()
}

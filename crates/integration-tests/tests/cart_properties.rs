//! Integration tests for cart aggregation, totals and removal.

use std::collections::HashMap;

use cardapio_core::{CartStore, OrderSession, Price, RemoveOutcome};
use cardapio_integration_tests::{MENU, price, shuffled_indices};
use rust_decimal::Decimal;

// =============================================================================
// Aggregation
// =============================================================================

#[test]
fn test_one_line_per_name_with_matching_quantity() {
    for seed in 0..20 {
        let mut cart = CartStore::new();
        let mut expected: HashMap<&str, u32> = HashMap::new();

        for index in shuffled_indices(seed, 50) {
            let (name, unit) = MENU[index];
            cart.add_item(name, price(unit));
            *expected.entry(name).or_insert(0) += 1;
        }

        assert_eq!(cart.count(), expected.len(), "seed {seed}");
        for line in cart.lines() {
            assert_eq!(
                Some(&line.quantity()),
                expected.get(line.name()),
                "seed {seed}, item {}",
                line.name()
            );
        }
    }
}

#[test]
fn test_lines_keep_first_add_order() {
    let mut cart = CartStore::new();
    let indices = shuffled_indices(7, 30);
    let mut first_seen: Vec<&str> = Vec::new();

    for index in indices {
        let (name, unit) = MENU[index];
        if !first_seen.contains(&name) {
            first_seen.push(name);
        }
        cart.add_item(name, price(unit));
    }

    let names: Vec<&str> = cart.lines().iter().map(|line| line.name()).collect();
    assert_eq!(names, first_seen);
}

#[test]
fn test_fixture_sequence_is_reproducible() {
    assert_eq!(shuffled_indices(3, 40), shuffled_indices(3, 40));
    assert!(shuffled_indices(3, 40).iter().all(|&index| index < MENU.len()));
}

// =============================================================================
// Totals
// =============================================================================

#[test]
fn test_total_equals_sum_of_lines_after_every_mutation() {
    let mut cart = CartStore::new();

    for (step, index) in shuffled_indices(42, 200).into_iter().enumerate() {
        let (name, unit) = MENU[index];
        if step % 3 == 2 {
            cart.remove_item(name);
        } else {
            cart.add_item(name, price(unit));
        }

        let expected: Decimal = cart
            .lines()
            .iter()
            .map(|line| line.unit_price().amount() * Decimal::from(line.quantity()))
            .sum();
        let snapshot = cart.snapshot();
        assert_eq!(snapshot.total.amount(), expected, "step {step}");
        assert_eq!(snapshot.count, snapshot.lines.len());
    }
}

#[test]
fn test_ten_cent_items_total_exactly() {
    let mut cart = CartStore::new();
    for _ in 0..3 {
        cart.add_item("Refrigerante", price("0.1"));
    }
    cart.add_item("Bala", price("0.2"));
    assert_eq!(cart.total(), price("0.5"));
}

// =============================================================================
// Removal
// =============================================================================

#[test]
fn test_add_then_remove_restores_prior_state() {
    for seed in 0..10 {
        let mut cart = CartStore::new();
        for index in shuffled_indices(seed, 8) {
            let (name, unit) = MENU[index];
            cart.add_item(name, price(unit));
        }

        for &(name, unit) in MENU {
            let before = cart.snapshot();
            cart.add_item(name, price(unit));
            cart.remove_item(name);
            assert_eq!(cart.snapshot(), before, "seed {seed}, item {name}");
        }
    }
}

#[test]
fn test_quantity_never_reaches_zero() {
    let mut cart = CartStore::new();
    for _ in 0..3 {
        cart.add_item("Pizza", price("30"));
    }

    let mut outcomes = Vec::new();
    for _ in 0..5 {
        outcomes.push(cart.remove_item("Pizza"));
        assert!(cart.lines().iter().all(|line| line.quantity() >= 1));
    }

    assert_eq!(
        outcomes,
        [
            RemoveOutcome::Decremented { quantity: 2 },
            RemoveOutcome::Decremented { quantity: 1 },
            RemoveOutcome::Removed,
            RemoveOutcome::NotInCart,
            RemoveOutcome::NotInCart,
        ]
    );
    assert!(cart.is_empty());
}

#[test]
fn test_unknown_removal_changes_nothing() {
    let mut session = OrderSession::new();
    session.add_item("Pizza", price("30"));
    session.drain_events();
    let before = session.snapshot();

    session.remove_item("nonexistent");

    assert_eq!(session.snapshot(), before);
    assert!(session.drain_events().is_empty());
}

#[test]
fn test_price_fixed_at_first_insertion() {
    let mut cart = CartStore::new();
    cart.add_item("Pizza", price("30"));
    cart.add_item("Pizza", price("45"));
    cart.remove_item("Pizza");
    cart.add_item("Pizza", price("50"));

    let line = cart.get("Pizza").map(|line| (line.unit_price(), line.quantity()));
    assert_eq!(line, Some((price("30"), 2)));
}

#[test]
fn test_zero_price_items_are_accepted() {
    let mut cart = CartStore::new();
    cart.add_item("Guardanapo", Price::ZERO);
    assert_eq!(cart.count(), 1);
    assert_eq!(cart.total(), Price::ZERO);
}

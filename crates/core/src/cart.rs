//! Cart lines and the store that keeps them aggregated by item name.
//!
//! The item name is the identity of a cart line. Adding a name that is
//! already present bumps its quantity; the unit price recorded on the
//! first add is kept for the lifetime of that line.

use serde::Serialize;
use tracing::{debug, trace};

use crate::events::CartEvent;
use crate::types::Price;

/// One aggregated entry in the cart.
///
/// `quantity` is always at least 1. Lines are only created and mutated by
/// [`CartStore`], so callers can read them but never break that rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    name: String,
    unit_price: Price,
    quantity: u32,
}

impl CartLine {
    fn new(name: String, unit_price: Price) -> Self {
        Self {
            name,
            unit_price,
            quantity: 1,
        }
    }

    /// Item name, which doubles as the line's key.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Price recorded when the item was first added.
    #[must_use]
    pub const fn unit_price(&self) -> Price {
        self.unit_price
    }

    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `unit_price × quantity`.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price * self.quantity
    }
}

/// What [`CartStore::remove_item`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The line is still present with the given quantity.
    Decremented { quantity: u32 },
    /// The line had quantity 1 and was dropped.
    Removed,
    /// No line with that name; nothing changed.
    NotInCart,
}

/// Read-only view of the cart for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartSnapshot {
    /// Lines in first-add order.
    pub lines: Vec<CartLine>,
    /// Sum of every line total, computed when the snapshot was taken.
    pub total: Price,
    /// Number of distinct lines (not the sum of quantities).
    pub count: usize,
}

impl CartSnapshot {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Ordered, name-keyed collection of cart lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartStore {
    lines: Vec<CartLine>,
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `name`.
    ///
    /// An existing line gets its quantity bumped and keeps its original
    /// price. A new name is appended at the end with quantity 1.
    ///
    /// Returns [`CartEvent::ItemAdded`] only when a new line was created;
    /// repeat adds of the same name return `None`.
    ///
    /// `unit_price` is expected to be non-negative and is not checked.
    pub fn add_item(&mut self, name: impl Into<String>, unit_price: Price) -> Option<CartEvent> {
        let name = name.into();

        if let Some(line) = self.lines.iter_mut().find(|line| line.name == name) {
            line.quantity = line.quantity.saturating_add(1);
            trace!(name = %line.name, quantity = line.quantity, "Incremented cart line");
            return None;
        }

        debug!(name = %name, unit_price = %unit_price, "Added cart line");
        self.lines.push(CartLine::new(name.clone(), unit_price));
        Some(CartEvent::ItemAdded { name })
    }

    /// Remove one unit of `name`.
    ///
    /// A line at quantity 1 is dropped entirely. Unknown names are ignored.
    pub fn remove_item(&mut self, name: &str) -> RemoveOutcome {
        let Some(index) = self.position(name) else {
            trace!(name, "Ignoring removal of item not in cart");
            return RemoveOutcome::NotInCart;
        };

        let outcome = match self.lines.get_mut(index) {
            Some(line) if line.quantity > 1 => {
                line.quantity -= 1;
                RemoveOutcome::Decremented {
                    quantity: line.quantity,
                }
            }
            _ => {
                self.lines.remove(index);
                RemoveOutcome::Removed
            }
        };

        debug!(name, ?outcome, "Removed from cart");
        outcome
    }

    /// Drop every line.
    pub fn clear(&mut self) {
        debug!(lines = self.lines.len(), "Cleared cart");
        self.lines.clear();
    }

    /// Lines in first-add order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Look up a line by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.name == name)
    }

    /// Sum of `unit_price × quantity` over the current lines.
    ///
    /// Saturates at `Decimal::MAX` rather than overflowing.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn count(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Copy the current state out for rendering.
    #[must_use]
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            lines: self.lines.clone(),
            total: self.total(),
            count: self.count(),
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.lines.iter().position(|line| line.name == name)
    }
}

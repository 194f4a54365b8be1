//! The owned ordering session a presentation layer drives.
//!
//! [`OrderSession`] ties the cart and address together, runs checkout, and
//! queues [`CartEvent`]s for whoever renders feedback. There is no global
//! state: each page session constructs and owns one instance.

use tracing::{info, instrument};

use crate::cart::{CartSnapshot, CartStore, RemoveOutcome};
use crate::checkout::{CheckoutError, OrderMessage};
use crate::events::CartEvent;
use crate::types::{AddressGate, Price};

/// Knobs for [`OrderSession::attempt_checkout`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckoutOptions {
    /// Empty the cart after a successful checkout. Off by default, so a
    /// customer can resend the same order.
    pub clear_after_checkout: bool,
}

/// Cart plus address for a single customer session.
///
/// Events accumulate until [`OrderSession::drain_events`] is called; the
/// host must drain after each operation it renders feedback for, or the
/// queue keeps growing for the life of the session.
#[derive(Debug, Clone, Default)]
pub struct OrderSession {
    cart: CartStore,
    address: AddressGate,
    options: CheckoutOptions,
    events: Vec<CartEvent>,
}

impl OrderSession {
    /// Start an empty session with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start an empty session with the given options.
    #[must_use]
    pub fn with_options(options: CheckoutOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Add one unit of an item. Queues `item-added` for new lines only.
    #[instrument(skip(self))]
    pub fn add_item(&mut self, name: &str, unit_price: Price) {
        if let Some(event) = self.cart.add_item(name, unit_price) {
            self.events.push(event);
        }
    }

    /// Remove one unit of an item. Unknown names are ignored.
    #[instrument(skip(self))]
    pub fn remove_item(&mut self, name: &str) -> RemoveOutcome {
        self.cart.remove_item(name)
    }

    /// Update the address input.
    #[instrument(skip_all)]
    pub fn set_address(&mut self, value: &str) {
        self.address.set_address(value);
    }

    /// Try to place the order.
    ///
    /// On success the order message is returned and `checkout-ready` is
    /// queued. On failure `checkout-rejected` is queued, and a missing
    /// address also raises the address warning.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] or
    /// [`CheckoutError::MissingAddress`]; see [`crate::can_checkout`].
    #[instrument(skip(self))]
    pub fn attempt_checkout(&mut self) -> Result<OrderMessage, CheckoutError> {
        match OrderMessage::compose(self.cart.snapshot(), self.address.as_str()) {
            Ok(order) => {
                info!(
                    lines = order.lines.len(),
                    total = %order.total,
                    "Checkout ready"
                );
                self.events.push(CartEvent::CheckoutReady {
                    message: order.text.clone(),
                });
                if self.options.clear_after_checkout {
                    self.cart.clear();
                }
                Ok(order)
            }
            Err(reason) => {
                if reason == CheckoutError::MissingAddress {
                    self.address.mark_invalid_if_empty();
                }
                info!(%reason, "Checkout rejected");
                self.events.push(CartEvent::CheckoutRejected { reason });
                Err(reason)
            }
        }
    }

    /// Empty the cart on demand.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// Current cart contents for rendering.
    #[must_use]
    pub fn snapshot(&self) -> CartSnapshot {
        self.cart.snapshot()
    }

    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    #[must_use]
    pub const fn address(&self) -> &AddressGate {
        &self.address
    }

    #[must_use]
    pub const fn options(&self) -> CheckoutOptions {
        self.options
    }

    /// Take every queued event, oldest first.
    pub fn drain_events(&mut self) -> Vec<CartEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn price(s: &str) -> Price {
        Price::parse(s).unwrap()
    }

    #[test]
    fn test_add_queues_event_once_per_name() {
        let mut session = OrderSession::new();
        session.add_item("Pizza", price("30"));
        session.add_item("Pizza", price("30"));
        session.add_item("Suco", price("5"));

        let events = session.drain_events();
        assert_eq!(
            events,
            [
                CartEvent::ItemAdded {
                    name: "Pizza".to_string()
                },
                CartEvent::ItemAdded {
                    name: "Suco".to_string()
                },
            ]
        );
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_events_accumulate_until_drained() {
        let mut session = OrderSession::new();
        session.add_item("Pizza", price("30"));
        assert!(session.attempt_checkout().is_err());
        session.add_item("Suco", price("5"));

        assert_eq!(session.drain_events().len(), 3);
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_checkout_empty_cart() {
        let mut session = OrderSession::new();
        assert_eq!(session.attempt_checkout(), Err(CheckoutError::EmptyCart));
        assert!(!session.address().is_flagged());
        assert_eq!(
            session.drain_events(),
            [CartEvent::CheckoutRejected {
                reason: CheckoutError::EmptyCart
            }]
        );
    }

    #[test]
    fn test_checkout_missing_address_flags_gate() {
        let mut session = OrderSession::new();
        session.add_item("Pizza", price("30"));
        session.drain_events();

        assert_eq!(
            session.attempt_checkout(),
            Err(CheckoutError::MissingAddress)
        );
        assert!(session.address().is_flagged());
        assert_eq!(
            session.drain_events(),
            [CartEvent::CheckoutRejected {
                reason: CheckoutError::MissingAddress
            }]
        );

        session.set_address("Rua A");
        assert!(!session.address().is_flagged());
    }

    #[test]
    fn test_checkout_ready_keeps_cart_by_default() {
        let mut session = OrderSession::new();
        session.add_item("Suco", price("5"));
        session.set_address("Rua B");
        session.drain_events();

        let order = session.attempt_checkout().unwrap();
        assert_eq!(
            order.text,
            " Suco, Quantidade: (1), Preço: R$5.00 |\n Endereço: Rua B"
        );
        assert_eq!(
            session.drain_events(),
            [CartEvent::CheckoutReady {
                message: order.text.clone()
            }]
        );
        assert_eq!(session.snapshot().count, 1);
    }

    #[test]
    fn test_checkout_clears_when_configured() {
        let mut session = OrderSession::with_options(CheckoutOptions {
            clear_after_checkout: true,
        });
        session.add_item("Suco", price("5"));
        session.set_address("Rua B");

        assert!(session.attempt_checkout().is_ok());
        assert!(session.snapshot().is_empty());
    }

    #[test]
    fn test_failed_checkout_never_clears() {
        let mut session = OrderSession::with_options(CheckoutOptions {
            clear_after_checkout: true,
        });
        session.add_item("Suco", price("5"));

        assert!(session.attempt_checkout().is_err());
        assert_eq!(session.snapshot().count, 1);
    }

    #[test]
    fn test_remove_unknown_is_silent() {
        let mut session = OrderSession::new();
        assert_eq!(session.remove_item("Nada"), RemoveOutcome::NotInCart);
        assert!(session.drain_events().is_empty());
    }
}

//! Notifications emitted by the cart for a presentation layer to display.
//!
//! The core only says *what* happened. Whether that turns into a toast,
//! an inline warning, or a browser redirect is up to the consumer.

use serde::{Deserialize, Serialize};

use crate::checkout::CheckoutError;

/// Something the user should be told about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum CartEvent {
    /// A new line was created in the cart.
    ItemAdded { name: String },
    /// Checkout was refused.
    CheckoutRejected { reason: CheckoutError },
    /// Checkout passed validation and the order message is ready to send.
    CheckoutReady { message: String },
}

impl CartEvent {
    /// Toast wording used by the storefront, if this event is shown as one.
    ///
    /// A missing address is shown as an inline warning instead, and a ready
    /// checkout hands off to the messaging channel, so neither has a toast.
    #[must_use]
    pub fn toast_text(&self) -> Option<String> {
        match self {
            Self::ItemAdded { name } => Some(format!("{name} adicionado ao carrinho")),
            Self::CheckoutRejected {
                reason: CheckoutError::EmptyCart,
            } => Some("Ops! O Carrinho está vázio!".to_string()),
            Self::CheckoutRejected {
                reason: CheckoutError::MissingAddress,
            }
            | Self::CheckoutReady { .. } => None,
        }
    }
}

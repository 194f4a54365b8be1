//! Checkout eligibility and order message composition.
//!
//! Both functions are pure: they read a [`CartSnapshot`] and the address
//! text and never touch the clock or any other state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cart::{CartLine, CartSnapshot};
use crate::types::Price;

/// Separator inserted between rendered lines (not after the last one).
const LINE_SEPARATOR: &str = "-";

/// Label that introduces the address at the end of the message.
const ADDRESS_LABEL: &str = " Endereço: ";

/// Reasons a checkout attempt is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum CheckoutError {
    /// The cart has no lines.
    #[error("cart is empty")]
    EmptyCart,
    /// No delivery address was entered.
    #[error("delivery address is missing")]
    MissingAddress,
}

/// Check whether an order can be placed.
///
/// The empty-cart check runs first, so an empty cart with an empty address
/// reports [`CheckoutError::EmptyCart`].
///
/// # Errors
///
/// Returns [`CheckoutError::EmptyCart`] when the cart has no lines, or
/// [`CheckoutError::MissingAddress`] when `address` is empty.
pub fn can_checkout(cart: &CartSnapshot, address: &str) -> Result<(), CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    if address.is_empty() {
        return Err(CheckoutError::MissingAddress);
    }
    Ok(())
}

/// Render the order text sent to the messaging channel.
///
/// Each line becomes `" {name}, Quantidade: ({qty}), Preço: R${price} |\n"`,
/// lines are joined with `"-"`, and `" Endereço: {address}"` is appended.
/// No percent-encoding happens here.
///
/// ```
/// use cardapio_core::{CartStore, Price, compose_message};
///
/// let mut cart = CartStore::new();
/// cart.add_item("Suco", Price::parse("5").unwrap());
///
/// assert_eq!(
///     compose_message(&cart.snapshot(), "Rua B"),
///     " Suco, Quantidade: (1), Preço: R$5.00 |\n Endereço: Rua B",
/// );
/// ```
#[must_use]
pub fn compose_message(cart: &CartSnapshot, address: &str) -> String {
    let body = cart
        .lines
        .iter()
        .map(render_line)
        .collect::<Vec<_>>()
        .join(LINE_SEPARATOR);

    format!("{body}{ADDRESS_LABEL}{address}")
}

fn render_line(line: &CartLine) -> String {
    format!(
        " {}, Quantidade: ({}), Preço: R${} |\n",
        line.name(),
        line.quantity(),
        line.unit_price().to_fixed_2()
    )
}

/// A finished order, ready for delivery.
///
/// Carries the rendered text along with the structured data it was built
/// from, for consumers that want more than a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderMessage {
    /// Output of [`compose_message`].
    pub text: String,
    pub lines: Vec<CartLine>,
    pub total: Price,
    pub address: String,
}

impl OrderMessage {
    /// Validate and compose in one step.
    ///
    /// # Errors
    ///
    /// Same as [`can_checkout`].
    pub fn compose(cart: CartSnapshot, address: &str) -> Result<Self, CheckoutError> {
        can_checkout(&cart, address)?;
        Ok(Self {
            text: compose_message(&cart, address),
            lines: cart.lines,
            total: cart.total,
            address: address.to_owned(),
        })
    }
}

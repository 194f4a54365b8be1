//! Cardapio Core - cart state and order composition.
//!
//! This crate holds the logic behind the storefront's shopping cart:
//! - aggregating menu items by name with running quantities
//! - computing totals with exact decimal arithmetic
//! - gating checkout on a non-empty cart and a delivery address
//! - composing the order text handed to the messaging channel
//!
//! # Architecture
//!
//! The core has no I/O: no rendering, no event bindings, no network.
//! A presentation layer owns an [`OrderSession`], calls its operations,
//! reads [`CartSnapshot`]s, and reacts to the [`CartEvent`]s it drains.
//!
//! # Modules
//!
//! - [`types`] - `Price` and `AddressGate`
//! - [`cart`] - `CartStore` and its lines
//! - [`checkout`] - eligibility checks and message composition
//! - [`session`] - the owned store instance with its event queue
//! - [`events`] - notifications for the presentation layer
//! - [`hours`] - opening-hours predicate
//! - [`handoff`] - delivery URL for the messaging channel

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod checkout;
pub mod events;
pub mod handoff;
pub mod hours;
pub mod session;
pub mod types;

pub use cart::{CartLine, CartSnapshot, CartStore, RemoveOutcome};
pub use checkout::{CheckoutError, OrderMessage, can_checkout, compose_message};
pub use events::CartEvent;
pub use handoff::{Handoff, HandoffError};
pub use hours::{HoursError, OpeningHours, is_open_now};
pub use session::{CheckoutOptions, OrderSession};
pub use types::*;

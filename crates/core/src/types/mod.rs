//! Value types for the ordering domain.

pub mod address;
pub mod price;

pub use address::AddressGate;
pub use price::{Price, PriceError};

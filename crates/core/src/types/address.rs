//! Delivery address input and its warning state.

use serde::{Deserialize, Serialize};

/// Holds the delivery address being typed and whether the missing-address
/// warning is currently shown.
///
/// The address is free text; the only rule is that it must not be empty
/// at checkout time.
///
/// ## Warning lifecycle
///
/// - Raised by [`AddressGate::mark_invalid_if_empty`] when checkout is
///   attempted with an empty address.
/// - Cleared by [`AddressGate::set_address`] once the input is longer than
///   one character. A single-character input leaves the flag untouched.
///
/// Length is measured in UTF-16 code units, the way browser input fields
/// report it, so a single emoji such as "😀" already counts as two.
///
/// ```
/// use cardapio_core::AddressGate;
///
/// let mut gate = AddressGate::new();
/// assert!(gate.mark_invalid_if_empty());
/// assert!(gate.is_flagged());
///
/// gate.set_address("R");
/// assert!(gate.is_flagged());
///
/// gate.set_address("Ru");
/// assert!(!gate.is_flagged());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressGate {
    value: String,
    invalid: bool,
}

impl AddressGate {
    /// Input length (in UTF-16 code units) above which a raised warning is cleared.
    pub const CLEAR_THRESHOLD: usize = 1;

    /// Create an empty, unflagged address.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the current input, clearing the warning when it is long enough.
    pub fn set_address(&mut self, value: impl Into<String>) {
        self.value = value.into();
        if self.value.encode_utf16().count() > Self::CLEAR_THRESHOLD {
            self.invalid = false;
        }
    }

    /// Raise the warning if the address is empty.
    ///
    /// Returns `true` when the address is empty. A non-empty address leaves
    /// the flag as it was.
    pub fn mark_invalid_if_empty(&mut self) -> bool {
        if self.value.is_empty() {
            self.invalid = true;
            return true;
        }
        false
    }

    /// Returns `true` when the address is non-empty.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.value.is_empty()
    }

    /// Returns `true` while the missing-address warning should be shown.
    #[must_use]
    pub const fn is_flagged(&self) -> bool {
        self.invalid
    }

    /// Returns the raw address text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl AsRef<str> for AddressGate {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

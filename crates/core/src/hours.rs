//! Opening hours.
//!
//! Independent of the cart: a display component uses this to switch the
//! open/closed badge, nothing more.

use chrono::Timelike;
use thiserror::Error;

/// Errors that can occur when building [`OpeningHours`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HoursError {
    #[error("hour {0} is outside 0-23")]
    OutOfRange(u32),
    #[error("opening hour {open} is after closing hour {close}")]
    Inverted { open: u32, close: u32 },
}

/// Inclusive range of hours during which the store takes orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningHours {
    open: u32,
    close: u32,
}

impl OpeningHours {
    /// Default first open hour.
    pub const DEFAULT_OPEN: u32 = 18;
    /// Default last open hour.
    pub const DEFAULT_CLOSE: u32 = 23;

    /// Build a range from `open` to `close`, both inclusive.
    ///
    /// # Errors
    ///
    /// Returns an error if either hour is above 23 or `open > close`.
    pub const fn new(open: u32, close: u32) -> Result<Self, HoursError> {
        if open > 23 {
            return Err(HoursError::OutOfRange(open));
        }
        if close > 23 {
            return Err(HoursError::OutOfRange(close));
        }
        if open > close {
            return Err(HoursError::Inverted { open, close });
        }
        Ok(Self { open, close })
    }

    #[must_use]
    pub const fn open(&self) -> u32 {
        self.open
    }

    #[must_use]
    pub const fn close(&self) -> u32 {
        self.close
    }

    /// Returns `true` if `hour` falls within the range.
    #[must_use]
    pub const fn contains(&self, hour: u32) -> bool {
        self.open <= hour && hour <= self.close
    }

    /// Returns `true` if the hour of `time` falls within the range.
    #[must_use]
    pub fn is_open_at<T: Timelike>(&self, time: &T) -> bool {
        self.contains(time.hour())
    }
}

impl Default for OpeningHours {
    fn default() -> Self {
        Self {
            open: Self::DEFAULT_OPEN,
            close: Self::DEFAULT_CLOSE,
        }
    }
}

/// Returns `true` for hours 18 through 23.
///
/// ```
/// use cardapio_core::is_open_now;
///
/// assert!(!is_open_now(17));
/// assert!(is_open_now(18));
/// assert!(is_open_now(23));
/// assert!(!is_open_now(0));
/// ```
#[must_use]
pub fn is_open_now(current_hour: u32) -> bool {
    OpeningHours::default().contains(current_hour)
}

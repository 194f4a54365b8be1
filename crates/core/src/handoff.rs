//! Delivery URL for the external messaging channel.
//!
//! Builds `<base-url>/<phone>?text=<percent-encoded message>`. Spaces are
//! encoded as `%20`, as browsers' `encodeURIComponent` does. Opening the
//! URL is left to the caller.

use thiserror::Error;
use url::Url;
use url::form_urlencoded::byte_serialize;

/// Default messaging endpoint.
pub const DEFAULT_BASE_URL: &str = "https://wa.me";

/// Default store phone number.
pub const DEFAULT_PHONE: &str = "+5581998451051";

/// Errors that can occur when configuring a [`Handoff`].
#[derive(Debug, Error)]
pub enum HandoffError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
    #[error("base URL cannot take a path: {0}")]
    NotHierarchical(String),
    #[error("invalid phone number '{0}'")]
    InvalidPhone(String),
}

/// Target for finished orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handoff {
    chat_url: Url,
}

impl Handoff {
    /// Build a handoff target from a base URL and phone number.
    ///
    /// The phone may start with `+`; everything else must be a digit.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL does not parse or cannot carry a path,
    /// or if the phone number is empty or contains other characters.
    pub fn new(base_url: &str, phone: &str) -> Result<Self, HandoffError> {
        let digits = phone.strip_prefix('+').unwrap_or(phone);
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(HandoffError::InvalidPhone(phone.to_owned()));
        }

        let mut chat_url = Url::parse(base_url)?;
        chat_url
            .path_segments_mut()
            .map_err(|()| HandoffError::NotHierarchical(base_url.to_owned()))?
            .pop_if_empty()
            .push(phone);

        Ok(Self { chat_url })
    }

    /// URL that opens a chat with `message` pre-filled.
    #[must_use]
    pub fn url_for(&self, message: &str) -> Url {
        // byte_serialize escapes a literal '+' as %2B, so every '+' left is a space.
        let text = byte_serialize(message.as_bytes())
            .collect::<String>()
            .replace('+', "%20");

        let mut url = self.chat_url.clone();
        url.set_query(Some(&format!("text={text}")));
        url
    }
}

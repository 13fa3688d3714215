//! Chat deep links and the opener seam
//!
//! The chat app itself is external: a message reaches it only through a
//! `wa.me` link opened in a new browsing context by the host.

use crate::encoding::encode_component;
use crate::error::{LinkError, LinkResult};
use tracing::{info, instrument, warn};

const CHAT_BASE_URL: &str = "https://wa.me";

/// Chat destination (international number, digits only)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatLink {
    number: String,
}

impl ChatLink {
    /// Create a link target from an international number
    ///
    /// Spaces, dashes and a leading `+` are stripped (`+27 82 048 3902`
    /// becomes `27820483902`); anything else non-numeric is rejected.
    pub fn new(number: &str) -> LinkResult<Self> {
        let digits: String = number
            .trim()
            .trim_start_matches('+')
            .chars()
            .filter(|c| !matches!(c, ' ' | '-'))
            .collect();

        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(LinkError::InvalidNumber(number.to_string()));
        }

        Ok(Self { number: digits })
    }

    /// Get the normalized number
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Build the deep link carrying `text` as the pre-filled message
    pub fn url(&self, text: &str) -> String {
        format!(
            "{}/{}?text={}",
            CHAT_BASE_URL,
            self.number,
            encode_component(text)
        )
    }
}

/// What the host reports back after trying to open a new browsing context
///
/// `closed` mirrors the window handle's `closed` flag; `None` when the
/// handle does not expose one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowState {
    pub closed: Option<bool>,
}

impl WindowState {
    pub fn open() -> Self {
        Self {
            closed: Some(false),
        }
    }
}

/// Trait for hosts that can open a URL in a new browsing context
pub trait LinkOpener {
    /// Try to open `url`; `None` means no handle was returned at all
    fn open(&mut self, url: &str) -> Option<WindowState>;
}

/// Result of handing a link to the opener
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handoff {
    /// The chat app (or a tab for it) was opened
    Opened,
    /// The popup was blocked; the raw link must be shown for manual use
    Blocked { url: String },
}

impl Handoff {
    pub fn is_opened(&self) -> bool {
        matches!(self, Handoff::Opened)
    }
}

/// Open `url` and apply the popup-blocked heuristic
///
/// Checked once, immediately: no handle, a handle already closed, or a
/// handle without a `closed` flag all count as blocked. There is no retry.
#[instrument(skip(opener, url), fields(url_len = url.len()))]
pub fn hand_off<O: LinkOpener + ?Sized>(opener: &mut O, url: &str) -> Handoff {
    match opener.open(url) {
        Some(WindowState {
            closed: Some(false),
        }) => {
            info!("Chat link opened");
            Handoff::Opened
        }
        state => {
            warn!(?state, "Chat link blocked, falling back to manual copy");
            Handoff::Blocked {
                url: url.to_string(),
            }
        }
    }
}

//! # chat-message
//!
//! Plain-text chat message composition and chat deep links.
//!
//! ## Scope
//!
//! This crate handles HOW a message reaches the chat app:
//! - Fluent text building (lines, fields, bullets, sections)
//! - `encodeURIComponent`-compatible percent encoding
//! - `wa.me` deep-link construction
//! - Handing a link to a host opener and detecting a blocked popup
//!
//! Business logic (WHAT to write) stays in application code:
//! - Order summaries, enquiry greetings → storefront
//!
//! ## Example
//!
//! ```
//! use chat_message::{ChatLink, MessageBuilder};
//!
//! let mut b = MessageBuilder::new();
//! b.line("NEW ORDER");
//! b.newline();
//! b.field("Customer", "Thandi");
//! b.bullet("Vanilla Cupcake x2 - R50.00");
//!
//! let link = ChatLink::new("27820483902").unwrap();
//! let url = link.url(&b.build());
//! assert!(url.starts_with("https://wa.me/27820483902?text=NEW%20ORDER"));
//! ```

mod builder;
mod encoding;
mod error;
mod link;

// Re-exports
pub use builder::MessageBuilder;
pub use encoding::{decode_component, encode_component};
pub use error::{LinkError, LinkResult};
pub use link::{ChatLink, Handoff, LinkOpener, WindowState, hand_off};

//! Chat messages the storefront sends
//!
//! Text layout lives here; encoding and the deep link itself come from
//! `chat_message`.

pub mod renderer;

pub use renderer::OrderMessageRenderer;

//! Presentation layer
//!
//! The storefront never touches markup. It builds a [`CartView`] from the
//! cart state and hands it, together with panel and notice changes, to the
//! host's [`Surface`].

pub mod cart_view;
pub mod surface;

pub use cart_view::{CartAction, CartListView, CartRow, CartView, EMPTY_CART_PLACEHOLDER};
pub use surface::{Element, Notice, Panel, Surface};

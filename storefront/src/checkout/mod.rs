//! Checkout flow
//!
//! ```text
//! Browsing ──open (cart not empty)──▶ CheckoutOpen ──submit──▶ Submitting ──▶ Success
//!    ▲  ▲                                 │  ▲                     │
//!    │  └──────────── close ──────────────┘  └── proof unreadable ─┘
//!    └──────────────────────── close success ───────────────────────────────┘
//! ```

pub mod flow;
pub mod form;

pub use flow::{CheckoutError, CheckoutFlow, CheckoutState};
pub use form::CheckoutForm;

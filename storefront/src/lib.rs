//! Storefront cart
//!
//! Shopping cart for a small storefront page. Orders are not paid through a
//! backend: the completed cart becomes a chat message opened through a
//! `wa.me` deep link, with the proof of payment previewed locally.
//!
//! # Module structure
//!
//! ```text
//! storefront/src/
//! ├── core/          # config, Storefront controller
//! ├── cart/          # cart state, totals, CartManager
//! ├── checkout/      # checkout state machine, form validation
//! ├── message/       # order message rendering
//! ├── proof/         # payment proof reading and preview
//! ├── history/       # local order history (redb)
//! ├── view/          # cart view model, Surface trait
//! └── utils/         # logging
//! ```

pub mod cart;
pub mod checkout;
pub mod core;
pub mod history;
pub mod message;
pub mod proof;
pub mod utils;
pub mod view;

pub use cart::{Cart, CartError, CartEvent, CartManager, CartTotals};
pub use checkout::{CheckoutError, CheckoutFlow, CheckoutForm, CheckoutState};
pub use core::{Config, PaymentDetails, Storefront, SubmissionOutcome};
pub use history::{HistoryError, OrderHistory};
pub use message::OrderMessageRenderer;
pub use proof::{ProofError, ProofFile, ProofPreview};
pub use view::{CartAction, CartView, Element, Notice, Panel, Surface};

pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode};

pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env`, read [`Config`] and start logging
///
/// Hosts call this once before building a [`Storefront`].
pub fn setup_environment() -> Config {
    dotenv::dotenv().ok();
    let config = Config::from_env();

    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    tracing::info!(
        store = %config.store_name,
        history_db = %config.history_db.display(),
        "Storefront environment ready"
    );
    config
}

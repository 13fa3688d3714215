//! Storefront controller
//!
//! Owns the session cart and checkout flow, and drives the host
//! [`Surface`] and [`LinkOpener`]. Every method takes `&mut self`; the only
//! await points are file reads.

use chat_message::{ChatLink, Handoff, LinkOpener, hand_off};
use chrono::Utc;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::util::snowflake_id;
use shared::OrderRecord;
use tokio::sync::broadcast;
use tracing::{debug, error, info, instrument, warn};

use super::config::Config;
use crate::cart::{CartError, CartEvent, CartManager, CartTotals};
use crate::checkout::{CheckoutError, CheckoutFlow, CheckoutForm, CheckoutState};
use crate::history::OrderHistory;
use crate::message::OrderMessageRenderer;
use crate::proof::{ProofFile, ProofPreview};
use crate::view::{CartAction, CartView, Element, Notice, Panel, Surface};

/// Result of a placed order
#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    pub record: OrderRecord,
    /// Plain-text chat message
    pub message: String,
    /// Deep link carrying `message`
    pub link: String,
    pub handoff: Handoff,
    /// Whether the record made it into the local history
    pub recorded: bool,
    /// Proof of payment as a `data:` URL (never sent through the link)
    pub proof_data_url: String,
}

/// Storefront controller
pub struct Storefront<S: Surface, O: LinkOpener> {
    config: Config,
    surface: S,
    opener: O,
    cart: CartManager,
    flow: CheckoutFlow,
    history: OrderHistory,
    renderer: OrderMessageRenderer,
    chat: ChatLink,
    missing_elements: Vec<Element>,
}

impl<S: Surface, O: LinkOpener> std::fmt::Debug for Storefront<S, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storefront")
            .field("store", &self.config.store_name)
            .field("cart", &self.cart)
            .field("state", &self.flow.state())
            .field("missing_elements", &self.missing_elements)
            .finish()
    }
}

impl<S: Surface, O: LinkOpener> Storefront<S, O> {
    /// Create a controller
    ///
    /// Fails only when the configured chat number is not a phone number.
    pub fn new(config: Config, history: OrderHistory, surface: S, opener: O) -> AppResult<Self> {
        let chat = ChatLink::new(&config.chat_number)
            .map_err(|e| AppError::with_message(ErrorCode::ConfigError, e.to_string()))?;
        let renderer = OrderMessageRenderer::from_config(&config);

        Ok(Self {
            config,
            surface,
            opener,
            cart: CartManager::new(),
            flow: CheckoutFlow::new(),
            history,
            renderer,
            chat,
            missing_elements: Vec::new(),
        })
    }

    /// Create a controller with the history database from `config`
    pub fn open(config: Config, surface: S, opener: O) -> AppResult<Self> {
        let history = OrderHistory::open(&config.history_db)?;
        Self::new(config, history, surface, opener)
    }

    /// Attach to the page: check required elements and draw the cart
    ///
    /// Missing elements are configuration errors; the storefront keeps
    /// running with the affected features degraded.
    pub fn mount(&mut self) {
        self.missing_elements = Element::REQUIRED
            .iter()
            .copied()
            .filter(|el| !self.surface.has_element(*el))
            .collect();

        for el in &self.missing_elements {
            error!(element = el.name(), "Required page element not found");
        }

        info!(
            store = %self.config.store_name,
            missing = self.missing_elements.len(),
            "Storefront mounted"
        );
        self.refresh();
    }

    /// Redraw the cart from scratch
    pub fn refresh(&mut self) {
        if let Some(el) = Element::CART_DISPLAY
            .iter()
            .find(|el| !self.surface.has_element(**el))
        {
            error!(element = el.name(), "Cart display element missing, skipping refresh");
            return;
        }

        let view = CartView::build(
            self.cart.items(),
            &self.cart.totals(),
            &self.config.currency_symbol,
        );
        self.surface.render_cart(&view);
    }

    // ========== Cart ==========

    /// Add one unit of a product
    pub fn add_to_cart(&mut self, id: &str, name: &str, unit_price: f64) -> Result<CartEvent, CartError> {
        match self.cart.add(id, name, unit_price) {
            Ok(event) => {
                self.refresh();
                self.surface.acknowledge_add();
                Ok(event)
            }
            Err(e) => {
                self.reject_cart_change(id, &e);
                Err(e)
            }
        }
    }

    /// Change a line's quantity
    ///
    /// Unknown ids are ignored; a change the cart refuses shows a notice.
    /// Either way `None` is returned and nothing is redrawn.
    pub fn update_quantity(&mut self, id: &str, delta: i32) -> Option<CartEvent> {
        match self.cart.update_quantity(id, delta) {
            Ok(Some(event)) => {
                self.refresh();
                Some(event)
            }
            Ok(None) => None,
            Err(e) => {
                self.reject_cart_change(id, &e);
                None
            }
        }
    }

    /// Remove a line (idempotent)
    pub fn remove_from_cart(&mut self, id: &str) -> Option<CartEvent> {
        let event = self.cart.remove(id);
        self.refresh();
        event
    }

    /// Apply a control from a rendered cart row
    pub fn dispatch(&mut self, action: CartAction) -> Option<CartEvent> {
        match action {
            CartAction::UpdateQuantity { id, delta } => self.update_quantity(&id, delta),
            CartAction::Remove { id } => self.remove_from_cart(&id),
        }
    }

    fn reject_cart_change(&mut self, id: &str, err: &CartError) {
        warn!(item_id = %id, error = %err, "Cart change rejected");
        let item_id = id.to_string();
        let notice = match err {
            CartError::InvalidPrice(_) => Notice::InvalidPrice { item_id },
            CartError::TotalOutOfRange { .. } => Notice::QuantityLimit { item_id },
        };
        self.surface.notify(&notice);
    }

    // ========== Panels ==========

    pub fn open_cart(&mut self) {
        self.refresh();
        self.surface.show_panel(Panel::Cart);
    }

    pub fn close_cart(&mut self) {
        self.surface.hide_panel(Panel::Cart);
    }

    /// Move from the cart to the checkout form
    pub fn open_checkout(&mut self) -> Result<(), CheckoutError> {
        if let Err(e) = self.flow.open(self.cart.is_empty()) {
            if e == CheckoutError::CartEmpty {
                self.surface.notify(&Notice::CartEmpty);
            }
            warn!(error = %e, "Checkout not opened");
            return Err(e);
        }

        self.surface.hide_panel(Panel::Cart);
        self.surface.show_panel(Panel::Checkout);
        debug!(items = self.cart.items().len(), "Checkout opened");
        Ok(())
    }

    pub fn close_checkout(&mut self) -> Result<(), CheckoutError> {
        self.flow.close()?;
        self.surface.hide_panel(Panel::Checkout);
        Ok(())
    }

    pub fn close_success(&mut self) -> Result<(), CheckoutError> {
        self.flow.close()?;
        self.surface.hide_panel(Panel::Success);
        Ok(())
    }

    // ========== Payment proof ==========

    /// Preview the file picked in the payment proof input
    pub async fn select_proof(&mut self, file: &ProofFile) -> Option<ProofPreview> {
        self.surface.clear_preview();
        match ProofPreview::load(file).await {
            Ok(preview) => {
                self.surface.show_preview(&preview);
                Some(preview)
            }
            Err(e) => {
                warn!(file = %e.file_name(), error = %e, "Payment proof preview failed");
                self.surface.notify(&Notice::ProofUnreadable {
                    file_name: e.file_name().to_string(),
                });
                None
            }
        }
    }

    // ========== Submission ==========

    /// Place the order and hand it off to the chat app
    #[instrument(skip_all)]
    pub async fn submit_order(&mut self, form: CheckoutForm) -> Result<SubmissionOutcome, CheckoutError> {
        if self.flow.state() != CheckoutState::CheckoutOpen {
            let e = CheckoutError::InvalidState {
                state: self.flow.state(),
                action: "submit",
            };
            warn!(error = %e, "Submission refused");
            return Err(e);
        }

        let proof = match form.validate() {
            Ok(proof) => proof,
            Err(e) => {
                let notice = match &e {
                    CheckoutError::MissingField(field) => Notice::MissingField { field: *field },
                    _ => Notice::PaymentProofMissing,
                };
                self.surface.notify(&notice);
                debug!(error = %e, "Checkout form incomplete");
                return Err(e);
            }
        };

        self.flow.begin_submit()?;

        let proof_data_url = match proof.read_data_url().await {
            Ok(url) => url,
            Err(e) => {
                error!(file = %e.file_name(), error = %e, "Payment proof could not be read");
                self.surface.notify(&Notice::ProofUnreadable {
                    file_name: e.file_name().to_string(),
                });
                self.flow.abort_submit();
                return Err(CheckoutError::ProofUnreadable(e.file_name().to_string()));
            }
        };

        let totals: CartTotals = self.cart.totals();
        let record = OrderRecord {
            id: snowflake_id(),
            customer: form.customer.clone(),
            items: self.cart.items().to_vec(),
            total: totals.total_f64(),
            timestamp: Utc::now(),
            payment_proof_uploaded: true,
        };

        let message = self.renderer.render_order(&record);
        let link = self.chat.url(&message);

        let recorded = match self.history.append(&record) {
            Ok(count) => {
                debug!(order_id = record.id, history_len = count, "Order saved to history");
                true
            }
            Err(e) => {
                error!(order_id = record.id, error = %e, "Failed to save order history");
                false
            }
        };

        self.surface.hide_panel(Panel::Checkout);
        self.surface.show_panel(Panel::Success);
        self.flow.complete()?;

        self.cart.clear();
        self.refresh();
        self.surface.reset_form();
        self.surface.clear_preview();

        let handoff = self.hand_off(&link);

        info!(
            order_id = record.id,
            total = %totals.total_display(),
            item_count = totals.item_count,
            "Order placed"
        );

        Ok(SubmissionOutcome {
            record,
            message,
            link,
            handoff,
            recorded,
            proof_data_url,
        })
    }

    /// Open a chat with the store's greeting message
    pub fn open_enquiry(&mut self) -> Handoff {
        let link = self.chat.url(&self.renderer.render_enquiry());
        self.hand_off(&link)
    }

    fn hand_off(&mut self, link: &str) -> Handoff {
        let handoff = hand_off(&mut self.opener, link);
        if let Handoff::Blocked { url } = &handoff {
            self.surface.notify(&Notice::ManualLink { url: url.clone() });
        }
        handoff
    }

    // ========== Accessors ==========

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn cart(&self) -> &CartManager {
        &self.cart
    }

    pub fn totals(&self) -> CartTotals {
        self.cart.totals()
    }

    pub fn state(&self) -> CheckoutState {
        self.flow.state()
    }

    pub fn history(&self) -> &OrderHistory {
        &self.history
    }

    /// Elements found missing at the last [`mount`](Self::mount)
    pub fn missing_elements(&self) -> &[Element] {
        &self.missing_elements
    }

    pub fn subscribe(&self) -> broadcast::Receiver<CartEvent> {
        self.cart.subscribe()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn opener(&self) -> &O {
        &self.opener
    }
}

//! Rendering surface seam
//!
//! Implemented by the host page (DOM bindings, a desktop shell, a test
//! recorder). Every call is synchronous and fire-and-forget.

use crate::proof::ProofPreview;

use super::cart_view::CartView;

/// Named page elements the storefront expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    CartIcon,
    CartCount,
    CartPanel,
    CheckoutPanel,
    SuccessPanel,
    CartItems,
    CartTotal,
    CheckoutTotal,
    CheckoutButton,
    CheckoutForm,
    CustomerName,
    CustomerPhone,
    CustomerAddress,
    PaymentProof,
}

impl Element {
    /// Elements checked at mount
    pub const REQUIRED: [Element; 14] = [
        Element::CartIcon,
        Element::CartCount,
        Element::CartPanel,
        Element::CheckoutPanel,
        Element::SuccessPanel,
        Element::CartItems,
        Element::CartTotal,
        Element::CheckoutTotal,
        Element::CheckoutButton,
        Element::CheckoutForm,
        Element::CustomerName,
        Element::CustomerPhone,
        Element::CustomerAddress,
        Element::PaymentProof,
    ];

    /// Elements the cart refresh writes into; refresh is skipped without them
    pub const CART_DISPLAY: [Element; 4] = [
        Element::CartCount,
        Element::CartItems,
        Element::CartTotal,
        Element::CheckoutTotal,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Element::CartIcon => "cartIcon",
            Element::CartCount => "cartCount",
            Element::CartPanel => "cartModal",
            Element::CheckoutPanel => "checkoutModal",
            Element::SuccessPanel => "successModal",
            Element::CartItems => "cartItems",
            Element::CartTotal => "cartTotal",
            Element::CheckoutTotal => "checkoutTotal",
            Element::CheckoutButton => "checkoutBtn",
            Element::CheckoutForm => "checkoutForm",
            Element::CustomerName => "customerName",
            Element::CustomerPhone => "customerPhone",
            Element::CustomerAddress => "customerAddress",
            Element::PaymentProof => "paymentProof",
        }
    }
}

/// Modal panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Cart,
    Checkout,
    Success,
}

/// Blocking user-facing notices (an `alert` on a web page)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    CartEmpty,
    PaymentProofMissing,
    MissingField { field: &'static str },
    InvalidPrice { item_id: String },
    /// The cart cannot take more of this item
    QuantityLimit { item_id: String },
    ProofUnreadable { file_name: String },
    /// Popup blocked: the user has to open the link by hand
    ManualLink { url: String },
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::CartEmpty => "Your cart is empty!".to_string(),
            Notice::PaymentProofMissing => "Please upload payment proof".to_string(),
            Notice::MissingField { field } => format!("Please fill in your {}", field),
            Notice::InvalidPrice { item_id } => {
                format!("Sorry, {} cannot be added right now", item_id)
            }
            Notice::QuantityLimit { item_id } => {
                format!("Sorry, no more {} can be added to this order", item_id)
            }
            Notice::ProofUnreadable { file_name } => {
                format!("Could not read {}, please choose the file again", file_name)
            }
            Notice::ManualLink { url } => {
                format!("Please copy this link and open it manually: {}", url)
            }
        }
    }
}

/// Host rendering surface
pub trait Surface {
    /// Whether the page provides `element`
    fn has_element(&self, element: Element) -> bool;

    /// Redraw count badge, item list, totals and checkout button
    fn render_cart(&mut self, view: &CartView);

    /// Short visual pulse on the cart icon after an add
    fn acknowledge_add(&mut self);

    fn show_panel(&mut self, panel: Panel);

    fn hide_panel(&mut self, panel: Panel);

    /// Blocking notice
    fn notify(&mut self, notice: &Notice);

    /// Show the proof-of-payment preview, replacing any earlier one
    fn show_preview(&mut self, preview: &ProofPreview);

    fn clear_preview(&mut self);

    /// Clear the checkout form fields
    fn reset_form(&mut self);
}

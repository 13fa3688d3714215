//! End-to-end storefront session against an on-disk history
//!
//! Browse → add → checkout → submit, then reopen the history database and
//! check the orders survived.

use chat_message::{LinkOpener, WindowState, decode_component};
use image::{ImageBuffer, Rgb};
use rand::Rng;
use shared::CustomerInfo;
use storefront::{
    CartView, CheckoutForm, CheckoutState, Config, Element, Notice, OrderHistory, Panel,
    ProofFile, ProofPreview, Storefront, Surface,
};

#[derive(Default)]
struct PageSurface {
    last_view: Option<CartView>,
    notices: Vec<Notice>,
    open_panels: Vec<Panel>,
    preview: Option<ProofPreview>,
}

impl Surface for PageSurface {
    fn has_element(&self, _element: Element) -> bool {
        true
    }
    fn render_cart(&mut self, view: &CartView) {
        self.last_view = Some(view.clone());
    }
    fn acknowledge_add(&mut self) {}
    fn show_panel(&mut self, panel: Panel) {
        self.open_panels.push(panel);
    }
    fn hide_panel(&mut self, panel: Panel) {
        self.open_panels.retain(|p| *p != panel);
    }
    fn notify(&mut self, notice: &Notice) {
        self.notices.push(notice.clone());
    }
    fn show_preview(&mut self, preview: &ProofPreview) {
        self.preview = Some(preview.clone());
    }
    fn clear_preview(&mut self) {
        self.preview = None;
    }
    fn reset_form(&mut self) {}
}

/// Browser that can be told to block popups
struct Browser {
    popups_blocked: bool,
    opened: Vec<String>,
}

impl LinkOpener for Browser {
    fn open(&mut self, url: &str) -> Option<WindowState> {
        if self.popups_blocked {
            return None;
        }
        self.opened.push(url.to_string());
        Some(WindowState::open())
    }
}

const PRODUCTS: &[(&str, &str, f64)] = &[
    ("cupcake1", "Vanilla Cupcake", 25.0),
    ("cupcake2", "Red Velvet Cupcake", 28.5),
    ("cake1", "Chocolate Cake", 40.0),
    ("cookie1", "Choc Chip Cookie", 12.99),
];

fn write_receipt_png(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("receipt.png");
    let img: ImageBuffer<Rgb<u8>, Vec<u8>> =
        ImageBuffer::from_fn(640, 480, |x, _| Rgb([(x % 256) as u8, 120, 200]));
    img.save(&path).unwrap();
    path
}

fn customer() -> CustomerInfo {
    CustomerInfo::new("Thandi Nkosi", "+27 82 123 4567", "12 Main Rd, Soweto")
}

#[tokio::test]
async fn test_full_order_flow_persists_history() {
    let tmp = tempfile::tempdir().unwrap();
    let config = Config::with_overrides(tmp.path().to_string_lossy());
    let db_path = config.history_db.clone();

    let browser = Browser {
        popups_blocked: false,
        opened: Vec::new(),
    };
    let mut sf = Storefront::open(config, PageSurface::default(), browser).unwrap();
    sf.mount();
    assert!(sf.missing_elements().is_empty());

    sf.add_to_cart("cupcake1", "Vanilla Cupcake", 25.0).unwrap();
    sf.add_to_cart("cupcake1", "Vanilla Cupcake", 25.0).unwrap();
    sf.add_to_cart("cake1", "Chocolate Cake", 40.0).unwrap();
    let view = sf.surface().last_view.clone().unwrap();
    assert_eq!(view.item_count, 3);
    assert_eq!(view.total, "90.00");
    assert!(view.checkout_visible);

    sf.open_cart();
    sf.open_checkout().unwrap();
    assert_eq!(sf.surface().open_panels, vec![Panel::Checkout]);

    let receipt = ProofFile::from_path(write_receipt_png(tmp.path()));
    let preview = sf.select_proof(&receipt).await.unwrap();
    assert!(preview.thumbnail.starts_with("data:image/jpeg;base64,"));
    assert_eq!(preview.caption(), "Payment proof uploaded: receipt.png");

    let form = CheckoutForm::new(customer(), Some(receipt));
    let outcome = sf.submit_order(form).await.unwrap();

    assert_eq!(sf.state(), CheckoutState::Success);
    assert_eq!(sf.surface().open_panels, vec![Panel::Success]);
    assert!(sf.surface().preview.is_none());
    assert_eq!(sf.surface().last_view.as_ref().unwrap().item_count, 0);
    assert!(outcome.recorded);
    assert!(outcome.proof_data_url.starts_with("data:image/png;base64,"));

    let link = &sf.opener().opened[0];
    let (base, text) = link.split_once("?text=").unwrap();
    assert!(base.starts_with("https://wa.me/"));
    let message = decode_component(text).unwrap();
    assert!(message.contains("👤 Customer: Thandi Nkosi"));
    assert!(message.contains("• Chocolate Cake x1 - R40.00"));
    assert!(message.contains("💰 TOTAL: R90.00"));

    drop(sf);

    let history = OrderHistory::open(&db_path).unwrap();
    let orders = history.load_all().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, outcome.record.id);
    assert_eq!(orders[0].customer, customer());
    assert_eq!(orders[0].item_count(), 3);
}

#[tokio::test]
async fn test_blocked_popup_still_records_order() {
    let tmp = tempfile::tempdir().unwrap();
    let config = Config::with_overrides(tmp.path().to_string_lossy());
    let browser = Browser {
        popups_blocked: true,
        opened: Vec::new(),
    };
    let mut sf = Storefront::open(config, PageSurface::default(), browser).unwrap();
    sf.mount();

    sf.add_to_cart("cookie1", "Choc Chip Cookie", 12.99).unwrap();
    sf.open_checkout().unwrap();
    let form = CheckoutForm::new(
        customer(),
        Some(ProofFile::from_bytes("eft.pdf", b"%PDF-1.7 proof".to_vec())),
    );
    let outcome = sf.submit_order(form).await.unwrap();

    assert!(!outcome.handoff.is_opened());
    assert_eq!(sf.state(), CheckoutState::Success);
    assert_eq!(
        sf.surface().notices,
        vec![Notice::ManualLink {
            url: outcome.link.clone()
        }]
    );
    assert_eq!(sf.history().len().unwrap(), 1);
}

#[tokio::test]
async fn test_random_sessions_keep_totals_consistent() {
    let mut rng = rand::thread_rng();
    let mut config = Config::with_overrides("/tmp/storefront-random");
    config.chat_number = "27820483902".into();
    let browser = Browser {
        popups_blocked: false,
        opened: Vec::new(),
    };
    let history = OrderHistory::open_in_memory().unwrap();
    let mut sf = Storefront::new(config, history, PageSurface::default(), browser).unwrap();
    sf.mount();

    for round in 0..20 {
        for _ in 0..rng.gen_range(1..30) {
            let (id, name, price) = PRODUCTS[rng.gen_range(0..PRODUCTS.len())];
            match rng.gen_range(0..4) {
                0 | 1 => {
                    sf.add_to_cart(id, name, price).unwrap();
                }
                2 => {
                    sf.update_quantity(id, rng.gen_range(-3..=3));
                }
                _ => {
                    sf.remove_from_cart(id);
                }
            }

            let items = sf.cart().items();
            assert!(items.iter().all(|i| i.quantity > 0));
            let count: i32 = items.iter().map(|i| i.quantity).sum();
            assert_eq!(sf.totals().item_count, count);
        }

        if sf.open_checkout().is_err() {
            assert!(sf.cart().is_empty());
            continue;
        }
        let expected = sf.totals().total_f64();
        let form = CheckoutForm::new(
            customer(),
            Some(ProofFile::from_bytes(format!("proof-{round}.pdf"), vec![0x25; 8])),
        );
        let outcome = sf.submit_order(form).await.unwrap();
        assert_eq!(outcome.record.total, expected);
        assert!(sf.cart().is_empty());
        sf.close_success().unwrap();
    }

    let placed = sf.opener().opened.len();
    assert_eq!(sf.history().len().unwrap(), placed);
}

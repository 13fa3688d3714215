//! CartManager: owns the session cart and broadcasts every change

use shared::LineItem;
use tokio::sync::broadcast;
use tracing::debug;

use super::state::{Cart, CartError, QuantityChange};
use super::totals::CartTotals;

/// Event channel capacity (one page session, a handful of clicks per second)
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// A change applied to the cart
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// Item added, or an existing line bumped by one
    ItemAdded { id: String, quantity: i32 },
    /// Quantity changed and the line is still present
    QuantityChanged { id: String, quantity: i32 },
    /// Line removed (explicitly or because its quantity reached zero)
    ItemRemoved { id: String },
    /// Whole cart emptied after an order was placed
    Cleared,
}

/// Cart manager
///
/// Holds the [`Cart`] for the current session. Every operation runs to
/// completion synchronously; applied changes are sent to subscribers.
pub struct CartManager {
    cart: Cart,
    event_tx: broadcast::Sender<CartEvent>,
}

impl std::fmt::Debug for CartManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartManager")
            .field("cart", &self.cart)
            .field("event_tx", &"<broadcast::Sender>")
            .finish()
    }
}

impl Default for CartManager {
    fn default() -> Self {
        Self::new()
    }
}

impl CartManager {
    /// Create a manager with an empty cart
    pub fn new() -> Self {
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            cart: Cart::new(),
            event_tx,
        }
    }

    /// Subscribe to cart changes
    pub fn subscribe(&self) -> broadcast::Receiver<CartEvent> {
        self.event_tx.subscribe()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    pub fn totals(&self) -> CartTotals {
        self.cart.totals()
    }

    /// Add one unit of a product (merging by id)
    pub fn add(&mut self, id: &str, name: &str, unit_price: f64) -> Result<CartEvent, CartError> {
        let quantity = self.cart.add(id, name, unit_price)?;
        debug!(item_id = %id, quantity, "Item added to cart");
        Ok(self.publish(CartEvent::ItemAdded {
            id: id.to_string(),
            quantity,
        }))
    }

    /// Change an item's quantity by `delta`; removes it at zero or below
    ///
    /// Returns `Ok(None)` (and publishes nothing) when the id is not in the
    /// cart. A refused change publishes nothing either.
    pub fn update_quantity(&mut self, id: &str, delta: i32) -> Result<Option<CartEvent>, CartError> {
        let event = match self.cart.update_quantity(id, delta)? {
            Some(QuantityChange::Updated(quantity)) => CartEvent::QuantityChanged {
                id: id.to_string(),
                quantity,
            },
            Some(QuantityChange::Removed) => CartEvent::ItemRemoved { id: id.to_string() },
            None => return Ok(None),
        };
        debug!(item_id = %id, delta, ?event, "Quantity updated");
        Ok(Some(self.publish(event)))
    }

    /// Remove a line by id
    ///
    /// Idempotent: removing an absent id returns `None` and publishes nothing.
    pub fn remove(&mut self, id: &str) -> Option<CartEvent> {
        if !self.cart.remove(id) {
            return None;
        }
        debug!(item_id = %id, "Item removed from cart");
        Some(self.publish(CartEvent::ItemRemoved { id: id.to_string() }))
    }

    /// Empty the cart
    pub fn clear(&mut self) -> CartEvent {
        self.cart.clear();
        debug!("Cart cleared");
        self.publish(CartEvent::Cleared)
    }

    fn publish(&self, event: CartEvent) -> CartEvent {
        // No receivers is the normal case for a page nobody else observes
        let _ = self.event_tx.send(event.clone());
        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::broadcast::error::TryRecvError;

    #[test]
    fn test_events_follow_operations() {
        let mut manager = CartManager::new();
        let mut rx = manager.subscribe();

        manager.add("cupcake1", "Vanilla Cupcake", 25.0).unwrap();
        manager.add("cupcake1", "Vanilla Cupcake", 25.0).unwrap();
        manager.update_quantity("cupcake1", -1).unwrap();
        manager.update_quantity("cupcake1", -1).unwrap();

        assert_eq!(
            rx.try_recv().unwrap(),
            CartEvent::ItemAdded {
                id: "cupcake1".into(),
                quantity: 1
            }
        );
        assert_eq!(
            rx.try_recv().unwrap(),
            CartEvent::ItemAdded {
                id: "cupcake1".into(),
                quantity: 2
            }
        );
        assert_eq!(
            rx.try_recv().unwrap(),
            CartEvent::QuantityChanged {
                id: "cupcake1".into(),
                quantity: 1
            }
        );
        assert_eq!(
            rx.try_recv().unwrap(),
            CartEvent::ItemRemoved {
                id: "cupcake1".into()
            }
        );
        assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
    }

    #[test]
    fn test_noops_publish_nothing() {
        let mut manager = CartManager::new();
        let mut rx = manager.subscribe();

        assert_eq!(manager.update_quantity("missing", 1), Ok(None));
        assert_eq!(manager.remove("missing"), None);
        assert!(manager.add("bad", "Bad", -2.0).is_err());
        assert!(manager.add("huge", "Huge", 1e30).is_err());

        assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
    }

    #[test]
    fn test_refused_quantity_change_publishes_nothing() {
        let mut manager = CartManager::new();
        manager.add("a", "A", 1e27).unwrap();
        let mut rx = manager.subscribe();

        assert!(manager.update_quantity("a", 1000).is_err());
        assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
        assert_eq!(manager.totals().item_count, 1);
    }

    #[test]
    fn test_clear() {
        let mut manager = CartManager::new();
        manager.add("a", "A", 10.0).unwrap();
        manager.add("b", "B", 5.0).unwrap();

        assert_eq!(manager.clear(), CartEvent::Cleared);
        assert!(manager.is_empty());
        assert_eq!(manager.totals().item_count, 0);
    }

    #[test]
    fn test_works_without_subscribers() {
        let mut manager = CartManager::new();
        assert!(manager.add("a", "A", 1.0).is_ok());
        assert_eq!(manager.totals().item_count, 1);
    }
}

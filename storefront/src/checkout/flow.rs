//! Checkout state machine

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Where the customer is in the checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckoutState {
    #[default]
    Browsing,
    CheckoutOpen,
    Submitting,
    Success,
}

/// Refused checkout transitions
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("Cart is empty")]
    CartEmpty,

    #[error("Payment proof is missing")]
    ProofMissing,

    #[error("Customer {0} is required")]
    MissingField(&'static str),

    #[error("Payment proof {0} could not be read")]
    ProofUnreadable(String),

    #[error("Cannot {action} while {state:?}")]
    InvalidState {
        state: CheckoutState,
        action: &'static str,
    },
}

impl From<CheckoutError> for AppError {
    fn from(err: CheckoutError) -> Self {
        match err {
            CheckoutError::CartEmpty => AppError::new(ErrorCode::CartEmpty),
            CheckoutError::ProofMissing => AppError::new(ErrorCode::PaymentProofMissing),
            CheckoutError::MissingField(field) => AppError::required(field),
            CheckoutError::ProofUnreadable(ref name) => {
                AppError::with_message(ErrorCode::PaymentProofUnreadable, err.to_string())
                    .with_detail("file", name.clone())
            }
            CheckoutError::InvalidState { .. } => {
                AppError::with_message(ErrorCode::InvalidCheckoutState, err.to_string())
            }
        }
    }
}

/// Checkout state machine
///
/// Only tracks the step; the cart and form live elsewhere.
#[derive(Debug, Default)]
pub struct CheckoutFlow {
    state: CheckoutState,
}

impl CheckoutFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CheckoutState {
        self.state
    }

    /// Open the checkout panel; refused for an empty cart
    pub fn open(&mut self, cart_is_empty: bool) -> Result<(), CheckoutError> {
        if self.state == CheckoutState::Submitting {
            return Err(self.invalid("open checkout"));
        }
        if cart_is_empty {
            return Err(CheckoutError::CartEmpty);
        }
        self.state = CheckoutState::CheckoutOpen;
        Ok(())
    }

    /// Close checkout or the success panel and return to browsing
    pub fn close(&mut self) -> Result<(), CheckoutError> {
        if self.state == CheckoutState::Submitting {
            return Err(self.invalid("close"));
        }
        self.state = CheckoutState::Browsing;
        Ok(())
    }

    /// CheckoutOpen → Submitting
    pub fn begin_submit(&mut self) -> Result<(), CheckoutError> {
        if self.state != CheckoutState::CheckoutOpen {
            return Err(self.invalid("submit"));
        }
        self.state = CheckoutState::Submitting;
        Ok(())
    }

    /// Submitting → CheckoutOpen (the proof could not be read)
    pub fn abort_submit(&mut self) {
        if self.state == CheckoutState::Submitting {
            self.state = CheckoutState::CheckoutOpen;
        }
    }

    /// Submitting → Success
    pub fn complete(&mut self) -> Result<(), CheckoutError> {
        if self.state != CheckoutState::Submitting {
            return Err(self.invalid("complete"));
        }
        self.state = CheckoutState::Success;
        Ok(())
    }

    fn invalid(&self, action: &'static str) -> CheckoutError {
        CheckoutError::InvalidState {
            state: self.state,
            action,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cart_never_opens_checkout() {
        let mut flow = CheckoutFlow::new();
        assert_eq!(flow.open(true), Err(CheckoutError::CartEmpty));
        assert_eq!(flow.state(), CheckoutState::Browsing);
    }

    #[test]
    fn test_happy_path() {
        let mut flow = CheckoutFlow::new();
        flow.open(false).unwrap();
        assert_eq!(flow.state(), CheckoutState::CheckoutOpen);
        flow.begin_submit().unwrap();
        assert_eq!(flow.state(), CheckoutState::Submitting);
        flow.complete().unwrap();
        assert_eq!(flow.state(), CheckoutState::Success);
        flow.close().unwrap();
        assert_eq!(flow.state(), CheckoutState::Browsing);
    }

    #[test]
    fn test_submit_requires_open_checkout() {
        let mut flow = CheckoutFlow::new();
        assert!(matches!(
            flow.begin_submit(),
            Err(CheckoutError::InvalidState {
                state: CheckoutState::Browsing,
                ..
            })
        ));
        assert!(flow.complete().is_err());
    }

    #[test]
    fn test_abort_returns_to_checkout() {
        let mut flow = CheckoutFlow::new();
        flow.open(false).unwrap();
        flow.begin_submit().unwrap();
        assert!(flow.close().is_err());
        assert!(flow.open(false).is_err());

        flow.abort_submit();
        assert_eq!(flow.state(), CheckoutState::CheckoutOpen);
    }

    #[test]
    fn test_error_codes() {
        let app: AppError = CheckoutError::ProofMissing.into();
        assert_eq!(app.code, ErrorCode::PaymentProofMissing);

        let app: AppError = CheckoutError::MissingField("phone").into();
        assert_eq!(app.code, ErrorCode::RequiredField);
    }
}

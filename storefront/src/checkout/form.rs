//! Checkout form contents

use shared::CustomerInfo;

use super::flow::CheckoutError;
use crate::proof::ProofFile;

/// Submitted checkout form
#[derive(Debug, Clone, Default)]
pub struct CheckoutForm {
    pub customer: CustomerInfo,
    /// File chosen in the payment-proof input
    pub proof: Option<ProofFile>,
}

impl CheckoutForm {
    pub fn new(customer: CustomerInfo, proof: Option<ProofFile>) -> Self {
        Self { customer, proof }
    }

    /// Check presence of everything submission needs
    ///
    /// The proof is checked first, then the customer fields in form order.
    pub fn validate(&self) -> Result<&ProofFile, CheckoutError> {
        let proof = self.proof.as_ref().ok_or(CheckoutError::ProofMissing)?;
        if let Some(field) = self.customer.first_blank_field() {
            return Err(CheckoutError::MissingField(field));
        }
        Ok(proof)
    }
}

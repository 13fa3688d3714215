//! Proof-of-payment handling
//!
//! - **file**: the attached file and its data-URL encoding
//! - **preview**: filename + thumbnail shown under the file picker
//!
//! Reading a file is the only place the storefront awaits.

pub mod file;
pub mod preview;

pub use file::{ProofError, ProofFile, ProofSource};
pub use preview::{ProofPreview, THUMBNAIL_MAX_SIDE};

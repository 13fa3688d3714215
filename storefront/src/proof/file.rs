//! Attached proof-of-payment file

use std::path::PathBuf;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Proof file errors
#[derive(Debug, Error)]
pub enum ProofError {
    #[error("Failed to read {name}: {source}")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

impl ProofError {
    pub fn file_name(&self) -> &str {
        match self {
            ProofError::Read { name, .. } => name,
        }
    }
}

impl From<ProofError> for AppError {
    fn from(err: ProofError) -> Self {
        let name = err.file_name().to_string();
        AppError::with_message(ErrorCode::PaymentProofUnreadable, err.to_string())
            .with_detail("file", name)
    }
}

/// Where the file's bytes come from
#[derive(Debug, Clone)]
pub enum ProofSource {
    /// File on disk, read lazily
    Path(PathBuf),
    /// Bytes already handed over by the host (e.g. a browser `File`)
    Bytes(Vec<u8>),
}

/// A file picked in the payment-proof input
#[derive(Debug, Clone)]
pub struct ProofFile {
    name: String,
    source: ProofSource,
}

impl ProofFile {
    /// File on disk; the display name is the path's file name
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            name,
            source: ProofSource::Path(path),
        }
    }

    /// In-memory file with an explicit display name
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            source: ProofSource::Bytes(bytes),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// MIME type guessed from the file name
    pub fn mime_type(&self) -> String {
        mime_guess::from_path(&self.name)
            .first_or_octet_stream()
            .essence_str()
            .to_string()
    }

    /// Read the whole file
    pub async fn read(&self) -> Result<Vec<u8>, ProofError> {
        match &self.source {
            ProofSource::Path(path) => {
                tokio::fs::read(path)
                    .await
                    .map_err(|source| ProofError::Read {
                        name: self.name.clone(),
                        source,
                    })
            }
            ProofSource::Bytes(bytes) => Ok(bytes.clone()),
        }
    }

    /// Read the file and encode it as a `data:` URL
    pub async fn read_data_url(&self) -> Result<String, ProofError> {
        let bytes = self.read().await?;
        Ok(data_url(&self.mime_type(), &bytes))
    }
}

/// `data:{mime};base64,{payload}`
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, BASE64.encode(bytes))
}

//! folio Font - Font Resolution and Metrics
//!
//! This crate resolves font requests for the folio document engine:
//! - Family + style resolution to a concrete [`FontIdentity`]
//! - Built-in metrics for the fourteen standard faces
//! - External font loading (ttf-parser) behind the [`FontLoader`] seam
//! - Load-once metrics caching shared across documents
//! - Per-document resource-name registration

pub mod builtin;
pub mod encoding;
pub mod identity;
pub mod loader;
pub mod metrics;
pub mod provider;
pub mod registry;

use std::path::PathBuf;

pub use encoding::{FontEncoding, LegacyCodes, LegacyEncoding};
pub use identity::{FontIdentity, StandardFont, Style};
pub use loader::{FontLoader, TtfLoader};
pub use metrics::{Metrics, VerticalMetrics};
pub use provider::MetricsProvider;
pub use registry::{FontHandle, FontRegistry, ResourceName};

/// Font resolution error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FontError {
    #[error("Unknown font: {0}")]
    UnknownFont(String),

    #[error("Failed to parse font {}: {}", .path.display(), .reason)]
    Parse { path: PathBuf, reason: String },

    #[error("Failed to read font {}: {}", .path.display(), .reason)]
    Io { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, FontError>;

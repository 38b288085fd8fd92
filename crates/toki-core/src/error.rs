//! Error types for the gallery model.
//!
//! Navigation itself never fails (inputs are clamped, unknown ids are
//! ignored). Errors only come from building a catalog or loading config.

use crate::catalog::{CategoryId, EventId};

/// Dataset validation failures from [`EventCatalog::new`](crate::EventCatalog::new).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate event id {0}")]
    DuplicateEvent(EventId),
    #[error("event {id} has month {month}, expected 1-12")]
    InvalidMonth { id: EventId, month: u8 },
    #[error("event {id} has importance {importance}, expected 1-10")]
    InvalidImportance { id: EventId, importance: u8 },
    #[error("event {id} references unknown category {category}")]
    UnknownCategory { id: EventId, category: CategoryId },
}

/// Failures loading a [`GalleryConfig`](crate::GalleryConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("invalid config: {0}")]
    Invalid(String),
}

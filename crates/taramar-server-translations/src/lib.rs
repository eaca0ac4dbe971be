// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Translation overrides for the Taramar site.
//!
//! Editors replace any leaf string of the static message bundles through the
//! override store; pages render with the merged result.
//!
//! # Architecture
//!
//! - `service` - Resolving merged message trees and the annotated key listing
//! - `editor` - Saving editor submissions (upsert or clear per locale)
//!
//! # Example
//!
//! ```ignore
//! use taramar_server_translations::{SaveValues, TranslationService};
//!
//! let service = TranslationService::new(catalog, Arc::new(TranslationOverrideRepository::new(pool)));
//!
//! service
//!     .save_override("hero.title", &SaveValues::default().with(Locale::Fr, "Salut"))
//!     .await?;
//! let merged = service.resolve_messages(Locale::Fr).await?;
//! assert_eq!(merged.leaf("hero.title"), Some("Salut"));
//! ```

pub mod editor;
pub mod error;
pub mod service;

#[cfg(test)]
mod testing;

pub use editor::{SaveAction, SaveOutcome, SaveValues};
pub use error::{Result, TranslationsError};
pub use service::{AnnotatedListing, AnnotatedRow, TranslationService};

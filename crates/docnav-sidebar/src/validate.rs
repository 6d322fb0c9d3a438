//! Consumer-side validation of sidebar trees.
//!
//! The sidebar types themselves carry no validation; duplicate or dangling
//! document identifiers are build-time configuration errors detected by the
//! consuming build step. These checks halt a build rather than letting it
//! produce a partial navigation tree.
//!
//! Identifiers may repeat across different trees; only per-tree uniqueness
//! is enforced.

use std::collections::HashSet;

use crate::node::doc_ids;
use crate::sidebars::Sidebars;

/// Sidebar configuration error detected at build time.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// Two document nodes in one tree reference the same identifier.
    #[error("duplicate document id '{id}' in sidebar '{sidebar}'")]
    DuplicateId {
        /// Name of the tree containing the duplicate.
        sidebar: String,
        /// The repeated content identifier.
        id: String,
    },
    /// A document node references content missing from the corpus.
    #[error("document id '{id}' in sidebar '{sidebar}' does not exist in the corpus")]
    DanglingId {
        /// Name of the tree containing the reference.
        sidebar: String,
        /// The unresolved content identifier.
        id: String,
    },
}

/// Check that document identifiers are pairwise distinct within each tree.
///
/// # Errors
///
/// Returns `ValidationError::DuplicateId` for the first repeated identifier
/// found, in authoring order.
pub fn validate(sidebars: &Sidebars) -> Result<(), ValidationError> {
    for sidebar in sidebars {
        let mut seen = HashSet::new();
        for id in doc_ids(&sidebar.items) {
            if !seen.insert(id) {
                return Err(ValidationError::DuplicateId {
                    sidebar: sidebar.name.clone(),
                    id: id.to_owned(),
                });
            }
        }
    }
    Ok(())
}

/// Check every referenced identifier against a corpus of known document ids.
///
/// # Arguments
///
/// * `sidebars` - Trees to check
/// * `corpus` - Identifiers of all documents known to the site
///
/// # Errors
///
/// Returns `ValidationError::DanglingId` for the first identifier not found
/// in the corpus, in authoring order.
pub fn validate_against_corpus(
    sidebars: &Sidebars,
    corpus: &HashSet<String>,
) -> Result<(), ValidationError> {
    for sidebar in sidebars {
        for id in doc_ids(&sidebar.items) {
            if !corpus.contains(id) {
                return Err(ValidationError::DanglingId {
                    sidebar: sidebar.name.clone(),
                    id: id.to_owned(),
                });
            }
        }
    }
    Ok(())
}

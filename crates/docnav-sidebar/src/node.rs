//! Sidebar node types.
//!
//! A sidebar tree is an ordered sequence of [`SidebarNode`] values. A node
//! is either a document leaf referencing one content identifier, or a
//! category grouping child nodes under a label, optionally with an
//! auto-generated index page.
//!
//! # Wire format
//!
//! Nodes serialize with an internal `type` tag matching the configuration
//! files consumed by the site generator:
//!
//! ```json
//! { "type": "doc", "id": "intro", "label": "Intro" }
//! ```
//!
//! ```json
//! {
//!   "type": "category",
//!   "label": "Basics",
//!   "link": { "type": "generated-index", "title": "Basics" },
//!   "items": []
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Link attached to a category node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CategoryLink {
    /// Auto-generated listing page for the category's contents.
    #[serde(rename = "generated-index")]
    GeneratedIndex {
        /// Title of the generated index page.
        title: String,
    },
}

impl CategoryLink {
    /// Create a generated-index link.
    ///
    /// The title should describe the category's subject.
    #[must_use]
    pub fn generated_index(title: impl Into<String>) -> Self {
        Self::GeneratedIndex {
            title: title.into(),
        }
    }
}

/// One entry in a sidebar tree.
///
/// Owned nested values only, so a tree is acyclic by construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SidebarNode {
    /// Leaf entry referencing a single document.
    Doc {
        /// Content identifier (slug/path into the documentation corpus).
        id: String,
        /// Human-readable label.
        label: String,
    },
    /// Branch entry grouping child nodes under a label.
    Category {
        /// Human-readable label.
        label: String,
        /// Optional auto-generated index link.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        link: Option<CategoryLink>,
        /// Ordered child nodes. May be empty, which renders as an empty
        /// index page.
        items: Vec<SidebarNode>,
    },
}

impl SidebarNode {
    /// Create a document node.
    #[must_use]
    pub fn doc(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::Doc {
            id: id.into(),
            label: label.into(),
        }
    }

    /// Create a category node without an index link.
    #[must_use]
    pub fn category(label: impl Into<String>, items: Vec<SidebarNode>) -> Self {
        Self::Category {
            label: label.into(),
            link: None,
            items,
        }
    }

    /// Create a category node with a generated-index link.
    #[must_use]
    pub fn category_with_index(
        label: impl Into<String>,
        title: impl Into<String>,
        items: Vec<SidebarNode>,
    ) -> Self {
        Self::Category {
            label: label.into(),
            link: Some(CategoryLink::generated_index(title)),
            items,
        }
    }

    /// Human-readable label of this node.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Doc { label, .. } | Self::Category { label, .. } => label,
        }
    }

    /// Document identifier, if this is a document node.
    #[must_use]
    pub fn doc_id(&self) -> Option<&str> {
        match self {
            Self::Doc { id, .. } => Some(id),
            Self::Category { .. } => None,
        }
    }

    /// Append document identifiers in this subtree, depth-first in
    /// authoring order.
    fn collect_doc_ids<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Doc { id, .. } => out.push(id),
            Self::Category { items, .. } => {
                for item in items {
                    item.collect_doc_ids(out);
                }
            }
        }
    }
}

/// Document identifiers referenced by a node sequence, depth-first in
/// authoring order.
#[must_use]
pub fn doc_ids(nodes: &[SidebarNode]) -> Vec<&str> {
    let mut ids = Vec::new();
    for node in nodes {
        node.collect_doc_ids(&mut ids);
    }
    ids
}

//! Sidebar navigation trees for Docnav documentation sites.
//!
//! This crate provides:
//! - **Node types**: [`SidebarNode`] sum type (document leaves and
//!   categories with optional generated-index links)
//! - **Tree collection**: [`Sidebars`], ordered named trees with map
//!   serialization, plus [`SidebarsBuilder`] for construction
//! - **Validation**: build-time duplicate and dangling identifier checks
//! - **Shipped data**: [`default_sidebars`], the site's current navigation
//!
//! The collection is loaded once at site-build time and treated as an
//! immutable description of navigation structure for that build. Sibling
//! order is meaningful and preserved exactly.
//!
//! # Example
//!
//! ```
//! use docnav_sidebar::{SidebarNode, SidebarsBuilder, validate};
//!
//! let mut builder = SidebarsBuilder::new();
//! builder.sidebar(
//!     "tutorialSidebar",
//!     vec![
//!         SidebarNode::doc("intro", "Intro"),
//!         SidebarNode::category_with_index(
//!             "Basics",
//!             "Basics",
//!             vec![SidebarNode::doc("basics/packages", "Packages")],
//!         ),
//!     ],
//! );
//! let sidebars = builder.build();
//!
//! assert!(validate(&sidebars).is_ok());
//! let tutorial = sidebars.get("tutorialSidebar").unwrap();
//! assert_eq!(tutorial[0].doc_id(), Some("intro"));
//! ```

pub mod defaults;
pub mod node;
pub mod sidebars;
pub mod validate;

pub use defaults::{STD_SIDEBAR, TUTORIAL_SIDEBAR, default_sidebars};
pub use node::{CategoryLink, SidebarNode, doc_ids};
pub use sidebars::{Sidebar, Sidebars, SidebarsBuilder};
pub use validate::{ValidationError, validate, validate_against_corpus};

//! Named sidebar tree collection.
//!
//! [`Sidebars`] holds the named navigation trees for one site build. The
//! collection is ordered, serializes as a map of tree name to node list,
//! and is treated as an immutable value once built. Use [`SidebarsBuilder`]
//! for programmatic construction.
//!
//! # Example
//!
//! ```
//! use docnav_sidebar::{SidebarNode, SidebarsBuilder};
//!
//! let mut builder = SidebarsBuilder::new();
//! builder.sidebar("tutorial", vec![SidebarNode::doc("intro", "Intro")]);
//! let sidebars = builder.build();
//!
//! let tutorial = sidebars.get("tutorial").unwrap();
//! assert_eq!(tutorial.len(), 1);
//! assert_eq!(tutorial[0].label(), "Intro");
//! ```

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::node::SidebarNode;

/// One named navigation tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sidebar {
    /// Tree name (e.g. "tutorialSidebar").
    pub name: String,
    /// Ordered top-level nodes.
    pub items: Vec<SidebarNode>,
}

/// Ordered collection of named sidebar trees.
///
/// Serializes as a map `{ name: [nodes…] }`. Deserialization preserves
/// encounter order and rejects duplicate tree names. A collection with
/// zero trees is valid and renders as an empty navigation list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sidebars {
    entries: Vec<Sidebar>,
}

impl Sidebars {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a named tree's top-level nodes.
    ///
    /// # Arguments
    ///
    /// * `name` - Tree name (e.g. "tutorialSidebar")
    ///
    /// # Returns
    ///
    /// Ordered node slice if a tree with that name exists, `None` otherwise.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[SidebarNode]> {
        self.entries
            .iter()
            .find(|sidebar| sidebar.name == name)
            .map(|sidebar| sidebar.items.as_slice())
    }

    /// Check whether a tree with the given name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|sidebar| sidebar.name == name)
    }

    /// Tree names in authoring order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|sidebar| sidebar.name.as_str())
    }

    /// Iterate over trees in authoring order.
    pub fn iter(&self) -> std::slice::Iter<'_, Sidebar> {
        self.entries.iter()
    }

    /// Number of trees.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the collection has no trees.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Sidebars {
    type Item = &'a Sidebar;
    type IntoIter = std::slice::Iter<'a, Sidebar>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for Sidebars {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for sidebar in &self.entries {
            map.serialize_entry(&sidebar.name, &sidebar.items)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Sidebars {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SidebarsVisitor;

        impl<'de> Visitor<'de> for SidebarsVisitor {
            type Value = Sidebars;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of sidebar name to node list")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Sidebars, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries: Vec<Sidebar> =
                    Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, items)) =
                    map.next_entry::<String, Vec<SidebarNode>>()?
                {
                    if entries.iter().any(|sidebar| sidebar.name == name) {
                        return Err(serde::de::Error::custom(format!(
                            "duplicate sidebar name '{name}'"
                        )));
                    }
                    entries.push(Sidebar { name, items });
                }
                Ok(Sidebars { entries })
            }
        }

        deserializer.deserialize_map(SidebarsVisitor)
    }
}

/// Builder for constructing [`Sidebars`] values.
///
/// Tree names are expected to be unique within one collection; the builder
/// does not police this, the consuming build step does.
#[derive(Debug, Default)]
pub struct SidebarsBuilder {
    entries: Vec<Sidebar>,
}

impl SidebarsBuilder {
    /// Create a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named tree.
    ///
    /// # Arguments
    ///
    /// * `name` - Tree name (e.g. "tutorialSidebar")
    /// * `items` - Ordered top-level nodes
    pub fn sidebar(&mut self, name: impl Into<String>, items: Vec<SidebarNode>) -> &mut Self {
        self.entries.push(Sidebar {
            name: name.into(),
            items,
        });
        self
    }

    /// Build the [`Sidebars`] collection.
    #[must_use]
    pub fn build(self) -> Sidebars {
        Sidebars {
            entries: self.entries,
        }
    }
}

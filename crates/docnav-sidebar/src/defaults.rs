//! Canonical shipped sidebar configuration.
//!
//! Reproduces the navigation structure the documentation site currently
//! ships: a tutorial walkthrough tree and a standard library reference
//! tree. The value is built fresh per call; each site build loads its own
//! independent copy.

use crate::node::SidebarNode;
use crate::sidebars::{Sidebars, SidebarsBuilder};

/// Name of the tutorial tree.
pub const TUTORIAL_SIDEBAR: &str = "tutorialSidebar";

/// Name of the standard library reference tree.
pub const STD_SIDEBAR: &str = "stdSidebar";

/// Build the sidebar configuration shipped with the documentation site.
#[must_use]
pub fn default_sidebars() -> Sidebars {
    let mut builder = SidebarsBuilder::new();
    builder.sidebar(
        TUTORIAL_SIDEBAR,
        vec![
            SidebarNode::doc("intro", "Intro"),
            SidebarNode::category_with_index(
                "Basics",
                "Basics",
                vec![
                    SidebarNode::doc("basics/packages", "Packages"),
                    SidebarNode::doc("basics/imports", "Imports"),
                    SidebarNode::doc("basics/exported-names", "Exported names"),
                ],
            ),
        ],
    );
    builder.sidebar(
        STD_SIDEBAR,
        vec![
            SidebarNode::category_with_index(
                "archive",
                "archive",
                vec![
                    SidebarNode::doc("std/archive/tar", "tar"),
                    SidebarNode::doc("std/archive/zip", "zip"),
                ],
            ),
            SidebarNode::doc("std/bufio", "bufio"),
            SidebarNode::doc("std/builtin", "builtin"),
            SidebarNode::doc("std/bytes", "bytes"),
        ],
    );
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{CategoryLink, doc_ids};
    use crate::validate::validate;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_sidebars_has_both_trees() {
        let sidebars = default_sidebars();

        assert_eq!(sidebars.len(), 2);
        assert!(sidebars.contains(TUTORIAL_SIDEBAR));
        assert!(sidebars.contains(STD_SIDEBAR));
    }

    #[test]
    fn test_tutorial_tree_starts_with_intro_doc() {
        let sidebars = default_sidebars();

        let tutorial = sidebars.get(TUTORIAL_SIDEBAR).unwrap();

        assert_eq!(tutorial[0], SidebarNode::doc("intro", "Intro"));
    }

    #[test]
    fn test_tutorial_basics_category() {
        let sidebars = default_sidebars();
        let tutorial = sidebars.get(TUTORIAL_SIDEBAR).unwrap();

        let SidebarNode::Category { label, link, items } = &tutorial[1] else {
            panic!("expected category node");
        };

        assert_eq!(label, "Basics");
        assert_eq!(*link, Some(CategoryLink::generated_index("Basics")));
        let ids = doc_ids(items);
        assert_eq!(ids, vec!["basics/packages", "basics/imports", "basics/exported-names"]);
    }

    #[test]
    fn test_std_tree_category_first_then_docs_in_order() {
        let sidebars = default_sidebars();

        let std_tree = sidebars.get(STD_SIDEBAR).unwrap();

        let SidebarNode::Category { label, link, items } = &std_tree[0] else {
            panic!("expected category node");
        };
        assert_eq!(label, "archive");
        assert_eq!(*link, Some(CategoryLink::generated_index("archive")));
        assert_eq!(items[0], SidebarNode::doc("std/archive/tar", "tar"));
        assert_eq!(items[1], SidebarNode::doc("std/archive/zip", "zip"));

        assert_eq!(std_tree[1], SidebarNode::doc("std/bufio", "bufio"));
        assert_eq!(std_tree[2], SidebarNode::doc("std/builtin", "builtin"));
        assert_eq!(std_tree[3], SidebarNode::doc("std/bytes", "bytes"));
    }

    #[test]
    fn test_default_sidebars_pass_validation() {
        let sidebars = default_sidebars();

        assert!(validate(&sidebars).is_ok());
    }

    #[test]
    fn test_removing_entries_leaves_remaining_entries_untouched() {
        // An authoring revision that drops the trailing docs must not
        // disturb the ids, labels, or relative order of what's left.
        let full = default_sidebars();
        let full_std = full.get(STD_SIDEBAR).unwrap();

        let mut builder = SidebarsBuilder::new();
        builder.sidebar(STD_SIDEBAR, full_std[..1].to_vec());
        let reduced = builder.build();

        let reduced_std = reduced.get(STD_SIDEBAR).unwrap();
        assert_eq!(reduced_std, &full_std[..1]);
        assert_eq!(
            doc_ids(reduced_std),
            vec!["std/archive/tar", "std/archive/zip"]
        );
    }
}

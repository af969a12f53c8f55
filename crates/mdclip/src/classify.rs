//! Node classification: noise versus content.

use crate::node::Node;
use crate::utilities::{is_content_tag, is_ignored_class, is_ignored_tag};

/// Check if a node must be skipped together with its subtree.
///
/// Only elements are ever ignored: by tag, by computed style
/// (`display: none`, `visibility: hidden`), by `role="navigation"` or by one
/// of the page-chrome class names.
pub fn should_ignore_node(node: &Node) -> bool {
    if !node.is_element() {
        return false;
    }

    is_ignored_tag(&node.tag_name())
        || node.style.is_display_none()
        || node.style.is_visibility_hidden()
        || node.role() == Some("navigation")
        || node.class_list().any(is_ignored_class)
}

/// Check if a node is meaningful even when it renders no children.
pub fn is_content_node(node: &Node) -> bool {
    if node.is_text() {
        return node
            .node_value
            .as_deref()
            .is_some_and(|text| !text.trim().is_empty());
    }

    node.is_element() && is_content_tag(&node.tag_name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ignored_tags() {
        for tag in ["script", "style", "nav", "form", "footer", "svg", "HEADER"] {
            assert!(should_ignore_node(&Node::element(tag)), "{tag}");
        }
        assert!(!should_ignore_node(&Node::element("article")));
    }

    #[test]
    fn test_hidden_styles() {
        let hidden = Node::element("div").with_style(Some("none"), None);
        assert!(should_ignore_node(&hidden));

        let invisible = Node::element("p").with_style(Some("block"), Some("hidden"));
        assert!(should_ignore_node(&invisible));

        let visible = Node::element("p").with_style(Some("block"), Some("visible"));
        assert!(!should_ignore_node(&visible));
    }

    #[test]
    fn test_navigation_role() {
        let node = Node::element_with_attrs("div", vec![("role", "navigation")]);
        assert!(should_ignore_node(&node));

        let node = Node::element_with_attrs("div", vec![("role", "main")]);
        assert!(!should_ignore_node(&node));
    }

    #[test]
    fn test_ignored_classes() {
        let node = Node::element_with_attrs("div", vec![("class", "sidebar menu")]);
        assert!(should_ignore_node(&node));

        let node = Node::element_with_attrs("ul", vec![("class", "menu-items")]);
        assert!(!should_ignore_node(&node));
    }

    #[test]
    fn test_non_elements_are_never_ignored() {
        assert!(!should_ignore_node(&Node::text("nav")));
        assert!(!should_ignore_node(&Node::comment("script")));
    }

    #[test]
    fn test_content_nodes() {
        assert!(is_content_node(&Node::text(" hi ")));
        assert!(!is_content_node(&Node::text(" \n\t ")));
        assert!(is_content_node(&Node::element("pre")));
        assert!(is_content_node(&Node::element("main")));
        assert!(!is_content_node(&Node::element("div")));
        assert!(!is_content_node(&Node::element("td")));
        assert!(!is_content_node(&Node::comment("p")));
    }
}

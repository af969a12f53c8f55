//! Picking the subtree to convert: the page's main content or a selection.

use crate::node::Node;

/// Simple selectors tried, in order of precedence, when looking for the main
/// content of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContentSelector {
    Tag(&'static str),
    Role(&'static str),
    Class(&'static str),
    Id(&'static str),
}

const MAIN_CONTENT_SELECTORS: &[ContentSelector] = &[
    ContentSelector::Tag("main"),
    ContentSelector::Tag("article"),
    ContentSelector::Role("main"),
    ContentSelector::Class("content"),
    ContentSelector::Id("content"),
];

impl ContentSelector {
    fn matches(&self, node: &Node) -> bool {
        if !node.is_element() {
            return false;
        }
        match self {
            ContentSelector::Tag(tag) => node.tag_name() == *tag,
            ContentSelector::Role(role) => node.role() == Some(*role),
            ContentSelector::Class(class) => node.class_list().any(|c| c == *class),
            ContentSelector::Id(id) => node.attr("id") == Some(*id),
        }
    }
}

/// Find the first node in document order matching a predicate
fn find_first<'a>(root: &'a Node, predicate: &dyn Fn(&Node) -> bool) -> Option<&'a Node> {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if predicate(node) {
            return Some(node);
        }
        stack.extend(node.children.iter().rev());
    }
    None
}

/// Locate the main content of a document.
///
/// Returns the first element in document order matching any of `main`,
/// `article`, `[role="main"]`, `.content` or `#content`, falling back to
/// `<body>` and finally to the root itself.
pub fn main_content(root: &Node) -> &Node {
    let is_main = |node: &Node| MAIN_CONTENT_SELECTORS.iter().any(|s| s.matches(node));
    let is_body = |node: &Node| node.is_element() && node.tag_name() == "body";

    find_first(root, &is_main)
        .or_else(|| find_first(root, &is_body))
        .unwrap_or(root)
}

/// Clone the contents of a selection range into a fresh `div` container.
///
/// `range` is a node or fragment holding the selected nodes; a fragment or
/// document contributes its children, anything else is cloned as a single
/// child. The source tree is never touched.
pub fn selection_container(range: &Node) -> Node {
    let mut container = Node::element("div");
    if range.is_element() || range.is_text() {
        container.add_child(range.clone());
    } else {
        for child in range.children() {
            container.add_child(child.clone());
        }
    }
    container
}

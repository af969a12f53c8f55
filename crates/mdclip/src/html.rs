//! HTML parsing support.
//!
//! This module parses HTML strings into the [`Node`] tree used by the
//! converter. Without a layout engine the computed style is approximated from
//! the markup itself: the inline `style` attribute and the `hidden` attribute.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::{ComputedStyle, Node};

/// Parse an HTML fragment into a document fragment node.
///
/// This is the shape of a cloned selection range.
///
/// # Example
///
/// ```rust
/// use mdclip::{parse_html, MarkdownConverter, Selection};
///
/// let range = parse_html("<p>Hello <em>World</em></p>");
/// let converter = MarkdownConverter::new();
/// let selection = Selection::new("Hello World", Some(&range));
/// let markdown = converter.convert_to_markdown(&range, Some(selection));
/// assert_eq!(markdown, "Hello *World*");
/// ```
pub fn parse_html(html: &str) -> Node {
    let fragment = Html::parse_fragment(html);
    // html5ever wraps fragments in an <html> element
    let mut root = scraper_to_node(fragment.root_element());

    let mut node = Node::document_fragment();
    node.children = std::mem::take(&mut root.children);
    node
}

/// Parse a complete HTML document into a document node.
pub fn parse_document(html: &str) -> Node {
    let document = Html::parse_document(html);
    Node::document().with_child(scraper_to_node(document.root_element()))
}

/// Convert a scraper element and its subtree to our Node structure.
///
/// The walk keeps its own stack of open elements, so nesting depth is
/// bounded by memory only.
fn scraper_to_node(root: ElementRef) -> Node {
    let mut open: Vec<(_, Node)> = Vec::new();
    let mut current = (root.children(), element_node(root));

    loop {
        let Some(child) = current.0.next() else {
            match open.pop() {
                Some(mut parent) => {
                    parent.1.add_child(current.1);
                    current = parent;
                    continue;
                }
                None => return current.1,
            }
        };

        match child.value() {
            ScraperNode::Text(text) => current.1.add_child(Node::text(&text.text)),
            ScraperNode::Comment(comment) => {
                current.1.add_child(Node::comment(&comment.comment));
            }
            ScraperNode::Element(_) => {
                if let Some(element) = ElementRef::wrap(child) {
                    let next = (element.children(), element_node(element));
                    open.push(std::mem::replace(&mut current, next));
                }
            }
            _ => {}
        }
    }
}

/// An element node with its attributes and markup-derived style, no children
fn element_node(element: ElementRef) -> Node {
    let value = element.value();
    let attrs: Vec<(&str, &str)> = value.attrs().collect();

    let mut node = if attrs.is_empty() {
        Node::element(value.name())
    } else {
        Node::element_with_attrs(value.name(), attrs)
    };
    node.style = style_from_markup(&node);
    node
}

/// Derive `display` and `visibility` from the inline style declarations and
/// the `hidden` attribute.
fn style_from_markup(node: &Node) -> ComputedStyle {
    let mut display = None;
    let mut visibility = None;

    if let Some(style) = node.attr("style") {
        for declaration in style.split(';') {
            let Some((property, value)) = declaration.split_once(':') else {
                continue;
            };
            let value = value.trim().trim_end_matches("!important").trim();
            match property.trim().to_lowercase().as_str() {
                "display" => display = Some(value),
                "visibility" => visibility = Some(value),
                _ => {}
            }
        }
    }

    if display.is_none() && node.has_attr("hidden") {
        display = Some("none");
    }

    ComputedStyle::new(display, visibility)
}

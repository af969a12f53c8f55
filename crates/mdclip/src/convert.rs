//! Recursive renderer: node tree to unsanitized Markdown.
//!
//! The walk is post-order. Children are rendered and concatenated first, then
//! the element's rule formats the trimmed result. Nothing in the tree is
//! modified.

use crate::classify::{is_content_node, should_ignore_node};
use crate::node::{Node, NodeType};
use crate::rules::{format_node, FormatContext};
use crate::{ConvertError, Result};

/// Renders one subtree at a time with a fixed context
pub(crate) struct Renderer<'a> {
    ctx: FormatContext<'a>,
    max_depth: usize,
}

impl<'a> Renderer<'a> {
    pub(crate) fn new(ctx: FormatContext<'a>, max_depth: usize) -> Self {
        Self { ctx, max_depth }
    }

    /// Render a node and its subtree
    pub(crate) fn render(&self, node: &Node) -> Result<String> {
        self.render_at(node, 0)
    }

    fn render_at(&self, node: &Node, depth: usize) -> Result<String> {
        if depth > self.max_depth {
            return Err(ConvertError::DepthExceeded {
                max: self.max_depth,
            });
        }

        match node.node_type {
            NodeType::Text => {
                let text = node.node_value.as_deref().unwrap_or("").trim();
                // The trailing space keeps words apart across inline boundaries
                return Ok(if text.is_empty() {
                    String::new()
                } else {
                    format!("{} ", text)
                });
            }
            NodeType::Element => {}
            _ => return Ok(String::new()),
        }

        if should_ignore_node(node) {
            return Ok(String::new());
        }

        let mut content = String::new();
        for child in node.children() {
            content.push_str(&self.render_at(child, depth + 1)?);
        }
        let children = content.trim();

        if children.is_empty() && !is_content_node(node) {
            return Ok(String::new());
        }

        Ok(format_node(node, children, &self.ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn render(node: &Node) -> String {
        Renderer::new(FormatContext::default(), 512)
            .render(node)
            .unwrap()
    }

    fn p(text: &str) -> Node {
        Node::element("p").with_child(Node::text(text))
    }

    #[test]
    fn test_text_gets_trailing_space() {
        assert_eq!(render(&Node::text("  hello\n")), "hello ");
        assert_eq!(render(&Node::text(" \n ")), "");
    }

    #[test]
    fn test_other_nodes_render_empty() {
        assert_eq!(render(&Node::comment("note")), "");
        assert_eq!(render(&Node::document_fragment().with_child(p("x"))), "");
    }

    #[test]
    fn test_paragraph() {
        assert_eq!(render(&p("Hello World")), "\nHello World\n");
    }

    #[test]
    fn test_inline_children_concatenate() {
        let para = Node::element("p")
            .with_child(Node::text("Hello "))
            .with_child(Node::element("strong").with_child(Node::text("world")))
            .with_child(Node::text("!"));
        assert_eq!(render(&para), "\nHello **world**!\n");
    }

    #[test]
    fn test_ignored_subtree_is_pruned() {
        let nav = Node::element("nav").with_child(p("Secret"));
        assert_eq!(render(&nav), "");

        let div = Node::element("div")
            .with_child(p("Visible"))
            .with_child(
                Node::element_with_attrs("div", vec![("class", "footer")]).with_child(p("Secret")),
            );
        assert_eq!(render(&div), "Visible\n");
    }

    #[test]
    fn test_hidden_subtree_is_pruned() {
        let div = Node::element("div")
            .with_child(p("Visible"))
            .with_child(p("Hidden").with_style(Some("none"), None));
        let result = render(&div);
        assert!(result.contains("Visible"));
        assert!(!result.contains("Hidden"));
    }

    #[test]
    fn test_empty_wrapper_is_dropped() {
        let div = Node::element("div").with_child(Node::element("span"));
        assert_eq!(render(&div), "");
    }

    #[test]
    fn test_empty_content_node_is_formatted() {
        assert_eq!(render(&Node::element("pre")), "\n```\n\n```\n\n");
        assert_eq!(render(&Node::element("h2")), "\n\n## \n\n");
    }

    #[test]
    fn test_heading_ignores_nested_markup() {
        let h1 = Node::element("h1")
            .with_child(Node::text("Big "))
            .with_child(Node::element("em").with_child(Node::text("title")));
        assert_eq!(render(&h1), "\n\n# Big title\n\n");
    }

    #[test]
    fn test_nested_list() {
        let ul = Node::element("ul")
            .with_child(Node::element("li").with_child(Node::text("One")))
            .with_child(
                Node::element("li")
                    .with_child(Node::text("Two"))
                    .with_child(
                        Node::element("ul")
                            .with_child(Node::element("li").with_child(Node::text("Inner"))),
                    ),
            );
        assert_eq!(render(&ul), "\n- One\n- Two \n- Inner\n");
    }

    #[test]
    fn test_table() {
        let table = Node::element("table").with_child(
            Node::element("tbody")
                .with_child(
                    Node::element("tr")
                        .with_child(Node::element("th").with_child(Node::text("A")))
                        .with_child(Node::element("th").with_child(Node::text("B"))),
                )
                .with_child(
                    Node::element("tr")
                        .with_child(Node::element("td").with_child(Node::text("1")))
                        .with_child(Node::element("td")),
                ),
        );
        assert_eq!(render(&table), "\n| **A** | **B**\n| 1\n");
    }

    #[test]
    fn test_relative_link_uses_context_base() {
        let base = Url::parse("https://example.com/x/y").unwrap();
        let renderer = Renderer::new(
            FormatContext {
                base_url: Some(&base),
            },
            512,
        );
        let a = Node::element_with_attrs("a", vec![("href", "/docs")])
            .with_child(Node::text("Docs"));
        assert_eq!(renderer.render(&a).unwrap(), "[Docs](https://example.com/docs)");
    }

    #[test]
    fn test_depth_limit() {
        let mut node = Node::text("deep");
        for _ in 0..10 {
            node = Node::element("div").with_child(node);
        }

        let renderer = Renderer::new(FormatContext::default(), 4);
        assert!(matches!(
            renderer.render(&node),
            Err(ConvertError::DepthExceeded { max: 4 })
        ));

        let renderer = Renderer::new(FormatContext::default(), 10);
        assert_eq!(renderer.render(&node).unwrap(), "deep\n");
    }
}

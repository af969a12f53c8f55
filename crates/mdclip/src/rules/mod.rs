//! Tag formatting rules.
//!
//! Every supported tag maps to a [`Tag`] variant and the dispatch in
//! [`format_node`] is a closed match, so a tag without a rule falls through
//! the explicit [`Tag::Other`] arm and passes its children through.

mod markdown;

pub use markdown::{formatted_text, resolve_url};

use url::Url;

use crate::node::Node;

/// Tags with a dedicated formatting rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// h1 - h6
    Heading(u8),
    /// p, article, section, main
    Block,
    Div,
    /// strong, b
    Strong,
    /// i, em
    Emphasis,
    Link,
    Blockquote,
    /// ul, ol
    List,
    ListItem,
    Code,
    Pre,
    LineBreak,
    HorizontalRule,
    Image,
    Table,
    TableRow,
    TableCell,
    TableHeaderCell,
    /// Anything else: children pass through unchanged
    Other,
}

impl Tag {
    /// Look up the rule for a lowercase tag name
    pub fn from_name(tag: &str) -> Self {
        match tag {
            "h1" => Tag::Heading(1),
            "h2" => Tag::Heading(2),
            "h3" => Tag::Heading(3),
            "h4" => Tag::Heading(4),
            "h5" => Tag::Heading(5),
            "h6" => Tag::Heading(6),
            "p" | "article" | "section" | "main" => Tag::Block,
            "div" => Tag::Div,
            "strong" | "b" => Tag::Strong,
            "i" | "em" => Tag::Emphasis,
            "a" => Tag::Link,
            "blockquote" => Tag::Blockquote,
            "ul" | "ol" => Tag::List,
            "li" => Tag::ListItem,
            "code" => Tag::Code,
            "pre" => Tag::Pre,
            "br" => Tag::LineBreak,
            "hr" => Tag::HorizontalRule,
            "img" => Tag::Image,
            "table" => Tag::Table,
            "tr" => Tag::TableRow,
            "td" => Tag::TableCell,
            "th" => Tag::TableHeaderCell,
            _ => Tag::Other,
        }
    }
}

/// Read-only inputs shared by all rules during one conversion
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatContext<'a> {
    /// Base for resolving relative link and image references
    pub base_url: Option<&'a Url>,
}

/// Format an element from its already rendered, trimmed children.
pub fn format_node(node: &Node, children: &str, ctx: &FormatContext<'_>) -> String {
    use markdown::*;

    match Tag::from_name(&node.tag_name()) {
        Tag::Heading(level) => heading(node, level),
        Tag::Block => block(children),
        Tag::Div => div(children),
        Tag::Strong => strong(children),
        Tag::Emphasis => emphasis(children),
        Tag::Link => link(node, children, ctx),
        Tag::Blockquote => blockquote(node),
        Tag::List => list(children),
        Tag::ListItem => list_item(children),
        Tag::Code => code(children),
        Tag::Pre => code_block(node),
        Tag::LineBreak => line_break(),
        Tag::HorizontalRule => horizontal_rule(),
        Tag::Image => image(node, ctx),
        Tag::Table => table(children),
        Tag::TableRow => table_row(children),
        Tag::TableCell => table_cell(children),
        Tag::TableHeaderCell => table_header_cell(children),
        Tag::Other => children.to_string(),
    }
}

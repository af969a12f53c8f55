//! Markdown formatting rules, one function per tag.
//!
//! Block rules pad their output with newlines so sibling blocks stay
//! separated; inline rules do not. `children` is always the trimmed
//! concatenation of the rendered child fragments.

use url::Url;

use super::FormatContext;
use crate::node::Node;
use crate::utilities::repeat;

/// Number of leading characters searched for a newline before a code block
/// switches to the rendered text.
const CODE_NEWLINE_WINDOW: usize = 100;

pub(super) fn heading(node: &Node, level: u8) -> String {
    format!(
        "\n\n{} {}\n\n",
        repeat("#", usize::from(level)),
        node.text_content().trim()
    )
}

pub(super) fn block(children: &str) -> String {
    if children.is_empty() {
        return String::new();
    }
    format!("\n{}\n", children)
}

pub(super) fn div(children: &str) -> String {
    if children.is_empty() {
        return String::new();
    }
    format!("{}\n", children)
}

pub(super) fn strong(children: &str) -> String {
    if children.is_empty() {
        return String::new();
    }
    format!("**{}**", children)
}

pub(super) fn emphasis(children: &str) -> String {
    if children.is_empty() {
        return String::new();
    }
    format!("*{}*", children)
}

pub(super) fn link(node: &Node, children: &str, ctx: &FormatContext<'_>) -> String {
    let Some(href) = node.attr("href") else {
        return String::new();
    };
    if href.is_empty() || href == "#" || children.is_empty() {
        return String::new();
    }

    format!("[{}]({})", children, resolve_url(href, ctx.base_url))
}

pub(super) fn blockquote(node: &Node) -> String {
    format!("\n> {}\n\n", node.text_content().trim())
}

pub(super) fn list(children: &str) -> String {
    if children.is_empty() {
        return String::new();
    }
    format!("\n{}\n", children)
}

pub(super) fn list_item(children: &str) -> String {
    if children.is_empty() {
        return String::new();
    }
    format!("- {}\n", children)
}

pub(super) fn code(children: &str) -> String {
    if children.is_empty() {
        return String::new();
    }
    format!("`{}`", children)
}

pub(super) fn code_block(node: &Node) -> String {
    format!("\n```\n{}\n```\n\n", formatted_text(node))
}

pub(super) fn line_break() -> String {
    "\n".to_string()
}

pub(super) fn horizontal_rule() -> String {
    "\n---\n\n".to_string()
}

pub(super) fn image(node: &Node, ctx: &FormatContext<'_>) -> String {
    let alt = node.attr("alt").unwrap_or("");
    let src = node.attr("src").unwrap_or("");
    if src.is_empty() {
        return String::new();
    }

    format!("![{}]({})", alt, resolve_url(src, ctx.base_url))
}

pub(super) fn table(children: &str) -> String {
    if children.is_empty() {
        return String::new();
    }
    format!("\n{}\n", children)
}

pub(super) fn table_row(children: &str) -> String {
    if children.is_empty() {
        return String::new();
    }
    format!("{}\n", children)
}

pub(super) fn table_cell(children: &str) -> String {
    if children.is_empty() {
        return "| ".to_string();
    }
    format!("| {} ", children)
}

pub(super) fn table_header_cell(children: &str) -> String {
    if children.is_empty() {
        return "| ".to_string();
    }
    format!("| **{}** ", children)
}

/// Text of a code block.
///
/// Raw text content is used when it has a newline within its first 100
/// characters; otherwise the rendered text is used so that line breaks the
/// browser lays out (e.g. `<br>` or one `<div>` per line) survive.
pub fn formatted_text(node: &Node) -> String {
    let raw = node.text_content();
    let has_early_newline = raw
        .chars()
        .take(CODE_NEWLINE_WINDOW + 1)
        .any(|c| c == '\n');

    let text = if has_early_newline {
        raw
    } else {
        node.rendered_text()
    };
    text.trim().to_string()
}

/// Resolve a root- or path-relative reference (`/x`, `./x`, `../x`) against
/// the base URL.
///
/// Anything else, including scheme-relative `//host/x` references, is
/// returned unchanged, as is any reference that fails to resolve.
pub fn resolve_url(reference: &str, base: Option<&Url>) -> String {
    let relative = (reference.starts_with('/') && !reference.starts_with("//"))
        || reference.starts_with("./")
        || reference.starts_with("../");
    if !relative {
        return reference.to_string();
    }

    match base.map(|base| base.join(reference)) {
        Some(Ok(resolved)) => resolved.to_string(),
        _ => reference.to_string(),
    }
}

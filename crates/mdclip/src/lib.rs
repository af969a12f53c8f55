//! # mdclip
//!
//! Extract page or selection content from a DOM tree as Markdown.
//!
//! The converter walks a DOM-shaped [`Node`] tree bottom-up, prunes page
//! chrome (navigation, scripts, hidden elements), formats every supported tag
//! as a Markdown fragment and finally sanitizes the concatenated text.
//! The [`host`] module describes the actions a browser host offers on top of
//! the converter: copy, download, preview and opening a chat prompt.
//!
//! ## Example (Node-based)
//!
//! ```rust
//! use mdclip::{MarkdownConverter, Node};
//!
//! let converter = MarkdownConverter::new();
//!
//! let body = Node::element("body")
//!     .with_child(Node::element("h1").with_child(Node::text("Hello World")));
//!
//! let markdown = converter.convert_to_markdown(&body, None);
//! assert_eq!(markdown, "# Hello World");
//! ```
//!
//! ## Example (HTML string)
//!
//! ```rust
//! use mdclip::{parse_document, ConverterOptions, MarkdownConverter};
//!
//! let options = ConverterOptions::for_page("https://example.com/x/y");
//! let converter = MarkdownConverter::with_options(options);
//! let document = parse_document(r#"<body><a href="/docs">Docs</a></body>"#);
//! let markdown = converter.convert_to_markdown(&document, None);
//! assert_eq!(markdown, "[Docs](https://example.com/docs)");
//! ```

pub mod classify;
mod convert;
pub mod host;
#[cfg(feature = "html")]
pub mod html;
pub mod node;
pub mod page;
mod rules;
mod sanitize;
mod service;
mod utilities;

pub use classify::{is_content_node, should_ignore_node};
#[cfg(feature = "html")]
pub use html::{parse_document, parse_html};
pub use node::{ComputedStyle, Node, NodeType};
pub use rules::{formatted_text, resolve_url, Tag};
pub use sanitize::sanitize_markdown;
pub use service::{
    ConverterOptions, MarkdownConverter, Selection, CONVERSION_ERROR_TEXT, DEFAULT_MAX_DEPTH,
};
pub use utilities::*;

/// Error type for conversion failures
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Maximum tree depth exceeded: {max}")]
    DepthExceeded { max: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, ConvertError>;

//! MarkdownConverter - the main entry point for DOM to Markdown conversion.

use url::Url;

use crate::convert::Renderer;
use crate::node::Node;
use crate::page::{main_content, selection_container};
use crate::rules::FormatContext;
use crate::sanitize::sanitize_markdown;
use crate::{ConvertError, Result};

/// Text returned when a conversion fails and there is no selection to fall
/// back to.
pub const CONVERSION_ERROR_TEXT: &str = "Error converting content to markdown";

/// Default limit on tree depth before a conversion is abandoned
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Options for MarkdownConverter
#[derive(Debug, Clone)]
pub struct ConverterOptions {
    /// Location of the document, used to resolve relative links and images
    pub base_url: Option<Url>,

    /// Deepest nesting level the renderer descends into
    pub max_depth: usize,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self {
            base_url: None,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ConverterOptions {
    /// Options for a document at `url`; an unparsable URL leaves references
    /// unresolved.
    pub fn for_page(url: &str) -> Self {
        Self {
            base_url: Url::parse(url).ok(),
            ..Default::default()
        }
    }
}

/// A user selection on the page
#[derive(Debug, Clone, Copy)]
pub struct Selection<'a> {
    /// Plain text of the selection as reported by the host
    pub text: &'a str,

    /// Cloned contents of the selection range, when one exists
    pub range: Option<&'a Node>,
}

impl<'a> Selection<'a> {
    pub fn new(text: &'a str, range: Option<&'a Node>) -> Self {
        Self { text, range }
    }

    /// A selection the host only knows as text
    pub fn text_only(text: &'a str) -> Self {
        Self { text, range: None }
    }
}

/// Converts page or selection content to Markdown
pub struct MarkdownConverter {
    options: ConverterOptions,
}

impl MarkdownConverter {
    /// Create a new MarkdownConverter with default options
    pub fn new() -> Self {
        Self {
            options: ConverterOptions::default(),
        }
    }

    /// Create a MarkdownConverter with custom options
    pub fn with_options(options: ConverterOptions) -> Self {
        Self { options }
    }

    /// Get the current options
    pub fn options(&self) -> &ConverterOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut ConverterOptions {
        &mut self.options
    }

    /// Render a node to Markdown without sanitizing the output
    pub fn convert_node(&self, node: &Node) -> Result<String> {
        let ctx = FormatContext {
            base_url: self.options.base_url.as_ref(),
        };
        Renderer::new(ctx, self.options.max_depth).render(node)
    }

    /// Convert the document or the selection to sanitized Markdown.
    ///
    /// A selection with non-empty text wins over the document: its range is
    /// cloned into a `div` and converted, or, without a range, its text is
    /// used as is. Otherwise the document's main content is converted.
    pub fn try_convert(
        &self,
        document: &Node,
        selection: Option<Selection<'_>>,
    ) -> Result<String> {
        let markdown = match selection {
            Some(Selection {
                text,
                range: Some(range),
            }) if !text.is_empty() => {
                self.check_depth(range)?;
                self.convert_node(&selection_container(range))?
            }
            Some(Selection { text, range: None }) if !text.is_empty() => text.to_string(),
            _ => {
                if !document.is_container() {
                    return Err(ConvertError::InvalidInput(format!(
                        "expected an element or document, got {:?}",
                        document.node_type
                    )));
                }
                let content = main_content(document);
                self.check_depth(content)?;
                if content.is_element() {
                    self.convert_node(content)?
                } else {
                    // document and fragment roots render through a container
                    self.convert_node(&selection_container(content))?
                }
            }
        };

        Ok(sanitize_markdown(&markdown))
    }

    /// Reject trees nested deeper than `max_depth` before anything recurses
    /// into them.
    fn check_depth(&self, node: &Node) -> Result<()> {
        let max = self.options.max_depth;
        if node.height() > max {
            return Err(ConvertError::DepthExceeded { max });
        }
        Ok(())
    }

    /// Convert the document or the selection to Markdown, never failing.
    ///
    /// On error the selected text is returned verbatim, or
    /// [`CONVERSION_ERROR_TEXT`] when nothing is selected.
    pub fn convert_to_markdown(
        &self,
        document: &Node,
        selection: Option<Selection<'_>>,
    ) -> String {
        match self.try_convert(document, selection) {
            Ok(markdown) => {
                tracing::debug!(bytes = markdown.len(), "converted content to markdown");
                markdown
            }
            Err(err) => {
                tracing::warn!(error = %err, "error converting to markdown");
                match selection {
                    Some(selection) if !selection.text.is_empty() => selection.text.to_string(),
                    _ => CONVERSION_ERROR_TEXT.to_string(),
                }
            }
        }
    }
}

impl Default for MarkdownConverter {
    fn default() -> Self {
        Self::new()
    }
}

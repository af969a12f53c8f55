//! DOM node structure consumed by the Markdown converter.
//!
//! The shape follows the DOM / Chrome DevTools Protocol node: a node kind, a
//! tag name, an attribute map and ordered children. Elements additionally carry
//! the two computed style properties the classifier needs and, optionally, the
//! browser-rendered text of the element. Any tree source (a browser host,
//! html5ever, CDP) can build this structure.

use indexmap::IndexMap;

use crate::utilities::is_block;

/// Node types matching DOM nodeType values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// Element node (nodeType = 1)
    Element,
    /// Text node (nodeType = 3)
    Text,
    /// Comment node (nodeType = 8)
    Comment,
    /// Document node (nodeType = 9)
    Document,
    /// Document fragment node (nodeType = 11)
    DocumentFragment,
    /// Any other node kind (doctype, processing instruction, ...)
    Other,
}

/// The computed style properties the classifier looks at.
///
/// `None` means the host did not report a value, which is treated like the
/// CSS initial value (`display: inline`, `visibility: visible`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComputedStyle {
    pub display: Option<String>,
    pub visibility: Option<String>,
}

impl ComputedStyle {
    pub fn new(display: Option<&str>, visibility: Option<&str>) -> Self {
        Self {
            display: display.map(|d| d.trim().to_lowercase()),
            visibility: visibility.map(|v| v.trim().to_lowercase()),
        }
    }

    /// `display: none`
    pub fn is_display_none(&self) -> bool {
        self.display.as_deref() == Some("none")
    }

    /// `visibility: hidden`
    pub fn is_visibility_hidden(&self) -> bool {
        self.visibility.as_deref() == Some("hidden")
    }
}

/// A DOM node.
#[derive(Debug, Clone)]
pub struct Node {
    /// Node kind
    pub node_type: NodeType,

    /// Node name (uppercase for elements, e.g. "DIV", "#text" for text nodes)
    pub node_name: String,

    /// Text content for text and comment nodes
    pub node_value: Option<String>,

    /// Attributes in document order
    pub attributes: IndexMap<String, String>,

    /// Child nodes
    pub children: Vec<Node>,

    /// Computed style reported by the host (elements only)
    pub style: ComputedStyle,

    /// Browser-rendered text (`innerText`), when the host provides it
    pub inner_text: Option<String>,
}

impl Node {
    fn new(node_type: NodeType, node_name: String, node_value: Option<String>) -> Self {
        Self {
            node_type,
            node_name,
            node_value,
            attributes: IndexMap::new(),
            children: Vec::new(),
            style: ComputedStyle::default(),
            inner_text: None,
        }
    }

    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Self::new(NodeType::Element, tag_name.to_uppercase(), None)
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        let mut node = Self::element(tag_name);
        for (name, value) in attrs {
            node.set_attr(name, value);
        }
        node
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Self::new(NodeType::Text, "#text".to_string(), Some(content.to_string()))
    }

    /// Create a new comment node
    pub fn comment(content: &str) -> Self {
        Self::new(
            NodeType::Comment,
            "#comment".to_string(),
            Some(content.to_string()),
        )
    }

    /// Create a document node
    pub fn document() -> Self {
        Self::new(NodeType::Document, "#document".to_string(), None)
    }

    /// Create a document fragment node
    pub fn document_fragment() -> Self {
        Self::new(
            NodeType::DocumentFragment,
            "#document-fragment".to_string(),
            None,
        )
    }

    /// Builder form of [`Node::add_child`]
    pub fn with_child(mut self, child: Node) -> Self {
        self.add_child(child);
        self
    }

    /// Builder form of setting the computed style
    pub fn with_style(mut self, display: Option<&str>, visibility: Option<&str>) -> Self {
        self.style = ComputedStyle::new(display, visibility);
        self
    }

    /// Builder form of setting the rendered text
    pub fn with_inner_text(mut self, text: &str) -> Self {
        self.inner_text = Some(text.to_string());
        self
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    /// Check if this node can hold children (element, document, fragment)
    pub fn is_container(&self) -> bool {
        matches!(
            self.node_type,
            NodeType::Element | NodeType::Document | NodeType::DocumentFragment
        )
    }

    /// Get the tag name (lowercase)
    pub fn tag_name(&self) -> String {
        self.node_name.to_lowercase()
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(&name.to_lowercase())
            .map(String::as_str)
    }

    /// Check if an attribute exists
    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.contains_key(&name.to_lowercase())
    }

    /// Set an attribute, replacing any previous value
    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attributes
            .insert(name.to_lowercase(), value.to_string());
    }

    /// The `role` attribute
    pub fn role(&self) -> Option<&str> {
        self.attr("role")
    }

    /// The `class` attribute split into its tokens
    pub fn class_list(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or("").split_ascii_whitespace()
    }

    /// Get all child nodes
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter()
    }

    /// Get only element children
    pub fn element_children(&self) -> impl Iterator<Item = &Node> {
        self.children().filter(|n| n.is_element())
    }

    /// Add a child node
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Number of levels below this node; a leaf has height 0
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = vec![(self, 0)];
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.children.iter().map(|child| (child, depth + 1)));
        }
        height
    }

    /// Get all text content from this node and descendants (`textContent`)
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node.node_type {
                NodeType::Text => out.push_str(node.node_value.as_deref().unwrap_or("")),
                NodeType::Comment | NodeType::Other => {}
                _ => stack.extend(node.children.iter().rev()),
            }
        }
        out
    }

    /// Get the rendered text of this node (`innerText`).
    ///
    /// Uses the host-supplied value when present. Otherwise the layout is
    /// approximated from the tree: `<br>` becomes a newline, block-level
    /// elements sit on their own lines and `display: none` subtrees are
    /// skipped.
    pub fn rendered_text(&self) -> String {
        let mut out = String::new();
        let mut stack = vec![Layout::Visit(self)];
        while let Some(step) = stack.pop() {
            let node = match step {
                Layout::Visit(node) => node,
                Layout::EndBlock => {
                    start_line(&mut out);
                    continue;
                }
            };
            if let Some(text) = &node.inner_text {
                out.push_str(text);
                continue;
            }

            match node.node_type {
                NodeType::Text => out.push_str(node.node_value.as_deref().unwrap_or("")),
                NodeType::Comment | NodeType::Other => {}
                _ => {
                    if node.style.is_display_none() {
                        continue;
                    }
                    let tag = node.tag_name();
                    if tag == "br" {
                        out.push('\n');
                        continue;
                    }

                    if node.is_element() && is_block(&tag) {
                        start_line(&mut out);
                        stack.push(Layout::EndBlock);
                    }
                    stack.extend(node.children.iter().rev().map(Layout::Visit));
                }
            }
        }
        out
    }
}

/// Pending work while laying out rendered text
enum Layout<'a> {
    Visit(&'a Node),
    EndBlock,
}

fn start_line(out: &mut String) {
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}

// Deep trees are torn down iteratively so dropping them cannot exhaust the stack.
impl Drop for Node {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

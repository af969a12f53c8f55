//! Tag and class lists shared by the classifier and the renderer.

/// Block-level HTML elements (used to approximate rendered text)
pub const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "audio", "blockquote", "body", "canvas",
    "center", "dd", "dir", "div", "dl", "dt", "fieldset", "figcaption",
    "figure", "footer", "form", "frameset", "h1", "h2", "h3", "h4", "h5",
    "h6", "header", "hgroup", "hr", "html", "isindex", "li", "main", "menu",
    "nav", "noframes", "noscript", "ol", "output", "p", "pre", "section",
    "table", "tbody", "td", "tfoot", "th", "thead", "tr", "ul",
];

/// Elements that are pruned together with their subtree
pub const IGNORED_TAGS: &[&str] = &[
    "script", "noscript", "style", "svg", "button", "input", "label", "nav",
    "form", "audio", "video", "footer", "header",
];

/// Elements that contribute output even without rendered children
pub const CONTENT_TAGS: &[&str] = &[
    "p", "h1", "h2", "h3", "h4", "h5", "h6", "li", "blockquote", "pre",
    "code", "article", "section", "main",
];

/// Class names marking page chrome
pub const IGNORED_CLASSES: &[&str] = &["navigation", "nav", "menu", "footer"];

/// Check if a tag is a block-level element
pub fn is_block(tag: &str) -> bool {
    BLOCK_ELEMENTS.contains(&tag.to_lowercase().as_str())
}

/// Check if a tag is pruned by the classifier
pub fn is_ignored_tag(tag: &str) -> bool {
    IGNORED_TAGS.contains(&tag.to_lowercase().as_str())
}

/// Check if a tag is a content tag
pub fn is_content_tag(tag: &str) -> bool {
    CONTENT_TAGS.contains(&tag.to_lowercase().as_str())
}

/// Check if a class name marks page chrome
pub fn is_ignored_class(class: &str) -> bool {
    IGNORED_CLASSES.contains(&class)
}

/// Repeat a string n times
pub fn repeat(s: &str, n: usize) -> String {
    s.repeat(n)
}

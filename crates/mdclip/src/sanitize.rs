//! Post-processing of the rendered Markdown.

use once_cell::sync::Lazy;
use regex::Regex;

static EXCESS_NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{4,}").unwrap());
static TRAILING_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)[^\S\n]+$").unwrap());
static EMPTY_LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\]\([^)]+\)").unwrap());
static REPEATED_SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").unwrap());
static SYMBOL_ONLY_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[^\S\n]*[*\-_]+[^\S\n]*$").unwrap());

/// One ordered pass over the whole document.
fn sanitize_pass(content: &str) -> String {
    let text = EXCESS_NEWLINES.replace_all(content, "\n\n\n");
    let text = text.replace('\t', "  ");
    let text = TRAILING_WHITESPACE.replace_all(&text, "");
    let text = EMPTY_LINK.replace_all(&text, "");
    let text = REPEATED_SPACES.replace_all(&text, " ");
    let text = SYMBOL_ONLY_LINE.replace_all(&text, "");
    text.trim().to_string()
}

/// Normalize whitespace and strip degenerate Markdown.
///
/// Steps, in order: collapse 4+ newlines to 3, tabs to two spaces, strip
/// trailing whitespace per line, drop `[](...)` links, collapse space runs,
/// drop lines made only of `*`, `-`, `_`, trim the document.
///
/// Removing an empty link or a symbol-only line can leave behind trailing
/// spaces or a fresh run of newlines, so the pass is repeated until the
/// output is stable. Every repeat only shrinks the text, which keeps the
/// loop finite and makes the result idempotent.
pub fn sanitize_markdown(content: &str) -> String {
    let mut current = sanitize_pass(content);
    loop {
        let next = sanitize_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

//! Building the chat launch URL for a Markdown prompt.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Chat page the prompt is sent to
pub const CHATGPT_BASE_URL: &str = "https://chat.openai.com/";

/// Longest launch URL opened directly
pub const MAX_URL_LENGTH: usize = 2000;

/// Text placed before the Markdown in the prompt
pub const PROMPT_PREFIX: &str = "Please analyze this markdown content:\n\n";

/// Prompt used when the real one travels through the clipboard
pub const CLIPBOARD_NOTICE: &str = "Content copied to clipboard - Ctrl+V to paste";

/// Characters left alone by JavaScript's `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// How the prompt reaches the chat page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatLaunch {
    /// The prompt fits into the launch URL
    Direct { url: String },
    /// The prompt is copied to the clipboard and the URL carries a notice
    ViaClipboard { prompt: String, url: String },
}

impl ChatLaunch {
    /// The URL to open
    pub fn url(&self) -> &str {
        match self {
            ChatLaunch::Direct { url } | ChatLaunch::ViaClipboard { url, .. } => url,
        }
    }
}

/// Percent-encode like `encodeURIComponent`
pub fn encode_uri_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

fn launch_url(prompt: &str) -> String {
    format!("{}?q={}", CHATGPT_BASE_URL, encode_uri_component(prompt))
}

/// Decide how to hand `markdown` to the chat page.
pub fn chat_launch(markdown: &str) -> ChatLaunch {
    let prompt = format!("{}{}", PROMPT_PREFIX, markdown);
    let url = launch_url(&prompt);
    if url.len() <= MAX_URL_LENGTH {
        return ChatLaunch::Direct { url };
    }

    ChatLaunch::ViaClipboard {
        prompt,
        url: launch_url(CLIPBOARD_NOTICE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_uri_component() {
        assert_eq!(encode_uri_component("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(encode_uri_component("keep-_.!~*'()"), "keep-_.!~*'()");
        assert_eq!(encode_uri_component("# x\n"), "%23%20x%0A");
        assert_eq!(encode_uri_component("é"), "%C3%A9");
    }

    #[test]
    fn test_short_prompt_opens_directly() {
        let launch = chat_launch("# Title");
        assert_eq!(
            launch,
            ChatLaunch::Direct {
                url: "https://chat.openai.com/?q=Please%20analyze%20this%20markdown%20content%3A%0A%0A%23%20Title"
                    .to_string()
            }
        );
    }

    #[test]
    fn test_long_prompt_goes_through_clipboard() {
        let markdown = "word ".repeat(600);
        match chat_launch(&markdown) {
            ChatLaunch::ViaClipboard { prompt, url } => {
                assert!(prompt.starts_with(PROMPT_PREFIX));
                assert!(prompt.ends_with(&markdown));
                assert_eq!(
                    url,
                    "https://chat.openai.com/?q=Content%20copied%20to%20clipboard%20-%20Ctrl%2BV%20to%20paste"
                );
            }
            other => panic!("expected clipboard launch, got {other:?}"),
        }
    }

    #[test]
    fn test_limit_counts_encoded_length() {
        // 700 spaces encode to 2100 characters
        let markdown = " ".repeat(700);
        assert!(matches!(chat_launch(&markdown), ChatLaunch::ViaClipboard { .. }));

        let markdown = "x".repeat(700);
        assert!(matches!(chat_launch(&markdown), ChatLaunch::Direct { .. }));
    }
}

//! Menu actions and the request/response messages that carry them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::HostError;

/// Identifier of the parent context-menu entry
pub const MENU_ROOT_ID: &str = "extractMarkdown";

/// Title of the parent context-menu entry
pub const MENU_ROOT_TITLE: &str = "Extract Markdown";

/// Something the user can ask for from the menu or a shortcut
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    #[serde(rename = "copyMarkdown")]
    CopyMarkdown,
    #[serde(rename = "openChatGPT")]
    OpenChatGpt,
    #[serde(rename = "downloadMD")]
    DownloadMarkdown,
    #[serde(rename = "previewMarkdown")]
    PreviewMarkdown,
}

impl Action {
    /// All actions in menu order
    pub const ALL: [Action; 4] = [
        Action::CopyMarkdown,
        Action::OpenChatGpt,
        Action::DownloadMarkdown,
        Action::PreviewMarkdown,
    ];

    /// Wire identifier, also used as the menu item id
    pub fn id(&self) -> &'static str {
        match self {
            Action::CopyMarkdown => "copyMarkdown",
            Action::OpenChatGpt => "openChatGPT",
            Action::DownloadMarkdown => "downloadMD",
            Action::PreviewMarkdown => "previewMarkdown",
        }
    }

    /// Menu title
    pub fn title(&self) -> &'static str {
        match self {
            Action::CopyMarkdown => "Copy Markdown",
            Action::OpenChatGpt => "Open in ChatGPT",
            Action::DownloadMarkdown => "Download .md",
            Action::PreviewMarkdown => "Preview Markdown",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Action {
    type Err = HostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.id() == s)
            .ok_or_else(|| HostError::UnknownAction(s.to_string()))
    }
}

/// Where a menu entry is offered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuContext {
    Selection,
    Page,
}

/// A context-menu entry the host registers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<&'static str>,
    pub title: &'static str,
    pub contexts: &'static [MenuContext],
}

const MENU_CONTEXTS: &[MenuContext] = &[MenuContext::Selection, MenuContext::Page];

/// The menu tree: the parent entry followed by one child per action
pub fn menu() -> Vec<MenuItem> {
    let root = MenuItem {
        id: MENU_ROOT_ID,
        parent_id: None,
        title: MENU_ROOT_TITLE,
        contexts: MENU_CONTEXTS,
    };

    std::iter::once(root)
        .chain(Action::ALL.into_iter().map(|action| MenuItem {
            id: action.id(),
            parent_id: Some(MENU_ROOT_ID),
            title: action.title(),
            contexts: MENU_CONTEXTS,
        }))
        .collect()
}

/// Message routed from a menu click or keyboard shortcut
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRequest {
    /// Action identifier; unknown identifiers are answered with a failure
    pub action: String,

    /// Text the user had selected, if any
    #[serde(default)]
    pub selected_text: Option<String>,
}

impl ActionRequest {
    pub fn new(action: Action, selected_text: Option<&str>) -> Self {
        Self {
            action: action.id().to_string(),
            selected_text: selected_text.map(str::to_string),
        }
    }
}

/// Outcome reported back to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ActionResponse {
    pub fn success() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}

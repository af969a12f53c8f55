//! Host integration: the actions a browser host offers around the converter.
//!
//! The host itself (menus, clipboard, downloads, tabs, storage) lives outside
//! this crate and is reached through the [`Host`] trait. [`ActionDispatcher`]
//! routes an [`ActionRequest`] to the converter and the host, and owns the
//! state that must outlive one request: the [`DownloadGuard`].

mod action;
mod chat;
mod download;
mod store;

pub use action::{
    menu, Action, ActionRequest, ActionResponse, MenuContext, MenuItem, MENU_ROOT_ID,
    MENU_ROOT_TITLE,
};
pub use chat::{
    chat_launch, encode_uri_component, ChatLaunch, CHATGPT_BASE_URL, CLIPBOARD_NOTICE,
    MAX_URL_LENGTH, PROMPT_PREFIX,
};
pub use download::{
    domain_label, download_filename, DownloadGuard, DownloadStatus, FALLBACK_FILE_STEM,
};
pub use store::{MemoryStore, TransientStore, PREVIEW_STORAGE_KEY};

use url::Url;

use crate::node::Node;
use crate::service::{ConverterOptions, MarkdownConverter, Selection};

/// Failures reported by host collaborators
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("Clipboard write failed: {0}")]
    Clipboard(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Download failed: {0}")]
    Download(String),

    #[error("Download already in progress")]
    DownloadInProgress,

    #[error("Failed to open {url}: {reason}")]
    Open { url: String, reason: String },

    #[error("Unknown action")]
    UnknownAction(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Services the browser host provides to the actions
pub trait Host {
    /// Put text on the system clipboard
    fn write_clipboard(&mut self, text: &str) -> Result<(), HostError>;

    /// Offer `content` as a file download named `filename`
    fn save_download(&mut self, filename: &str, content: &str) -> Result<DownloadStatus, HostError>;

    /// Open a URL in a new tab
    fn open_url(&mut self, url: &str) -> Result<(), HostError>;

    /// Storage shared with the preview surface
    fn storage(&mut self) -> &mut dyn TransientStore;

    /// Location of the preview surface
    fn preview_url(&self) -> String;
}

/// The page an action runs against
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    /// Location of the page
    pub url: &'a str,

    /// The page's document tree
    pub document: &'a Node,

    /// Cloned contents of the current selection range, if any
    pub selection_range: Option<&'a Node>,
}

impl<'a> PageContext<'a> {
    pub fn new(url: &'a str, document: &'a Node) -> Self {
        Self {
            url,
            document,
            selection_range: None,
        }
    }

    pub fn with_selection_range(mut self, range: &'a Node) -> Self {
        self.selection_range = Some(range);
        self
    }
}

/// Routes actions to the converter and the host
pub struct ActionDispatcher<H: Host> {
    host: H,
    options: ConverterOptions,
    downloads: DownloadGuard,
}

impl<H: Host> ActionDispatcher<H> {
    pub fn new(host: H) -> Self {
        Self::with_options(host, ConverterOptions::default())
    }

    /// `options.base_url` is replaced by the page URL on every request
    pub fn with_options(host: H, options: ConverterOptions) -> Self {
        Self {
            host,
            options,
            downloads: DownloadGuard::new(),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    /// Whether a download is still running
    pub fn download_in_progress(&self) -> bool {
        self.downloads.is_active()
    }

    /// Called by the host when a [`DownloadStatus::Pending`] download ends
    pub fn complete_download(&mut self) {
        self.downloads.finish();
    }

    /// Handle a routed request and report the outcome
    pub fn handle(&mut self, request: &ActionRequest, page: &PageContext<'_>) -> ActionResponse {
        let action = match request.action.parse::<Action>() {
            Ok(action) => action,
            Err(err) => {
                tracing::warn!(action = %request.action, "unknown action");
                return ActionResponse::failure(err.to_string());
            }
        };

        match self.run(action, request.selected_text.as_deref(), page) {
            Ok(()) => ActionResponse::success(),
            Err(err) => {
                tracing::error!(%action, error = %err, "action failed");
                ActionResponse::failure(err.to_string())
            }
        }
    }

    /// Run one action
    pub fn run(
        &mut self,
        action: Action,
        selected_text: Option<&str>,
        page: &PageContext<'_>,
    ) -> Result<(), HostError> {
        match action {
            Action::CopyMarkdown => {
                let markdown = self.convert(selected_text, page);
                self.host.write_clipboard(&markdown)
            }
            Action::DownloadMarkdown => self.download(selected_text, page),
            Action::PreviewMarkdown => {
                let markdown = self.convert(selected_text, page);
                self.host.storage().put(PREVIEW_STORAGE_KEY, &markdown)?;
                let url = self.host.preview_url();
                self.host.open_url(&url)
            }
            Action::OpenChatGpt => {
                let markdown = self.convert(selected_text, page);
                let launch = chat_launch(&markdown);
                if let ChatLaunch::ViaClipboard { prompt, .. } = &launch {
                    self.host.write_clipboard(prompt)?;
                }
                self.host.open_url(launch.url())
            }
        }
    }

    fn download(
        &mut self,
        selected_text: Option<&str>,
        page: &PageContext<'_>,
    ) -> Result<(), HostError> {
        self.downloads.try_begin()?;

        let markdown = self.convert(selected_text, page);
        let filename = download_filename(page.url);
        match self.host.save_download(&filename, &markdown) {
            Ok(DownloadStatus::Finished) => {
                self.downloads.finish();
                Ok(())
            }
            Ok(DownloadStatus::Pending) => Ok(()),
            Err(err) => {
                self.downloads.finish();
                Err(err)
            }
        }
    }

    fn convert(&self, selected_text: Option<&str>, page: &PageContext<'_>) -> String {
        let options = ConverterOptions {
            base_url: Url::parse(page.url).ok(),
            ..self.options.clone()
        };
        let selection = selected_text.map(|text| Selection::new(text, page.selection_range));

        MarkdownConverter::with_options(options).convert_to_markdown(page.document, selection)
    }
}

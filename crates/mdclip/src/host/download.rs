//! Download naming and the single-download guard.

use url::Url;

use super::HostError;

/// File name stem used when the page URL yields no domain
pub const FALLBACK_FILE_STEM: &str = "webpage";

/// How a host finished a download request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadStatus {
    /// The file was written before `save_download` returned
    Finished,
    /// The host completes the download later and reports it through
    /// [`ActionDispatcher::complete_download`](super::ActionDispatcher::complete_download)
    Pending,
}

/// Allows one download at a time.
///
/// A second request while one is running is rejected, not queued.
#[derive(Debug, Default)]
pub struct DownloadGuard {
    in_progress: bool,
}

impl DownloadGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the guard or fail with [`HostError::DownloadInProgress`]
    pub fn try_begin(&mut self) -> Result<(), HostError> {
        if self.in_progress {
            return Err(HostError::DownloadInProgress);
        }
        self.in_progress = true;
        Ok(())
    }

    /// Release the guard
    pub fn finish(&mut self) {
        self.in_progress = false;
    }

    pub fn is_active(&self) -> bool {
        self.in_progress
    }
}

/// The second-level label of the page's host name.
///
/// `https://docs.example.com/x` gives `example`; a single-label host is used
/// as is; an unparsable URL or one without a host gives `webpage`.
pub fn domain_label(page_url: &str) -> String {
    let Ok(url) = Url::parse(page_url) else {
        return FALLBACK_FILE_STEM.to_string();
    };

    match url.host_str() {
        Some(host) if !host.is_empty() => {
            let labels: Vec<&str> = host.split('.').collect();
            if labels.len() > 1 {
                labels[labels.len() - 2].to_string()
            } else {
                host.to_string()
            }
        }
        _ => FALLBACK_FILE_STEM.to_string(),
    }
}

/// Name of the `.md` file offered for a page
pub fn download_filename(page_url: &str) -> String {
    format!("{}.md", domain_label(page_url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_label() {
        assert_eq!(domain_label("https://www.example.com/a/b"), "example");
        assert_eq!(domain_label("https://docs.rs/regex"), "docs");
        assert_eq!(domain_label("http://localhost:8080/"), "localhost");
    }

    #[test]
    fn test_domain_label_fallback() {
        assert_eq!(domain_label("not a url"), "webpage");
        assert_eq!(domain_label(""), "webpage");
        assert_eq!(domain_label("file:///home/me/page.html"), "webpage");
    }

    #[test]
    fn test_download_filename() {
        assert_eq!(download_filename("https://blog.rust-lang.org/2024/"), "rust-lang.md");
        assert_eq!(download_filename("about:blank"), "webpage.md");
    }

    #[test]
    fn test_guard_rejects_second_download() {
        let mut guard = DownloadGuard::new();
        assert!(guard.try_begin().is_ok());
        assert!(guard.is_active());
        assert!(matches!(guard.try_begin(), Err(HostError::DownloadInProgress)));

        guard.finish();
        assert!(!guard.is_active());
        assert!(guard.try_begin().is_ok());
    }
}

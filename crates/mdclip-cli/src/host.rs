//! A terminal host: the clipboard and opened tabs are printed to stdout,
//! downloads and preview storage live in a directory.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use mdclip::host::{DownloadStatus, Host, HostError, TransientStore, PREVIEW_STORAGE_KEY};

/// [`TransientStore`] keeping one `<key>.md` file per entry
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.md"))
    }
}

impl TransientStore for FileStore {
    fn put(&mut self, key: &str, value: &str) -> Result<(), HostError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path(key), value)
            .map_err(|e| HostError::Storage(format!("{}: {e}", self.path(key).display())))
    }

    fn take(&mut self, key: &str) -> Result<Option<String>, HostError> {
        let path = self.path(key);
        match fs::read_to_string(&path) {
            Ok(value) => {
                fs::remove_file(&path)?;
                Ok(Some(value))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

pub struct CliHost {
    out_dir: PathBuf,
    store: FileStore,
}

impl CliHost {
    pub fn new(out_dir: &Path) -> Self {
        Self {
            out_dir: out_dir.to_path_buf(),
            store: FileStore::new(out_dir),
        }
    }

    fn print(&self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{text}")?;
        stdout.flush()
    }
}

impl Host for CliHost {
    fn write_clipboard(&mut self, text: &str) -> Result<(), HostError> {
        self.print(text).map_err(|e| HostError::Clipboard(e.to_string()))
    }

    fn save_download(
        &mut self,
        filename: &str,
        content: &str,
    ) -> Result<DownloadStatus, HostError> {
        let path = self.out_dir.join(filename);
        fs::create_dir_all(&self.out_dir)?;
        fs::write(&path, content)
            .map_err(|e| HostError::Download(format!("{}: {e}", path.display())))?;

        tracing::info!(path = %path.display(), bytes = content.len(), "saved download");
        Ok(DownloadStatus::Finished)
    }

    fn open_url(&mut self, url: &str) -> Result<(), HostError> {
        self.print(url).map_err(|e| HostError::Open {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }

    fn storage(&mut self) -> &mut dyn TransientStore {
        &mut self.store
    }

    fn preview_url(&self) -> String {
        self.store.path(PREVIEW_STORAGE_KEY).display().to_string()
    }
}

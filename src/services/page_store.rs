use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, error, info};

use crate::errors::WikiError;
use crate::types::Page;

/// The persistence boundary mapping titles to files.
///
/// Each page lives in one file named `<title>.txt` under the data directory.
/// Reads and writes are synchronous and unlocked; concurrent writers to the
/// same title race at the filesystem level and the last writer wins, which
/// is accepted for the single-user scope this serves.
#[derive(Clone)]
pub struct PageStore {
    data_dir: Arc<PathBuf>,
}

impl PageStore {
    pub fn new(data_dir: PathBuf) -> Self {
        debug!("Creating PageStore with data directory: {:?}", data_dir);
        Self {
            data_dir: Arc::new(data_dir),
        }
    }

    /// On-disk location for a title. Callers pass validated titles, so the
    /// name never contains path separators.
    pub fn page_path(&self, title: &str) -> PathBuf {
        self.data_dir.join(format!("{}.txt", title))
    }

    /// Load the page for a title.
    ///
    /// Fails with `NotFound` when no file exists for the title, or `Io` on
    /// any other read failure.
    pub fn load(&self, title: &str) -> Result<Page, WikiError> {
        let path = self.page_path(title);
        let body = match fs::read(&path) {
            Ok(body) => body,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No file for page '{}'", title);
                return Err(WikiError::NotFound);
            }
            Err(e) => {
                error!("Failed to read page '{}' from {:?}: {}", title, path, e);
                return Err(WikiError::Io(e));
            }
        };
        info!("Loaded page '{}', {} bytes", title, body.len());
        Ok(Page {
            title: title.to_string(),
            body,
        })
    }

    /// Persist a page, creating or replacing its file.
    pub fn save(&self, page: &Page) -> Result<(), WikiError> {
        let path = self.page_path(&page.title);
        write_owner_only(&path, &page.body).map_err(|e| {
            error!("Failed to write page '{}' to {:?}: {}", page.title, path, e);
            WikiError::Io(e)
        })?;
        info!("Saved page '{}', {} bytes", page.title, page.body.len());
        Ok(())
    }

    pub fn exists(&self, title: &str) -> bool {
        self.page_path(title).is_file()
    }
}

// Page files hold personal content, so they are created readable and
// writable by the owning user only.
#[cfg(unix)]
fn write_owner_only(path: &Path, body: &[u8]) -> io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::OpenOptionsExt;

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    file.write_all(body)
}

#[cfg(not(unix))]
fn write_owner_only(path: &Path, body: &[u8]) -> io::Result<()> {
    fs::write(path, body)
}

//! PDF output through a headless Chrome or Chromium.

use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

const CANDIDATES: &[&str] = &[
    "chromium",
    "chromium-browser",
    "google-chrome",
    "google-chrome-stable",
    "chrome",
];

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("No Chrome or Chromium found, set CHROME_PATH or pass --chrome")]
    ChromeNotFound,

    #[error("Chrome exited with {status}: {stderr}")]
    Chrome { status: String, stderr: String },

    #[error("IO Error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

pub struct Chrome {
    path: PathBuf,
}

fn on_path(name: &str) -> Option<PathBuf> {
    let paths = env::var_os("PATH")?;
    env::split_paths(&paths)
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}

impl Chrome {
    /// Uses `path` when given, otherwise the first known browser on `PATH`.
    pub fn discover(path: Option<&Path>) -> Result<Self, PdfError> {
        let found = match path {
            Some(path) if path.is_file() => Some(path.to_path_buf()),
            Some(path) => on_path(&path.to_string_lossy()),
            None => CANDIDATES.iter().find_map(|name| on_path(name)),
        };
        found
            .map(|path| Self { path })
            .ok_or(PdfError::ChromeNotFound)
    }

    pub async fn print(&self, html: &str, output: &Path) -> Result<(), PdfError> {
        let mut page = tempfile::Builder::new()
            .prefix("billgen-")
            .suffix(".html")
            .tempfile()?;
        page.write_all(html.as_bytes())?;
        page.flush()?;

        debug!(chrome = %self.path.display(), output = %output.display(), "printing pdf");
        let result = Command::new(&self.path)
            .arg("--headless")
            .arg("--disable-gpu")
            .arg("--no-pdf-header-footer")
            .arg("--virtual-time-budget=10000")
            .arg(format!("--print-to-pdf={}", output.display()))
            .arg(format!("file://{}", page.path().display()))
            .output()
            .await?;

        if !result.status.success() {
            return Err(PdfError::Chrome {
                status: result.status.to_string(),
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_missing_browser() {
        let missing = Path::new("/nonexistent/billgen-test/chrome");
        assert!(matches!(
            Chrome::discover(Some(missing)),
            Err(PdfError::ChromeNotFound)
        ));
    }

    #[test]
    fn explicit_existing_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let chrome = Chrome::discover(Some(file.path())).unwrap();
        assert_eq!(chrome.path, file.path());
    }
}

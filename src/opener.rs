//! Opening document URLs outside the terminal

use anyhow::{Context, Result};
use std::process::{Command, Stdio};

/// Opens a URL in a new browser window or tab
pub trait DocumentOpener: Send {
    fn open(&self, url: &str) -> Result<()>;
}

/// Delegates to the platform's URL handler
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemOpener;

impl DocumentOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<()> {
        let mut cmd = if cfg!(target_os = "macos") {
            Command::new("open")
        } else if cfg!(target_os = "windows") {
            let mut c = Command::new("cmd");
            c.args(["/C", "start", ""]);
            c
        } else {
            Command::new("xdg-open")
        };

        cmd.arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("opening {}", url))?;
        Ok(())
    }
}

/// Resolve a possibly relative file reference against the API base URL
pub fn resolve_url(base_url: &str, file: &str) -> String {
    if file.starts_with("http://") || file.starts_with("https://") {
        file.to_string()
    } else {
        format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            file.trim_start_matches('/')
        )
    }
}

//! PNG capture of a rendered page through a headless Chromium
//!
//! Best effort: failures are returned to the caller and never touch the
//! catalog.

use crate::error::{RenderError, RenderResult};
use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;
use tb_core::ScreenshotConfig;
use url::Url;

/// Binaries tried in order when no browser is configured
pub const DEFAULT_BROWSERS: &[&str] = &[
    "chromium",
    "chromium-browser",
    "google-chrome",
    "google-chrome-stable",
];

/// Milliseconds of virtual time the page gets to lay out the graph
const RENDER_BUDGET_MS: u32 = 2000;

/// Percent-encoded `file://` URL for an absolute path
pub fn file_url(path: &Path) -> RenderResult<String> {
    Url::from_file_path(path)
        .map(String::from)
        .map_err(|()| RenderError::NotAbsolute {
            path: path.display().to_string(),
        })
}

/// Command-line arguments for one capture. `html` must be absolute.
pub fn screenshot_args(
    html: &Path,
    png: &Path,
    settings: &ScreenshotConfig,
) -> RenderResult<Vec<String>> {
    Ok(vec![
        "--headless".to_string(),
        "--no-sandbox".to_string(),
        "--disable-gpu".to_string(),
        "--hide-scrollbars".to_string(),
        format!("--virtual-time-budget={}", RENDER_BUDGET_MS),
        format!(
            "--window-size={},{}",
            settings.window_width, settings.window_height
        ),
        format!("--screenshot={}", png.display()),
        file_url(html)?,
    ])
}

/// Capture `html` as a PNG at `png`
pub fn export_screenshot(html: &Path, png: &Path, settings: &ScreenshotConfig) -> RenderResult<()> {
    let html = html.canonicalize().map_err(|e| RenderError::IoWithPath {
        path: html.display().to_string(),
        source: e,
    })?;

    let candidates: Vec<&str> = match &settings.browser {
        Some(browser) => vec![browser.as_str()],
        None => DEFAULT_BROWSERS.to_vec(),
    };
    let args = screenshot_args(&html, png, settings)?;

    // a stale image would hide a failed capture
    if png.exists() {
        std::fs::remove_file(png).map_err(|e| RenderError::IoWithPath {
            path: png.display().to_string(),
            source: e,
        })?;
    }

    for browser in &candidates {
        log::debug!("Trying {} for screenshot of {}", browser, html.display());
        let output = match Command::new(browser).args(&args).output() {
            Ok(output) => output,
            Err(e) if e.kind() == ErrorKind::NotFound => continue,
            Err(e) => {
                return Err(RenderError::ScreenshotFailed {
                    browser: browser.to_string(),
                    message: e.to_string(),
                })
            }
        };

        if !output.status.success() || !png.exists() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let last_line = stderr.lines().last().unwrap_or("no output").trim();
            return Err(RenderError::ScreenshotFailed {
                browser: browser.to_string(),
                message: format!("{} ({})", last_line, output.status),
            });
        }

        log::info!("Saved screenshot to {}", png.display());
        return Ok(());
    }

    Err(RenderError::BrowserNotFound {
        tried: candidates.join(", "),
    })
}

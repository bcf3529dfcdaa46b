//! Error types for tb-render

use thiserror::Error;

/// Rendering error type
#[derive(Error, Debug)]
pub enum RenderError {
    /// R001: Graph could not be serialized
    #[error("[R001] Failed to serialize graph: {0}")]
    Json(#[from] serde_json::Error),

    /// R002: IO error with file path context
    #[error("[R002] Failed to access '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// R003: No usable headless browser
    #[error("[R003] No headless browser found (tried: {tried}); set screenshot.browser in tributary.yml")]
    BrowserNotFound { tried: String },

    /// R004: The browser ran but produced no image
    #[error("[R004] Screenshot with '{browser}' failed: {message}")]
    ScreenshotFailed { browser: String, message: String },

    /// R005: A path could not be turned into a `file://` URL
    #[error("[R005] Cannot build a file URL for '{path}': the path must be absolute")]
    NotAbsolute { path: String },
}

/// Result type alias for RenderError
pub type RenderResult<T> = Result<T, RenderError>;

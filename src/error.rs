//! Error types for the renderer, configuration loading and export.
//!
//! Generation and input handling are total; only acquiring a surface,
//! reading files and writing images can fail.

/// Errors raised while constructing a renderer or its surface.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The requested drawing surface could not be allocated.
    #[error("drawing surface unavailable ({width}x{height})")]
    SurfaceUnavailable {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// The host window could not be opened.
    #[error("window unavailable: {0}")]
    Window(#[from] minifb::Error),
}

/// Errors that can occur when loading configuration or anchor files.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the file from disk.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that could not be read.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse JSON content.
    #[error("failed to parse {path}: {source}")]
    Json {
        /// File that could not be parsed.
        path: String,
        /// The underlying parse error.
        source: serde_json::Error,
    },
}

/// Errors raised by the snapshot exporter.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The off-screen surface could not be created.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Encoding or writing the image failed.
    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),

    /// Writing a text dump failed.
    #[error("failed to write {path}: {source}")]
    Io {
        /// Destination file.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

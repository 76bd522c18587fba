//! Crate-wide error type.
//!
//! Rendering itself never fails on bad data (missing input, unknown routes, overflow).
//! These errors cover configuration, I/O, and a panel that can no longer accept frames.

use derive_more::{Display, Error, From};

/// Errors produced outside the per-cycle rendering contract.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// Reading or writing a file failed.
    #[display("I/O error: {_0}")]
    #[from]
    Io(std::io::Error),

    /// JSON could not be decoded.
    #[display("invalid JSON: {_0}")]
    #[from]
    Json(serde_json::Error),

    /// The configuration decoded but describes an unusable sign.
    #[display("invalid configuration: {_0}")]
    InvalidConfig(#[error(not(source))] String),

    /// The configured display size does not match the pixel canvas.
    #[display(
        "display is {display_width}x{display_height} but the canvas is {canvas_width}x{canvas_height}"
    )]
    GeometryMismatch {
        /// Columns from the configuration.
        display_width: u32,
        /// Rows from the configuration.
        display_height: u32,
        /// Canvas width in pixels.
        canvas_width: u32,
        /// Canvas height in pixels.
        canvas_height: u32,
    },

    /// The panel behind a surface cannot accept frames.
    #[display("panel unavailable: {_0}")]
    PanelUnavailable(#[error(not(source))] &'static str),

    /// PNG preview encoding failed.
    #[cfg(feature = "preview")]
    #[display("PNG encoding failed: {_0}")]
    #[from]
    Png(png::EncodingError),
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

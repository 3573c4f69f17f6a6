use std::path::PathBuf;

use thiserror::Error;

/// Errors emitted while laying out or writing a chart.
#[derive(Debug, Error)]
pub enum ChartError {
    /// A chart option is outside its accepted range.
    #[error("invalid chart option: {0}")]
    InvalidOption(String),
    /// There is nothing to draw.
    #[error("no skills to plot")]
    Empty,
    /// The generated SVG could not be parsed for rasterising.
    #[error("failed to prepare SVG for rasterising: {0}")]
    Svg(#[from] resvg::usvg::Error),
    /// The rasteriser could not produce an image.
    #[error("failed to rasterise chart: {0}")]
    Raster(String),
    /// Encoding a PNG or JPG failed.
    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),
    /// Building the PDF document failed.
    #[error("failed to build PDF: {0}")]
    Pdf(String),
    /// The output file could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        /// Target path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, ChartError>;

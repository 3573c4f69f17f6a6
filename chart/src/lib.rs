//! Horizontal bar charts of skill levels.
//!
//! Charts are laid out once into a [`Scene`] and then written in any
//! [`FileType`]: SVG directly, PNG and JPG through an SVG rasteriser, and PDF
//! with the built-in Helvetica font.
//!
//! # Usage
//!
//! ```rust,no_run
//! use skill_plotter_chart::{ChartOptions, FileType, Style, layout, save};
//! use skill_plotter_skills::{SkillStore, reduce, sort_by_category, split_evenly};
//!
//! let store = SkillStore::open("/tmp/skill-plotter")?;
//! let skills = sort_by_category(&store.read("skills")?);
//! let columns = split_evenly(&reduce(&skills), 2)?;
//!
//! let options = ChartOptions::default().with_style(Style::Round);
//! let scene = layout(&columns, &options)?;
//! let path = save(&scene, "skills", FileType::Png)?;
//! println!("saved {}", path.display());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod color;
mod error;
mod options;
mod pdf;
mod raster;
mod scene;
mod vector;

use std::borrow::Cow;
use std::fs;
use std::path::PathBuf;

use tracing::debug;

pub use color::Color;
pub use error::{ChartError, Result};
pub use options::{ChartOptions, FileType, Style};
pub use scene::{FONT_SIZE, ROW_HEIGHT, Rect, Scene, Shape, TRACK_WIDTH, layout};

/// Encode a scene in the given format.
///
/// JPG has no alpha channel, so a transparent canvas is painted white first.
///
/// # Errors
///
/// Returns an error if rasterising or encoding fails.
pub fn encode(scene: &Scene, file_type: FileType) -> Result<Vec<u8>> {
    let scene = if file_type.supports_transparency() || scene.background.is_some() {
        Cow::Borrowed(scene)
    } else {
        Cow::Owned(Scene {
            background: Some(Color::WHITE),
            ..scene.clone()
        })
    };

    match file_type {
        FileType::Svg => Ok(vector::to_svg(&scene).into_bytes()),
        FileType::Png => raster::encode_png(raster::rasterize(&vector::to_svg(&scene))?),
        FileType::Jpg => raster::encode_jpg(raster::rasterize(&vector::to_svg(&scene))?),
        FileType::Pdf => pdf::to_pdf(&scene),
    }
}

/// Write a scene to `<stem>.<extension>`, replacing any existing file.
///
/// # Errors
///
/// Returns an error if encoding fails or the file cannot be written.
pub fn save(scene: &Scene, stem: &str, file_type: FileType) -> Result<PathBuf> {
    let path = PathBuf::from(format!("{stem}.{}", file_type.extension()));
    let bytes = encode(scene, file_type)?;
    fs::write(&path, &bytes).map_err(|source| ChartError::Write {
        path: path.clone(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "wrote chart");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use tempfile::TempDir;

    fn scene() -> Scene {
        let column: IndexMap<String, f64> = [("Rust", 8.0), ("Go", 5.0)]
            .into_iter()
            .map(|(name, level)| (name.to_string(), level))
            .collect();
        layout(&[column], &ChartOptions::default()).unwrap()
    }

    #[test]
    fn test_encode_vector_formats() {
        let svg = encode(&scene(), FileType::Svg).unwrap();
        assert!(String::from_utf8(svg).unwrap().contains("<svg"));

        let pdf = encode(&scene(), FileType::Pdf).unwrap();
        assert!(pdf.starts_with(b"%PDF"));
    }

    #[test]
    fn test_encode_raster_formats() {
        let png = encode(&scene(), FileType::Png).unwrap();
        assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));

        let jpg = encode(&scene(), FileType::Jpg).unwrap();
        assert!(jpg.starts_with(&[0xFF, 0xD8]));
    }

    #[test]
    fn test_png_keeps_transparent_corner() {
        let png = encode(&scene(), FileType::Png).unwrap();
        let image = ::image::load_from_memory(&png).unwrap().to_rgba8();
        assert_eq!(image.get_pixel(0, 0).0[3], 0);
        assert_eq!(f64::from(image.height()), scene().height);
    }

    #[test]
    fn test_save_appends_extension() {
        let dir = TempDir::new().unwrap();
        let stem = dir.path().join("chart");
        let path = save(&scene(), stem.to_str().unwrap(), FileType::Svg).unwrap();

        assert_eq!(path, dir.path().join("chart.svg"));
        assert!(fs::read_to_string(&path).unwrap().contains("Rust"));
    }
}

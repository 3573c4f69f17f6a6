//! Output formats, styles and appearance settings of a chart.

use std::fmt;
use std::str::FromStr;

use crate::{ChartError, Color};

/// Output format of a chart file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileType {
    /// Scalable vector graphics.
    #[default]
    Svg,
    /// Lossless raster image.
    Png,
    /// Lossy raster image without transparency.
    Jpg,
    /// Single-page vector document.
    Pdf,
}

impl FileType {
    /// Every supported format.
    pub const ALL: [Self; 4] = [Self::Svg, Self::Png, Self::Jpg, Self::Pdf];

    /// File extension without the dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
            Self::Jpg => "jpg",
            Self::Pdf => "pdf",
        }
    }

    /// Whether the format can leave the canvas transparent.
    #[must_use]
    pub const fn supports_transparency(self) -> bool {
        !matches!(self, Self::Jpg)
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for FileType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpg),
            "pdf" => Ok(Self::Pdf),
            _ => Err(format!("Unknown file type: {s} (expected svg, png, jpg or pdf)")),
        }
    }
}

/// Optional visual treatments of the bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// Leave the unfilled part of each track in the canvas color.
    Outline,
    /// Round the ends of every bar.
    Round,
    /// Hand-drawn look with wobbly edges.
    Sketch,
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Outline => "outline",
            Self::Round => "round",
            Self::Sketch => "sketch",
        })
    }
}

impl FromStr for Style {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "outline" => Ok(Self::Outline),
            "round" | "rounded" => Ok(Self::Round),
            "sketch" | "xkcd" => Ok(Self::Sketch),
            _ => Err(format!("Unknown style: {s} (expected outline, round or sketch)")),
        }
    }
}

/// Appearance of a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    /// Height of the skill bar as a fraction of the row.
    pub bar_height: f64,
    /// Height of the background bar as a fraction of the row.
    pub background_height: f64,
    /// Fill of the skill bar.
    pub bar_color: Color,
    /// Fill of the background bar.
    pub background_color: Color,
    /// Color of the skill labels.
    pub font_color: Color,
    /// Canvas fill; `None` leaves it transparent where the format allows.
    pub canvas_color: Option<Color>,
    /// Extra visual treatments.
    pub styles: Vec<Style>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            bar_height: 0.6,
            background_height: 0.7,
            bar_color: Color::BLUE,
            background_color: Color::DARK_GRAY,
            font_color: Color::DARK_GRAY,
            canvas_color: None,
            styles: Vec::new(),
        }
    }
}

impl ChartOptions {
    /// Whether `style` is enabled.
    #[must_use]
    pub fn has(&self, style: Style) -> bool {
        self.styles.contains(&style)
    }

    /// Enable a style.
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        if !self.has(style) {
            self.styles.push(style);
        }
        self
    }

    /// Check that both heights are fractions in `(0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::InvalidOption`] naming the offending height.
    pub fn validate(&self) -> Result<(), ChartError> {
        for (name, value) in [
            ("bar height", self.bar_height),
            ("background height", self.background_height),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ChartError::InvalidOption(format!(
                    "{name} must be within (0, 1], got {value}"
                )));
            }
        }
        Ok(())
    }
}

//! Backend-independent drawing of a chart.
//!
//! Layout happens once here; the SVG, raster and PDF writers only translate
//! the resulting shapes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use skill_plotter_skills::{Levels, MAX_LEVEL};

use crate::{ChartError, ChartOptions, Color, Style};

/// Height of one skill row in pixels.
pub const ROW_HEIGHT: f64 = 100.0;
/// Label font size in pixels.
pub const FONT_SIZE: f64 = 50.0;
/// Length of a full (level 10) bar in pixels.
pub const TRACK_WIDTH: f64 = 800.0;

const MARGIN: f64 = 20.0;
const LABEL_GAP: f64 = 24.0;
const CHAR_WIDTH: f64 = 0.6 * FONT_SIZE;
const SKETCH_STEP: f64 = 24.0;
const SKETCH_WOBBLE: f64 = 2.0;
const SKETCH_SEED: u64 = 0x5ca1_ab1e;
const ARC_STEPS: u32 = 6;

const SANS_FONTS: &str = "DejaVu Sans, Helvetica, Arial, sans-serif";
const SKETCH_FONTS: &str = "Humor Sans, xkcd Script, Comic Neue, Comic Sans MS, cursive";

/// Axis-aligned rectangle in pixels, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

/// A single drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Filled rectangle, rounded when `radius` is positive.
    Rect {
        /// Bounds.
        rect: Rect,
        /// Corner radius.
        radius: f64,
        /// Fill color.
        fill: Color,
    },
    /// Filled closed outline.
    Polygon {
        /// Corner points in drawing order.
        points: Vec<(f64, f64)>,
        /// Fill color.
        fill: Color,
    },
    /// Right-aligned text, vertically centered on `y`.
    Label {
        /// Right edge of the text.
        x: f64,
        /// Vertical center of the text.
        y: f64,
        /// Content.
        text: String,
        /// Font size in pixels.
        size: f64,
        /// Text color.
        color: Color,
    },
}

/// A laid-out chart ready for one of the writers.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
    /// Canvas fill, `None` for transparent.
    pub background: Option<Color>,
    /// CSS-style font family list for labels.
    pub font_family: &'static str,
    /// Shapes in painting order.
    pub shapes: Vec<Shape>,
}

impl Scene {
    /// Labels in painting order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.shapes.iter().filter_map(|shape| match shape {
            Shape::Label { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Number of filled bars and outlines.
    #[must_use]
    pub fn bar_count(&self) -> usize {
        self.shapes
            .iter()
            .filter(|shape| !matches!(shape, Shape::Label { .. }))
            .count()
    }
}

/// Lay out `columns` side by side, one row per skill.
///
/// Every column must have the same number of rows; use
/// [`split_evenly`](skill_plotter_skills::split_evenly) to get them.
/// Entries with level 0, such as padding placeholders, get no bars.
///
/// # Errors
///
/// Returns [`ChartError::Empty`] if there are no rows and
/// [`ChartError::InvalidOption`] for bad heights or uneven columns.
pub fn layout(columns: &[Levels], options: &ChartOptions) -> Result<Scene, ChartError> {
    options.validate()?;

    let rows = columns.first().map_or(0, Levels::len);
    if rows == 0 {
        return Err(ChartError::Empty);
    }
    if columns.iter().any(|column| column.len() != rows) {
        return Err(ChartError::InvalidOption(
            "all columns must have the same number of rows".to_string(),
        ));
    }

    let longest_label = columns
        .iter()
        .flat_map(|column| column.keys())
        .map(|name| name.chars().count())
        .max()
        .unwrap_or(0);
    let label_width = to_f64(longest_label) * CHAR_WIDTH;

    let bar_height = options.bar_height * ROW_HEIGHT;
    let background_height = options.background_height * ROW_HEIGHT;
    let border = ((background_height - bar_height) / 2.0).max(0.0);
    let column_width = label_width + LABEL_GAP + TRACK_WIDTH + 2.0 * border + MARGIN;

    let sketch = options.has(Style::Sketch);
    let radius_for = |height: f64| if options.has(Style::Round) { height / 2.0 } else { 0.0 };
    let mut rng = StdRng::seed_from_u64(SKETCH_SEED);
    let mut shapes = Vec::new();
    let mut push_bar = |shapes: &mut Vec<Shape>, rect: Rect, fill: Color| {
        let radius = radius_for(rect.height);
        if sketch {
            shapes.push(Shape::Polygon {
                points: sketch_outline(rect, radius, &mut rng),
                fill,
            });
        } else {
            shapes.push(Shape::Rect { rect, radius, fill });
        }
    };

    for (column_index, column) in columns.iter().enumerate() {
        let track_x = MARGIN + to_f64(column_index) * column_width + label_width + LABEL_GAP;

        for (row_index, (name, level)) in column.iter().enumerate() {
            let center = MARGIN + (to_f64(row_index) + 0.5) * ROW_HEIGHT;

            if *level > 0.0 {
                push_bar(
                    &mut shapes,
                    Rect {
                        x: track_x,
                        y: center - background_height / 2.0,
                        width: TRACK_WIDTH + 2.0 * border,
                        height: background_height,
                    },
                    options.background_color,
                );

                let bar_top = center - bar_height / 2.0;
                if options.has(Style::Outline) {
                    push_bar(
                        &mut shapes,
                        Rect {
                            x: track_x + border,
                            y: bar_top,
                            width: TRACK_WIDTH,
                            height: bar_height,
                        },
                        options.canvas_color.unwrap_or(Color::WHITE),
                    );
                }

                push_bar(
                    &mut shapes,
                    Rect {
                        x: track_x + border,
                        y: bar_top,
                        width: TRACK_WIDTH * level.min(MAX_LEVEL) / MAX_LEVEL,
                        height: bar_height,
                    },
                    options.bar_color,
                );
            }

            if !name.is_empty() {
                shapes.push(Shape::Label {
                    x: track_x - LABEL_GAP,
                    y: center,
                    text: name.clone(),
                    size: FONT_SIZE,
                    color: options.font_color,
                });
            }
        }
    }

    Ok(Scene {
        width: to_f64(columns.len()).mul_add(column_width, MARGIN),
        height: 2.0f64.mul_add(MARGIN, to_f64(rows) * ROW_HEIGHT),
        background: options.canvas_color,
        font_family: if sketch { SKETCH_FONTS } else { SANS_FONTS },
        shapes,
    })
}

fn to_f64(value: usize) -> f64 {
    f64::from(u32::try_from(value).unwrap_or(u32::MAX))
}

/// Corner points of `rect`, with quarter circles sampled when `radius` is set.
fn outline(rect: Rect, radius: f64) -> Vec<(f64, f64)> {
    let Rect {
        x,
        y,
        width,
        height,
    } = rect;
    let radius = radius.min(width / 2.0).min(height / 2.0);
    if radius <= 0.0 {
        return vec![(x, y), (x + width, y), (x + width, y + height), (x, y + height)];
    }

    // corner centers with the start angle of each quarter, clockwise from top-right
    let corners = [
        (x + width - radius, y + radius, -90.0_f64),
        (x + width - radius, y + height - radius, 0.0),
        (x + radius, y + height - radius, 90.0),
        (x + radius, y + radius, 180.0),
    ];
    corners
        .iter()
        .flat_map(|&(cx, cy, start)| {
            (0..=ARC_STEPS).map(move |step| {
                let angle = (start + 90.0 * f64::from(step) / f64::from(ARC_STEPS)).to_radians();
                (radius.mul_add(angle.cos(), cx), radius.mul_add(angle.sin(), cy))
            })
        })
        .collect()
}

/// Outline of `rect` with every edge subdivided and nudged off its line.
fn sketch_outline(rect: Rect, radius: f64, rng: &mut StdRng) -> Vec<(f64, f64)> {
    let corners = outline(rect, radius);
    let mut points = Vec::new();
    for (index, &(x0, y0)) in corners.iter().enumerate() {
        let (x1, y1) = corners[(index + 1) % corners.len()];
        let length = (x1 - x0).hypot(y1 - y0);
        let steps = (length / SKETCH_STEP).ceil().max(1.0);
        let mut step = 0.0;
        while step < steps {
            let t = step / steps;
            points.push((
                (x1 - x0).mul_add(t, x0) + rng.gen_range(-SKETCH_WOBBLE..=SKETCH_WOBBLE),
                (y1 - y0).mul_add(t, y0) + rng.gen_range(-SKETCH_WOBBLE..=SKETCH_WOBBLE),
            ));
            step += 1.0;
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn column(entries: &[(&str, f64)]) -> Levels {
        entries
            .iter()
            .map(|(name, level)| ((*name).to_string(), *level))
            .collect::<IndexMap<_, _>>()
    }

    fn rects(scene: &Scene) -> Vec<(Rect, f64, Color)> {
        scene
            .shapes
            .iter()
            .filter_map(|shape| match shape {
                Shape::Rect { rect, radius, fill } => Some((*rect, *radius, *fill)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_layout_draws_background_and_bar_per_skill() {
        let columns = [column(&[("Rust", 8.0), ("Go", 5.0)])];
        let scene = layout(&columns, &ChartOptions::default()).unwrap();

        assert_eq!(scene.labels().collect::<Vec<_>>(), vec!["Rust", "Go"]);
        let rects = rects(&scene);
        assert_eq!(rects.len(), 4);

        let (background, _, background_fill) = rects[0];
        let (bar, _, bar_fill) = rects[1];
        assert_eq!(background_fill, Color::DARK_GRAY);
        assert_eq!(bar_fill, Color::BLUE);
        assert!((bar.width - TRACK_WIDTH * 0.8).abs() < 1e-9);
        assert!(bar.height < background.height);
        assert!(bar.x > background.x);
        assert_eq!(scene.height, 2.0 * ROW_HEIGHT + 40.0);
        assert!(scene.background.is_none());
    }

    #[test]
    fn test_placeholder_rows_draw_nothing() {
        let columns = [
            column(&[("A", 3.0), ("B", 4.0)]),
            column(&[("C", 5.0), ("", 0.0)]),
        ];
        let scene = layout(&columns, &ChartOptions::default()).unwrap();

        assert_eq!(scene.labels().count(), 3);
        assert_eq!(scene.bar_count(), 6);
    }

    #[test]
    fn test_outline_adds_filler_in_canvas_color() {
        let options = ChartOptions {
            canvas_color: Some(Color::rgb(1, 2, 3)),
            ..ChartOptions::default()
        }
        .with_style(Style::Outline);
        let scene = layout(&[column(&[("A", 3.0)])], &options).unwrap();

        let rects = rects(&scene);
        assert_eq!(rects.len(), 3);
        assert_eq!(rects[1].2, Color::rgb(1, 2, 3));
        assert!((rects[1].0.width - TRACK_WIDTH).abs() < 1e-9);
        assert_eq!(scene.background, Some(Color::rgb(1, 2, 3)));
    }

    #[test]
    fn test_round_sets_half_height_radius() {
        let options = ChartOptions::default().with_style(Style::Round);
        let scene = layout(&[column(&[("A", 3.0)])], &options).unwrap();

        for (rect, radius, _) in rects(&scene) {
            assert!((radius - rect.height / 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_sketch_uses_polygons_deterministically() {
        let options = ChartOptions::default().with_style(Style::Sketch);
        let columns = [column(&[("A", 3.0), ("B", 9.0)])];
        let first = layout(&columns, &options).unwrap();
        let second = layout(&columns, &options).unwrap();

        assert!(rects(&first).is_empty());
        assert_eq!(first.bar_count(), 4);
        assert_eq!(first, second);
        assert_eq!(first.font_family, SKETCH_FONTS);
    }

    #[test]
    fn test_layout_rejects_empty_and_uneven_columns() {
        assert!(matches!(
            layout(&[], &ChartOptions::default()),
            Err(ChartError::Empty)
        ));
        let uneven = [column(&[("A", 1.0), ("B", 2.0)]), column(&[("C", 3.0)])];
        assert!(matches!(
            layout(&uneven, &ChartOptions::default()),
            Err(ChartError::InvalidOption(_))
        ));
    }

    #[test]
    fn test_rounded_outline_stays_inside_rect() {
        let rect = Rect {
            x: 10.0,
            y: 20.0,
            width: 100.0,
            height: 40.0,
        };
        for (px, py) in outline(rect, 20.0) {
            assert!(px >= rect.x - 1e-9 && px <= rect.x + rect.width + 1e-9);
            assert!(py >= rect.y - 1e-9 && py <= rect.y + rect.height + 1e-9);
        }
    }
}

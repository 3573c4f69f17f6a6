use std::fmt::Write as _;

use svg::Document;
use svg::node::element::{Polygon, Rectangle, Text};

use crate::scene::{Scene, Shape};

/// Baseline offset that centers a label vertically, as a fraction of its size.
pub(crate) const BASELINE_SHIFT: f64 = 0.35;

/// Serialize a scene as a standalone SVG document.
pub(crate) fn to_svg(scene: &Scene) -> String {
    let mut document = Document::new()
        .set("width", scene.width)
        .set("height", scene.height)
        .set("viewBox", (0.0, 0.0, scene.width, scene.height));

    if let Some(background) = scene.background {
        document = document.add(
            Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", scene.width)
                .set("height", scene.height)
                .set("fill", background.to_hex()),
        );
    }

    for shape in &scene.shapes {
        document = match shape {
            Shape::Rect { rect, radius, fill } => {
                let mut element = Rectangle::new()
                    .set("x", rect.x)
                    .set("y", rect.y)
                    .set("width", rect.width)
                    .set("height", rect.height)
                    .set("fill", fill.to_hex());
                if *radius > 0.0 {
                    element = element.set("rx", *radius).set("ry", *radius);
                }
                document.add(element)
            }
            Shape::Polygon { points, fill } => {
                let mut encoded = String::new();
                for (x, y) in points {
                    let _ = write!(encoded, "{x:.2},{y:.2} ");
                }
                document.add(
                    Polygon::new()
                        .set("points", encoded.trim_end())
                        .set("fill", fill.to_hex()),
                )
            }
            Shape::Label {
                x,
                y,
                text,
                size,
                color,
            } => document.add(
                Text::new(text.as_str())
                    .set("x", *x)
                    .set("y", BASELINE_SHIFT.mul_add(*size, *y))
                    .set("font-size", *size)
                    .set("font-family", scene.font_family)
                    .set("text-anchor", "end")
                    .set("fill", color.to_hex()),
            ),
        };
    }

    document.to_string()
}

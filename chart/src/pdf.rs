//! PDF writer for laid-out charts.

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};

use crate::scene::{Rect, Scene, Shape};
use crate::vector::BASELINE_SHIFT;
use crate::{ChartError, Color};

/// Control point distance approximating a quarter circle with a cubic curve.
const KAPPA: f64 = 0.552_284_8;
/// Average Helvetica glyph width as a fraction of the font size.
const HELVETICA_WIDTH: f64 = 0.55;
/// Byte shown for characters the font encoding cannot represent.
const REPLACEMENT: u8 = b'?';

/// Code points of WinAnsiEncoding between 0x80 and 0x9F.
const WIN_ANSI_EXTRA: &[(char, u8)] = &[
    ('€', 0x80),
    ('‚', 0x82),
    ('ƒ', 0x83),
    ('„', 0x84),
    ('…', 0x85),
    ('†', 0x86),
    ('‡', 0x87),
    ('ˆ', 0x88),
    ('‰', 0x89),
    ('Š', 0x8A),
    ('‹', 0x8B),
    ('Œ', 0x8C),
    ('Ž', 0x8E),
    ('‘', 0x91),
    ('’', 0x92),
    ('“', 0x93),
    ('”', 0x94),
    ('•', 0x95),
    ('–', 0x96),
    ('—', 0x97),
    ('˜', 0x98),
    ('™', 0x99),
    ('š', 0x9A),
    ('›', 0x9B),
    ('œ', 0x9C),
    ('ž', 0x9E),
    ('Ÿ', 0x9F),
];

/// Write a scene as a one-page PDF using the built-in Helvetica font.
pub(crate) fn to_pdf(scene: &Scene) -> Result<Vec<u8>, ChartError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let content = Content {
        operations: operations(scene),
    };
    let encoded = content
        .encode()
        .map_err(|e| ChartError::Pdf(e.to_string()))?;
    let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
        "Resources" => resources_id,
        "MediaBox" => vec![real(0.0), real(0.0), real(scene.width), real(scene.height)],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| ChartError::Pdf(e.to_string()))?;
    Ok(bytes)
}

#[allow(clippy::cast_possible_truncation)]
fn real(value: f64) -> Object {
    Object::Real(value as f32)
}

fn fill_color(color: Color) -> Operation {
    let [r, g, b] = color.unit();
    Operation::new("rg", vec![r.into(), g.into(), b.into()])
}

fn operations(scene: &Scene) -> Vec<Operation> {
    // PDF puts the origin bottom-left, the scene top-left
    let flip = |y: f64| scene.height - y;
    let mut ops = Vec::new();

    if let Some(background) = scene.background {
        ops.push(fill_color(background));
        ops.push(Operation::new(
            "re",
            vec![real(0.0), real(0.0), real(scene.width), real(scene.height)],
        ));
        ops.push(Operation::new("f", vec![]));
    }

    for shape in &scene.shapes {
        match shape {
            Shape::Rect { rect, radius, fill } => {
                ops.push(fill_color(*fill));
                if *radius > 0.0 {
                    rounded_rect(&mut ops, *rect, *radius, &flip);
                } else {
                    ops.push(Operation::new(
                        "re",
                        vec![
                            real(rect.x),
                            real(flip(rect.y + rect.height)),
                            real(rect.width),
                            real(rect.height),
                        ],
                    ));
                }
                ops.push(Operation::new("f", vec![]));
            }
            Shape::Polygon { points, fill } => {
                let Some(((x0, y0), rest)) = points.split_first() else {
                    continue;
                };
                ops.push(fill_color(*fill));
                ops.push(Operation::new("m", vec![real(*x0), real(flip(*y0))]));
                for (x, y) in rest {
                    ops.push(Operation::new("l", vec![real(*x), real(flip(*y))]));
                }
                ops.push(Operation::new("h", vec![]));
                ops.push(Operation::new("f", vec![]));
            }
            Shape::Label {
                x,
                y,
                text,
                size,
                color,
            } => {
                let encoded = win_ansi(text);
                let width = estimate_width(&encoded) * HELVETICA_WIDTH * size;
                ops.push(Operation::new("BT", vec![]));
                ops.push(fill_color(*color));
                ops.push(Operation::new("Tf", vec!["F1".into(), real(*size)]));
                ops.push(Operation::new(
                    "Td",
                    vec![real(x - width), real(flip(BASELINE_SHIFT.mul_add(*size, *y)))],
                ));
                ops.push(Operation::new("Tj", vec![Object::string_literal(encoded)]));
                ops.push(Operation::new("ET", vec![]));
            }
        }
    }

    ops
}

fn estimate_width(glyphs: &[u8]) -> f64 {
    f64::from(u32::try_from(glyphs.len()).unwrap_or(u32::MAX))
}

/// Encode `text` for a WinAnsi font, one byte per glyph.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match u32::from(c) {
            code @ (0x20..=0x7E | 0xA0..=0xFF) => u8::try_from(code).unwrap_or(REPLACEMENT),
            _ => WIN_ANSI_EXTRA
                .iter()
                .find(|(extra, _)| *extra == c)
                .map_or(REPLACEMENT, |(_, byte)| *byte),
        })
        .collect()
}

/// Path of a rectangle with circular corners, drawn counter-clockwise in PDF space.
fn rounded_rect(ops: &mut Vec<Operation>, rect: Rect, radius: f64, flip: &impl Fn(f64) -> f64) {
    let radius = radius.min(rect.width / 2.0).min(rect.height / 2.0);
    let left = rect.x;
    let right = rect.x + rect.width;
    let bottom = flip(rect.y + rect.height);
    let top = flip(rect.y);
    let k = radius * KAPPA;

    let line = |x: f64, y: f64| Operation::new("l", vec![real(x), real(y)]);
    let curve = |x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64| {
        Operation::new(
            "c",
            vec![real(x1), real(y1), real(x2), real(y2), real(x3), real(y3)],
        )
    };

    ops.push(Operation::new("m", vec![real(left + radius), real(bottom)]));
    ops.push(line(right - radius, bottom));
    ops.push(curve(
        right - radius + k,
        bottom,
        right,
        bottom + radius - k,
        right,
        bottom + radius,
    ));
    ops.push(line(right, top - radius));
    ops.push(curve(
        right,
        top - radius + k,
        right - radius + k,
        top,
        right - radius,
        top,
    ));
    ops.push(line(left + radius, top));
    ops.push(curve(
        left + radius - k,
        top,
        left,
        top - radius + k,
        left,
        top - radius,
    ));
    ops.push(line(left, bottom + radius));
    ops.push(curve(
        left,
        bottom + radius - k,
        left + radius - k,
        bottom,
        left + radius,
        bottom,
    ));
    ops.push(Operation::new("h", vec![]));
}

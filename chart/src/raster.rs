//! PNG and JPG output by rasterising the SVG document.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, RgbaImage};
use resvg::{tiny_skia, usvg};
use tracing::debug;

use crate::ChartError;

/// Rasterise an SVG document at its natural size.
pub(crate) fn rasterize(svg: &str) -> Result<RgbaImage, ChartError> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();
    let tree = usvg::Tree::from_str(svg, &options)?;

    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| ChartError::Raster(format!("cannot allocate {size:?} canvas")))?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
    debug!(width = size.width(), height = size.height(), "rasterised chart");

    let mut data = Vec::with_capacity(pixmap.data().len());
    for pixel in pixmap.pixels() {
        let color = pixel.demultiply();
        data.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
    }
    RgbaImage::from_raw(size.width(), size.height(), data)
        .ok_or_else(|| ChartError::Raster("pixel buffer does not match canvas size".to_string()))
}

/// Encode a raster image as PNG, keeping transparency.
pub(crate) fn encode_png(image: RgbaImage) -> Result<Vec<u8>, ChartError> {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(image).write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Encode a raster image as JPG. The image must already be opaque.
pub(crate) fn encode_jpg(image: RgbaImage) -> Result<Vec<u8>, ChartError> {
    let opaque = DynamicImage::ImageRgba8(image).to_rgb8();
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(opaque).write_to(&mut Cursor::new(&mut bytes), ImageFormat::Jpeg)?;
    Ok(bytes)
}

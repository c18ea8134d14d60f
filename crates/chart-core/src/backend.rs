// File: crates/chart-core/src/backend.rs
// Summary: Headless CPU raster backend: surface creation, pixel readback, crop and PNG encode.

use skia_safe as skia;

use crate::error::{RenderError, RenderResult};
use crate::geometry::RectI32;

/// An owned CPU raster surface. This is the only backend the renderer uses:
/// it never needs a display, window or GPU context.
pub struct RasterCanvas {
    surface: skia::Surface,
    width: i32,
    height: i32,
}

/// Encoded PNG plus its pixel dimensions.
pub struct EncodedPng {
    pub data: Vec<u8>,
    pub width: i32,
    pub height: i32,
}

impl RasterCanvas {
    /// Create the raster surface. Must happen before any drawing call.
    pub fn select(width: i32, height: i32) -> RenderResult<Self> {
        let surface = skia::surfaces::raster_n32_premul((width, height)).ok_or_else(|| {
            RenderError::BackendUnavailable(format!("failed to create {width}x{height} raster surface"))
        })?;
        Ok(Self { surface, width, height })
    }

    pub fn canvas(&mut self) -> &skia::Canvas {
        self.surface.canvas()
    }

    /// Read the whole surface back as unpremultiplied RGBA8.
    pub fn read_rgba8(&mut self) -> RenderResult<RgbaImage> {
        let info = skia::ImageInfo::new(
            (self.width, self.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let row_bytes = self.width as usize * 4;
        let mut px = vec![0u8; row_bytes * self.height as usize];
        if !self.surface.read_pixels(&info, &mut px, row_bytes, (0, 0)) {
            return Err(RenderError::BackendUnavailable("failed to read back raster pixels".into()));
        }
        Ok(RgbaImage { pixels: px, width: self.width, height: self.height })
    }
}

/// Tightly packed RGBA8 pixels read back from the surface.
pub struct RgbaImage {
    pub pixels: Vec<u8>,
    pub width: i32,
    pub height: i32,
}

impl RgbaImage {
    /// Copy of the `r` region, clipped to the image.
    pub fn crop(&self, r: RectI32) -> RgbaImage {
        let r = r.padded_within(0, self.width, self.height);
        let (w, h) = (r.width().max(0), r.height().max(0));
        let stride = self.width as usize * 4;
        let mut pixels = Vec::with_capacity(w as usize * h as usize * 4);
        for y in r.top..r.bottom {
            let row = y as usize * stride;
            pixels.extend_from_slice(&self.pixels[row + r.left as usize * 4..row + r.right as usize * 4]);
        }
        RgbaImage { pixels, width: w, height: h }
    }

    /// Encode as PNG, recording `dpi` as the physical pixel density (pHYs).
    pub fn encode_png(&self, dpi: u32) -> RenderResult<EncodedPng> {
        let encode_err = |e: png::EncodingError| RenderError::BackendUnavailable(format!("encode PNG failed: {e}"));
        let ppm = (dpi as f64 / 0.0254).round() as u32;

        let mut data = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut data, self.width as u32, self.height as u32);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            encoder.set_pixel_dims(Some(png::PixelDimensions { xppu: ppm, yppu: ppm, unit: png::Unit::Meter }));
            let mut writer = encoder.write_header().map_err(encode_err)?;
            writer.write_image_data(&self.pixels).map_err(encode_err)?;
            writer.finish().map_err(encode_err)?;
        }
        Ok(EncodedPng { data, width: self.width, height: self.height })
    }
}

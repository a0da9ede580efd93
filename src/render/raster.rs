// Copyright (c) 2024, Stack Visualizer Contributors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Software renderer drawing into an RGBA pixel buffer.

use std::path::{Path, PathBuf};

use ab_glyph::{Font, FontArc, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{
    draw_filled_rect_mut, draw_hollow_rect_mut, draw_line_segment_mut, draw_text_mut,
    BresenhamLineIter,
};
use imageproc::rect::Rect as PixelRect;

use super::{CompositeMode, Renderer};
use crate::base::{Error, Result};
use crate::colors::Color;
use crate::events::{Point, Rect, Size};
use crate::settings::Settings;

/// Fonts tried, in order, when no font is configured.
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSerif.ttf",
    "/usr/share/fonts/dejavu/DejaVuSerif.ttf",
    "/usr/share/fonts/TTF/DejaVuSerif.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSerif-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Times New Roman.ttf",
    "/Library/Fonts/Times New Roman.ttf",
    "C:\\Windows\\Fonts\\times.ttf",
];

/// A [`Renderer`] backed by an [`RgbaImage`].
pub struct PixelRenderer {
    image: RgbaImage,
    font: Option<FontArc>,
    scale: PxScale,
    warned_no_font: bool,
}

impl std::fmt::Debug for PixelRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelRenderer")
            .field("size", &self.size())
            .field("has_font", &self.font.is_some())
            .field("scale", &self.scale.y)
            .finish()
    }
}

impl PixelRenderer {
    /// Creates a renderer with a white canvas of the given size.
    pub fn new(size: Size, font: Option<FontArc>, font_size: f32) -> Self {
        Self {
            image: RgbaImage::from_pixel(size.width, size.height, Rgba(Color::WHITE.to_array())),
            font,
            scale: PxScale::from(font_size),
            warned_no_font: false,
        }
    }

    /// Creates a renderer sized and fonted according to `settings`.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let font = load_font(settings.font_path.as_deref())?;
        Ok(Self::new(settings.window, font, settings.font_size))
    }

    /// Reallocates the canvas; the contents are cleared to white.
    pub fn resize(&mut self, size: Size) {
        if size != self.size() {
            self.image =
                RgbaImage::from_pixel(size.width, size.height, Rgba(Color::WHITE.to_array()));
        }
    }

    /// Returns the canvas size.
    pub fn size(&self) -> Size {
        Size::new(self.image.width(), self.image.height())
    }

    /// Returns the rendered pixels.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Copies the canvas into a `0x00RRGGBB` buffer, row by row.
    pub fn copy_to_xrgb(&self, out: &mut [u32]) {
        for (dst, px) in out.iter_mut().zip(self.image.pixels()) {
            *dst = Color::rgba(px[0], px[1], px[2], px[3]).as_xrgb();
        }
    }

    fn pixel_rect(rect: Rect) -> Option<PixelRect> {
        (rect.width > 0 && rect.height > 0)
            .then(|| PixelRect::at(rect.x, rect.y).of_size(rect.width, rect.height))
    }

    fn xor_line(&mut self, from: Point, to: Point, color: Color, alternate: Color) {
        let (width, height) = self.image.dimensions();
        let line = BresenhamLineIter::new(
            (from.x as f32, from.y as f32),
            (to.x as f32, to.y as f32),
        );
        for (x, y) in line {
            if x < 0 || y < 0 || x as u32 >= width || y as u32 >= height {
                continue;
            }
            let px = self.image.get_pixel_mut(x as u32, y as u32);
            let mixed = Color::rgba(px[0], px[1], px[2], px[3])
                .xor(color)
                .xor(alternate);
            *px = Rgba(mixed.to_array());
        }
    }
}

impl Renderer for PixelRenderer {
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<()> {
        if let Some(rect) = Self::pixel_rect(rect) {
            draw_filled_rect_mut(&mut self.image, rect, Rgba(color.to_array()));
        }
        Ok(())
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color) -> Result<()> {
        if let Some(rect) = Self::pixel_rect(rect) {
            draw_hollow_rect_mut(&mut self.image, rect, Rgba(color.to_array()));
        }
        Ok(())
    }

    fn draw_text(&mut self, text: &str, position: Point, color: Color) -> Result<()> {
        let Some(font) = &self.font else {
            if !self.warned_no_font {
                tracing::warn!("no font available, text will not be drawn");
                self.warned_no_font = true;
            }
            return Ok(());
        };
        let ascent = font.as_scaled(self.scale).ascent().round() as i32;
        draw_text_mut(
            &mut self.image,
            Rgba(color.to_array()),
            position.x,
            position.y - ascent,
            self.scale,
            font,
            text,
        );
        Ok(())
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color, mode: CompositeMode) -> Result<()> {
        match mode {
            CompositeMode::Paint => draw_line_segment_mut(
                &mut self.image,
                (from.x as f32, from.y as f32),
                (to.x as f32, to.y as f32),
                Rgba(color.to_array()),
            ),
            CompositeMode::Xor(alternate) => self.xor_line(from, to, color, alternate),
        }
        Ok(())
    }

    fn clear(&mut self, color: Color) -> Result<()> {
        let fill = Rgba(color.to_array());
        self.image.pixels_mut().for_each(|px| *px = fill);
        Ok(())
    }
}

/// Loads the configured font, or the first system serif font found.
///
/// A configured path that cannot be read or parsed is an error; finding no
/// system font is not.
pub fn load_font(path: Option<&Path>) -> Result<Option<FontArc>> {
    if let Some(path) = path {
        return parse_font(path).map(Some);
    }
    let found = FONT_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .filter(|candidate| candidate.is_file())
        .find_map(|candidate| match parse_font(&candidate) {
            Ok(font) => {
                tracing::info!(path = %candidate.display(), "using system font");
                Some(font)
            }
            Err(err) => {
                tracing::debug!(path = %candidate.display(), %err, "skipping font");
                None
            }
        });
    Ok(found)
}

fn parse_font(path: &Path) -> Result<FontArc> {
    let bytes = std::fs::read(path)?;
    FontArc::try_from_vec(bytes)
        .map_err(|err| Error::Rendering(format!("{}: {err}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(renderer: &PixelRenderer, x: u32, y: u32) -> Color {
        let px = renderer.image().get_pixel(x, y);
        Color::rgba(px[0], px[1], px[2], px[3])
    }

    #[test]
    fn stroke_rect_outlines_only() {
        let mut renderer = PixelRenderer::new(Size::new(20, 20), None, 20.0);
        renderer
            .stroke_rect(Rect::new(2, 2, 10, 10), Color::BLACK)
            .unwrap();
        assert_eq!(pixel(&renderer, 2, 2), Color::BLACK);
        assert_eq!(pixel(&renderer, 11, 6), Color::BLACK);
        assert_eq!(pixel(&renderer, 6, 6), Color::WHITE);
    }

    #[test]
    fn zero_sized_rects_are_ignored() {
        let mut renderer = PixelRenderer::new(Size::new(4, 4), None, 20.0);
        renderer.fill_rect(Rect::new(0, 0, 0, 4), Color::BLACK).unwrap();
        renderer.stroke_rect(Rect::new(0, 0, 4, 0), Color::BLACK).unwrap();
        assert!(renderer.image().pixels().all(|px| px.0 == [255, 255, 255, 255]));
    }

    #[test]
    fn xor_lines_invert_and_restore() {
        let mut renderer = PixelRenderer::new(Size::new(10, 10), None, 20.0);
        let mode = CompositeMode::Xor(Color::ORANGE);
        renderer
            .draw_line(Point::new(5, 0), Point::new(5, 9), Color::BLACK, mode)
            .unwrap();
        assert_eq!(pixel(&renderer, 5, 4), Color::rgb(0, 55, 255));
        assert_eq!(pixel(&renderer, 4, 4), Color::WHITE);

        renderer
            .draw_line(Point::new(5, 0), Point::new(5, 9), Color::BLACK, mode)
            .unwrap();
        assert_eq!(pixel(&renderer, 5, 4), Color::WHITE);
    }

    #[test]
    fn off_canvas_lines_are_clipped() {
        let mut renderer = PixelRenderer::new(Size::new(10, 10), None, 20.0);
        renderer
            .draw_line(
                Point::new(700, 700),
                Point::new(700, 230),
                Color::BLACK,
                CompositeMode::Xor(Color::ORANGE),
            )
            .unwrap();
        assert!(renderer.image().pixels().all(|px| px.0 == [255, 255, 255, 255]));
    }

    #[test]
    fn text_without_font_is_a_no_op() {
        let mut renderer = PixelRenderer::new(Size::new(10, 10), None, 20.0);
        renderer
            .draw_text("Index 0", Point::new(1, 8), Color::BLACK)
            .unwrap();
        renderer
            .draw_text("Index 1", Point::new(1, 8), Color::BLACK)
            .unwrap();
        assert!(renderer.warned_no_font);
    }

    #[test]
    fn clear_resize_and_copy_out() {
        let mut renderer = PixelRenderer::new(Size::new(2, 2), None, 20.0);
        renderer.clear(Color::ORANGE).unwrap();
        let mut out = vec![0u32; 4];
        renderer.copy_to_xrgb(&mut out);
        assert_eq!(out, vec![0x00FF_C800; 4]);

        renderer.resize(Size::new(3, 1));
        assert_eq!(renderer.size(), Size::new(3, 1));
        assert_eq!(pixel(&renderer, 2, 0), Color::WHITE);
    }

    #[test]
    fn configured_font_must_exist() {
        let err = load_font(Some(Path::new("/definitely/not/a/font.ttf"))).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}

//! embedded-graphics adapter
//!
//! Implements [`PixelSurface`] for any `DrawTarget<Color = Rgb565>`, which
//! covers the ST7789 driver on the device and the in-memory canvases used in
//! tests.

use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_8X13};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyleBuilder, Rectangle, StrokeAlignment};
use embedded_graphics::text::{Baseline, Text};

use crate::backend::{Color, DisplayError, Font, PixelSurface};

/// Map a palette entry to an RGB565 pixel
pub fn to_rgb565(color: Color) -> Rgb565 {
    match color {
        Color::Black => Rgb565::BLACK,
        Color::White => Rgb565::WHITE,
        Color::Red => Rgb565::RED,
        Color::Yellow => Rgb565::YELLOW,
        Color::Green => Rgb565::GREEN,
        Color::Blue => Rgb565::BLUE,
    }
}

/// Resolve a font role to a concrete mono font
pub fn mono_font(font: Font) -> &'static MonoFont<'static> {
    match font {
        Font::Message => &FONT_6X10,
        Font::Power | Font::Error => &FONT_8X13,
        Font::Prime => &profont::PROFONT_24_POINT,
    }
}

/// `PixelSurface` on top of an embedded-graphics draw target
pub struct GraphicsSurface<D> {
    target: D,
}

impl<D> GraphicsSurface<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    /// Wrap a draw target
    pub fn new(target: D) -> Self {
        Self { target }
    }

    /// Access the wrapped target
    pub fn target(&self) -> &D {
        &self.target
    }
}

impl<D> PixelSurface for GraphicsSurface<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn size(&self) -> (u32, u32) {
        let size = self.target.bounding_box().size;
        (size.width, size.height)
    }

    fn font_height(&self, font: Font) -> u32 {
        mono_font(font).character_size.height
    }

    fn fill_rect(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        color: Color,
    ) -> Result<(), DisplayError> {
        let area = Rectangle::new(Point::new(x, y), Size::new(width, height));
        self.target
            .fill_solid(&area, to_rgb565(color))
            .map_err(|_| DisplayError::Communication)
    }

    fn draw_rect(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        color: Color,
    ) -> Result<(), DisplayError> {
        let style = PrimitiveStyleBuilder::new()
            .stroke_color(to_rgb565(color))
            .stroke_width(1)
            .stroke_alignment(StrokeAlignment::Inside)
            .build();

        Rectangle::new(Point::new(x, y), Size::new(width, height))
            .into_styled(style)
            .draw(&mut self.target)
            .map_err(|_| DisplayError::Communication)
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        font: Font,
        foreground: Color,
        background: Color,
    ) -> Result<(), DisplayError> {
        let style = MonoTextStyleBuilder::new()
            .font(mono_font(font))
            .text_color(to_rgb565(foreground))
            .background_color(to_rgb565(background))
            .build();

        Text::with_baseline(text, Point::new(x, y), style, Baseline::Top)
            .draw(&mut self.target)
            .map(|_| ())
            .map_err(|_| DisplayError::Communication)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_graphics::Pixel;

    /// In-memory RGB565 canvas
    struct Canvas {
        width: u32,
        height: u32,
        pixels: Vec<Rgb565>,
    }

    impl Canvas {
        fn new(width: u32, height: u32) -> Self {
            Self {
                width,
                height,
                pixels: vec![Rgb565::BLACK; (width * height) as usize],
            }
        }

        fn at(&self, x: u32, y: u32) -> Rgb565 {
            self.pixels[(y * self.width + x) as usize]
        }

        fn count(&self, color: Rgb565) -> usize {
            self.pixels.iter().filter(|&&p| p == color).count()
        }
    }

    impl OriginDimensions for Canvas {
        fn size(&self) -> Size {
            Size::new(self.width, self.height)
        }
    }

    impl DrawTarget for Canvas {
        type Color = Rgb565;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(point, color) in pixels {
                if point.x >= 0
                    && point.y >= 0
                    && (point.x as u32) < self.width
                    && (point.y as u32) < self.height
                {
                    let idx = (point.y as u32 * self.width + point.x as u32) as usize;
                    self.pixels[idx] = color;
                }
            }
            Ok(())
        }
    }

    /// Target whose bus always fails
    struct BrokenBus;

    impl OriginDimensions for BrokenBus {
        fn size(&self) -> Size {
            Size::new(10, 10)
        }
    }

    impl DrawTarget for BrokenBus {
        type Color = Rgb565;
        type Error = ();

        fn draw_iter<I>(&mut self, _pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            Err(())
        }
    }

    #[test]
    fn test_size_matches_target() {
        let surface = GraphicsSurface::new(Canvas::new(240, 135));
        assert_eq!(surface.size(), (240, 135));
    }

    #[test]
    fn test_font_heights_ordered() {
        let surface = GraphicsSurface::new(Canvas::new(240, 135));
        let message = surface.font_height(Font::Message);
        let power = surface.font_height(Font::Power);
        let prime = surface.font_height(Font::Prime);

        assert_eq!(message, 10);
        assert_eq!(power, 13);
        assert!(prime > power);
    }

    #[test]
    fn test_fill_rect() {
        let mut surface = GraphicsSurface::new(Canvas::new(20, 10));
        surface.fill_rect(2, 3, 4, 5, Color::Red).unwrap();

        let canvas = surface.target();
        assert_eq!(canvas.count(Rgb565::RED), 20);
        assert_eq!(canvas.at(2, 3), Rgb565::RED);
        assert_eq!(canvas.at(5, 7), Rgb565::RED);
        assert_eq!(canvas.at(6, 7), Rgb565::BLACK);
    }

    #[test]
    fn test_zero_width_fill_is_noop() {
        let mut surface = GraphicsSurface::new(Canvas::new(20, 10));
        surface.fill_rect(0, 0, 0, 10, Color::Green).unwrap();
        assert_eq!(surface.target().count(Rgb565::GREEN), 0);
    }

    #[test]
    fn test_draw_rect_outline_only() {
        let mut surface = GraphicsSurface::new(Canvas::new(20, 10));
        surface.draw_rect(0, 0, 10, 6, Color::Blue).unwrap();

        let canvas = surface.target();
        // Perimeter of a 10x6 box
        assert_eq!(canvas.count(Rgb565::BLUE), 2 * 10 + 2 * 4);
        assert_eq!(canvas.at(0, 0), Rgb565::BLUE);
        assert_eq!(canvas.at(9, 5), Rgb565::BLUE);
        assert_eq!(canvas.at(4, 3), Rgb565::BLACK);
    }

    #[test]
    fn test_clear_fills_everything() {
        let mut surface = GraphicsSurface::new(Canvas::new(8, 4));
        surface.clear(Color::White).unwrap();
        assert_eq!(surface.target().count(Rgb565::WHITE), 32);
    }

    #[test]
    fn test_draw_text_paints_background_and_glyphs() {
        let mut surface = GraphicsSurface::new(Canvas::new(60, 20));
        surface
            .draw_text("17", 0, 0, Font::Message, Color::Green, Color::Blue)
            .unwrap();

        let canvas = surface.target();
        let glyph = canvas.count(Rgb565::GREEN);
        let background = canvas.count(Rgb565::BLUE);

        assert!(glyph > 0);
        // Two 6x10 cells, every pixel either glyph or background
        assert_eq!(glyph + background, 2 * 6 * 10);
    }

    #[test]
    fn test_bus_error_maps_to_communication() {
        let mut surface = GraphicsSurface::new(BrokenBus);
        assert_eq!(
            surface.fill_rect(0, 0, 2, 2, Color::Red),
            Err(DisplayError::Communication)
        );
        assert_eq!(
            surface.draw_text("x", 0, 0, Font::Power, Color::White, Color::Black),
            Err(DisplayError::Communication)
        );
    }
}

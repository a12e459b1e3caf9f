//! Pixel surface trait
//!
//! Defines the drawing interface for the handheld's rectangular screen.

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
}

/// Palette used by the firmware screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    Black,
    White,
    Red,
    Yellow,
    Green,
    Blue,
}

/// Typefaces used by the firmware screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Font {
    /// Small font for the banner line
    Message,
    /// Medium font for battery status lines
    Power,
    /// Large font for the prime itself
    Prime,
    /// Medium font for fatal messages
    Error,
}

/// Pixel surface trait
///
/// All coordinates are in pixels with the origin at the top-left corner.
/// Text is positioned by its top-left corner and drawn over an opaque
/// background so it overwrites whatever was there.
pub trait PixelSurface {
    /// Surface size in pixels as (width, height)
    fn size(&self) -> (u32, u32);

    /// Height of one text line in the given font
    fn font_height(&self, font: Font) -> u32;

    /// Fill a rectangle
    fn fill_rect(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        color: Color,
    ) -> Result<(), DisplayError>;

    /// Draw a one pixel rectangle outline
    fn draw_rect(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        color: Color,
    ) -> Result<(), DisplayError>;

    /// Draw text with its top-left corner at (x, y)
    #[allow(clippy::too_many_arguments)]
    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        font: Font,
        foreground: Color,
        background: Color,
    ) -> Result<(), DisplayError>;

    /// Fill the whole surface with one colour
    fn clear(&mut self, color: Color) -> Result<(), DisplayError> {
        let (width, height) = self.size();
        self.fill_rect(0, 0, width, height, color)
    }
}

//! Normal screen: banner line and the current prime

use core::fmt::Write;

use heapless::String;
use prime_pocket_display::{Color, DisplayError, Font, PixelSurface};

/// Title shown on the top line
pub const BANNER: &str = "Prime pocket calculator";

/// Draw the banner at the top-left corner
pub fn render_banner(surface: &mut impl PixelSurface) -> Result<(), DisplayError> {
    surface.draw_text(BANNER, 0, 0, Font::Message, Color::Yellow, Color::Black)
}

/// Blank the prime row and draw `prime` on it
pub fn render_prime(surface: &mut impl PixelSurface, prime: usize) -> Result<(), DisplayError> {
    let (width, _) = surface.size();
    let y = 2 * surface.font_height(Font::Message) as i32;
    let row_height = surface.font_height(Font::Prime);

    // Shorter numbers must not leave digits behind
    surface.fill_rect(0, y, width, row_height, Color::Black)?;

    let mut digits: String<20> = String::new();
    let _ = write!(digits, "{}", prime);
    surface.draw_text(&digits, 0, y, Font::Prime, Color::Green, Color::Black)
}

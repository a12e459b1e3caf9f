//! Fatal halt screen

use prime_pocket_display::{Color, DisplayError, Font, PixelSurface};

use crate::state::{FaultKind, Mode};

/// Message shown for each fatal condition
pub fn fatal_message(kind: FaultKind) -> &'static str {
    match kind {
        FaultKind::OutOfMemory => "Not enough memory!",
        FaultKind::NoPrimes => "No primes to show!",
        FaultKind::InvalidConfig => "Bad configuration!",
    }
}

/// Draw the fatal message below the banner
///
/// Only a halted mode has a message; any other mode draws nothing.
pub fn render_fatal(surface: &mut impl PixelSurface, mode: Mode) -> Result<(), DisplayError> {
    let Mode::Halted(kind) = mode else {
        return Ok(());
    };

    let y = 3 * surface.font_height(Font::Message) as i32;
    surface.draw_text(
        fatal_message(kind),
        0,
        y,
        Font::Error,
        Color::Red,
        Color::Black,
    )
}

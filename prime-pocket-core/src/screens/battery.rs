//! Battery screen
//!
//! A charge bar across the top half, then the voltage line and the status
//! line below it.

use prime_pocket_display::{Color, DisplayError, Font, PixelSurface};

use super::normal::render_banner;
use crate::power::BatteryReport;

/// Clear the screen before the first battery refresh
pub fn enter_battery_screen(surface: &mut impl PixelSurface) -> Result<(), DisplayError> {
    surface.clear(Color::Black)
}

/// Draw one battery screen refresh
pub fn render_battery(
    surface: &mut impl PixelSurface,
    report: &BatteryReport,
) -> Result<(), DisplayError> {
    let (width, height) = surface.size();
    let bar_height = height / 2;
    let filled = ((width as f32 * report.percentage) as u32).min(width);

    surface.fill_rect(0, 0, filled, bar_height, report.band.color())?;
    surface.fill_rect(
        filled as i32,
        0,
        width - filled,
        bar_height,
        Color::Black,
    )?;
    surface.draw_rect(0, 0, width, bar_height, Color::Blue)?;

    let line_height = surface.font_height(Font::Power) as i32;
    surface.draw_text(
        &report.voltage_line(),
        0,
        3 * line_height,
        Font::Power,
        Color::White,
        Color::Black,
    )?;
    surface.draw_text(
        &report.status_line(),
        0,
        4 * line_height,
        Font::Power,
        Color::White,
        Color::Black,
    )
}

/// Clear the battery screen and put the banner back
pub fn leave_battery_screen(surface: &mut impl PixelSurface) -> Result<(), DisplayError> {
    surface.clear(Color::Black)?;
    render_banner(surface)
}

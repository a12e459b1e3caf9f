//! Display bring-up for the Pimoroni Pico Display Pack (240x135 ST7789)
//!
//! Pin mapping:
//! - CS: GPIO17
//! - DC: GPIO16
//! - CLK: GPIO18 (SPI0 CLK)
//! - MOSI: GPIO19 (SPI0 TX)
//! - Backlight: GPIO20
//! - Reset: tied to RUN

use display_interface_spi::SPIInterface;
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Blocking, Config as SpiConfig, Spi};
use embassy_time::Delay;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::DrawTarget;
use embedded_hal_bus::spi::ExclusiveDevice;
use mipidsi::models::ST7789;
use mipidsi::options::{ColorInversion, Orientation, Rotation};
use mipidsi::Builder;
use prime_pocket_display::{DisplayError, GraphicsSurface};

/// Initialize the panel in landscape and wrap it as a pixel surface
pub fn init_display<'d>(
    spi: Spi<'d, SPI0, Blocking>,
    cs: Output<'d>,
    dc: Output<'d>,
) -> Result<GraphicsSurface<impl DrawTarget<Color = Rgb565> + 'd>, DisplayError> {
    let spi_device =
        ExclusiveDevice::new_no_delay(spi, cs).map_err(|_| DisplayError::Communication)?;
    let di = SPIInterface::new(spi_device, dc);

    // The 135x240 panel sits inside the controller's 240x320 frame
    let display = Builder::new(ST7789, di)
        .display_size(135, 240)
        .display_offset(52, 40)
        .orientation(Orientation::new().rotate(Rotation::Deg90))
        .invert_colors(ColorInversion::Inverted)
        .init(&mut Delay)
        .map_err(|_| DisplayError::Communication)?;

    Ok(GraphicsSurface::new(display))
}

/// SPI configuration for the ST7789
pub fn display_spi_config() -> SpiConfig {
    let mut config = SpiConfig::default();
    config.frequency = 40_000_000;
    config
}

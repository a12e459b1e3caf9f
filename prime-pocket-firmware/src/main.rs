//! Prime Pocket - handheld prime number display
//!
//! Sieves a table of primes once at boot, then wakes every second to show
//! the next one. Holding button A shows the battery screen instead.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::spi::Spi;
use embassy_time::Timer;
use embedded_alloc::LlffHeap as Heap;
use {defmt_rtt as _, panic_probe as _};

use prime_pocket_core::config::{DeviceConfig, MAX_PRIME, SLEEP_INTERVAL_MS};
use prime_pocket_core::screens;
use prime_pocket_core::Device;
use prime_pocket_display::{Color, PixelSurface};

use crate::display::{display_spi_config, init_display};

mod board;
mod display;

// Heap allocator for the primality table
#[global_allocator]
static HEAP: Heap = Heap::empty();

// Heap size: 128KB, one byte per table entry plus headroom
const HEAP_SIZE: usize = 128 * 1024;

const _: () = assert!(HEAP_SIZE > MAX_PRIME);

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Prime Pocket firmware starting...");

    // Initialize heap allocator
    init_heap();

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, display_spi_config());
    let cs = Output::new(p.PIN_17, Level::High);
    let dc = Output::new(p.PIN_16, Level::Low);
    let _backlight = Output::new(p.PIN_20, Level::High);

    let mut surface = match init_display(spi, cs, dc) {
        Ok(surface) => surface,
        Err(e) => {
            error!("Display init failed: {}", e);
            halt();
        }
    };

    let mut io = board::build(
        Input::new(p.PIN_24, Pull::None),
        Input::new(p.PIN_12, Pull::Up),
        Output::new(p.PIN_25, Level::Low),
        Adc::new_blocking(p.ADC, AdcConfig::default()),
        Channel::new_pin(p.PIN_29, Pull::None),
    );
    info!("Board initialized");

    // Startup banner on both the log and the screen
    info!("{}", screens::BANNER);
    if let Err(e) = surface
        .clear(Color::Black)
        .and_then(|()| screens::render_banner(&mut surface))
    {
        warn!("Banner draw failed: {}", e);
    }

    let config = DeviceConfig::default();
    let mut device = match Device::boot(&config) {
        Ok(device) => device,
        Err(e) => {
            let mode = e.halted_mode();
            error!("Boot failed: {} ({})", e, mode);
            if let Err(e) = screens::render_fatal(&mut surface, mode) {
                warn!("Fatal screen draw failed: {}", e);
            }
            halt();
        }
    };
    info!(
        "Sieve complete: {} primes below {}",
        device.table().count(),
        config.table_size
    );

    loop {
        match device.wake_cycle(&mut io, &mut surface) {
            Ok(report) => {
                debug!(
                    "Showing {} (refreshes={}, charging={})",
                    report.prime, report.power_refreshes, report.charging
                );
                match report.voltage {
                    Some(volts) => trace!("Battery {} V", volts),
                    None => warn!("Battery read failed"),
                }
            }
            Err(e) => warn!("Display error: {}", e),
        }

        Timer::after_millis(SLEEP_INTERVAL_MS).await;
    }
}

/// Stop for good; nothing is configured to wake the core
fn halt() -> ! {
    loop {
        cortex_m::asm::wfi();
    }
}

fn init_heap() {
    use core::mem::MaybeUninit;
    static mut HEAP_MEM: [MaybeUninit<u8>; HEAP_SIZE] = [MaybeUninit::uninit(); HEAP_SIZE];
    #[allow(static_mut_refs)]
    unsafe {
        HEAP.init(HEAP_MEM.as_ptr() as usize, HEAP_SIZE)
    }
}

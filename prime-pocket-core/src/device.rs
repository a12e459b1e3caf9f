//! Device state and the wake cycle
//!
//! `Device` owns everything that survives between wake-ups: the primality
//! table, the cursor into it, the battery monitor and the current mode.
//! The firmware calls [`Device::wake_cycle`] once per timer expiry.

use prime_pocket_display::{DisplayError, PixelSurface};

use crate::config::{ConfigError, DeviceConfig};
use crate::power::{BatteryReport, PowerMonitor};
use crate::primes::{CursorError, PrimeCursor, PrimeTable, SieveError};
use crate::screens;
use crate::state::{Event, FaultKind, Mode};
use crate::traits::BoardIo;

/// Startup failures; all of them halt the device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BootError {
    Config(ConfigError),
    Sieve(SieveError),
    Cursor(CursorError),
}

impl BootError {
    /// Fault to halt with
    pub fn fault_kind(&self) -> FaultKind {
        match self {
            BootError::Config(_) => FaultKind::InvalidConfig,
            BootError::Sieve(SieveError::OutOfMemory { .. }) => FaultKind::OutOfMemory,
            BootError::Sieve(SieveError::TooSmall { .. }) => FaultKind::InvalidConfig,
            BootError::Cursor(CursorError::NoPrimes) => FaultKind::NoPrimes,
        }
    }

    /// Mode the device holds after this failure
    pub fn halted_mode(&self) -> Mode {
        Mode::Asleep.transition(Event::Fault(self.fault_kind()))
    }
}

impl From<ConfigError> for BootError {
    fn from(e: ConfigError) -> Self {
        BootError::Config(e)
    }
}

impl From<SieveError> for BootError {
    fn from(e: SieveError) -> Self {
        BootError::Sieve(e)
    }
}

impl From<CursorError> for BootError {
    fn from(e: CursorError) -> Self {
        BootError::Cursor(e)
    }
}

/// Outcome of one awake burst
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleReport {
    /// Prime shown at the end of the burst
    pub prime: usize,
    /// Battery screen redraws while the button was held
    pub power_refreshes: u32,
    /// Charge signal at wake
    pub charging: bool,
    /// Last battery voltage sampled, `None` if every read failed
    pub voltage: Option<f32>,
}

/// Everything that persists across sleep
pub struct Device {
    config: DeviceConfig,
    table: PrimeTable,
    cursor: PrimeCursor,
    monitor: PowerMonitor,
    mode: Mode,
}

impl Device {
    /// Validate the configuration, build the table and place the cursor
    pub fn boot(config: &DeviceConfig) -> Result<Self, BootError> {
        config.validate()?;
        let table = PrimeTable::sieve(config.table_size)?;
        let cursor = PrimeCursor::new(&table)?;

        Ok(Self {
            config: *config,
            table,
            cursor,
            monitor: PowerMonitor::new(config),
            mode: Mode::Asleep,
        })
    }

    /// Run one awake burst and return to sleep
    ///
    /// Samples the battery, mirrors the charge signal on the indicator,
    /// shows the battery screen for as long as the button is held and
    /// finally advances to the next prime.
    pub fn wake_cycle(
        &mut self,
        io: &mut impl BoardIo,
        surface: &mut impl PixelSurface,
    ) -> Result<CycleReport, DisplayError> {
        self.mode = self.mode.transition(Event::Wake);

        let result = self.run_awake(io, surface);
        if result.is_err() {
            // A failed redraw still ends the burst
            self.mode = Mode::Asleep;
        }
        result
    }

    fn run_awake(
        &mut self,
        io: &mut impl BoardIo,
        surface: &mut impl PixelSurface,
    ) -> Result<CycleReport, DisplayError> {
        let mut voltage = self.sample_battery(io);
        let charging = io.is_charging();
        io.set_indicator(charging);

        let mut power_refreshes = 0;
        if io.is_button_active() {
            self.mode = self.mode.transition(Event::ButtonActive);
            screens::enter_battery_screen(surface)?;

            loop {
                if let Some(sample) = self.sample_battery(io) {
                    voltage = Some(sample);
                }
                let live = voltage.unwrap_or(self.monitor.last_voltage());
                let report = BatteryReport::new(&self.monitor, live, io.is_charging());
                screens::render_battery(surface, &report)?;
                power_refreshes += 1;

                io.pause_ms(self.config.power_refresh_ms);
                if !io.is_button_active() {
                    break;
                }
            }

            self.mode = self.mode.transition(Event::ButtonCleared);
            screens::leave_battery_screen(surface)?;
        } else {
            self.mode = self.mode.transition(Event::ButtonCleared);
        }

        debug_assert_eq!(self.mode, Mode::NormalDisplay);
        let prime = self.cursor.next_prime(&self.table);
        screens::render_prime(surface, prime)?;
        self.mode = self.mode.transition(Event::PrimeShown);

        Ok(CycleReport {
            prime,
            power_refreshes,
            charging,
            voltage,
        })
    }

    /// Read the battery and offer the sample to the monitor
    fn sample_battery(&mut self, io: &mut impl BoardIo) -> Option<f32> {
        let level = io.read_battery_level()?;
        let volts = self.config.scale.to_volts(level);
        self.monitor.update(volts, io.now_ms());
        Some(volts)
    }

    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    pub fn table(&self) -> &PrimeTable {
        &self.table
    }

    pub fn cursor(&self) -> &PrimeCursor {
        &self.cursor
    }

    pub fn monitor(&self) -> &PowerMonitor {
        &self.monitor
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }
}

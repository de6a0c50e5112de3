// Copyright 2021 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use core::fmt::Debug;

use embedded_hal::delay::DelayNs;
use log::{debug, error, warn};

use crate::config::Timing;
use crate::config_table::BRING_UP_SEQUENCE;
use crate::error::Error;
use crate::hal::{DriveMode, Level, OutputLines, WriteU8, WriteU8s};
use crate::instruction::Instruction;

/// The two control lines of the panel besides the SPI bus.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pins<L> {
    /// Data/command select. LOW means command.
    pub dc: L,
    /// Active-low reset.
    pub rst: L,
}

/// Driver of one ST7735S panel.
///
/// Owns the bus `B`, the line controller `G` and the delay provider `D`. Pass
/// `&mut` references instead to keep ownership on the caller's side.
///
/// Bus failures after [init()](Self::init) are treated as unrecoverable:
/// the driver logs them and panics. Nothing is ever retried.
pub struct St7735s<B, G: OutputLines, D> {
    bus: B,
    gpio: G,
    delay: D,
    pins: Pins<G::Line>,
    timing: Timing,
}

impl<B, G, D> St7735s<B, G, D>
where B: WriteU8 + WriteU8s,
      G: OutputLines,
      D: DelayNs {
    /// Acquires the DC (initially LOW) and RST (initially HIGH) lines as
    /// strong outputs, with [Timing::MINIMUM] delays.
    ///
    /// Does **not** talk to the controller; call
    /// [configure_controller()](Self::configure_controller) next.
    pub fn init(bus: B, gpio: G, delay: D, pins: Pins<G::Line>)
            -> Result<Self, Error<G::Error>> {
        Self::init_with_timing(bus, gpio, delay, pins, Timing::default())
    }

    /// Same as [init()](Self::init) with custom delays.
    pub fn init_with_timing(bus: B, mut gpio: G, delay: D,
                            pins: Pins<G::Line>, timing: Timing)
            -> Result<Self, Error<G::Error>> {
        gpio.configure_output(pins.dc, DriveMode::Strong, Level::Low)
            .map_err(Error::DcConfig)?;
        if let Err(e) = gpio.configure_output(
                pins.rst, DriveMode::Strong, Level::High) {
            warn!("st7735s: RST line {:?} failed ({:?}), releasing DC {:?}",
                  pins.rst, e, pins.dc);
            gpio.release(pins.dc);
            return Err(Error::RstConfig(e));
        }
        debug!("st7735s: lines acquired, dc={:?} rst={:?}", pins.dc, pins.rst);
        Ok(Self{bus, gpio, delay, pins, timing})
    }

    /// Resets the controller and replays the bring-up sequence, leaving the
    /// display on and a memory write started.
    pub fn configure_controller(&mut self) {
        debug!("st7735s: hardware reset");
        self.gpio.set_level(self.pins.rst, Level::High);
        self.delay.delay_ms(self.timing.reset_high_ms());
        self.gpio.set_level(self.pins.rst, Level::Low);
        self.delay.delay_ms(self.timing.reset_low_ms());
        self.gpio.set_level(self.pins.rst, Level::High);
        self.delay.delay_ms(self.timing.reset_recovery_ms());

        self.write_command(Instruction::SLPOUT.into());
        self.delay.delay_ms(self.timing.sleep_out_ms());

        for entry in BRING_UP_SEQUENCE.iter() {
            self.write_command(entry.command());
            for &data in entry.payload() {
                self.write_data(data);
            }
        }

        self.write_command(Instruction::DISPON.into());
        self.write_command(Instruction::RAMWR.into());
        self.delay.delay_ms(self.timing.display_on_ms());
        debug!("st7735s: {} registers configured, display on",
               BRING_UP_SEQUENCE.len());
    }

    /// Sends one command byte (DC LOW).
    #[inline]
    pub fn write_command(&mut self, command: u8) {
        self.select(Level::Low);
        if let Err(e) = self.bus.write_u8(command) {
            bus_fault("command", e);
        }
    }

    /// Sends one parameter or pixel byte (DC HIGH).
    #[inline]
    pub fn write_data(&mut self, data: u8) {
        self.select(Level::High);
        if let Err(e) = self.bus.write_u8(data) {
            bus_fault("data", e);
        }
    }

    /// Sends `data` with DC HIGH as a single bus transfer. This is the path
    /// for pixel payloads.
    #[inline]
    pub fn write_data_stream(&mut self, data: &[u8]) {
        self.select(Level::High);
        if let Err(e) = self.bus.write_u8s(data) {
            bus_fault("data stream", e);
        }
    }

    /// Releases DC and RST and hands the collaborators back.
    pub fn free(mut self) -> (B, G, D) {
        self.gpio.release(self.pins.dc);
        self.gpio.release(self.pins.rst);
        debug!("st7735s: lines released");
        (self.bus, self.gpio, self.delay)
    }

    pub fn pins(&self) -> Pins<G::Line> { self.pins }

    pub fn timing(&self) -> Timing { self.timing }

    // DC must be stable before the first clock edge.
    #[inline(always)]
    fn select(&mut self, dc: Level) {
        self.gpio.set_level(self.pins.dc, dc);
        self.delay.delay_us(self.timing.dc_settle_us());
    }
}

#[cold]
#[inline(never)]
fn bus_fault<E: Debug>(what: &str, e: E) -> ! {
    error!("st7735s: {} transfer failed: {:?}", what, e);
    panic!("st7735s: {} transfer failed: {:?}", what, e);
}

// mod tests

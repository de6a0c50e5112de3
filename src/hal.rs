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

//! Traits the board support code implements, in order to use
//! [`St7735s`].
//!
//! The driver needs three collaborators:
//! * an [OutputLines] implementation that owns the `DC` and `RST` lines,
//! * a bus that implements both [WriteU8] and [WriteU8s],
//! * a delay provider implementing [DelayNs](embedded_hal::delay::DelayNs).
//!
//! The minimum for the bus would be to implement one of [WriteU8] and
//! [WriteU8s], then use an [`adapter`] to complete the missing one.
//!
//! The SPI protocol of ST7735S's write commands is compatible with the common
//! SPI peripherals of microcontrollers, eg., `CPOL=1` (clock idles at high) and
//! `CPHA=1` (data sampled at the second edge), MSB first.
//!
//! # Performance Consideration
//!
//! [WriteU8s] is the path used for pixel payloads. While it is natural to
//! think of it as a looped [WriteU8], a native implementation can keep the TX
//! FIFO full or hand the whole buffer to DMA, which a loop of single-byte
//! sends cannot. Only use [`AdapterU8`] if that difference doesn't matter.
//!
//! [`St7735s`]: ../struct.St7735s.html
//! [`adapter`]: ../adapters/index.html
//! [`AdapterU8`]: ../adapters/struct.AdapterU8.html

use core::fmt::Debug;

/// Logic level of an output line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high { Level::High } else { Level::Low }
    }
}

/// How an output line is driven once configured.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriveMode {
    /// Push-pull, both levels actively driven.
    Strong,
    /// Only the low level is driven.
    OpenDrainDriveLow,
    /// Only the high level is driven.
    OpenDrainDriveHigh,
}

/// Defines how the `DC` and `RST` lines are acquired, driven and released.
///
/// `Line` names one physical line, eg., a port/pin number. The driver never
/// inspects it; it only hands it back to the implementation.
pub trait OutputLines {
    type Line: Copy + Debug;
    type Error: Debug;

    /// Acquires `line` as an output with the given drive mode, driving
    /// `initial` right away.
    fn configure_output(&mut self, line: Self::Line, drive: DriveMode,
                        initial: Level) -> Result<(), Self::Error>;

    /// Drives a configured line to `level`.
    fn set_level(&mut self, line: Self::Line, level: Level);

    /// Gives a configured line back to the HAL.
    fn release(&mut self, line: Self::Line);
}

/// Error type shared by [WriteU8] and [WriteU8s].
pub trait ErrorType {
    type Error: Debug;
}

/// Defines how a single [u8] is sent with the `SCK` and `SDA` pins.
///
/// Notice the timing requirement from ST7735S's datasheet. Most important
/// ones:
/// * `SCK` low duration and high durations are at least 15ns long.
/// * `SCK` period is at least 66ns long.
///
/// Must block until the byte has left the bus.
pub trait WriteU8: ErrorType {
    fn write_u8(&mut self, data: u8) -> Result<(), Self::Error>;
}

/// Defines how a sequence of `u8` is sent as a single bus transfer.
///
/// Must block until every byte has left the bus.
pub trait WriteU8s: ErrorType {
    fn write_u8s(&mut self, data: &[u8]) -> Result<(), Self::Error>;
}

impl<T: ErrorType + ?Sized> ErrorType for &mut T {
    type Error = T::Error;
}

impl<T: WriteU8 + ?Sized> WriteU8 for &mut T {
    #[inline(always)]
    fn write_u8(&mut self, data: u8) -> Result<(), Self::Error> {
        T::write_u8(self, data)
    }
}

impl<T: WriteU8s + ?Sized> WriteU8s for &mut T {
    #[inline(always)]
    fn write_u8s(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        T::write_u8s(self, data)
    }
}

impl<T: OutputLines + ?Sized> OutputLines for &mut T {
    type Line = T::Line;
    type Error = T::Error;

    fn configure_output(&mut self, line: Self::Line, drive: DriveMode,
                        initial: Level) -> Result<(), Self::Error> {
        T::configure_output(self, line, drive, initial)
    }

    fn set_level(&mut self, line: Self::Line, level: Level) {
        T::set_level(self, line, level)
    }

    fn release(&mut self, line: Self::Line) { T::release(self, line) }
}

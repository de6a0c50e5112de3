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

//! Glue between [hal](crate::hal) and other bus/pin implementations.

use core::convert::Infallible;

use embedded_hal::digital::{OutputPin, PinState};
use embedded_hal::spi::SpiDevice;
use log::debug;

use crate::hal::{DriveMode, ErrorType, Level, OutputLines, WriteU8, WriteU8s};

/// A helper to add [WriteU8s] support when [WriteU8] is implemented.
///
/// Supposedly **not** very efficient. See the Performance Consideration section
/// of the module [hal](crate::hal).
pub struct AdapterU8<W> { w: W }

impl<W> AdapterU8<W> {
    pub fn new(w: W) -> Self { Self{w} }

    pub fn into_inner(self) -> W { self.w }
}

impl<W: ErrorType> ErrorType for AdapterU8<W> {
    type Error = W::Error;
}

impl<W: WriteU8> WriteU8 for AdapterU8<W> {
    fn write_u8(&mut self, data: u8) -> Result<(), Self::Error> {
        self.w.write_u8(data)
    }
}

impl<W: WriteU8> WriteU8s for AdapterU8<W> {
    fn write_u8s(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        data.iter().try_for_each(|&one| self.w.write_u8(one))
    }
}

/// A helper to add [WriteU8] support when [WriteU8s] is implemented.
///
/// There is a slight overhead on using a slice to represent a single byte,
/// especially when the compiler fails to inline the functions.
pub struct AdapterU8s<W> { w: W }

impl<W> AdapterU8s<W> {
    pub fn new(w: W) -> Self { Self{w} }

    pub fn into_inner(self) -> W { self.w }
}

impl<W: ErrorType> ErrorType for AdapterU8s<W> {
    type Error = W::Error;
}

impl<W: WriteU8s> WriteU8s for AdapterU8s<W> {
    fn write_u8s(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.w.write_u8s(data)
    }
}

impl<W: WriteU8s> WriteU8 for AdapterU8s<W> {
    fn write_u8(&mut self, data: u8) -> Result<(), Self::Error> {
        self.w.write_u8s(core::slice::from_ref(&data))
    }
}

/// Uses an [embedded_hal] SPI device as the panel bus.
///
/// Each call is one [SpiDevice::write()] transaction, so chip select (if the
/// device manages one) toggles around every byte or stream.
pub struct SpiDeviceBus<S> { spi: S }

impl<S: SpiDevice> SpiDeviceBus<S> {
    pub fn new(spi: S) -> Self { Self{spi} }

    pub fn into_inner(self) -> S { self.spi }
}

impl<S: SpiDevice> ErrorType for SpiDeviceBus<S> {
    type Error = S::Error;
}

impl<S: SpiDevice> WriteU8 for SpiDeviceBus<S> {
    fn write_u8(&mut self, data: u8) -> Result<(), Self::Error> {
        self.spi.write(&[data])
    }
}

impl<S: SpiDevice> WriteU8s for SpiDeviceBus<S> {
    fn write_u8s(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.spi.write(data)
    }
}

/// Names the two lines of an [OutputPinPair].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinRole {
    Dc,
    Rst,
}

/// Uses two already-constructed [embedded_hal] output pins as the DC and RST
/// lines.
///
/// The pins' drive mode was fixed when the HAL built them, so the requested
/// [DriveMode] is only logged. "Configuring" drives the initial level and
/// "releasing" does nothing; the pins go back to the caller through
/// [into_inner()](Self::into_inner).
pub struct OutputPinPair<DC, RST> {
    dc: DC,
    rst: RST,
}

impl<DC, RST> OutputPinPair<DC, RST>
where DC: OutputPin<Error = Infallible>,
      RST: OutputPin<Error = Infallible> {
    pub fn new(dc: DC, rst: RST) -> Self { Self{dc, rst} }

    /// The pins to hand to [St7735s::init()](crate::St7735s::init).
    pub fn pins() -> crate::Pins<PinRole> {
        crate::Pins{dc: PinRole::Dc, rst: PinRole::Rst}
    }

    pub fn into_inner(self) -> (DC, RST) { (self.dc, self.rst) }

    fn drive(&mut self, line: PinRole, level: Level) {
        let state = PinState::from(level == Level::High);
        let result = match line {
            PinRole::Dc => self.dc.set_state(state),
            PinRole::Rst => self.rst.set_state(state),
        };
        match result {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }
}

impl<DC, RST> OutputLines for OutputPinPair<DC, RST>
where DC: OutputPin<Error = Infallible>,
      RST: OutputPin<Error = Infallible> {
    type Line = PinRole;
    type Error = Infallible;

    fn configure_output(&mut self, line: PinRole, drive: DriveMode,
                        initial: Level) -> Result<(), Infallible> {
        debug!("st7735s: {:?} as {:?} output, initially {:?}",
               line, drive, initial);
        self.drive(line, initial);
        Ok(())
    }

    fn set_level(&mut self, line: PinRole, level: Level) {
        self.drive(line, level);
    }

    fn release(&mut self, _line: PinRole) {}
}

// mod adapter_u8_tests

// mod adapter_u8s_tests

// mod embedded_hal_tests

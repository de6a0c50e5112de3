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

//! Blocking driver for a 4-wire serial ST7735S TFT panel (80x160, RGB565).
//!
//! The driver does three things: pulses the reset line, replays a constant
//! register setup ([BRING_UP_SEQUENCE]), and forwards command, data and
//! bulk-data bytes with the DC line selected accordingly. Drawing, including
//! the address-window math, is left to the caller, which pushes pixels with
//! [St7735s::write_command()] and [St7735s::write_data_stream()].
//!
//! A user of this crate implements the traits in [hal] (or wraps
//! [embedded_hal] types with [adapters]), then:
//!
//! ```ignore
//! let mut display = St7735s::init(bus, lines, delay, Pins{dc, rst})?;
//! display.configure_controller();
//! display.write_command(Instruction::RAMWR.into());
//! display.write_data_stream(&frame);
//! ```
//!
//! Bus errors after initialization panic: there is no recovery path for a
//! broken display bus mid-session, and nothing is retried.

#![no_std]

#[cfg(test)] extern crate std;

pub mod adapters;
mod command_structs;
pub use command_structs::{
    Colmod, ColorComponentOrder, ColumnOrder, Madctl, RowColumnSwap, RowOrder};
mod config;
pub use config::{Timing, COLOR_BITS, DISPLAY_SIZE_X, DISPLAY_SIZE_Y};
mod config_table;
pub use config_table::{ConfigEntry, BRING_UP_SEQUENCE, MAX_PAYLOAD};
mod driver;
pub use driver::{Pins, St7735s};
mod error;
pub use error::Error;
pub mod hal;
mod instruction;
pub use instruction::Instruction;

#[cfg(test)] pub mod testing_device;

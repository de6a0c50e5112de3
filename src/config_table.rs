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

use crate::instruction::Instruction::{self, *};

/// Capacity of the payload of one [ConfigEntry].
pub const MAX_PAYLOAD: usize = 16;

/// One command of the bring-up sequence together with its parameter bytes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConfigEntry {
    command: u8,
    data: [u8; MAX_PAYLOAD],
    size: u8,
}

impl ConfigEntry {
    /// Fails to compile (or panics, outside of const context) if `payload`
    /// is longer than [MAX_PAYLOAD].
    pub const fn new(command: Instruction, payload: &[u8]) -> Self {
        assert!(payload.len() <= MAX_PAYLOAD, "payload too long");
        let mut data = [0u8; MAX_PAYLOAD];
        let mut i = 0;
        while i < payload.len() {
            data[i] = payload[i];
            i += 1;
        }
        Self{command: command as u8, data, size: payload.len() as u8}
    }

    pub fn command(&self) -> u8 { self.command }

    pub fn payload(&self) -> &[u8] { &self.data[..self.size as usize] }
}

/// Register setup replayed by
/// [configure_controller()](crate::St7735s::configure_controller) between
/// SLPOUT and DISPON.
///
/// Order matters: frame rate, power, VCOM and gamma registers come before the
/// pixel format and the address window.
pub static BRING_UP_SEQUENCE: [ConfigEntry; 18] = [
    ConfigEntry::new(FRMCTR1, &[0x05, 0x3C, 0x3C]),
    ConfigEntry::new(FRMCTR2, &[0x05, 0x3C, 0x3C]),
    ConfigEntry::new(FRMCTR3, &[0x05, 0x3C, 0x3C, 0x05, 0x3C, 0x3C]),
    ConfigEntry::new(INVCTR, &[0x07]),
    ConfigEntry::new(PWCTR1, &[0xE9, 0x09, 0x04]),
    ConfigEntry::new(PWCTR2, &[0xC5]),
    ConfigEntry::new(PWCTR3, &[0x0D, 0x00]),
    ConfigEntry::new(PWCTR4, &[0x8D, 0x6A]),
    ConfigEntry::new(PWCTR5, &[0x8D, 0xEE]),
    ConfigEntry::new(VMCTR1, &[0x15]),
    ConfigEntry::new(MADCTL, &[0xC8]),
    ConfigEntry::new(INVON, &[]),
    ConfigEntry::new(GMCTRP1, &[0x07, 0x0E, 0x08, 0x07, 0x10, 0x07, 0x02, 0x07,
                                0x09, 0x0F, 0x25, 0x36, 0x00, 0x08, 0x04, 0x10]),
    ConfigEntry::new(GMCTRN1, &[0x0A, 0x0D, 0x08, 0x07, 0x0F, 0x07, 0x02, 0x07,
                                0x09, 0x0F, 0x25, 0x35, 0x00, 0x09, 0x04, 0x10]),
    ConfigEntry::new(PWCTR6, &[0xC0]),
    ConfigEntry::new(COLMOD, &[0x05]),
    ConfigEntry::new(CASET, &[0x00, 0x1A, 0x00, 0x69]),
    ConfigEntry::new(RASET, &[0x00, 0x01, 0x00, 0xA0]),
];

// mod tests

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

macro_rules! define_instructions {
    ($($name:ident = $code:literal, doc: $doc:literal;)*) => {
        /// ST7735S command opcodes, named as in the datasheet.
        #[allow(clippy::upper_case_acronyms)]
        #[derive(Clone, Copy, Debug, Eq, PartialEq)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        #[repr(u8)]
        pub enum Instruction {
            $(#[doc = $doc] $name = $code,)*
        }
        impl Instruction {
            /// Looks up the opcode, if it is one this crate names.
            pub fn from_code(code: u8) -> Option<Self> {
                match code {
                    $($code => Some(Self::$name),)*
                    _ => None,
                }
            }
        }
        impl ::core::fmt::Display for Instruction {
            fn fmt(&self, f: &mut ::core::fmt::Formatter)
                    -> ::core::fmt::Result {
                let name = match *self {
                    $(Self::$name => stringify!($name),)*
                };
                write!(f, "{}({:#04x})", name, *self as u8)
            }
        }
    };
}

define_instructions! {
    NOP = 0x00, doc: "Does nothing.";
    SWRESET = 0x01, doc: "Software reset.";
    SLPIN = 0x10, doc: "Enters the sleep mode.";
    SLPOUT = 0x11, doc: "Exits the sleep mode.";
    NORON = 0x13, doc: "Enters the normal mode.";
    INVOFF = 0x20, doc: "Disables the inversion mode.";
    INVON = 0x21, doc: "Enables the inversion mode.";
    DISPOFF = 0x28, doc: "Turns the display off.";
    DISPON = 0x29, doc: "Turns the display on.";
    CASET = 0x2A, doc: "Column address window, both ends inclusive.";
    RASET = 0x2B, doc: "Row address window, both ends inclusive.";
    RAMWR = 0x2C, doc: "Starts a memory write.";
    MADCTL = 0x36, doc: "Memory data access control.";
    COLMOD = 0x3A, doc: "Interface pixel format.";
    FRMCTR1 = 0xB1, doc: "Frame rate control, normal mode.";
    FRMCTR2 = 0xB2, doc: "Frame rate control, idle mode.";
    FRMCTR3 = 0xB3, doc: "Frame rate control, partial mode.";
    INVCTR = 0xB4, doc: "Display inversion control.";
    PWCTR1 = 0xC0, doc: "Power control 1.";
    PWCTR2 = 0xC1, doc: "Power control 2.";
    PWCTR3 = 0xC2, doc: "Power control 3, normal mode.";
    PWCTR4 = 0xC3, doc: "Power control 4, idle mode.";
    PWCTR5 = 0xC4, doc: "Power control 5, partial mode.";
    VMCTR1 = 0xC5, doc: "VCOM control.";
    GMCTRP1 = 0xE0, doc: "Positive gamma correction.";
    GMCTRN1 = 0xE1, doc: "Negative gamma correction.";
    PWCTR6 = 0xFC, doc: "Power control 6, partial mode.";
}

impl From<Instruction> for u8 {
    fn from(instruction: Instruction) -> u8 { instruction as u8 }
}

// mod tests

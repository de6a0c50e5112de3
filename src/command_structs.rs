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

//! Typed payloads of the MADCTL and COLMOD registers.
//!
//! The bring-up table carries these registers as raw bytes. These types let
//! the drawing layer compute its own values (eg., to rotate the panel) and
//! decode the table's values.

use paste::paste;

macro_rules! define_pub_bit_type {
    ($name:ident, zero: $zero_value:ident, one: $one_value:ident,
                  doc: $doc:literal) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Eq, PartialEq)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        pub enum $name {
            $zero_value = 0,
            $one_value = 1,
        }
        impl $name {
            fn from_bit(set: bool) -> Self {  // Private.
                if set { Self::$one_value } else { Self::$zero_value }
            }
            fn is_bit_set(&self) -> bool {  // Private.
                matches!(*self, Self::$one_value)
            }
        }
        impl Default for $name {
            fn default() -> Self { Self::$zero_value }
        }
    };
}
macro_rules! bit_field {
    ($name:ident, type: $type:ty, bit_offset: $i:expr) => {
        pub fn $name(&self) -> $type {
            <$type>::from_bit((self.data >> $i) & 1 == 1)
        }
        paste! {
            pub fn [<set_ $name>](&mut self, value: $type) -> &mut Self {
                if value.is_bit_set() {
                    self.data |= 1 << $i;
                } else {
                    self.data &= !(1 << $i);
                }
                self
            }
        }
    }
}

/// Defines the orientation parameters of the screen.
///
/// # Example
///
/// ```
/// # use st7735s_tft::*;
/// let mut mctl = Madctl::default();
/// mctl.set_row_address_order(RowOrder::BottomToTop)
///     .set_column_address_order(ColumnOrder::RightToLeft)
///     .set_rgb_order(ColorComponentOrder::BlueGreenRed);
/// assert_eq!(u8::from(mctl), 0xC8);
/// assert_eq!(mctl.row_column_swap(), RowColumnSwap::Unswapped);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Madctl {
    data: u8,
}
impl Madctl {
    bit_field!(row_address_order, type: RowOrder, bit_offset: 7);
    bit_field!(column_address_order, type: ColumnOrder, bit_offset: 6);
    bit_field!(row_column_swap, type: RowColumnSwap, bit_offset: 5);
    bit_field!(vertical_refresh_order, type: RowOrder, bit_offset: 4);
    bit_field!(rgb_order, type: ColorComponentOrder, bit_offset: 3);
    bit_field!(horizontal_refresh_order, type: ColumnOrder, bit_offset: 2);
}
impl From<Madctl> for u8 {
    fn from(mctl: Madctl) -> u8 { mctl.data }
}
impl From<u8> for Madctl {
    // Bits 1 and 0 are unused by the controller.
    fn from(raw: u8) -> Self { Self{data: raw & 0xFC} }
}

define_pub_bit_type!(RowOrder, zero: TopToBottom, one: BottomToTop,
                     doc: "The row order of the LCD pixels.");
define_pub_bit_type!(ColumnOrder, zero: LeftToRight, one: RightToLeft,
                     doc: "The column order of the LCD pixels.");
define_pub_bit_type!(RowColumnSwap, zero: Unswapped, one: Swapped,
                     doc: "Whether to swap the row and column definitions, \
                     i.e., to switch between the portrait and landscape mode.");
define_pub_bit_type!(ColorComponentOrder, zero: RedGreenBlue, one: BlueGreenRed,
                     doc: "R/G/B component order inside a pixel.");

/// Color mode (the bit widths of the R, G and B components of a pixel).
///
/// The native format is 6-bit for each component. Smaller modes are expanded
/// by the controller through its color lookup table.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Colmod {
    /// Each component has 4 bits.
    R4G4B4 = 0b011,
    /// Red has 5 bits; green has 6 bits; blue has 5 bits.
    R5G6B5 = 0b101,
    /// Each component has 6 bits. This is the native format.
    R6G6B6 = 0b110,
    Unknown = 0b111,
}
impl Colmod {
    /// Bits sent over the bus per pixel, or `None` for [Colmod::Unknown].
    pub fn bits_per_pixel(&self) -> Option<u8> {
        match *self {
            Colmod::R4G4B4 => Some(12),
            Colmod::R5G6B5 => Some(16),
            Colmod::R6G6B6 => Some(18),
            Colmod::Unknown => None,
        }
    }
}
impl Default for Colmod {
    fn default() -> Self { Self::Unknown }
}
impl From<Colmod> for u8 {
    fn from(colmod: Colmod) -> u8 { colmod as u8 }
}
impl From<u8> for Colmod {
    fn from(raw: u8) -> Self {
        use Colmod::*;
        const R4G4B4_VALUE: u8 = R4G4B4 as u8;
        const R5G6B5_VALUE: u8 = R5G6B5 as u8;
        const R6G6B6_VALUE: u8 = R6G6B6 as u8;
        // Only the interface format bits (IFPF) matter.
        match raw & 0b111 {
            R4G4B4_VALUE => R4G4B4,
            R5G6B5_VALUE => R5G6B5,
            R6G6B6_VALUE => R6G6B6,
            _ => Unknown,
        }
    }
}

// mod tests

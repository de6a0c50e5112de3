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

//! Panel geometry and the delays of the bring-up sequence.

/// Visible columns of the panel.
pub const DISPLAY_SIZE_X: u16 = 80;
/// Visible rows of the panel.
pub const DISPLAY_SIZE_Y: u16 = 160;
/// Bits per pixel the bring-up sequence selects (COLMOD).
pub const COLOR_BITS: u8 = 16;

/// Delays used by [St7735s](crate::St7735s).
///
/// Every delay is a lower bound required by the controller: the setters accept
/// longer values but clamp shorter ones to the minimum, so a `Timing` can never
/// make the sequence faster than [Timing::MINIMUM].
///
/// # Example
///
/// ```
/// # use st7735s_tft::Timing;
/// let timing = Timing::default().with_reset_recovery_ms(250)
///                               .with_dc_settle_us(1);
/// assert_eq!(timing.reset_recovery_ms(), 250);
/// assert_eq!(timing.dc_settle_us(), 10);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    reset_high_ms: u32,
    reset_low_ms: u32,
    reset_recovery_ms: u32,
    sleep_out_ms: u32,
    display_on_ms: u32,
    dc_settle_us: u32,
}

macro_rules! clamped_setter {
    ($field:ident, $setter:ident, $doc:literal) => {
        #[doc = $doc]
        pub fn $setter(mut self, value: u32) -> Self {
            self.$field = value.max(Self::MINIMUM.$field);
            self
        }
        pub fn $field(&self) -> u32 { self.$field }
    };
}

impl Timing {
    /// The shortest delays the controller tolerates.
    pub const MINIMUM: Timing = Timing {
        reset_high_ms: 10,
        reset_low_ms: 50,
        reset_recovery_ms: 100,
        sleep_out_ms: 120,
        display_on_ms: 120,
        dc_settle_us: 10,
    };

    clamped_setter!(reset_high_ms, with_reset_high_ms,
                    "RST held high before the reset pulse.");
    clamped_setter!(reset_low_ms, with_reset_low_ms,
                    "Width of the reset pulse.");
    clamped_setter!(reset_recovery_ms, with_reset_recovery_ms,
                    "Wait after RST returns high.");
    clamped_setter!(sleep_out_ms, with_sleep_out_ms,
                    "Wait after SLPOUT.");
    clamped_setter!(display_on_ms, with_display_on_ms,
                    "Wait after DISPON and RAMWR.");
    clamped_setter!(dc_settle_us, with_dc_settle_us,
                    "Wait after driving DC, before the bus transfer starts.");
}

impl Default for Timing {
    fn default() -> Self { Self::MINIMUM }
}

// mod tests

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

/// Recoverable failures of [St7735s::init()](crate::St7735s::init).
///
/// `E` is the error type of the [OutputLines](crate::hal::OutputLines)
/// implementation. Bus failures are not represented here: once the driver is
/// initialized they are fatal.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E: Debug> {
    /// The DC line could not be configured. Nothing was acquired.
    #[error("failed to configure the DC line: {0:?}")]
    DcConfig(E),
    /// The RST line could not be configured. The DC line was released again.
    #[error("failed to configure the RST line: {0:?}")]
    RstConfig(E),
}

impl<E: Debug> Error<E> {
    /// The error reported by the line controller.
    pub fn into_inner(self) -> E {
        match self {
            Error::DcConfig(e) | Error::RstConfig(e) => e,
        }
    }
}

// mod tests

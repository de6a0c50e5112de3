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

use std::cell::{RefCell, RefMut};
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;

use crate::hal::{DriveMode, ErrorType, Level, OutputLines, WriteU8, WriteU8s};

/// Line identifiers used by the test devices, like a port/pin number.
pub type Pin = u8;
pub const DC: Pin = 0x0C;
pub const RST: Pin = 0x0D;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FakeError(pub &'static str);

pub const OK: Result<(), FakeError> = Ok(());

/// Every collaborator call the driver can make, flattened into one trait so
/// that a single mock observes their relative order.
#[mockall::automock]
pub trait PlainIO {
    fn configure_output(&mut self, line: Pin, drive: DriveMode, initial: Level)
        -> Result<(), FakeError>;
    fn set_level(&mut self, line: Pin, level: Level);
    fn release(&mut self, line: Pin);
    fn delay_ns(&mut self, ns: u32);
    fn send(&mut self, data: u8) -> Result<(), FakeError>;
    fn transfer(&mut self, data: &[u8]) -> Result<(), FakeError>;
}

/// Shares one `MockPlainIO` between the bus, line and delay roles. Clone it
/// once per role.
#[derive(Clone, Default)]
pub struct MockDevice {
    mock: Rc<RefCell<MockPlainIO>>,
}

impl MockDevice {
    pub fn new() -> Self { Default::default() }
    pub fn mock(&self) -> RefMut<'_, MockPlainIO> { self.mock.borrow_mut() }
}

impl OutputLines for MockDevice {
    type Line = Pin;
    type Error = FakeError;

    fn configure_output(&mut self, line: Pin, drive: DriveMode,
                        initial: Level) -> Result<(), FakeError> {
        self.mock().configure_output(line, drive, initial)
    }
    fn set_level(&mut self, line: Pin, level: Level) {
        self.mock().set_level(line, level)
    }
    fn release(&mut self, line: Pin) { self.mock().release(line) }
}

impl DelayNs for MockDevice {
    fn delay_ns(&mut self, ns: u32) { self.mock().delay_ns(ns) }
    fn delay_us(&mut self, us: u32) { self.mock().delay_ns(us * 1_000) }
    fn delay_ms(&mut self, ms: u32) { self.mock().delay_ns(ms * 1_000_000) }
}

impl ErrorType for MockDevice {
    type Error = FakeError;
}

impl WriteU8 for MockDevice {
    fn write_u8(&mut self, data: u8) -> Result<(), FakeError> {
        self.mock().send(data)
    }
}

impl WriteU8s for MockDevice {
    fn write_u8s(&mut self, data: &[u8]) -> Result<(), FakeError> {
        self.mock().transfer(data)
    }
}

/// One observed collaborator call.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Event {
    Configure(Pin, DriveMode, Level),
    Level(Pin, Level),
    Release(Pin),
    DelayNs(u64),
    Send(u8),
    Transfer(Vec<u8>),
}

#[derive(Default)]
struct FakeState {
    trace: Vec<Event>,
    acquired: Vec<Pin>,
}

/// Records every call into a trace shared by all of its clones.
#[derive(Clone, Default)]
pub struct FakeDevice {
    state: Rc<RefCell<FakeState>>,
    failing_line: Option<Pin>,
    failing_bus: bool,
}

impl FakeDevice {
    pub fn new() -> Self { Default::default() }

    /// Configuring `line` reports an error and acquires nothing.
    pub fn with_failing_line(mut self, line: Pin) -> Self {
        self.failing_line = Some(line);
        self
    }

    /// Every send and transfer reports an error.
    pub fn with_failing_bus(mut self) -> Self {
        self.failing_bus = true;
        self
    }

    pub fn trace(&self) -> Vec<Event> { self.state.borrow().trace.clone() }

    pub fn clear(&self) { self.state.borrow_mut().trace.clear(); }

    /// Lines configured and not yet released.
    pub fn acquired(&self) -> Vec<Pin> { self.state.borrow().acquired.clone() }

    fn record(&self, event: Event) { self.state.borrow_mut().trace.push(event); }

    fn bus_result(&self) -> Result<(), FakeError> {
        if self.failing_bus { Err(FakeError("bus fault")) } else { OK }
    }
}

impl OutputLines for FakeDevice {
    type Line = Pin;
    type Error = FakeError;

    fn configure_output(&mut self, line: Pin, drive: DriveMode,
                        initial: Level) -> Result<(), FakeError> {
        if self.failing_line == Some(line) {
            return Err(FakeError("line busy"));
        }
        self.record(Event::Configure(line, drive, initial));
        self.state.borrow_mut().acquired.push(line);
        Ok(())
    }
    fn set_level(&mut self, line: Pin, level: Level) {
        self.record(Event::Level(line, level));
    }
    fn release(&mut self, line: Pin) {
        self.record(Event::Release(line));
        self.state.borrow_mut().acquired.retain(|&l| l != line);
    }
}

impl DelayNs for FakeDevice {
    fn delay_ns(&mut self, ns: u32) { self.record(Event::DelayNs(ns as u64)); }
    fn delay_us(&mut self, us: u32) {
        self.record(Event::DelayNs(us as u64 * 1_000));
    }
    fn delay_ms(&mut self, ms: u32) {
        self.record(Event::DelayNs(ms as u64 * 1_000_000));
    }
}

impl ErrorType for FakeDevice {
    type Error = FakeError;
}

impl WriteU8 for FakeDevice {
    fn write_u8(&mut self, data: u8) -> Result<(), FakeError> {
        self.bus_result()?;
        self.record(Event::Send(data));
        Ok(())
    }
}

impl WriteU8s for FakeDevice {
    fn write_u8s(&mut self, data: &[u8]) -> Result<(), FakeError> {
        self.bus_result()?;
        self.record(Event::Transfer(data.to_vec()));
        Ok(())
    }
}

/// A bus transfer tagged with the DC level it was sent under.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DcU8 {
    Command(u8),
    Data(u8),
    Stream(Vec<u8>),
}

/// Reduces a trace to the bus transfers, tagged by the last DC level.
pub fn bus_seq(trace: &[Event]) -> Vec<DcU8> {
    let mut dc = Level::Low;
    let mut seq = Vec::new();
    for event in trace {
        match event {
            Event::Level(DC, level) => dc = *level,
            Event::Send(b) if dc == Level::Low => seq.push(DcU8::Command(*b)),
            Event::Send(b) => seq.push(DcU8::Data(*b)),
            Event::Transfer(bytes) => {
                assert_eq!(dc, Level::High, "stream sent as command");
                seq.push(DcU8::Stream(bytes.clone()));
            }
            _ => {}
        }
    }
    seq
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use super::*;

    #[test]
    fn mock_forwards_each_role() {
        let d = MockDevice::new();
        let mut seq = mockall::Sequence::new();
        d.mock().expect_set_level()
            .with(eq(DC), eq(Level::High))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        d.mock().expect_delay_ns()
            .with(eq(10_000))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        d.mock().expect_transfer()
            .withf(|data| *data == [0x01, 0x02])
            .times(1)
            .in_sequence(&mut seq)
            .return_const(OK);

        let (mut gpio, mut delay, mut bus) = (d.clone(), d.clone(), d.clone());
        gpio.set_level(DC, Level::High);
        delay.delay_us(10);
        bus.write_u8s(&[0x01, 0x02]).unwrap();
    }

    #[test]
    fn fake_shares_trace() {
        let a = FakeDevice::new();
        let mut b = a.clone();
        b.set_level(RST, Level::Low);
        b.delay_ms(2);
        b.write_u8(0x42).unwrap();
        assert_eq!(a.trace(), [
            Event::Level(RST, Level::Low),
            Event::DelayNs(2_000_000),
            Event::Send(0x42),
        ]);
    }

    #[test]
    fn fake_bus_seq() {
        let mut d = FakeDevice::new();
        d.set_level(DC, Level::Low);
        d.write_u8(0x12).unwrap();
        d.set_level(DC, Level::High);
        d.write_u8(0x34).unwrap();
        d.write_u8s(&[0x56, 0x78]).unwrap();
        use DcU8::{Command as C, Data as D, Stream as S};
        assert_eq!(bus_seq(&d.trace()), [
            C(0x12), D(0x34), S(std::vec![0x56, 0x78]),
        ]);
    }

    #[test]
    fn fake_failures() {
        let mut d = FakeDevice::new().with_failing_line(RST).with_failing_bus();
        assert_eq!(d.configure_output(DC, DriveMode::Strong, Level::Low), OK);
        assert!(d.configure_output(RST, DriveMode::Strong, Level::High).is_err());
        assert_eq!(d.acquired(), [DC]);
        assert_eq!(d.write_u8(0x00), Err(FakeError("bus fault")));
        assert!(d.write_u8s(&[]).is_err());
    }
}  // mod tests

//! Hardware interface abstraction
//!
//! This module provides the [`BusInterface`] trait and the [`ParallelInterface`]
//! struct for talking to the WS0010 over its 6800 style parallel bus.
//!
//! ## Hardware Requirements
//!
//! The WS0010 bus is write-only here (R/W tied low) and needs:
//! - **RS**: Register select (output, low=instruction, high=data)
//! - **E**: Enable strobe (output, data is latched on the falling edge)
//! - **D0..D7** (8 bit) or **D4..D7** (4 bit) data lines (outputs)
//!
//! In 4 bit mode every byte is sent as two nibbles, high nibble first.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use ws0010::{BusInterface, ParallelInterface};
//! # use core::convert::Infallible;
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! // 4 bit bus: RS, E, D4..D7
//! let mut interface = ParallelInterface::new_4bit(
//!     MockPin,
//!     MockPin,
//!     [MockPin, MockPin, MockPin, MockPin],
//!     MockDelay,
//! );
//!
//! // Wake the controller into 4 bit mode before any command
//! let _ = interface.init();
//!
//! // Send command
//! let _ = interface.send_command(0x01); // Clear display
//!
//! // Send data
//! let _ = interface.send_data(0xFF);
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::command::FUNCTION_SET_4BIT_NIBBLE;
use crate::config::DataWidth;
use crate::error::BuilderError;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Meaning of a transferred byte, selected by the RS line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Instruction register (RS low)
    Command,
    /// Data register (RS high)
    Data,
}

/// Trait for hardware interface to the WS0010 controller
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// implementation that can deliver bytes to the controller.
///
/// ## Implementing
///
/// For most cases, use the provided [`ParallelInterface`] struct. Implement
/// this trait yourself for e.g. port expanders or a mock in tests.
pub trait BusInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Width of the data bus
    fn data_width(&self) -> DataWidth;

    /// Bring the controller's bus logic into a known transfer width
    ///
    /// Called once by [`Display::new`](crate::display::Display::new) before
    /// the first instruction.
    ///
    /// # Errors
    ///
    /// Returns an error if a GPIO operation fails.
    fn init(&mut self) -> InterfaceResult<(), Self::Error>;

    /// Transfer one byte
    ///
    /// The implementation must:
    /// 1. Set RS low for [`Mode::Command`], high for [`Mode::Data`]
    /// 2. Present the byte on the data lines (two nibbles on a 4 bit bus)
    /// 3. Strobe E for each bus cycle
    ///
    /// # Errors
    ///
    /// Returns an error if a GPIO operation fails.
    fn write(&mut self, byte: u8, mode: Mode) -> InterfaceResult<(), Self::Error>;

    /// Send an instruction byte to the controller
    ///
    /// # Errors
    ///
    /// Returns an error if a GPIO operation fails.
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.write(command, Mode::Command)
    }

    /// Send a data byte to the controller
    ///
    /// # Errors
    ///
    /// Returns an error if a GPIO operation fails.
    fn send_data(&mut self, data: u8) -> InterfaceResult<(), Self::Error> {
        self.write(data, Mode::Data)
    }
}

/// Errors that can occur at the interface level
///
/// Generic over the GPIO error type.
#[derive(Debug)]
pub enum InterfaceError<PinErr> {
    /// GPIO pin error
    Pin(PinErr),
}

impl<PinErr: Debug> core::fmt::Display for InterfaceError<PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<PinErr: Debug> core::error::Error for InterfaceError<PinErr> {}

/// Default enable pulse width in microseconds
///
/// The WS0010 needs E high for at least 250ns. One microsecond is the
/// shortest delay most HALs resolve reliably.
pub const DEFAULT_PULSE_WIDTH_US: u32 = 1;

/// Data lines of a parallel bus
///
/// Pins are ordered from the lowest bit up: D0..D7 for an 8 bit bus, D4..D7
/// for a 4 bit bus.
#[derive(Debug)]
pub enum DataBus<D> {
    /// 8 bit bus
    Eight([D; 8]),
    /// 4 bit bus
    Four([D; 4]),
}

impl<D> DataBus<D> {
    /// Width of this bus
    pub fn width(&self) -> DataWidth {
        match self {
            Self::Eight(_) => DataWidth::Eight,
            Self::Four(_) => DataWidth::Four,
        }
    }
}

/// Hardware interface implementation for the WS0010 parallel bus
///
/// Implements [`BusInterface`] for embedded-hal v1.0 GPIO and delay traits.
///
/// ## Type Parameters
///
/// * `RS` - Register select pin implementing [`OutputPin`]
/// * `EN` - Enable pin implementing [`OutputPin`]
/// * `D` - Data pin implementing [`OutputPin`]
/// * `DELAY` - Delay implementing [`DelayNs`], used for the enable pulse
///
/// All pins must share a single error type.
///
/// ## Example
///
/// ```rust,no_run
/// use ws0010::{Builder, Display, ParallelInterface};
/// # use core::convert::Infallible;
/// # use embedded_hal::delay::DelayNs;
/// # use embedded_hal::digital::OutputPin;
/// # struct MockPin;
/// # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
/// # impl OutputPin for MockPin {
/// #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// # }
/// # struct MockDelay;
/// # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
/// let interface = ParallelInterface::new_8bit(
///     MockPin, // RS
///     MockPin, // E
///     [MockPin, MockPin, MockPin, MockPin, MockPin, MockPin, MockPin, MockPin],
///     MockDelay,
/// );
///
/// // Use with Display
/// let _display = Display::new(interface, Builder::new().build());
/// ```
#[derive(Debug)]
pub struct ParallelInterface<RS, EN, D, DELAY> {
    /// Register select pin (low=command, high=data)
    rs: RS,
    /// Enable strobe pin
    en: EN,
    /// Data lines, lowest bit first
    data: DataBus<D>,
    /// Delay provider for the enable pulse
    delay: DELAY,
    /// Enable high time in microseconds
    pulse_width_us: u32,
}

impl<RS, EN, D, DELAY> ParallelInterface<RS, EN, D, DELAY> {
    /// Create an interface for an 8 bit bus
    ///
    /// `data` holds D0..D7 in order. No line is driven until the first
    /// transfer.
    pub fn new_8bit(rs: RS, en: EN, data: [D; 8], delay: DELAY) -> Self {
        Self::with_bus(rs, en, DataBus::Eight(data), delay)
    }

    /// Create an interface for a 4 bit bus
    ///
    /// `data` holds D4..D7 in order. No line is driven until
    /// [`init`](BusInterface::init) or the first transfer.
    pub fn new_4bit(rs: RS, en: EN, data: [D; 4], delay: DELAY) -> Self {
        Self::with_bus(rs, en, DataBus::Four(data), delay)
    }

    /// Create an interface from an already assembled [`DataBus`]
    pub fn with_bus(rs: RS, en: EN, data: DataBus<D>, delay: DELAY) -> Self {
        Self {
            rs,
            en,
            data,
            delay,
            pulse_width_us: DEFAULT_PULSE_WIDTH_US,
        }
    }

    /// Create an interface from any number of data pins
    ///
    /// Four pins select a 4 bit bus, eight pins an 8 bit bus.
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDataLineCount` for any other count. No
    /// line is driven in either case.
    pub fn from_pins<P>(rs: RS, en: EN, pins: P, delay: DELAY) -> Result<Self, BuilderError>
    where
        P: IntoIterator<Item = D>,
    {
        let mut pins = pins.into_iter();
        let slots: [Option<D>; 8] = core::array::from_fn(|_| pins.next());
        let overflow = pins.count();

        let data = match slots {
            [
                Some(d0),
                Some(d1),
                Some(d2),
                Some(d3),
                Some(d4),
                Some(d5),
                Some(d6),
                Some(d7),
            ] if overflow == 0 => DataBus::Eight([d0, d1, d2, d3, d4, d5, d6, d7]),
            [
                Some(d4),
                Some(d5),
                Some(d6),
                Some(d7),
                None,
                None,
                None,
                None,
            ] => DataBus::Four([d4, d5, d6, d7]),
            slots => {
                let count = slots.iter().filter(|slot| slot.is_some()).count() + overflow;
                return Err(BuilderError::InvalidDataLineCount(count));
            }
        };

        Ok(Self::with_bus(rs, en, data, delay))
    }

    /// Set the enable pulse width in microseconds
    ///
    /// Default is 1µs. Values below 1µs are raised to 1µs so the 250ns
    /// minimum is always met.
    pub fn set_pulse_width_us(&mut self, pulse_width_us: u32) -> &mut Self {
        self.pulse_width_us = pulse_width_us.max(DEFAULT_PULSE_WIDTH_US);
        self
    }

    /// Get the current enable pulse width in microseconds
    pub fn pulse_width_us(&self) -> u32 {
        self.pulse_width_us
    }

    /// Release the pins and delay
    pub fn release(self) -> (RS, EN, DataBus<D>, DELAY) {
        (self.rs, self.en, self.data, self.delay)
    }
}

impl<RS, EN, D, DELAY, PinErr> ParallelInterface<RS, EN, D, DELAY>
where
    RS: OutputPin<Error = PinErr>,
    EN: OutputPin<Error = PinErr>,
    D: OutputPin<Error = PinErr>,
    DELAY: DelayNs,
    PinErr: Debug,
{
    fn set_register_select(&mut self, mode: Mode) -> InterfaceResult<(), InterfaceError<PinErr>> {
        let result = match mode {
            Mode::Command => self.rs.set_low(),
            Mode::Data => self.rs.set_high(),
        };
        result.map_err(InterfaceError::Pin)
    }

    fn pulse_enable(&mut self) -> InterfaceResult<(), InterfaceError<PinErr>> {
        self.en.set_high().map_err(InterfaceError::Pin)?;
        self.delay.delay_us(self.pulse_width_us);
        self.en.set_low().map_err(InterfaceError::Pin)?;
        Ok(())
    }

    /// Drive `value` onto the data lines, bit i on line i, and latch it
    fn latch(&mut self, value: u8) -> InterfaceResult<(), InterfaceError<PinErr>> {
        let lines: &mut [D] = match &mut self.data {
            DataBus::Eight(pins) => pins,
            DataBus::Four(pins) => pins,
        };
        for (bit, pin) in lines.iter_mut().enumerate() {
            let result = if (value >> bit) & 0x01 != 0 {
                pin.set_high()
            } else {
                pin.set_low()
            };
            result.map_err(InterfaceError::Pin)?;
        }
        self.pulse_enable()
    }
}

impl<RS, EN, D, DELAY, PinErr> BusInterface for ParallelInterface<RS, EN, D, DELAY>
where
    RS: OutputPin<Error = PinErr>,
    EN: OutputPin<Error = PinErr>,
    D: OutputPin<Error = PinErr>,
    DELAY: DelayNs,
    PinErr: Debug,
{
    type Error = InterfaceError<PinErr>;

    fn data_width(&self) -> DataWidth {
        self.data.width()
    }

    fn init(&mut self) -> InterfaceResult<(), Self::Error> {
        if let DataBus::Four(_) = self.data {
            log::debug!("ws0010: resynchronising 4 bit bus");
            // A controller left mid-byte in 8 bit mode swallows these
            self.set_register_select(Mode::Command)?;
            for _ in 0..5 {
                self.latch(0x00)?;
            }
            self.latch(FUNCTION_SET_4BIT_NIBBLE)?;
        }
        Ok(())
    }

    fn write(&mut self, byte: u8, mode: Mode) -> InterfaceResult<(), Self::Error> {
        self.set_register_select(mode)?;
        match self.data {
            DataBus::Eight(_) => self.latch(byte),
            DataBus::Four(_) => {
                self.latch(byte >> 4)?;
                self.latch(byte & 0x0F)
            }
        }
    }
}

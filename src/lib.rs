//! WS0010 OLED Display Driver
//!
//! A driver for the WS0010 character/graphic OLED controller (as found on
//! Winstar WEH/WEG modules) connected over a 4 or 8 bit parallel bus.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - 4 bit and 8 bit parallel bus
//! - Character mode configuration (cursor, blink, shift, addressing)
//! - Graphic mode with a 100x16 pixel frame buffer
//! - `embedded-graphics` integration (with `graphics` feature)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use ws0010::{Builder, DataWidth, Display, GraphicDisplay, ParallelInterface};
//!
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let (rs, en) = (MockPin, MockPin);
//! # let data = [MockPin, MockPin, MockPin, MockPin];
//! # let delay = MockDelay;
//! let interface = ParallelInterface::new_4bit(rs, en, data, delay);
//! let config = Builder::new().data_width(DataWidth::Four).build();
//!
//! let display = match Display::new(interface, config) {
//!     Ok(display) => display,
//!     Err(_) => return,
//! };
//! let mut display = match GraphicDisplay::new(display) {
//!     Ok(display) => display,
//!     Err(_) => return,
//! };
//!
//! display.set_pixel(10, 4, 1);
//! let _ = display.refresh();
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// Pixel frame buffer
pub mod buffer;
/// WS0010 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Graphic mode display
pub mod graphics;
/// Hardware interface abstraction
pub mod interface;
/// Display RAM byte packing
pub mod packer;

pub use buffer::PixelBuffer;
pub use config::{Builder, Config, DataWidth, Dimensions, DisplayLines, Font, FontHeight};
pub use display::{Display, Registers};
pub use error::{BuilderError, Error};
pub use graphics::{GRAPHICS_BUFFER_SIZE, GRAPHICS_HEIGHT, GRAPHICS_WIDTH, GraphicDisplay};
pub use interface::{
    BusInterface, DEFAULT_PULSE_WIDTH_US, DataBus, InterfaceError, Mode, ParallelInterface,
};
pub use packer::PackedBytes;

//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Invalid configuration, pin sets or buffers
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level pin errors
//!
//! The bus is write-only, so none of these report a missing acknowledgement
//! from the controller. Out-of-range pixel access is not an error either: reads
//! return `None` and writes are ignored.
//!
//! ## Example
//!
//! ```
//! use ws0010::{BuilderError, DataWidth, Dimensions};
//!
//! // Only 4 and 8 bit buses exist
//! let result = DataWidth::try_from(3);
//! assert!(matches!(result, Err(BuilderError::InvalidDataWidth(3))));
//!
//! // Height must be a whole number of 8 pixel pages
//! let result = Dimensions::new(100, 12);
//! assert!(result.is_err());
//! ```

use crate::config::DataWidth;
use crate::interface::BusInterface;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
#[derive(Debug)]
pub enum Error<I: BusInterface> {
    /// Interface error (GPIO)
    ///
    /// Wraps the underlying hardware error from the [`BusInterface`] implementation.
    Interface(I::Error),
    /// The configured data width does not match the bus
    ///
    /// Returned by [`Display::new`](crate::display::Display::new) before any
    /// line is driven.
    DataWidthMismatch {
        /// Data width requested in the [`Config`](crate::config::Config)
        config: DataWidth,
        /// Data width of the interface
        interface: DataWidth,
    },
}

impl<I: BusInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
            Self::DataWidthMismatch { config, interface } => write!(
                f,
                "Data width mismatch: config uses {} bits, interface has {} data lines",
                config.bits(),
                interface.bits()
            ),
        }
    }
}

impl<I: BusInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
///
/// These errors occur before the display is created and are not recoverable
/// by retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderError {
    /// Data width other than 4 or 8 bits
    InvalidDataWidth(u8),
    /// Display line count other than 1 or 2
    InvalidDisplayLines(u8),
    /// Font height other than 8 or 10 pixels
    InvalidFontHeight(u8),
    /// Font table number outside 0..=3
    InvalidFont(u8),
    /// Number of data pins other than 4 or 8
    InvalidDataLineCount(usize),
    /// Invalid buffer dimensions
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Width in pixels
        width: u16,
        /// Height in pixels
        height: u16,
    },
    /// Backing storage is too small for the dimensions
    BufferTooSmall {
        /// Required buffer size in bytes
        required: usize,
        /// Provided buffer size in bytes
        provided: usize,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidDataWidth(bits) => {
                write!(f, "Invalid data width {bits} (only 4 or 8 bit supported)")
            }
            Self::InvalidDisplayLines(lines) => {
                write!(f, "Invalid display lines {lines} (only 1 or 2 supported)")
            }
            Self::InvalidFontHeight(height) => {
                write!(f, "Invalid font height {height} (only 8 or 10 supported)")
            }
            Self::InvalidFont(font) => write!(
                f,
                "Unsupported font {font} (0 = English/Japanese, 1 = Western Europe I, 2 = English/Russian, 3 = Western Europe II)"
            ),
            Self::InvalidDataLineCount(count) => {
                write!(f, "Invalid data line count {count} (need 4 or 8)")
            }
            Self::InvalidDimensions { width, height } => write!(
                f,
                "Invalid dimensions {width}x{height} (both non-zero, height must be multiple of 8)"
            ),
            Self::BufferTooSmall { required, provided } => write!(
                f,
                "Buffer too small: required {required} bytes, provided {provided}"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::{InterfaceError, Mode};
    use alloc::string::ToString;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct PinFault;

    struct FailingInterface;

    impl BusInterface for FailingInterface {
        type Error = InterfaceError<PinFault>;

        fn data_width(&self) -> DataWidth {
            DataWidth::Eight
        }

        fn init(&mut self) -> Result<(), Self::Error> {
            Err(InterfaceError::Pin(PinFault))
        }

        fn write(&mut self, _byte: u8, _mode: Mode) -> Result<(), Self::Error> {
            Err(InterfaceError::Pin(PinFault))
        }
    }

    #[test]
    fn test_interface_error_display_includes_cause() {
        let error: Error<FailingInterface> = Error::Interface(InterfaceError::Pin(PinFault));
        assert_eq!(error.to_string(), "Interface error: Pin(PinFault)");
    }

    #[test]
    fn test_data_width_mismatch_display() {
        let error: Error<FailingInterface> = Error::DataWidthMismatch {
            config: DataWidth::Four,
            interface: DataWidth::Eight,
        };
        assert_eq!(
            error.to_string(),
            "Data width mismatch: config uses 4 bits, interface has 8 data lines"
        );
    }
}

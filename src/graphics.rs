//! Pixel graphics on the WS0010 graphic RAM
//!
//! This module provides the [`GraphicDisplay`] struct, which switches a
//! [`Display`] into graphic mode and keeps a 100x16 frame buffer for it.
//! With the `graphics` feature it also implements the
//! [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget) trait from
//! the embedded-graphics ecosystem, drawing with
//! [`BinaryColor`](embedded_graphics_core::pixelcolor::BinaryColor).
//!
//! ## Example
//!
//! ```rust,no_run
//! use ws0010::{Builder, Display, GraphicDisplay, ParallelInterface};
//! # use core::convert::Infallible;
//! # use embedded_hal::delay::DelayNs;
//! # use embedded_hal::digital::OutputPin;
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let interface = ParallelInterface::new_8bit(
//! #     MockPin,
//! #     MockPin,
//! #     [MockPin, MockPin, MockPin, MockPin, MockPin, MockPin, MockPin, MockPin],
//! #     MockDelay,
//! # );
//! let display = match Display::new(interface, Builder::new().build()) {
//!     Ok(display) => display,
//!     Err(_) => return,
//! };
//! let mut graphic_display = match GraphicDisplay::new(display) {
//!     Ok(graphic_display) => graphic_display,
//!     Err(_) => return,
//! };
//!
//! // Diagonal line in the top page
//! for i in 0..8 {
//!     graphic_display.set_pixel(i, i, 1);
//! }
//!
//! // Push the frame to graphic RAM
//! if let Err(err) = graphic_display.refresh() {
//!     let _ = err;
//! }
//! ```

use crate::buffer::PixelBuffer;
use crate::config::Dimensions;
use crate::display::Display;
use crate::error::Error;
use crate::interface::BusInterface;

/// Graphic RAM width in pixels
pub const GRAPHICS_WIDTH: u16 = 100;

/// Graphic RAM height in pixels (two 8 row pages)
pub const GRAPHICS_HEIGHT: u16 = 16;

/// Frame buffer size in bytes, one per pixel
pub const GRAPHICS_BUFFER_SIZE: usize = GRAPHICS_WIDTH as usize * GRAPHICS_HEIGHT as usize;

const GRAPHICS_DIMENSIONS: Dimensions = Dimensions {
    width: GRAPHICS_WIDTH,
    height: GRAPHICS_HEIGHT,
};

type GraphicsResult<I> = core::result::Result<(), Error<I>>;
type GraphicsNewResult<I, T> = core::result::Result<T, Error<I>>;

/// Display in graphic mode with a pixel buffer
///
/// Pixel writes only touch the buffer; [`refresh`](Self::refresh) sends the
/// whole frame to the controller.
///
/// ## Type Parameters
///
/// * `I` - Interface type implementing [`BusInterface`]
pub struct GraphicDisplay<I>
where
    I: BusInterface,
{
    /// The underlying display driver
    display: Display<I>,
    /// One byte per pixel, row-major
    buffer: PixelBuffer<[u8; GRAPHICS_BUFFER_SIZE]>,
}

impl<I> GraphicDisplay<I>
where
    I: BusInterface,
{
    /// Switch `display` into graphic mode and wrap it
    ///
    /// The pixel buffer starts cleared. Graphic RAM is left untouched until
    /// the first [`refresh`](Self::refresh).
    ///
    /// # Errors
    ///
    /// Returns `Error::Interface` if the mode switch fails.
    pub fn new(mut display: Display<I>) -> GraphicsNewResult<I, Self> {
        display.set_graphics_mode()?;
        Ok(Self {
            display,
            buffer: PixelBuffer::zeroed(GRAPHICS_DIMENSIONS),
        })
    }

    /// Set a pixel value, ignoring coordinates outside the frame
    pub fn set_pixel(&mut self, x: u16, y: u16, value: u8) {
        self.buffer.set(x, y, value);
    }

    /// Read a pixel value, `None` outside the frame
    pub fn get_pixel(&self, x: u16, y: u16) -> Option<u8> {
        self.buffer.get(x, y)
    }

    /// Clear the pixel buffer
    ///
    /// The screen is unchanged until the next [`refresh`](Self::refresh).
    pub fn clear_buffer(&mut self) {
        self.buffer.clear();
    }

    /// Send the whole frame to graphic RAM
    ///
    /// Bytes go out page by page, left to right, relying on the controller's
    /// address auto-increment. No address instruction is sent, so the frame
    /// lands wherever the RAM address currently points.
    ///
    /// # Errors
    ///
    /// Returns `Error::Interface` if a transfer fails.
    pub fn refresh(&mut self) -> GraphicsResult<I> {
        let Self { display, buffer } = self;
        buffer
            .packed_bytes()
            .try_for_each(|byte| display.write_data(byte))
    }

    /// Access the pixel buffer
    pub fn buffer(&self) -> &PixelBuffer<[u8; GRAPHICS_BUFFER_SIZE]> {
        &self.buffer
    }

    /// Access the underlying Display
    ///
    /// Returns an immutable reference to the wrapped [`Display`].
    pub fn display(&self) -> &Display<I> {
        &self.display
    }

    /// Access the underlying Display mutably
    ///
    /// Used for low-level operations such as setting the RAM address before a
    /// refresh.
    pub fn display_mut(&mut self) -> &mut Display<I> {
        &mut self.display
    }

    /// Clear the display, turn it off and release the interface
    pub fn finalize(self) -> GraphicsNewResult<I, I> {
        self.display.finalize()
    }
}

#[cfg(feature = "graphics")]
mod draw_target {
    use core::convert::Infallible;

    use embedded_graphics_core::{
        Pixel,
        draw_target::DrawTarget,
        geometry::{OriginDimensions, Point, Size},
        pixelcolor::BinaryColor,
    };

    use super::{GRAPHICS_HEIGHT, GRAPHICS_WIDTH, GraphicDisplay};
    use crate::interface::BusInterface;

    impl<I> DrawTarget for GraphicDisplay<I>
    where
        I: BusInterface,
    {
        type Color = BinaryColor;
        type Error = Infallible;

        fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
        where
            Iter: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(Point { x, y }, color) in pixels {
                let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) else {
                    continue;
                };
                self.set_pixel(x, y, u8::from(color.is_on()));
            }

            Ok(())
        }

        fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
            self.buffer.fill(u8::from(color.is_on()));
            Ok(())
        }
    }

    impl<I> OriginDimensions for GraphicDisplay<I>
    where
        I: BusInterface,
    {
        fn size(&self) -> Size {
            Size::new(GRAPHICS_WIDTH as u32, GRAPHICS_HEIGHT as u32)
        }
    }
}

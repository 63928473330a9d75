//! Display RAM packing
//!
//! The WS0010 graphic RAM is organised in pages of 8 scanlines. Each RAM byte
//! covers one pixel column of a page, with the top row of the page in bit 0
//! and the bottom row in bit 7. After a write the column address
//! auto-increments, so a full frame is sent page by page, left to right.
//!
//! [`PackedBytes`] produces that byte stream straight from a
//! [`PixelBuffer`]. Nothing is cached, so the stream always reflects the
//! latest pixel writes.

use core::iter::FusedIterator;

use crate::buffer::PixelBuffer;

/// Iterator over the packed RAM bytes of a [`PixelBuffer`]
///
/// Yields `width * height / 8` bytes, ordered by page and then by column.
/// Any non-zero pixel value sets its bit.
#[derive(Clone, Debug)]
pub struct PackedBytes<'a> {
    pixels: &'a [u8],
    width: usize,
    pages: usize,
    page: usize,
    column: usize,
}

impl<'a> PackedBytes<'a> {
    fn new(pixels: &'a [u8], width: usize, pages: usize) -> Self {
        Self {
            pixels,
            width,
            pages,
            page: 0,
            column: 0,
        }
    }

    fn pack(&self, page: usize, column: usize) -> u8 {
        let top = page * 8 * self.width + column;
        (0..8).fold(0u8, |byte, bit| {
            let lit = self
                .pixels
                .get(top + bit * self.width)
                .is_some_and(|&pixel| pixel != 0);
            byte | (u8::from(lit) << bit)
        })
    }
}

impl Iterator for PackedBytes<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.page >= self.pages || self.width == 0 {
            return None;
        }

        let byte = self.pack(self.page, self.column);

        self.column += 1;
        if self.column == self.width {
            self.column = 0;
            self.page += 1;
        }

        Some(byte)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.page >= self.pages {
            0
        } else {
            (self.pages - self.page) * self.width - self.column
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PackedBytes<'_> {}

impl FusedIterator for PackedBytes<'_> {}

impl<B> PixelBuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Packed RAM bytes for the whole buffer
    ///
    /// Each call starts a fresh pass over the current pixels.
    pub fn packed_bytes(&self) -> PackedBytes<'_> {
        let dims = self.dimensions();
        PackedBytes::new(self.as_slice(), dims.width as usize, dims.pages())
    }
}

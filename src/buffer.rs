//! One byte per pixel frame buffer
//!
//! [`PixelBuffer`] stores a row-major grid of pixel values in caller-supplied
//! storage. Accesses outside the grid are ignored on write and return `None` on
//! read. Conversion into the controller's RAM layout lives in
//! [`packer`](crate::packer).
//!
//! ## Example
//!
//! ```
//! use ws0010::{Dimensions, PixelBuffer};
//!
//! let dims = match Dimensions::new(8, 8) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let mut buffer = match PixelBuffer::new(dims, [0u8; 64]) {
//!     Ok(buffer) => buffer,
//!     Err(_) => return,
//! };
//!
//! buffer.set(3, 5, 1);
//! assert_eq!(buffer.get(3, 5), Some(1));
//! assert_eq!(buffer.get(8, 0), None);
//! ```

use crate::config::Dimensions;
use crate::error::BuilderError;

/// Row-major pixel grid
///
/// ## Type Parameters
///
/// * `B` - Backing storage, at least `dimensions.buffer_size()` bytes
#[derive(Clone, Debug)]
pub struct PixelBuffer<B> {
    dimensions: Dimensions,
    storage: B,
}

impl<B> PixelBuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Wrap storage as a pixel buffer
    ///
    /// The storage is cleared to 0.
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::BufferTooSmall` if the storage holds fewer than
    /// `width * height` bytes.
    pub fn new(dimensions: Dimensions, mut storage: B) -> Result<Self, BuilderError> {
        let required = dimensions.buffer_size();
        let provided = storage.as_ref().len();
        if provided < required {
            return Err(BuilderError::BufferTooSmall { required, provided });
        }
        storage.as_mut()[..required].fill(0);
        Ok(Self {
            dimensions,
            storage,
        })
    }

    /// Buffer dimensions
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Width in pixels
    pub fn width(&self) -> u16 {
        self.dimensions.width
    }

    /// Height in pixels
    pub fn height(&self) -> u16 {
        self.dimensions.height
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.dimensions.width && y < self.dimensions.height {
            Some(x as usize + y as usize * self.dimensions.width as usize)
        } else {
            None
        }
    }

    /// Set a pixel value, ignoring coordinates outside the buffer
    pub fn set(&mut self, x: u16, y: u16, value: u8) {
        if let Some(index) = self.index(x, y) {
            self.storage.as_mut()[index] = value;
        }
    }

    /// Read a pixel value, `None` if the coordinates are outside the buffer
    pub fn get(&self, x: u16, y: u16) -> Option<u8> {
        self.index(x, y)
            .and_then(|index| self.storage.as_ref().get(index).copied())
    }

    /// Reset every pixel to 0
    pub fn clear(&mut self) {
        self.fill(0);
    }

    /// Set every pixel to `value`
    pub fn fill(&mut self, value: u8) {
        let len = self.dimensions.buffer_size();
        self.storage.as_mut()[..len].fill(value);
    }

    /// Pixel values in row-major order
    pub fn as_slice(&self) -> &[u8] {
        &self.storage.as_ref()[..self.dimensions.buffer_size()]
    }

    /// Give back the backing storage
    pub fn into_inner(self) -> B {
        self.storage
    }
}

impl<const N: usize> PixelBuffer<[u8; N]> {
    /// Zeroed buffer with inline storage, `N` must equal `dimensions.buffer_size()`
    pub(crate) const fn zeroed(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            storage: [0u8; N],
        }
    }
}

#[cfg(feature = "alloc")]
impl PixelBuffer<alloc::vec::Vec<u8>> {
    /// Allocate zeroed storage for `dimensions`
    pub fn allocate(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            storage: alloc::vec![0u8; dimensions.buffer_size()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_buffer() -> PixelBuffer<[u8; 64]> {
        PixelBuffer::new(Dimensions::new(8, 8).unwrap(), [0xAA; 64]).unwrap()
    }

    #[test]
    fn test_new_clears_storage() {
        let buffer = test_buffer();
        assert!(buffer.as_slice().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_new_rejects_small_storage() {
        let dims = Dimensions::new(8, 8).unwrap();
        let result = PixelBuffer::new(dims, [0u8; 63]);
        assert!(matches!(
            result,
            Err(BuilderError::BufferTooSmall {
                required: 64,
                provided: 63
            })
        ));
    }

    #[test]
    fn test_new_accepts_larger_storage() {
        let dims = Dimensions::new(4, 8).unwrap();
        let buffer = PixelBuffer::new(dims, alloc::vec![7u8; 40]).unwrap();
        assert_eq!(buffer.as_slice().len(), 32);
        assert_eq!(buffer.into_inner()[32..], [7u8; 8]);
    }

    #[test]
    fn test_set_then_get_every_pixel() {
        let mut buffer = test_buffer();
        for y in 0..8 {
            for x in 0..8 {
                buffer.set(x, y, (x * 8 + y) as u8);
            }
        }
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(buffer.get(x, y), Some((x * 8 + y) as u8));
            }
        }
    }

    #[test]
    fn test_row_major_layout() {
        let mut buffer = test_buffer();
        buffer.set(2, 1, 9);
        assert_eq!(buffer.as_slice()[2 + 8], 9);
    }

    #[test]
    fn test_out_of_range_get_returns_none() {
        let buffer = test_buffer();
        assert_eq!(buffer.get(8, 0), None);
        assert_eq!(buffer.get(0, 8), None);
        assert_eq!(buffer.get(u16::MAX, u16::MAX), None);
    }

    #[test]
    fn test_out_of_range_set_leaves_buffer_unchanged() {
        let mut buffer = test_buffer();
        buffer.set(1, 1, 5);
        let before = buffer.as_slice().to_vec();

        buffer.set(8, 0, 1);
        buffer.set(0, 8, 1);
        buffer.set(100, 100, 1);

        assert_eq!(buffer.as_slice(), &before[..]);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_allocate_zeroed_storage() {
        let dims = Dimensions::new(100, 16).unwrap();
        let mut buffer = PixelBuffer::allocate(dims);
        assert_eq!(buffer.as_slice().len(), 1600);
        assert!(buffer.as_slice().iter().all(|&p| p == 0));

        buffer.set(99, 15, 1);
        assert_eq!(buffer.get(99, 15), Some(1));
        assert_eq!(buffer.into_inner().len(), 1600);
    }

    #[test]
    fn test_clear_resets_all_pixels() {
        let mut buffer = test_buffer();
        buffer.fill(3);
        assert_eq!(buffer.get(7, 7), Some(3));

        buffer.clear();
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(buffer.get(x, y), Some(0));
            }
        }
    }
}

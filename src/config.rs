//! Display configuration types and builder

use crate::command::{
    DATA_LENGTH_4BIT, DATA_LENGTH_8BIT, DISPLAY_LINES_1, DISPLAY_LINES_2, FONT_5X8, FONT_5X10,
    FONT_ENGLISH_JAPANESE, FONT_ENGLISH_RUSSIAN, FONT_WESTERN_EUROPEAN_1, FONT_WESTERN_EUROPEAN_2,
};
pub use crate::error::BuilderError;

/// Pixel buffer dimensions
///
/// The controller packs 8 rows into every RAM byte, so the height must be a
/// whole number of pages.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    /// Width in pixels
    pub width: u16,
    /// Height in pixels (multiple of 8)
    pub height: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - width == 0
    /// - height == 0
    /// - height % 8 != 0
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        if width == 0 || height == 0 || height % 8 != 0 {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Number of 8 row pages
    pub fn pages(&self) -> usize {
        self.height as usize / 8
    }

    /// Calculate required buffer size in bytes (one byte per pixel)
    pub fn buffer_size(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Number of packed RAM bytes for one full frame
    pub fn packed_size(&self) -> usize {
        self.width as usize * self.pages()
    }
}

/// Width of the parallel data bus
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DataWidth {
    /// 4 data lines (D4..D7), every byte sent as two nibbles
    Four,
    /// 8 data lines (D0..D7)
    #[default]
    Eight,
}

impl DataWidth {
    /// Number of data lines
    pub fn bits(self) -> u8 {
        match self {
            Self::Four => 4,
            Self::Eight => 8,
        }
    }

    fn function_bits(self) -> u8 {
        match self {
            Self::Four => DATA_LENGTH_4BIT,
            Self::Eight => DATA_LENGTH_8BIT,
        }
    }
}

impl TryFrom<u8> for DataWidth {
    type Error = BuilderError;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        match bits {
            4 => Ok(Self::Four),
            8 => Ok(Self::Eight),
            other => Err(BuilderError::InvalidDataWidth(other)),
        }
    }
}

/// Number of character lines the controller scans
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayLines {
    /// Single line
    One,
    /// Two lines
    #[default]
    Two,
}

impl DisplayLines {
    fn function_bits(self) -> u8 {
        match self {
            Self::One => DISPLAY_LINES_1,
            Self::Two => DISPLAY_LINES_2,
        }
    }
}

impl TryFrom<u8> for DisplayLines {
    type Error = BuilderError;

    fn try_from(lines: u8) -> Result<Self, Self::Error> {
        match lines {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            other => Err(BuilderError::InvalidDisplayLines(other)),
        }
    }
}

/// Character font height
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontHeight {
    /// 5x8 dots
    #[default]
    Dots8,
    /// 5x10 dots
    Dots10,
}

impl FontHeight {
    fn function_bits(self) -> u8 {
        match self {
            Self::Dots8 => FONT_5X8,
            Self::Dots10 => FONT_5X10,
        }
    }
}

impl TryFrom<u8> for FontHeight {
    type Error = BuilderError;

    fn try_from(height: u8) -> Result<Self, Self::Error> {
        match height {
            8 => Ok(Self::Dots8),
            10 => Ok(Self::Dots10),
            other => Err(BuilderError::InvalidFontHeight(other)),
        }
    }
}

/// Built-in character table
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum Font {
    /// English/Japanese (0)
    EnglishJapanese = FONT_ENGLISH_JAPANESE,
    /// Western European I (1)
    WesternEuropean1 = FONT_WESTERN_EUROPEAN_1,
    /// English/Russian (2)
    EnglishRussian = FONT_ENGLISH_RUSSIAN,
    /// Western European II (3)
    #[default]
    WesternEuropean2 = FONT_WESTERN_EUROPEAN_2,
}

impl TryFrom<u8> for Font {
    type Error = BuilderError;

    fn try_from(font: u8) -> Result<Self, Self::Error> {
        match font {
            0 => Ok(Self::EnglishJapanese),
            1 => Ok(Self::WesternEuropean1),
            2 => Ok(Self::EnglishRussian),
            3 => Ok(Self::WesternEuropean2),
            other => Err(BuilderError::InvalidFont(other)),
        }
    }
}

/// Controller configuration
///
/// Holds the four function set choices. Use [`Builder`] to create a Config.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Bus width, must match the interface
    pub data_width: DataWidth,
    /// Number of display lines
    pub display_lines: DisplayLines,
    /// Font height
    pub font_height: FontHeight,
    /// Character table
    pub font: Font,
}

impl Config {
    /// Parameter bits of the function set instruction
    pub fn function_set_bits(&self) -> u8 {
        self.data_width.function_bits()
            | self.display_lines.function_bits()
            | self.font_height.function_bits()
            | self.font as u8
    }

    /// Build a config from raw numeric choices
    ///
    /// # Errors
    ///
    /// Returns the [`BuilderError`] of the first value outside its set.
    pub fn from_raw(
        data_width: u8,
        display_lines: u8,
        font_height: u8,
        font: u8,
    ) -> Result<Self, BuilderError> {
        Ok(Builder::new()
            .data_width(DataWidth::try_from(data_width)?)
            .display_lines(DisplayLines::try_from(display_lines)?)
            .font_height(FontHeight::try_from(font_height)?)
            .font(Font::try_from(font)?)
            .build())
    }
}

impl Default for Config {
    fn default() -> Self {
        Builder::new().build()
    }
}

/// Builder for constructing display configuration
///
/// Defaults to an 8 bit bus, two lines, 5x8 font and the Western European II
/// table.
///
/// # Example
///
/// ```rust,no_run
/// use ws0010::{Builder, DataWidth, Font};
///
/// let config = Builder::new()
///     .data_width(DataWidth::Four)
///     .font(Font::EnglishJapanese)
///     .build();
/// let _ = config;
/// ```
#[must_use]
#[derive(Default)]
pub struct Builder {
    data_width: DataWidth,
    display_lines: DisplayLines,
    font_height: FontHeight,
    font: Font,
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set bus width
    pub fn data_width(mut self, data_width: DataWidth) -> Self {
        self.data_width = data_width;
        self
    }

    /// Set number of display lines
    pub fn display_lines(mut self, display_lines: DisplayLines) -> Self {
        self.display_lines = display_lines;
        self
    }

    /// Set font height
    pub fn font_height(mut self, font_height: FontHeight) -> Self {
        self.font_height = font_height;
        self
    }

    /// Set character table
    pub fn font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        Config {
            data_width: self.data_width,
            display_lines: self.display_lines,
            font_height: self.font_height,
            font: self.font,
        }
    }
}

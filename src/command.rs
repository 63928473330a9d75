//! WS0010 command definitions
//!
//! This module defines the instruction opcodes of the WS0010 OLED controller
//! together with the sub-flags that are OR-ed into them. Instructions are sent
//! with the RS pin low, display/graphic RAM data with RS high.
//!
//! ## Command Structure
//!
//! Every instruction is a single byte made of a fixed opcode in the upper
//! bits and a parameter field in the lower bits:
//!
//! | Opcode            | Parameter bits                      |
//! |-------------------|-------------------------------------|
//! | `ENTRY_MODE`      | I/D, S                              |
//! | `DISPLAY_CONTROL` | D, C, B                             |
//! | `SHIFT`           | S/C, R/L                            |
//! | `MODE_POWER`      | G/C, PWR (low two bits always set)  |
//! | `FUNCTION_SET`    | DL, N, F, FT1, FT0                  |
//! | `SET_CGRAM_ADDR`  | 6 bit address                       |
//! | `SET_DDRAM_ADDR`  | 7 bit address                       |
//!
//! ## Example
//!
//! ```rust,no_run
//! use ws0010::command;
//!
//! // Display on, cursor on, no blink
//! let byte = command::DISPLAY_CONTROL | command::DISPLAY_ON | command::CURSOR_ON;
//! assert_eq!(byte, 0x0E);
//! ```

// Basic instructions

/// Clear display command (0x01)
///
/// Writes spaces to all DDRAM addresses and sets the address counter to 0.
pub const CLEAR_DISPLAY: u8 = 0x01;

/// Return home command (0x02)
///
/// Sets the DDRAM address counter to 0 and undoes any display shift.
pub const RETURN_HOME: u8 = 0x02;

// Entry mode set (0x04)

/// Entry mode set command (0x04)
pub const ENTRY_MODE: u8 = 0x04;
/// Address counter increments after each data write
pub const ENTRY_INCREMENT: u8 = 0x02;
/// Address counter decrements after each data write
pub const ENTRY_DECREMENT: u8 = 0x00;
/// Shift the whole display on each data write
pub const ENTRY_SHIFT_ON: u8 = 0x01;
/// Leave the display in place on data writes
pub const ENTRY_SHIFT_OFF: u8 = 0x00;

// Display on/off control (0x08)

/// Display on/off control command (0x08)
pub const DISPLAY_CONTROL: u8 = 0x08;
/// Display on
pub const DISPLAY_ON: u8 = 0x04;
/// Display off
pub const DISPLAY_OFF: u8 = 0x00;
/// Underline cursor shown
pub const CURSOR_ON: u8 = 0x02;
/// Underline cursor hidden
pub const CURSOR_OFF: u8 = 0x00;
/// Blinking block at the cursor position
pub const BLINK_ON: u8 = 0x01;
/// No blinking block
pub const BLINK_OFF: u8 = 0x00;

// Cursor/display shift (0x10)

/// Cursor or display shift command (0x10)
///
/// Moves the cursor or shifts the display without touching DDRAM contents.
pub const SHIFT: u8 = 0x10;
/// Shift to the right
pub const SHIFT_RIGHT: u8 = 0x04;
/// Shift to the left
pub const SHIFT_LEFT: u8 = 0x00;
/// Shift the display contents
pub const SHIFT_DISPLAY: u8 = 0x08;
/// Move the cursor only
pub const SHIFT_CURSOR: u8 = 0x00;

// Mode/power (0x13)

/// Graphic/character mode and power control command (0x13)
///
/// This is the shift opcode (0x10) with both low bits set, which the WS0010
/// decodes as its mode/power instruction.
pub const MODE_POWER: u8 = 0x13;
/// Graphic mode: RAM writes address individual pixel columns
pub const GRAPHICS_MODE: u8 = 0x08;
/// Character mode: RAM writes are character codes
pub const CHARACTER_MODE: u8 = 0x00;
/// Internal DC-DC converter on
pub const DCDC_ON: u8 = 0x04;
/// Internal DC-DC converter off
pub const DCDC_OFF: u8 = 0x00;

// Function set (0x20)

/// Function set command (0x20)
///
/// The datasheet only allows this while the display is off, and font table
/// changes only take effect together with a data length change.
pub const FUNCTION_SET: u8 = 0x20;
/// 8 bit bus
pub const DATA_LENGTH_8BIT: u8 = 0x10;
/// 4 bit bus
pub const DATA_LENGTH_4BIT: u8 = 0x00;
/// Two display lines
pub const DISPLAY_LINES_2: u8 = 0x08;
/// One display line
pub const DISPLAY_LINES_1: u8 = 0x00;
/// 5x10 dot font
pub const FONT_5X10: u8 = 0x04;
/// 5x8 dot font
pub const FONT_5X8: u8 = 0x00;
/// English/Japanese character table
pub const FONT_ENGLISH_JAPANESE: u8 = 0x00;
/// Western European character table I
pub const FONT_WESTERN_EUROPEAN_1: u8 = 0x01;
/// English/Russian character table
pub const FONT_ENGLISH_RUSSIAN: u8 = 0x02;
/// Western European character table II
pub const FONT_WESTERN_EUROPEAN_2: u8 = 0x03;

/// High nibble of a 4 bit function set
///
/// Sent on its own during the 4 bit wake sequence to switch the bus width.
pub const FUNCTION_SET_4BIT_NIBBLE: u8 = (FUNCTION_SET | DATA_LENGTH_4BIT) >> 4;

// Addressing

/// Set CGRAM address command (0x40)
///
/// In graphic mode this selects the vertical page (GYA).
pub const SET_CGRAM_ADDR: u8 = 0x40;
/// Valid bits of a CGRAM address
pub const CGRAM_ADDR_MASK: u8 = 0x3F;

/// Set DDRAM address command (0x80)
///
/// In graphic mode this selects the pixel column (GXA).
pub const SET_DDRAM_ADDR: u8 = 0x80;
/// Valid bits of a DDRAM address
pub const DDRAM_ADDR_MASK: u8 = 0x7F;

/// DDRAM address shift for the row of a cursor position
///
/// Each character line is 64 DDRAM addresses apart.
pub const DDRAM_ROW_SHIFT: u8 = 6;

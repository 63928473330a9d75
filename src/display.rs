//! Core display operations
//!
//! [`Display`] owns a [`BusInterface`] and a shadow copy of the controller's
//! write-only configuration registers. Every flag change updates the shadow
//! register and then resends the whole register, since the WS0010 has no
//! partial update.

use crate::command::{
    BLINK_OFF, BLINK_ON, CGRAM_ADDR_MASK, CHARACTER_MODE, CLEAR_DISPLAY, CURSOR_OFF, CURSOR_ON,
    DCDC_ON, DDRAM_ADDR_MASK, DDRAM_ROW_SHIFT, DISPLAY_CONTROL, DISPLAY_ON, ENTRY_INCREMENT,
    ENTRY_MODE, ENTRY_SHIFT_OFF, ENTRY_SHIFT_ON, FUNCTION_SET, GRAPHICS_MODE, MODE_POWER,
    RETURN_HOME, SET_CGRAM_ADDR, SET_DDRAM_ADDR, SHIFT, SHIFT_CURSOR, SHIFT_DISPLAY, SHIFT_LEFT,
    SHIFT_RIGHT,
};
use crate::config::Config;
use crate::error::Error;
use crate::interface::BusInterface;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Shadow copy of the controller's configuration registers
///
/// Each field holds only the parameter bits; the opcode is added on transmit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Registers {
    /// Entry mode set parameters (I/D, S)
    pub entry_mode: u8,
    /// Display on/off control parameters (D, C, B)
    pub display_control: u8,
    /// Graphic/character mode and power parameters
    pub mode_power: u8,
    /// Function set parameters (DL, N, F, FT)
    pub display_function: u8,
}

impl Registers {
    /// Power-on defaults for a given configuration
    ///
    /// Display on with cursor and blink off, incrementing entry without shift,
    /// character mode with the DC-DC converter on.
    pub fn new(config: &Config) -> Self {
        Self {
            entry_mode: ENTRY_INCREMENT | ENTRY_SHIFT_OFF,
            display_control: DISPLAY_ON | CURSOR_OFF | BLINK_OFF,
            mode_power: CHARACTER_MODE | DCDC_ON,
            display_function: config.function_set_bits(),
        }
    }
}

/// Core display driver for WS0010
///
/// This struct provides instruction level operations for the WS0010
/// controller. For pixel graphics, use
/// [`GraphicDisplay`](crate::graphics::GraphicDisplay).
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
///     MockPin,
///     MockPin,
///     [MockPin, MockPin, MockPin, MockPin, MockPin, MockPin, MockPin, MockPin],
///     MockDelay,
/// );
/// let mut display = match Display::new(interface, Builder::new().build()) {
///     Ok(display) => display,
///     Err(_) => return,
/// };
///
/// let _ = display.cursor_on();
/// let _ = display.set_cursor_pos(2, 1);
/// let _ = display.write_data_slice(b"Hi");
/// ```
pub struct Display<I>
where
    I: BusInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Last transmitted register values
    registers: Registers,
}

impl<I> Display<I>
where
    I: BusInterface,
{
    /// Create a new Display and run the bring-up sequence
    ///
    /// The sequence is: interface init, function set, display control,
    /// clear, return home, entry mode, mode/power.
    ///
    /// # Errors
    ///
    /// Returns `Error::DataWidthMismatch` without touching the bus if the
    /// config and interface disagree on the bus width, or `Error::Interface`
    /// if a transfer fails.
    ///
    /// The interface is dropped on error. To keep the pins on a width
    /// mismatch, compare [`BusInterface::data_width`] with
    /// [`Config::data_width`] before calling.
    pub fn new(interface: I, config: Config) -> Result<Self, Error<I>> {
        if config.data_width != interface.data_width() {
            return Err(Error::DataWidthMismatch {
                config: config.data_width,
                interface: interface.data_width(),
            });
        }

        let mut display = Self {
            interface,
            config,
            registers: Registers::new(&config),
        };
        display.init()?;
        Ok(display)
    }

    fn init(&mut self) -> DisplayResult<I> {
        log::debug!(
            "ws0010: init {}-bit bus, function set {:#04x}",
            self.config.data_width.bits(),
            self.registers.display_function
        );
        self.interface.init().map_err(Error::Interface)?;

        self.send_display_function()?;
        self.send_display_control()?;
        self.clear()?;
        self.return_home()?;
        self.send_entry_mode()?;
        self.send_mode_power()?;

        Ok(())
    }

    // Raw access

    /// Send a raw instruction byte
    pub fn command(&mut self, command: u8) -> DisplayResult<I> {
        log::trace!("ws0010: command {command:#04x}");
        self.interface
            .send_command(command)
            .map_err(Error::Interface)
    }

    /// Write one byte to display or graphic RAM
    pub fn write_data(&mut self, data: u8) -> DisplayResult<I> {
        self.interface.send_data(data).map_err(Error::Interface)
    }

    /// Write consecutive bytes to display or graphic RAM
    pub fn write_data_slice(&mut self, data: &[u8]) -> DisplayResult<I> {
        data.iter().try_for_each(|&byte| self.write_data(byte))
    }

    // Basic instructions

    /// Clear the display and reset the address counter
    pub fn clear(&mut self) -> DisplayResult<I> {
        self.command(CLEAR_DISPLAY)
    }

    /// Move the cursor home and undo display shifts
    pub fn return_home(&mut self) -> DisplayResult<I> {
        self.command(RETURN_HOME)
    }

    // Entry mode

    /// Transmit the entry mode register
    pub fn send_entry_mode(&mut self) -> DisplayResult<I> {
        self.command(ENTRY_MODE | self.registers.entry_mode)
    }

    /// Increment the address after each write
    pub fn entry_increment(&mut self) -> DisplayResult<I> {
        self.registers.entry_mode |= ENTRY_INCREMENT;
        self.send_entry_mode()
    }

    /// Decrement the address after each write
    pub fn entry_decrement(&mut self) -> DisplayResult<I> {
        self.registers.entry_mode &= !ENTRY_INCREMENT;
        self.send_entry_mode()
    }

    /// Shift the display on each write
    pub fn entry_shift_on(&mut self) -> DisplayResult<I> {
        self.registers.entry_mode |= ENTRY_SHIFT_ON;
        self.send_entry_mode()
    }

    /// Keep the display in place on writes
    pub fn entry_shift_off(&mut self) -> DisplayResult<I> {
        self.registers.entry_mode &= !ENTRY_SHIFT_ON;
        self.send_entry_mode()
    }

    // Display control

    /// Transmit the display control register
    pub fn send_display_control(&mut self) -> DisplayResult<I> {
        self.command(DISPLAY_CONTROL | self.registers.display_control)
    }

    /// Turn the display on
    pub fn display_on(&mut self) -> DisplayResult<I> {
        self.registers.display_control |= DISPLAY_ON;
        self.send_display_control()
    }

    /// Turn the display off, RAM contents are kept
    pub fn display_off(&mut self) -> DisplayResult<I> {
        self.registers.display_control &= !DISPLAY_ON;
        self.send_display_control()
    }

    /// Show the underline cursor
    pub fn cursor_on(&mut self) -> DisplayResult<I> {
        self.registers.display_control |= CURSOR_ON;
        self.send_display_control()
    }

    /// Hide the underline cursor
    pub fn cursor_off(&mut self) -> DisplayResult<I> {
        self.registers.display_control &= !CURSOR_ON;
        self.send_display_control()
    }

    /// Blink the character at the cursor
    pub fn blink_on(&mut self) -> DisplayResult<I> {
        self.registers.display_control |= BLINK_ON;
        self.send_display_control()
    }

    /// Stop blinking
    pub fn blink_off(&mut self) -> DisplayResult<I> {
        self.registers.display_control &= !BLINK_ON;
        self.send_display_control()
    }

    // Shift

    /// Move the cursor one position right
    pub fn shift_cursor_right(&mut self) -> DisplayResult<I> {
        self.command(SHIFT | SHIFT_RIGHT | SHIFT_CURSOR)
    }

    /// Move the cursor one position left
    pub fn shift_cursor_left(&mut self) -> DisplayResult<I> {
        self.command(SHIFT | SHIFT_LEFT | SHIFT_CURSOR)
    }

    /// Shift the display contents right
    pub fn shift_display_right(&mut self) -> DisplayResult<I> {
        self.command(SHIFT | SHIFT_RIGHT | SHIFT_DISPLAY)
    }

    /// Shift the display contents left
    pub fn shift_display_left(&mut self) -> DisplayResult<I> {
        self.command(SHIFT | SHIFT_LEFT | SHIFT_DISPLAY)
    }

    // Mode and power

    /// Transmit the mode/power register
    pub fn send_mode_power(&mut self) -> DisplayResult<I> {
        self.command(MODE_POWER | self.registers.mode_power)
    }

    /// Switch RAM writes to character codes
    pub fn set_character_mode(&mut self) -> DisplayResult<I> {
        log::debug!("ws0010: character mode");
        self.registers.mode_power &= !GRAPHICS_MODE;
        self.send_mode_power()
    }

    /// Switch RAM writes to pixel columns
    pub fn set_graphics_mode(&mut self) -> DisplayResult<I> {
        log::debug!("ws0010: graphics mode");
        self.registers.mode_power |= GRAPHICS_MODE;
        self.send_mode_power()
    }

    /// Turn the internal DC-DC converter on
    pub fn dcdc_on(&mut self) -> DisplayResult<I> {
        self.registers.mode_power |= DCDC_ON;
        self.send_mode_power()
    }

    /// Turn the internal DC-DC converter off
    pub fn dcdc_off(&mut self) -> DisplayResult<I> {
        self.registers.mode_power &= !DCDC_ON;
        self.send_mode_power()
    }

    // Function set

    /// Transmit the function set register
    ///
    /// The datasheet only allows function set while the display is off, so it
    /// is not exposed at bit level.
    pub fn send_display_function(&mut self) -> DisplayResult<I> {
        self.command(FUNCTION_SET | self.registers.display_function)
    }

    // Addressing

    /// Set the CGRAM address (graphic mode: vertical page)
    ///
    /// Only the low 6 bits are used.
    pub fn set_cgram_address(&mut self, address: u8) -> DisplayResult<I> {
        self.command(SET_CGRAM_ADDR | (address & CGRAM_ADDR_MASK))
    }

    /// Set the DDRAM address (graphic mode: pixel column)
    ///
    /// Only the low 7 bits are used.
    pub fn set_ddram_address(&mut self, address: u8) -> DisplayResult<I> {
        self.command(SET_DDRAM_ADDR | (address & DDRAM_ADDR_MASK))
    }

    /// Move the cursor to a character cell
    ///
    /// Rows are 64 DDRAM addresses apart.
    pub fn set_cursor_pos(&mut self, column: u8, row: u8) -> DisplayResult<I> {
        self.set_ddram_address((row << DDRAM_ROW_SHIFT) | column)
    }

    // Teardown

    /// Clear the display, turn it off and release the interface
    pub fn finalize(mut self) -> Result<I, Error<I>> {
        log::debug!("ws0010: finalize");
        self.clear()?;
        self.display_off()?;
        Ok(self.interface)
    }

    // Accessors

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the last transmitted register values
    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    /// Access the interface
    pub fn interface(&self) -> &I {
        &self.interface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Builder, DataWidth, DisplayLines, Font, FontHeight};
    use crate::interface::Mode;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    #[derive(Debug)]
    struct MockInterface {
        data_width: DataWidth,
        init_calls: usize,
        writes: Vec<(Mode, u8)>,
    }

    impl MockInterface {
        fn new(data_width: DataWidth) -> Self {
            Self {
                data_width,
                init_calls: 0,
                writes: Vec::new(),
            }
        }

        fn commands(&self) -> Vec<u8> {
            self.writes
                .iter()
                .filter(|(mode, _)| *mode == Mode::Command)
                .map(|(_, byte)| *byte)
                .collect()
        }
    }

    impl BusInterface for MockInterface {
        type Error = core::convert::Infallible;

        fn data_width(&self) -> DataWidth {
            self.data_width
        }

        fn init(&mut self) -> Result<(), Self::Error> {
            self.init_calls += 1;
            Ok(())
        }

        fn write(&mut self, byte: u8, mode: Mode) -> Result<(), Self::Error> {
            self.writes.push((mode, byte));
            Ok(())
        }
    }

    fn test_display() -> Display<MockInterface> {
        Display::new(MockInterface::new(DataWidth::Eight), Config::default()).unwrap()
    }

    /// Display with the bring-up traffic discarded
    fn idle_display() -> Display<MockInterface> {
        let mut display = test_display();
        display.interface.writes.clear();
        display
    }

    fn last_command(display: &Display<MockInterface>) -> u8 {
        *display.interface.commands().last().unwrap()
    }

    #[test]
    fn test_bring_up_sequence() {
        let display = test_display();
        assert_eq!(display.interface.init_calls, 1);
        assert_eq!(
            display.interface.commands(),
            [
                0x3B, // function set: 8 bit, 2 lines, 5x8, Western European II
                0x0C, // display on, cursor off, blink off
                0x01, // clear
                0x02, // home
                0x06, // entry: increment, no shift
                0x17, // character mode, DC-DC on
            ]
        );
        assert!(display.interface.writes.iter().all(|(m, _)| *m == Mode::Command));
    }

    #[test]
    fn test_bring_up_uses_config_function_bits() {
        let config = Builder::new()
            .data_width(DataWidth::Four)
            .display_lines(DisplayLines::One)
            .font_height(FontHeight::Dots10)
            .font(Font::EnglishJapanese)
            .build();
        let display = Display::new(MockInterface::new(DataWidth::Four), config).unwrap();
        assert_eq!(display.interface.commands()[0], 0x24);
    }

    /// Interface that counts bus activity in cells shared with the test
    struct CountingInterface {
        data_width: DataWidth,
        init_calls: Rc<RefCell<usize>>,
        write_calls: Rc<RefCell<usize>>,
    }

    impl BusInterface for CountingInterface {
        type Error = core::convert::Infallible;

        fn data_width(&self) -> DataWidth {
            self.data_width
        }

        fn init(&mut self) -> Result<(), Self::Error> {
            *self.init_calls.borrow_mut() += 1;
            Ok(())
        }

        fn write(&mut self, _byte: u8, _mode: Mode) -> Result<(), Self::Error> {
            *self.write_calls.borrow_mut() += 1;
            Ok(())
        }
    }

    #[test]
    fn test_data_width_mismatch_performs_no_io() {
        let init_calls = Rc::new(RefCell::new(0));
        let write_calls = Rc::new(RefCell::new(0));
        let interface = CountingInterface {
            data_width: DataWidth::Eight,
            init_calls: init_calls.clone(),
            write_calls: write_calls.clone(),
        };
        let config = Builder::new().data_width(DataWidth::Four).build();

        let result = Display::new(interface, config);

        assert!(matches!(
            result,
            Err(Error::DataWidthMismatch {
                config: DataWidth::Four,
                interface: DataWidth::Eight
            })
        ));
        assert_eq!(*init_calls.borrow(), 0);
        assert_eq!(*write_calls.borrow(), 0);
    }

    #[test]
    fn test_matching_width_counts_bring_up_io() {
        let init_calls = Rc::new(RefCell::new(0));
        let write_calls = Rc::new(RefCell::new(0));
        let interface = CountingInterface {
            data_width: DataWidth::Four,
            init_calls: init_calls.clone(),
            write_calls: write_calls.clone(),
        };
        let config = Builder::new().data_width(DataWidth::Four).build();

        let display = Display::new(interface, config);

        assert!(display.is_ok());
        assert_eq!(*init_calls.borrow(), 1);
        assert_eq!(*write_calls.borrow(), 6);
    }

    #[test]
    fn test_default_registers() {
        let display = test_display();
        assert_eq!(
            *display.registers(),
            Registers {
                entry_mode: 0x02,
                display_control: 0x04,
                mode_power: 0x04,
                display_function: 0x1B,
            }
        );
    }

    #[test]
    fn test_flag_toggle_resends_full_register_once() {
        let mut display = idle_display();
        display.cursor_on().unwrap();
        assert_eq!(display.interface.commands(), [0x0E]);

        display.blink_on().unwrap();
        assert_eq!(display.interface.commands(), [0x0E, 0x0F]);

        display.cursor_off().unwrap();
        assert_eq!(display.interface.commands(), [0x0E, 0x0F, 0x0D]);
    }

    #[test]
    fn test_display_on_off() {
        let mut display = idle_display();
        display.display_off().unwrap();
        assert_eq!(last_command(&display), 0x08);
        display.display_on().unwrap();
        assert_eq!(last_command(&display), 0x0C);
        display.blink_off().unwrap();
        assert_eq!(last_command(&display), 0x0C);
        assert_eq!(display.interface.writes.len(), 3);
    }

    #[test]
    fn test_entry_mode_flags() {
        let mut display = idle_display();
        display.entry_shift_on().unwrap();
        assert_eq!(last_command(&display), 0x07);
        display.entry_decrement().unwrap();
        assert_eq!(last_command(&display), 0x05);
        display.entry_shift_off().unwrap();
        assert_eq!(last_command(&display), 0x04);
        display.entry_increment().unwrap();
        assert_eq!(last_command(&display), 0x06);
    }

    #[test]
    fn test_mode_power_flags() {
        let mut display = idle_display();
        display.set_graphics_mode().unwrap();
        assert_eq!(last_command(&display), 0x1F);
        display.dcdc_off().unwrap();
        assert_eq!(last_command(&display), 0x1B);
        display.set_character_mode().unwrap();
        assert_eq!(last_command(&display), 0x13);
        display.dcdc_on().unwrap();
        assert_eq!(last_command(&display), 0x17);
        assert_eq!(display.registers().mode_power, DCDC_ON);
    }

    #[test]
    fn test_shift_commands() {
        let mut display = idle_display();
        display.shift_cursor_right().unwrap();
        display.shift_cursor_left().unwrap();
        display.shift_display_right().unwrap();
        display.shift_display_left().unwrap();
        assert_eq!(display.interface.commands(), [0x14, 0x10, 0x1C, 0x18]);
    }

    #[test]
    fn test_shift_does_not_touch_registers() {
        let mut display = idle_display();
        let before = *display.registers();
        display.shift_display_left().unwrap();
        assert_eq!(*display.registers(), before);
    }

    #[test]
    fn test_set_cursor_pos() {
        let mut display = idle_display();
        display.set_cursor_pos(2, 1).unwrap();
        assert_eq!(display.interface.commands(), [SET_DDRAM_ADDR | (1 << 6 | 2)]);
        assert_eq!(last_command(&display), 0xC2);
    }

    #[test]
    fn test_addressing_masks_address_bits() {
        let mut display = idle_display();
        display.set_ddram_address(0x05).unwrap();
        assert_eq!(last_command(&display), 0x85);
        display.set_ddram_address(0xFF).unwrap();
        assert_eq!(last_command(&display), 0xFF);
        display.set_cgram_address(0x01).unwrap();
        assert_eq!(last_command(&display), 0x41);
        display.set_cgram_address(0xFF).unwrap();
        assert_eq!(last_command(&display), 0x7F);
    }

    #[test]
    fn test_write_data() {
        let mut display = idle_display();
        display.write_data(0x41).unwrap();
        display.write_data_slice(&[0x01, 0x02]).unwrap();
        assert_eq!(
            display.interface.writes,
            [(Mode::Data, 0x41), (Mode::Data, 0x01), (Mode::Data, 0x02)]
        );
    }

    #[test]
    fn test_raw_command() {
        let mut display = idle_display();
        display.command(0x2A).unwrap();
        assert_eq!(display.interface.writes, [(Mode::Command, 0x2A)]);
    }

    #[test]
    fn test_finalize_clears_then_turns_off() {
        let mut display = idle_display();
        display.cursor_on().unwrap();
        let interface = display.finalize().unwrap();
        assert_eq!(interface.commands(), [0x0E, 0x01, 0x0A]);
    }
}

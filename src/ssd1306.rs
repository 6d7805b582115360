//! SSD1306 OLED controller on I2C.
//!
//! The controller is run in horizontal addressing mode, in which its display
//! RAM has exactly the page-major layout of `Framebuffer`. A flush is then one
//! command frame to set the address window, and one data frame carrying the
//! buffer untouched.
//!
//! Every I2C write starts with a control byte: `0x00` if the rest of the write
//! is commands, `0x40` if it is display data.

use core::fmt;

use embedded_hal::i2c::{I2c, Operation};
use log::debug;
use smart_default::SmartDefault;

use crate::transport::Transport;

const CONTROL_COMMAND: u8 = 0x00;
const CONTROL_DATA: u8 = 0x40;

/// Fundamental, addressing, and hardware-configuration opcodes.
mod cmd {
    pub const SET_MEMORY_MODE: u8 = 0x20;
    pub const MEMORY_MODE_HORIZONTAL: u8 = 0x00;
    pub const SET_COLUMN_ADDRESS: u8 = 0x21;
    pub const SET_PAGE_ADDRESS: u8 = 0x22;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
    pub const CHARGE_PUMP_ON: u8 = 0x14;
    pub const CHARGE_PUMP_OFF: u8 = 0x10;
    pub const SEGMENT_REMAP_OFF: u8 = 0xA0;
    pub const SEGMENT_REMAP_ON: u8 = 0xA1;
    pub const RESUME_FROM_RAM: u8 = 0xA4;
    pub const NORMAL_DISPLAY: u8 = 0xA6;
    pub const INVERSE_DISPLAY: u8 = 0xA7;
    pub const SET_MULTIPLEX: u8 = 0xA8;
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const COM_SCAN_INCREMENT: u8 = 0xC0;
    pub const COM_SCAN_DECREMENT: u8 = 0xC8;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DESELECT: u8 = 0xDB;
}

/// Panel wiring and power settings.
///
/// The defaults suit the common 128x64 module at address `0x3C`, mounted so
/// that column 0 / row 0 is the top-left corner.
#[derive(Copy, Clone, Debug, Eq, PartialEq, SmartDefault)]
pub struct Ssd1306Config {
    /// 7-bit I2C address; `0x3C` or `0x3D` depending on the module's strap.
    #[default = 0x3C]
    pub address: u8,
    /// Panel width in pixels, at most 128.
    #[default = 128]
    pub width: u8,
    /// Panel height in pixels: 16, 32 or 64.
    #[default = 64]
    pub height: u8,
    #[default = 0xCF]
    pub contrast: u8,
    /// Mirror columns (segment remap).
    #[default = true]
    pub segment_remap: bool,
    /// Mirror rows (scan COM outputs in reverse).
    #[default = true]
    pub com_scan_reversed: bool,
    /// Use the internal charge pump. Needed unless the module supplies VCC.
    #[default = true]
    pub charge_pump: bool,
    /// Show lit pixels dark and vice versa.
    #[default = false]
    pub inverted: bool,
}

impl Ssd1306Config {
    pub fn with_address(self, address: u8) -> Self {
        Ssd1306Config { address, ..self }
    }

    pub fn with_size(self, width: u8, height: u8) -> Self {
        Ssd1306Config {
            width,
            height,
            ..self
        }
    }

    pub fn with_contrast(self, contrast: u8) -> Self {
        Ssd1306Config { contrast, ..self }
    }

    /// Sets both mirroring options at once; `false` for both shows the panel
    /// rotated 180 degrees from the default.
    pub fn with_orientation(self, segment_remap: bool, com_scan_reversed: bool) -> Self {
        Ssd1306Config {
            segment_remap,
            com_scan_reversed,
            ..self
        }
    }

    pub fn with_charge_pump(self, charge_pump: bool) -> Self {
        Ssd1306Config {
            charge_pump,
            ..self
        }
    }

    pub fn with_inverted(self, inverted: bool) -> Self {
        Ssd1306Config { inverted, ..self }
    }

    /// Number of 8-row pages on the panel.
    pub fn pages(&self) -> usize {
        (usize::from(self.height) + 7) / 8
    }

    /// COM pin hardware configuration: alternative for 64-row panels,
    /// sequential for shorter ones.
    fn com_pins(&self) -> u8 {
        if self.height > 32 {
            0x12
        } else {
            0x02
        }
    }
}

/// Errors from the SSD1306 transport.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Ssd1306Error<E> {
    /// The I2C bus reported a failure.
    Bus(E),
    /// A buffer was offered whose shape doesn't match the configured panel.
    Geometry { width: usize, pages: usize },
}

impl<E: fmt::Debug> fmt::Display for Ssd1306Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ssd1306Error::Bus(e) => write!(f, "i2c error: {:?}", e),
            Ssd1306Error::Geometry { width, pages } => write!(
                f,
                "buffer of {} columns x {} pages does not match the panel",
                width, pages
            ),
        }
    }
}

/// SSD1306 transport over an `embedded-hal` I2C bus.
pub struct Ssd1306I2c<I2C> {
    i2c: I2C,
    config: Ssd1306Config,
}

impl<I2C: I2c> Ssd1306I2c<I2C> {
    pub fn new(i2c: I2C, config: Ssd1306Config) -> Self {
        Ssd1306I2c { i2c, config }
    }

    pub fn config(&self) -> &Ssd1306Config {
        &self.config
    }

    /// Gives the bus back.
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Sends one command with its arguments as a single write.
    fn command(&mut self, bytes: &[u8]) -> Result<(), Ssd1306Error<I2C::Error>> {
        self.i2c
            .transaction(
                self.config.address,
                &mut [
                    Operation::Write(&[CONTROL_COMMAND]),
                    Operation::Write(bytes),
                ],
            )
            .map_err(Ssd1306Error::Bus)
    }

    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), Ssd1306Error<I2C::Error>> {
        debug!("ssd1306: contrast {:#04x}", contrast);
        self.command(&[cmd::SET_CONTRAST, contrast])?;
        self.config.contrast = contrast;
        Ok(())
    }

    /// Turns the panel on or off. Display RAM is kept while off.
    pub fn set_display_on(&mut self, on: bool) -> Result<(), Ssd1306Error<I2C::Error>> {
        debug!("ssd1306: display {}", if on { "on" } else { "off" });
        self.command(&[if on { cmd::DISPLAY_ON } else { cmd::DISPLAY_OFF }])
    }

    pub fn set_inverted(&mut self, inverted: bool) -> Result<(), Ssd1306Error<I2C::Error>> {
        debug!("ssd1306: inverted {}", inverted);
        self.command(&[if inverted {
            cmd::INVERSE_DISPLAY
        } else {
            cmd::NORMAL_DISPLAY
        }])?;
        self.config.inverted = inverted;
        Ok(())
    }
}

impl<I2C: I2c> Transport for Ssd1306I2c<I2C> {
    type Error = Ssd1306Error<I2C::Error>;

    fn init(&mut self) -> Result<(), Self::Error> {
        let c = self.config;
        debug!(
            "ssd1306: init {}x{} at {:#04x}",
            c.width, c.height, c.address
        );

        self.command(&[cmd::DISPLAY_OFF])?;
        self.command(&[cmd::SET_MEMORY_MODE, cmd::MEMORY_MODE_HORIZONTAL])?;
        self.command(&[cmd::SET_MULTIPLEX, c.height.saturating_sub(1)])?;
        self.command(&[cmd::SET_DISPLAY_OFFSET, 0x00])?;
        self.command(&[cmd::SET_START_LINE])?;
        self.command(&[
            cmd::SET_CHARGE_PUMP,
            if c.charge_pump {
                cmd::CHARGE_PUMP_ON
            } else {
                cmd::CHARGE_PUMP_OFF
            },
        ])?;
        self.command(&[if c.segment_remap {
            cmd::SEGMENT_REMAP_ON
        } else {
            cmd::SEGMENT_REMAP_OFF
        }])?;
        self.command(&[if c.com_scan_reversed {
            cmd::COM_SCAN_DECREMENT
        } else {
            cmd::COM_SCAN_INCREMENT
        }])?;
        self.command(&[cmd::SET_COM_PINS, c.com_pins()])?;
        self.command(&[cmd::SET_CONTRAST, c.contrast])?;
        self.command(&[cmd::SET_PRECHARGE, 0xF1])?;
        self.command(&[cmd::SET_VCOM_DESELECT, 0x40])?;
        self.command(&[cmd::RESUME_FROM_RAM])?;
        self.command(&[if c.inverted {
            cmd::INVERSE_DISPLAY
        } else {
            cmd::NORMAL_DISPLAY
        }])?;
        self.command(&[cmd::DISPLAY_ON])?;

        debug!("ssd1306: init complete");
        Ok(())
    }

    fn transmit(
        &mut self,
        buffer: &[u8],
        width: usize,
        pages: usize,
    ) -> Result<(), Self::Error> {
        if width == 0
            || pages == 0
            || width != usize::from(self.config.width)
            || pages != self.config.pages()
            || buffer.len() != width * pages
        {
            return Err(Ssd1306Error::Geometry { width, pages });
        }

        // Both window ends fit in a byte: width and pages are nonzero and were
        // checked against the config above.
        self.command(&[
            cmd::SET_COLUMN_ADDRESS,
            0,
            (width - 1) as u8,
            cmd::SET_PAGE_ADDRESS,
            0,
            (pages - 1) as u8,
        ])?;

        self.i2c
            .transaction(
                self.config.address,
                &mut [Operation::Write(&[CONTROL_DATA]), Operation::Write(buffer)],
            )
            .map_err(Ssd1306Error::Bus)
    }
}

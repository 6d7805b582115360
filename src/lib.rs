//! Software rasterizer for monochrome, page-organized displays such as the
//! SSD1306 OLED controller.
//!
//! The pixel buffer lives in a `Framebuffer`, which stores the display the way
//! the controller does: horizontal pages of eight rows, one byte per column
//! per page, least significant bit at the top. Drawing operations (pixels,
//! lines, rectangles, rounded rectangles, text, bitmaps) mutate the buffer in
//! place and never fail; anything that falls off the edge is clipped.
//!
//! Getting the buffer onto glass is the job of a `Transport`. A `Display`
//! pairs a framebuffer with a transport and pushes the whole buffer on each
//! `flush`. The `ssd1306` module provides a transport for the SSD1306 on I2C.
//!
//! The shape algorithms themselves live in the `gfx` crate and work on any
//! `gfx::Canvas`.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

mod bitmap;
pub mod display;
pub mod framebuffer;
pub mod ssd1306;
mod text;
pub mod transport;

cfg_if::cfg_if! {
    if #[cfg(feature = "graphics")] {
        pub mod graphics;
    }
}

pub use display::{Display, Error};
pub use framebuffer::{buffer_len, Framebuffer, GeometryError};
pub use gfx::{Canvas, Quadrants};
pub use text::{CHAR_ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH};
pub use transport::Transport;

/// Width of the standard SSD1306 panel, in pixels.
pub const WIDTH: usize = 128;

/// Height of the standard SSD1306 panel, in pixels.
pub const HEIGHT: usize = 64;

/// Number of 8-row pages on the standard panel.
pub const PAGES: usize = HEIGHT / 8;

/// Size of a framebuffer for the standard panel, in bytes.
pub const BUFFER_LEN: usize = WIDTH * PAGES;

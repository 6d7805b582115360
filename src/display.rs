//! A framebuffer bound to a transport.

use core::fmt;
use core::ops::{Deref, DerefMut};

use log::{debug, trace, warn};

use crate::framebuffer::Framebuffer;
use crate::transport::Transport;

/// Errors from driving a display. Drawing itself can't fail; only getting the
/// pixels to the device can.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error<E> {
    /// The transport reported a failure. Nothing was retried.
    Transport(E),
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport(e) => write!(f, "transport failed: {:?}", e),
        }
    }
}

/// Owns a framebuffer and the transport that shows it.
///
/// Draw through the framebuffer (`Display` derefs to it), then `flush` to send
/// the result.
pub struct Display<B, T> {
    fb: Framebuffer<B>,
    transport: T,
}

impl<B, T> Display<B, T>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
    T: Transport,
{
    pub fn new(fb: Framebuffer<B>, transport: T) -> Self {
        Display { fb, transport }
    }

    /// Initializes the controller, then clears both the framebuffer and the
    /// panel.
    pub fn init(&mut self) -> Result<(), Error<T::Error>> {
        debug!(
            "initializing {}x{} display",
            self.fb.width(),
            self.fb.height()
        );
        if let Err(e) = self.transport.init() {
            warn!("display controller init failed");
            return Err(Error::Transport(e));
        }
        self.fb.fill(0x00);
        self.flush()?;
        debug!("display ready");
        Ok(())
    }

    /// Sends the entire framebuffer to the display.
    pub fn flush(&mut self) -> Result<(), Error<T::Error>> {
        let bytes = self.fb.as_bytes();
        trace!("flushing {} bytes", bytes.len());
        self.transport
            .transmit(bytes, self.fb.width(), self.fb.pages())
            .map_err(|e| {
                warn!("framebuffer transmit failed");
                Error::Transport(e)
            })
    }

    pub fn framebuffer(&self) -> &Framebuffer<B> {
        &self.fb
    }

    pub fn framebuffer_mut(&mut self) -> &mut Framebuffer<B> {
        &mut self.fb
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Takes the display apart.
    pub fn release(self) -> (Framebuffer<B>, T) {
        (self.fb, self.transport)
    }
}

impl<B, T> Deref for Display<B, T> {
    type Target = Framebuffer<B>;

    fn deref(&self) -> &Self::Target {
        &self.fb
    }
}

impl<B, T> DerefMut for Display<B, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.fb
    }
}

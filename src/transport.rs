//! The seam between the rasterizer and the wire.

/// Something that can push a finished framebuffer to a physical display.
///
/// Transports are synchronous: `transmit` returns once the whole buffer has
/// been sent (or has failed to send). They only ever read the buffer.
pub trait Transport {
    type Error;

    /// Brings the controller up. Called once, before the first `transmit`.
    fn init(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Sends `buffer`, `pages` rows of `width` bytes in page-major order, to
    /// the display.
    fn transmit(
        &mut self,
        buffer: &[u8],
        width: usize,
        pages: usize,
    ) -> Result<(), Self::Error>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    type Error = T::Error;

    fn init(&mut self) -> Result<(), Self::Error> {
        (**self).init()
    }

    fn transmit(
        &mut self,
        buffer: &[u8],
        width: usize,
        pages: usize,
    ) -> Result<(), Self::Error> {
        (**self).transmit(buffer, width, pages)
    }
}

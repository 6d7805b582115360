//! Overlaying packed 1bpp images.

use crate::framebuffer::Framebuffer;

impl<B> Framebuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Draws a `w` x `h` bitmap with its top-left corner at `(x, y)`.
    ///
    /// `data` is row-major and horizontally banked: each row is `ceil(w / 8)`
    /// bytes, and bit `k` of byte `n` in a row (least significant first) is the
    /// pixel in column `n * 8 + k`. Padding bits past `w` are ignored.
    ///
    /// Only the 1 bits do anything: they set pixels when `on` is true and
    /// clear them otherwise. 0 bits leave the display alone, so the bitmap acts
    /// as a stencil over the existing contents.
    ///
    /// If `data` is shorter than `h` full rows, drawing stops where the data
    /// does.
    pub fn draw_bitmap(
        &mut self,
        x: i16,
        y: i16,
        w: u16,
        h: u16,
        data: &[u8],
        on: bool,
    ) {
        if w == 0 {
            return;
        }
        let banks = (usize::from(w) + 7) / 8;
        let (x, y) = (i32::from(x), i32::from(y));
        let right = x + i32::from(w);
        let (width, height) = (self.width() as i32, self.height() as i32);

        for (row, bytes) in data.chunks(banks).take(usize::from(h)).enumerate() {
            let py = y + row as i32;
            // Rows off the display still consume their bytes; `chunks` keeps
            // us aligned.
            if py < 0 || py >= height {
                continue;
            }
            for (bank, &bits) in bytes.iter().enumerate() {
                let bank_x = x + bank as i32 * 8;
                for k in 0..8 {
                    let px = bank_x + k;
                    if px >= width || px >= right {
                        break;
                    }
                    if bits & (1 << k) != 0 {
                        self.set_pixel(px, py, on);
                    }
                }
            }
        }
    }
}

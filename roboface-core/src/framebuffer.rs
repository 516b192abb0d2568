//! Bit-packed monochrome framebuffer
//!
//! One bit per pixel in the SSD1306 native page layout: the panel is split
//! into horizontal pages of 8 rows, one byte per column within a page, bit 0
//! at the top of the page.

/// Panel width in pixels
pub const WIDTH: usize = 128;

/// Panel height in pixels
pub const HEIGHT: usize = 64;

/// Number of 8-row pages
pub const PAGES: usize = HEIGHT / 8;

/// In-memory mirror of the panel contents
///
/// Mutated by the rasterizer, read (never written) by the display driver
/// during flush. Out-of-range coordinates are clipped silently; partially
/// off-screen shapes are expected and not an error.
#[derive(Clone)]
pub struct Framebuffer {
    buffer: [[u8; WIDTH]; PAGES],
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framebuffer {
    /// Create a framebuffer with all pixels off
    pub const fn new() -> Self {
        Self {
            buffer: [[0; WIDTH]; PAGES],
        }
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        for page in self.buffer.iter_mut() {
            page.fill(0);
        }
    }

    /// Set every pixel on or off
    pub fn fill(&mut self, on: bool) {
        let byte = if on { 0xFF } else { 0x00 };
        for page in self.buffer.iter_mut() {
            page.fill(byte);
        }
    }

    /// Set or clear a single pixel, clipping out-of-range coordinates
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        if x < 0 || y < 0 || x >= WIDTH as i32 || y >= HEIGHT as i32 {
            return;
        }
        let page = (y >> 3) as usize;
        let bit = 1u8 << (y & 0x07);
        if on {
            self.buffer[page][x as usize] |= bit;
        } else {
            self.buffer[page][x as usize] &= !bit;
        }
    }

    /// Read a single pixel; out-of-range reads as off
    pub fn get_pixel(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= WIDTH as i32 || y >= HEIGHT as i32 {
            return false;
        }
        let page = (y >> 3) as usize;
        self.buffer[page][x as usize] & (1 << (y & 0x07)) != 0
    }

    /// One page of column bytes, for page-addressed transmission
    pub fn page(&self, index: usize) -> &[u8; WIDTH] {
        &self.buffer[index]
    }

    /// Iterate over pages top to bottom
    pub fn pages(&self) -> impl Iterator<Item = &[u8; WIDTH]> {
        self.buffer.iter()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Framebuffer {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Framebuffer({}x{})", WIDTH, HEIGHT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_round_trip() {
        let mut fb = Framebuffer::new();
        fb.set_pixel(5, 13, true);

        assert!(fb.get_pixel(5, 13));
        // y=13 lands in page 1, bit 5
        assert_eq!(fb.page(1)[5], 1 << 5);

        fb.set_pixel(5, 13, false);
        assert!(!fb.get_pixel(5, 13));
        assert_eq!(fb.page(1)[5], 0);
    }

    #[test]
    fn test_clear_resets_all_bits() {
        let mut fb = Framebuffer::new();
        fb.fill(true);
        fb.clear();
        for page in fb.pages() {
            assert!(page.iter().all(|&b| b == 0));
        }
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let mut fb = Framebuffer::new();
        fb.set_pixel(-1, 0, true);
        fb.set_pixel(0, -1, true);
        fb.set_pixel(WIDTH as i32, 0, true);
        fb.set_pixel(0, HEIGHT as i32, true);
        for page in fb.pages() {
            assert!(page.iter().all(|&b| b == 0));
        }
        assert!(!fb.get_pixel(-2, 1000));
    }

    #[test]
    fn test_corner_pixels_pack_where_expected() {
        let mut fb = Framebuffer::new();
        fb.set_pixel(0, 0, true);
        fb.set_pixel((WIDTH - 1) as i32, (HEIGHT - 1) as i32, true);

        assert_eq!(fb.page(0)[0], 0x01);
        assert_eq!(fb.page(PAGES - 1)[WIDTH - 1], 0x80);
    }
}

use std::io::{BufWriter, Write};
use std::path::Path;

/// An 8-bit RGB triple.
pub type Rgb = [u8; 3];

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("pixel ({x}, {y}) is outside the {width}x{height} buffer")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A software RGB frame buffer.
///
/// Row 0 is the bottom of the image, matching GL pixel transfers. Window
/// coordinates (row 0 at the top) go through [`FrameBuffer::plot_window_point`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl FrameBuffer {
    pub const BLACK: Rgb = [0, 0, 0];
    pub const WHITE: Rgb = [255, 255, 255];
    pub const RED: Rgb = [255, 0, 0];
    pub const GREEN: Rgb = [0, 255, 0];
    pub const BLUE: Rgb = [0, 0, 255];
    pub const YELLOW: Rgb = [255, 255, 0];
    pub const CYAN: Rgb = [0, 255, 255];

    /// A black buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 3],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGB bytes, bottom row first.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    fn offset(&self, x: i64, y: i64) -> Result<usize, RenderError> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return Err(RenderError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok((y as usize * self.width as usize + x as usize) * 3)
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgb) -> Result<(), RenderError> {
        let i = self.offset(i64::from(x), i64::from(y))?;
        self.pixels[i..i + 3].copy_from_slice(&color);
        Ok(())
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        let i = self.offset(i64::from(x), i64::from(y)).ok()?;
        Some([self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]])
    }

    /// Fill row `y` from `x0` to `x1`, both inclusive, in either order.
    pub fn draw_hline(&mut self, x0: u32, x1: u32, y: u32, color: Rgb) -> Result<(), RenderError> {
        let (lo, hi) = (x0.min(x1), x0.max(x1));
        let start = self.offset(i64::from(lo), i64::from(y))?;
        let end = self.offset(i64::from(hi), i64::from(y))? + 3;
        for px in self.pixels[start..end].chunks_exact_mut(3) {
            px.copy_from_slice(&color);
        }
        Ok(())
    }

    /// Set the pixel under a window-space point (y grows downward).
    pub fn plot_window_point(&mut self, x: i32, y: i32, color: Rgb) -> Result<(), RenderError> {
        let row = i64::from(self.height) - i64::from(y) - 1;
        let i = self.offset(i64::from(x), row)?;
        self.pixels[i..i + 3].copy_from_slice(&color);
        Ok(())
    }

    pub fn clear(&mut self, color: Rgb) {
        for px in self.pixels.chunks_exact_mut(3) {
            px.copy_from_slice(&color);
        }
    }

    /// Write a binary PPM (P6), top row first.
    pub fn write_ppm<W: Write>(&self, mut out: W) -> Result<(), RenderError> {
        write!(out, "P6\n{} {}\n255\n", self.width, self.height)?;
        let stride = self.width as usize * 3;
        if stride > 0 {
            for row in self.pixels.chunks_exact(stride).rev() {
                out.write_all(row)?;
            }
        }
        out.flush()?;
        Ok(())
    }

    pub fn save_ppm(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        let path = path.as_ref();
        let file = std::fs::File::create(path)?;
        self.write_ppm(BufWriter::new(file))?;
        tracing::info!(path = %path.display(), width = self.width, height = self.height, "wrote ppm");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_black() {
        let fb = FrameBuffer::new(4, 3);
        assert_eq!(fb.as_bytes().len(), 36);
        assert!(fb.as_bytes().iter().all(|b| *b == 0));
    }

    #[test]
    fn set_and_read_pixel() {
        let mut fb = FrameBuffer::new(4, 3);
        fb.set_pixel(3, 2, FrameBuffer::RED).unwrap();
        assert_eq!(fb.pixel(3, 2), Some(FrameBuffer::RED));
        assert_eq!(fb.pixel(2, 2), Some(FrameBuffer::BLACK));
        assert_eq!(fb.pixel(4, 0), None);
    }

    #[test]
    fn out_of_bounds_write_fails() {
        let mut fb = FrameBuffer::new(4, 3);
        let err = fb.set_pixel(0, 3, FrameBuffer::RED).unwrap_err();
        assert!(matches!(err, RenderError::OutOfBounds { x: 0, y: 3, .. }));
    }

    #[test]
    fn hline_covers_inclusive_span() {
        let mut fb = FrameBuffer::new(400, 300);
        fb.draw_hline(50, 249, 25, FrameBuffer::BLUE).unwrap();
        assert_eq!(fb.pixel(49, 25), Some(FrameBuffer::BLACK));
        assert_eq!(fb.pixel(50, 25), Some(FrameBuffer::BLUE));
        assert_eq!(fb.pixel(249, 25), Some(FrameBuffer::BLUE));
        assert_eq!(fb.pixel(250, 25), Some(FrameBuffer::BLACK));
        assert_eq!(fb.pixel(100, 24), Some(FrameBuffer::BLACK));
        let blue = fb
            .as_bytes()
            .chunks_exact(3)
            .filter(|px| *px == FrameBuffer::BLUE)
            .count();
        assert_eq!(blue, 200);
    }

    #[test]
    fn hline_past_edge_leaves_buffer_untouched() {
        let mut fb = FrameBuffer::new(10, 10);
        assert!(fb.draw_hline(5, 10, 0, FrameBuffer::BLUE).is_err());
        assert_eq!(fb, FrameBuffer::new(10, 10));
    }

    #[test]
    fn plot_window_point_flips_y() {
        let mut fb = FrameBuffer::new(400, 300);
        fb.plot_window_point(10, 0, FrameBuffer::RED).unwrap();
        assert_eq!(fb.pixel(10, 299), Some(FrameBuffer::RED));
        fb.plot_window_point(20, 299, FrameBuffer::RED).unwrap();
        assert_eq!(fb.pixel(20, 0), Some(FrameBuffer::RED));
        assert!(fb.plot_window_point(0, 300, FrameBuffer::RED).is_err());
        assert!(fb.plot_window_point(-1, 0, FrameBuffer::RED).is_err());
    }

    #[test]
    fn clear_fills_every_pixel() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.clear(FrameBuffer::WHITE);
        assert!(fb.as_bytes().iter().all(|b| *b == 255));
    }

    #[test]
    fn ppm_writes_top_row_first() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.set_pixel(0, 0, FrameBuffer::RED).unwrap();
        fb.set_pixel(1, 1, FrameBuffer::GREEN).unwrap();
        let mut bytes = Vec::new();
        fb.write_ppm(&mut bytes).unwrap();

        let header = b"P6\n2 2\n255\n";
        assert_eq!(&bytes[..header.len()], header);
        let body = &bytes[header.len()..];
        assert_eq!(body.len(), 12);
        // Top row: black, green. Bottom row: red, black.
        assert_eq!(&body[3..6], &FrameBuffer::GREEN);
        assert_eq!(&body[6..9], &FrameBuffer::RED);
    }

    #[test]
    fn save_ppm_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("line.ppm");
        let mut fb = FrameBuffer::new(400, 300);
        fb.draw_hline(50, 249, 25, FrameBuffer::BLUE).unwrap();
        fb.save_ppm(&path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"P6\n400 300\n255\n"));
        assert_eq!(bytes.len(), "P6\n400 300\n255\n".len() + 400 * 300 * 3);
    }
}

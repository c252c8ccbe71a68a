//=========================================================================
// Canvas
//=========================================================================
//
// In-memory RGBA pixel buffer implementing `Surface`.
//
// Layout: row-major, `pixels[y * width + x]`.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{Color, Surface};

//=== Canvas ==============================================================

/// Software surface backed by a `Vec<Color>`.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
    frames: u64,
}

impl Canvas {
    /// Creates a fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::TRANSPARENT; width as usize * height as usize],
            frames: 0,
        }
    }

    /// Raw pixel rows, top to bottom.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Counts pixels equal to `color`.
    pub fn count(&self, color: Color) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

impl Surface for Canvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Color) {
        let x_end = x.saturating_add(w).min(self.width);
        let y_end = y.saturating_add(h).min(self.height);

        for row in y..y_end {
            let start = self.index(x, row);
            let end = self.index(x_end, row);
            if start < end {
                self.pixels[start..end].fill(color);
            }
        }
    }

    fn present(&mut self) {
        self.frames += 1;
    }

    fn frames_presented(&self) -> u64 {
        self.frames
    }

    fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x < self.width && y < self.height {
            Some(self.pixels[self.index(x, y)])
        } else {
            None
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

use super::PixelTarget;
use sdl2::pixels::Color;
use sdl2::rect::Rect;

/// Headless pixel target: a row-major grid of colors.
#[derive(Clone, Debug)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32, color: Color) -> FrameBuffer {
        FrameBuffer {
            width,
            height,
            pixels: vec![color; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `None` outside the buffer.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    pub fn count(&self, color: Color) -> usize {
        self.pixels.iter().filter(|&&c| c == color).count()
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }
}

impl PixelTarget for FrameBuffer {
    fn fill(&mut self, area: Rect, color: Color) -> anyhow::Result<()> {
        let x0 = area.left().max(0);
        let y0 = area.top().max(0);
        let x1 = area.right().min(self.width as i32);
        let y1 = area.bottom().min(self.height as i32);
        for y in y0..y1 {
            for x in x0..x1 {
                let i = y as usize * self.width as usize + x as usize;
                self.pixels[i] = color;
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Color) -> anyhow::Result<()> {
        for pixel in self.pixels.iter_mut() {
            *pixel = color;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{BLACK, WHITE};

    #[test]
    fn fill_clips_to_the_buffer() {
        let mut frame = FrameBuffer::new(4, 3, BLACK);
        frame.fill(Rect::new(-1, 1, 10, 10), WHITE).unwrap();
        assert_eq!(frame.count(WHITE), 8);
        assert_eq!(frame.pixel(0, 0), Some(BLACK));
        assert_eq!(frame.pixel(3, 2), Some(WHITE));
        assert_eq!(frame.pixel(4, 2), None);
    }

    #[test]
    fn put_pixel_truncates_coordinates() {
        let mut frame = FrameBuffer::new(4, 4, BLACK);
        frame.put_pixel(2.9, 1.1, WHITE).unwrap();
        assert_eq!(frame.pixel(2, 1), Some(WHITE));
        assert_eq!(frame.count(WHITE), 1);
        frame.clear(BLACK).unwrap();
        assert_eq!(frame.count(BLACK), 16);
    }
}

use crate::foundation::core::Canvas;
use crate::foundation::error::{CloudError, CloudResult};

/// A rendered frame as RGBA8 pixels.
///
/// Colorcloud frames carry **straight** (non-premultiplied) alpha, which is what the PNG and APNG
/// encoders expect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl FrameRGBA {
    /// Allocate a fully transparent frame.
    pub fn transparent(width: u32, height: u32) -> Self {
        let canvas = Canvas { width, height };
        Self {
            width,
            height,
            data: vec![0; canvas.rgba_len()],
        }
    }

    /// Frame dimensions.
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    /// Check that `data` matches the declared dimensions.
    pub fn validate(&self) -> CloudResult<()> {
        let expected = self.canvas().rgba_len();
        if self.data.len() != expected {
            return Err(CloudError::validation(format!(
                "frame data is {} bytes, expected {expected} for {}x{}",
                self.data.len(),
                self.width,
                self.height
            )));
        }
        Ok(())
    }

    /// Bytes per row.
    pub fn stride(&self) -> usize {
        self.width as usize * 4
    }

    /// Borrow row `y`.
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.stride();
        let start = y as usize * stride;
        &self.data[start..start + stride]
    }

    /// RGBA of pixel `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Copy `src` into this frame with its top-left corner at `(x0, y0)`.
    ///
    /// The destination rectangle must lie entirely inside this frame.
    pub fn blit(&mut self, src: &FrameRGBA, x0: u32, y0: u32) -> CloudResult<()> {
        if x0.saturating_add(src.width) > self.width || y0.saturating_add(src.height) > self.height
        {
            return Err(CloudError::validation(format!(
                "blit of {}x{} at ({x0}, {y0}) exceeds {}x{} target",
                src.width, src.height, self.width, self.height
            )));
        }

        let dst_stride = self.stride();
        let row_bytes = src.stride();
        let x_off = x0 as usize * 4;
        for y in 0..src.height {
            let dst_start = (y0 + y) as usize * dst_stride + x_off;
            self.data[dst_start..dst_start + row_bytes].copy_from_slice(src.row(y));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;

use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{CloudError, CloudResult};

/// Grid geometry for packing `frame_count` tiles of `tile` size into `columns` columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SheetLayout {
    frame_count: u32,
    columns: u32,
    rows: u32,
    tile: Canvas,
}

/// Tile slot of one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileSlot {
    /// 0-based tile row.
    pub row: u32,
    /// 0-based tile column.
    pub col: u32,
    /// Pixel x of the tile's left edge.
    pub x: u32,
    /// Pixel y of the tile's top edge.
    pub y: u32,
}

impl SheetLayout {
    /// Compute `rows = ceil(frame_count / columns)` and validate the resulting sheet size.
    pub fn new(frame_count: u32, columns: u32, tile: Canvas) -> CloudResult<Self> {
        if columns == 0 {
            return Err(CloudError::validation("sheet columns must be >= 1"));
        }
        if frame_count == 0 {
            return Err(CloudError::validation("sheet needs at least one frame"));
        }
        tile.validate()?;

        let rows = frame_count.div_ceil(columns);
        if tile.width.checked_mul(columns).is_none() || tile.height.checked_mul(rows).is_none() {
            return Err(CloudError::validation(format!(
                "sheet of {columns}x{rows} tiles of {}x{} overflows u32 dimensions",
                tile.width, tile.height
            )));
        }

        Ok(Self {
            frame_count,
            columns,
            rows,
            tile,
        })
    }

    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn tile(&self) -> Canvas {
        self.tile
    }

    /// Total tile slots, including unused trailing ones.
    pub fn slot_count(&self) -> u32 {
        self.columns * self.rows
    }

    /// Full sheet size in pixels.
    pub fn sheet_canvas(&self) -> Canvas {
        Canvas {
            width: self.tile.width * self.columns,
            height: self.tile.height * self.rows,
        }
    }

    /// Slot of tile `index`. Defined for every slot in `0..slot_count()`, not just filled ones.
    pub fn slot(&self, index: u32) -> Option<TileSlot> {
        if index >= self.slot_count() {
            return None;
        }
        let row = index / self.columns;
        let col = index % self.columns;
        Some(TileSlot {
            row,
            col,
            x: col * self.tile.width,
            y: row * self.tile.height,
        })
    }

    /// Playback metadata for this layout.
    pub fn meta(&self, fps: Fps, loop_seconds: Option<f64>) -> SheetMeta {
        let sheet = self.sheet_canvas();
        SheetMeta {
            columns: self.columns,
            rows: self.rows,
            frame_count: self.frame_count,
            fps,
            frame_width: self.tile.width,
            frame_height: self.tile.height,
            sheet_width: sheet.width,
            sheet_height: sheet.height,
            loop_seconds,
        }
    }
}

/// Out-of-band description a playback shader needs to slice a sheet.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SheetMeta {
    /// Tiles per row.
    pub columns: u32,
    /// Tile rows, `ceil(frame_count / columns)`.
    pub rows: u32,
    /// Filled tiles; trailing slots past this are transparent.
    pub frame_count: u32,
    /// Playback rate.
    pub fps: Fps,
    /// Tile width in pixels.
    pub frame_width: u32,
    /// Tile height in pixels.
    pub frame_height: u32,
    /// Sheet width in pixels.
    pub sheet_width: u32,
    /// Sheet height in pixels.
    pub sheet_height: u32,
    /// Set when frames were rendered with loop-exact phase.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loop_seconds: Option<f64>,
}

#[cfg(test)]
#[path = "../../tests/unit/sheet/layout.rs"]
mod tests;

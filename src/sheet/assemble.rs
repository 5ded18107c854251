use crate::foundation::error::{CloudError, CloudResult};
use crate::render::frame::FrameRGBA;
use crate::sheet::layout::SheetLayout;

/// Pack `frames` row-major into a sheet with `columns` tiles per row.
///
/// Every frame must have the size of the first one. Unfilled trailing slots stay fully
/// transparent.
pub fn assemble_sheet(frames: &[FrameRGBA], columns: u32) -> CloudResult<(SheetLayout, FrameRGBA)> {
    let Some(first) = frames.first() else {
        return Err(CloudError::validation("sheet needs at least one frame"));
    };
    let frame_count = u32::try_from(frames.len())
        .map_err(|_| CloudError::validation("too many frames for one sheet"))?;
    let layout = SheetLayout::new(frame_count, columns, first.canvas())?;

    let size = layout.sheet_canvas();
    let mut sheet = FrameRGBA::transparent(size.width, size.height);
    for (i, frame) in frames.iter().enumerate() {
        place_tile(&layout, &mut sheet, i as u32, frame)?;
    }
    Ok((layout, sheet))
}

/// Copy `frame` into slot `index` of `sheet`.
pub fn place_tile(
    layout: &SheetLayout,
    sheet: &mut FrameRGBA,
    index: u32,
    frame: &FrameRGBA,
) -> CloudResult<()> {
    if index >= layout.frame_count() {
        return Err(CloudError::validation(format!(
            "tile index {index} out of range for {} frames",
            layout.frame_count()
        )));
    }
    if frame.canvas() != layout.tile() {
        return Err(CloudError::validation(format!(
            "frame {index} is {}x{}, sheet tiles are {}x{}",
            frame.width,
            frame.height,
            layout.tile().width,
            layout.tile().height
        )));
    }
    frame.validate()?;

    let slot = layout
        .slot(index)
        .ok_or_else(|| CloudError::validation(format!("no slot for tile {index}")))?;
    sheet.blit(frame, slot.x, slot.y)
}

#[cfg(test)]
#[path = "../../tests/unit/sheet/assemble.rs"]
mod tests;

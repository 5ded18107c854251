//! Sprite-sheet packing.
//!
//! Frames are laid out row-major into a grid of equally sized tiles; a [`layout::SheetMeta`]
//! record carries what a playback shader needs to slice the sheet again.

/// Copies an ordered frame sequence into a sheet.
pub mod assemble;
/// Tile geometry and playback metadata.
pub mod layout;

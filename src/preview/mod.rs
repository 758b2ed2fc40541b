//! Magnified preview of the pixels surrounding the last sample point.

use crate::capture::{CaptureBackend, PixelSampler};
use crate::geometry::{Color, ScreenPoint};

/// Side length of the preview neighborhood, in screen pixels.
pub const GRID_SIZE: usize = 5;

/// Row/column index of the exact sampled pixel.
pub const CENTER: usize = GRID_SIZE / 2;

/// Snapshot of the last-sampled neighborhood. Row-major, `grid[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewGrid {
    cells: [[Color; GRID_SIZE]; GRID_SIZE],
}

impl PreviewGrid {
    pub const fn filled(color: Color) -> Self {
        Self {
            cells: [[color; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// `None` when the index is outside the fixed grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<Color> {
        self.cells.get(row)?.get(col).copied()
    }

    /// The exact sampled pixel, drawn with the highlighted border.
    pub fn center(&self) -> Color {
        self.cells[CENTER][CENTER]
    }
}

impl Default for PreviewGrid {
    fn default() -> Self {
        Self::filled(Color::BLACK)
    }
}

/// Holds the grid between render passes. A refresh captures a fresh
/// neighborhood; the transient capture is dropped when the call returns and
/// only the color values persist for redraw. A failed capture keeps the
/// previous grid so the collaborator redraws it unchanged.
#[derive(Debug, Default)]
pub struct PreviewRenderer {
    grid: PreviewGrid,
    has_sample: bool,
}

impl PreviewRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-samples the neighborhood around `anchor`. Returns whether the grid
    /// was updated.
    pub fn refresh<B: CaptureBackend>(
        &mut self,
        sampler: &PixelSampler<B>,
        anchor: ScreenPoint,
    ) -> bool {
        let pixels = match sampler.sample_neighborhood(anchor, GRID_SIZE as u32) {
            Ok(pixels) => pixels,
            Err(err) => {
                tracing::debug!(?err, "preview capture failed; keeping previous grid");
                return false;
            }
        };

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                // Cells clipped off the screen edge fall back to black.
                self.grid.cells[row][col] = pixels
                    .color_at(col as u32, row as u32)
                    .unwrap_or(Color::BLACK);
            }
        }
        self.has_sample = true;
        true
    }

    pub fn grid(&self) -> &PreviewGrid {
        &self.grid
    }

    /// Whether a real neighborhood has ever been captured; the center border
    /// is only drawn once this is true.
    pub fn has_sample(&self) -> bool {
        self.has_sample
    }
}

//! Grid Layout Mapper
//!
//! Lays a list of alignments out as rows of [`GRID_SIZE`] cells and tags each
//! cell with a stable id (`"{prefix}-{index}"`) a UI can key focusable items
//! by. The grid is owned by the caller; nothing here keeps it.

use crate::matrix::{index_of, ALIGNMENTS, GRID_SIZE};
use crate::types::{AlignmentPair, Descriptor, LayoutDirection};

/// One laid-out cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub values: AlignmentPair,
    /// Position in the original (flat) sequence.
    pub index: usize,
    pub id: String,
}

impl GridCell {
    /// Space-joined value, e.g. `"left top"`.
    pub fn label(&self) -> String {
        self.values.to_string()
    }
}

/// Id for the cell at `index` under `prefix`.
pub fn cell_id(prefix: &str, index: usize) -> String {
    format!("{prefix}-{index}")
}

/// Chunk `alignments` into rows of [`GRID_SIZE`], preserving order.
///
/// A trailing partial row is kept as-is.
pub fn map_to_grid(alignments: &[AlignmentPair], prefix: &str) -> Vec<Vec<GridCell>> {
    alignments
        .iter()
        .enumerate()
        .map(|(index, values)| GridCell {
            values: *values,
            index,
            id: cell_id(prefix, index),
        })
        .collect::<Vec<_>>()
        .chunks(GRID_SIZE)
        .map(<[GridCell]>::to_vec)
        .collect()
}

/// [`map_to_grid`] over the nine canonical alignments.
pub fn default_grid(prefix: &str) -> Vec<Vec<GridCell>> {
    map_to_grid(&ALIGNMENTS, prefix)
}

/// `index` of the first cell whose id is `id`.
pub fn cell_index_from_id(grid: &[Vec<GridCell>], id: &str) -> Option<usize> {
    grid.iter().flatten().find(|cell| cell.id == id).map(|cell| cell.index)
}

/// Id of the canonical cell a descriptor resolves to.
pub fn item_id<'a>(
    prefix: &str,
    descriptor: impl Into<Descriptor<'a>>,
    direction: LayoutDirection,
) -> Option<String> {
    index_of(descriptor, direction).map(|index| cell_id(prefix, index))
}

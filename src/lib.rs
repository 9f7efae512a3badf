//! # spark-align
//!
//! Alignment matrix resolver for anchor-picker controls.
//!
//! A 3x3 grid of anchor positions (`top left` … `bottom right`) viewed three
//! ways: canonical names, linear indices 0–8, and `[row, col]` coordinates.
//! Descriptors are normalized leniently (case, `middle` synonym, hyphens,
//! the `center` shorthand), left/right are mirrored under RTL, and arrow-style
//! navigation clamps at the grid edges.
//!
//! Every operation is pure. The only input besides the arguments is the
//! [`LayoutDirection`], which callers pass explicitly (directly or through an
//! [`AlignmentResolver`]).
//!
//! ## Modules
//!
//! - [`types`] - Core value types (AxisToken, AlignmentPair, Direction, Edges, ...)
//! - [`normalize`] - Descriptor normalization and RTL mirroring
//! - [`matrix`] - Constant tables, lookups and navigation
//! - [`grid`] - Grid layout of cells with stable ids
//! - [`layout`] - Taffy flexbox alignment for a chosen anchor
//! - [`resolver`] - Config-owning facade
//!
//! ```
//! use spark_align::{index_of, next_index, value_at_index, Direction, LayoutDirection};
//!
//! let index = index_of("middle-left", LayoutDirection::Ltr).unwrap();
//! assert_eq!(index, 3);
//! let next = next_index(index, Some(Direction::Up));
//! assert_eq!(value_at_index(next), "left top");
//! ```

pub mod error;
pub mod grid;
pub mod layout;
pub mod matrix;
pub mod normalize;
pub mod resolver;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use error::ParseError;

pub use normalize::{mirror_token, normalize, Normalized};

pub use matrix::{
    coords_of, coords_of_or_origin, edges_of, index_from_coords, index_of, is_valid, next_index,
    value_at_index, values_of, ALIGNMENTS, ALIGNMENT_MATRIX, GRID_SIZE,
};

pub use grid::{cell_id, cell_index_from_id, default_grid, item_id, map_to_grid, GridCell};

pub use resolver::{AlignmentResolver, ResolverConfig};

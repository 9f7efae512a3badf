//! Layout Module - anchoring content with the alignment matrix
//!
//! Bridges canonical [`AlignmentPair`](crate::AlignmentPair)s to
//! [Taffy](https://github.com/DioxusLabs/taffy) flexbox styles, so the cell a
//! user picks in the matrix decides where a box's content is placed.
//!
//! # Example
//!
//! ```
//! use spark_align::layout::anchored_style;
//! use spark_align::ALIGNMENTS;
//!
//! let style = anchored_style(ALIGNMENTS[8]);
//! assert!(style.align_items.is_some());
//! ```

mod taffy_bridge;

pub use taffy_bridge::{anchored_style, apply_to_style, flex_alignment, FlexAlignment};

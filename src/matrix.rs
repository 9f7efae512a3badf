//! Alignment Matrix - constant 3x3 tables and the lookups over them
//!
//! Three equivalent views of the same nine cells:
//!
//! ```text
//!   name             index      coords
//!   left top    0    0 1 2      [0,0] [0,1] [0,2]
//!   center top  1    3 4 5      [1,0] [1,1] [1,2]
//!   ...              6 7 8      [2,0] [2,1] [2,2]
//! ```
//!
//! Every function is pure. Misses are reported as `None` or a
//! caller-supplied fallback, never as an error.

use crate::normalize::normalize;
use crate::types::{AlignmentPair, AxisToken, Descriptor, Direction, Edges, GridCoords, LayoutDirection};

// =============================================================================
// CONSTANT TABLES
// =============================================================================

/// Cells per row and per column.
pub const GRID_SIZE: usize = 3;

/// Row-major index table.
pub const ALIGNMENT_MATRIX: [[usize; GRID_SIZE]; GRID_SIZE] = [[0, 1, 2], [3, 4, 5], [6, 7, 8]];

/// Vertical-then-horizontal enumeration the canonical list is generated from.
const BASE_ALIGNMENTS: [(AxisToken, AxisToken); GRID_SIZE * GRID_SIZE] = [
    (AxisToken::Top, AxisToken::Left),
    (AxisToken::Top, AxisToken::Center),
    (AxisToken::Top, AxisToken::Right),
    (AxisToken::Center, AxisToken::Left),
    (AxisToken::Center, AxisToken::Center),
    (AxisToken::Center, AxisToken::Right),
    (AxisToken::Bottom, AxisToken::Left),
    (AxisToken::Bottom, AxisToken::Center),
    (AxisToken::Bottom, AxisToken::Right),
];

const fn canonical_alignments() -> [AlignmentPair; GRID_SIZE * GRID_SIZE] {
    let mut out = [AlignmentPair::sorted(AxisToken::Center, AxisToken::Center); GRID_SIZE * GRID_SIZE];
    let mut i = 0;
    while i < BASE_ALIGNMENTS.len() {
        let (a, b) = BASE_ALIGNMENTS[i];
        out[i] = AlignmentPair::sorted(a, b);
        i += 1;
    }
    out
}

/// The nine canonical pairs, position == matrix index.
pub const ALIGNMENTS: [AlignmentPair; GRID_SIZE * GRID_SIZE] = canonical_alignments();

// =============================================================================
// DESCRIPTOR LOOKUPS
// =============================================================================

/// True iff the descriptor normalizes to one of the nine cells.
pub fn is_valid<'a>(descriptor: impl Into<Descriptor<'a>>, direction: LayoutDirection) -> bool {
    normalize(descriptor, direction).to_pair().is_some()
}

/// Canonical pair for a descriptor, or `None` if it names no cell.
pub fn values_of<'a>(
    descriptor: impl Into<Descriptor<'a>>,
    direction: LayoutDirection,
) -> Option<AlignmentPair> {
    let tokens = normalize(descriptor, direction);
    if tokens.len() > 2 {
        log::trace!("rejecting alignment with {} tokens: {}", tokens.len(), tokens);
        return None;
    }

    let pair = tokens.to_pair();
    if pair.is_none() {
        log::trace!("no alignment matches `{}`", tokens);
    }
    pair
}

/// Matrix index of a descriptor.
pub fn index_of<'a>(descriptor: impl Into<Descriptor<'a>>, direction: LayoutDirection) -> Option<usize> {
    let pair = values_of(descriptor, direction)?;
    ALIGNMENTS.iter().position(|candidate| *candidate == pair)
}

/// Space-joined canonical value at `index`; empty string when out of range.
pub fn value_at_index(index: usize) -> String {
    ALIGNMENTS
        .get(index)
        .map(|pair| pair.to_string())
        .unwrap_or_default()
}

// =============================================================================
// COORDINATES
// =============================================================================

/// `[row, col]` of the cell holding `index`, or `None` for an index outside 0..9.
pub fn coords_of(index: usize) -> Option<GridCoords> {
    ALIGNMENT_MATRIX.iter().enumerate().find_map(|(row, cells)| {
        cells
            .iter()
            .position(|cell| *cell == index)
            .map(|col| GridCoords::new(row as i32, col as i32))
    })
}

/// Like [`coords_of`] but falls back to `[0,0]` on a miss.
///
/// The fallback is indistinguishable from a real hit on index 0. Navigation
/// keeps it so an out-of-range index still moves from the top-left cell.
pub fn coords_of_or_origin(index: usize) -> GridCoords {
    coords_of(index).unwrap_or_else(|| {
        log::trace!("index {} is not in the alignment matrix, using origin", index);
        GridCoords::ORIGIN
    })
}

/// Table value at `coords`, or `fallback` when either axis is out of range.
pub fn index_from_coords(coords: GridCoords, fallback: usize) -> usize {
    if !coords.in_bounds() {
        return fallback;
    }
    ALIGNMENT_MATRIX[coords.row as usize][coords.col as usize]
}

/// Grid borders touched by the cell at `index` (empty for unknown indices).
pub fn edges_of(index: usize) -> Edges {
    let Some(GridCoords { row, col }) = coords_of(index) else {
        return Edges::empty();
    };
    let last = GRID_SIZE as i32 - 1;

    let mut edges = Edges::empty();
    if row == 0 {
        edges |= Edges::TOP;
    }
    if row == last {
        edges |= Edges::BOTTOM;
    }
    if col == 0 {
        edges |= Edges::LEFT;
    }
    if col == last {
        edges |= Edges::RIGHT;
    }
    edges
}

// =============================================================================
// NAVIGATION
// =============================================================================

/// Index reached by one step from `current`.
///
/// `None` leaves a valid index where it is. At a grid edge the move is
/// ignored and `current` is returned unchanged; moves never wrap. An index
/// outside the matrix is treated as sitting on the origin.
pub fn next_index(current: usize, direction: Option<Direction>) -> usize {
    let Some(direction) = direction else {
        return index_from_coords(coords_of_or_origin(current), current);
    };

    let target = coords_of_or_origin(current).shifted(direction);
    if !target.in_bounds() {
        log::debug!("move {} from index {} clamped at grid edge", direction, current);
    }
    index_from_coords(target, current)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const LTR: LayoutDirection = LayoutDirection::Ltr;
    const RTL: LayoutDirection = LayoutDirection::Rtl;

    #[test]
    fn test_alignments_are_sorted_base_pairs() {
        let names: Vec<String> = ALIGNMENTS.iter().map(|p| p.to_string()).collect();
        assert_eq!(
            names,
            [
                "left top",
                "center top",
                "right top",
                "center left",
                "center center",
                "center right",
                "bottom left",
                "bottom center",
                "bottom right",
            ]
        );
    }

    #[test]
    fn test_matrix_is_bijective() {
        let mut seen: Vec<usize> = ALIGNMENT_MATRIX.iter().flatten().copied().collect();
        seen.sort();
        assert_eq!(seen, (0..9).collect::<Vec<_>>());
    }

    // =========================================================================
    // Descriptor lookups
    // =========================================================================

    #[rstest]
    #[case("top left", Some(0))]
    #[case("top center", Some(1))]
    #[case("top right", Some(2))]
    #[case("center left", Some(3))]
    #[case("center", Some(4))]
    #[case("middle middle", Some(4))]
    #[case("center right", Some(5))]
    #[case("bottom-left", Some(6))]
    #[case("bottom center", Some(7))]
    #[case("BOTTOM RIGHT", Some(8))]
    #[case("top bottom", None)]
    #[case("diagonal up", None)]
    #[case("top", None)]
    #[case("", None)]
    #[case("top  left", None)]
    #[case("center ", None)]
    #[case("top--left", None)]
    fn test_index_of(#[case] input: &str, #[case] expected: Option<usize>) {
        assert_eq!(index_of(input, LTR), expected);
    }

    #[test]
    fn test_index_of_rtl() {
        assert_eq!(index_of("top left", RTL), Some(2));
        assert_eq!(index_of("bottom right", RTL), Some(6));
        assert_eq!(index_of("center", RTL), Some(4));
    }

    #[test]
    fn test_is_valid() {
        assert!(is_valid("top left", LTR));
        assert!(is_valid(&["center", "right"], LTR));
        assert!(!is_valid("diagonal up", LTR));
        assert!(!is_valid(Descriptor::Omitted, LTR));
        assert!(!is_valid(&["top-left"], LTR));
        assert!(!is_valid(&["top", "", "left"], LTR));
    }

    #[test]
    fn test_values_of_rejects_more_than_two_tokens() {
        assert_eq!(values_of("a b c", LTR), None);
        assert_eq!(values_of("top left center", LTR), None);
        assert_eq!(values_of("top  left", LTR), None);
    }

    #[test]
    fn test_values_of_returns_canonical_pair() {
        let pair = values_of("Left-Top", LTR).unwrap();
        assert_eq!(pair, ALIGNMENTS[0]);
    }

    #[test]
    fn test_value_at_index() {
        assert_eq!(value_at_index(0), "left top");
        assert_eq!(value_at_index(4), "center center");
        assert_eq!(value_at_index(9), "");
        assert_eq!(value_at_index(usize::MAX), "");
    }

    #[test]
    fn test_value_at_index_round_trip() {
        for i in 0..ALIGNMENTS.len() {
            assert_eq!(index_of(value_at_index(i).as_str(), LTR), Some(i));
        }
    }

    // =========================================================================
    // Coordinates
    // =========================================================================

    #[test]
    fn test_coords_of() {
        assert_eq!(coords_of(0), Some(GridCoords::new(0, 0)));
        assert_eq!(coords_of(5), Some(GridCoords::new(1, 2)));
        assert_eq!(coords_of(8), Some(GridCoords::new(2, 2)));
        assert_eq!(coords_of(9), None);
        assert_eq!(coords_of(usize::MAX), None);
    }

    #[test]
    fn test_coords_of_or_origin() {
        assert_eq!(coords_of_or_origin(7), GridCoords::new(2, 1));
        assert_eq!(coords_of_or_origin(42), GridCoords::ORIGIN);
    }

    #[test]
    fn test_index_from_coords() {
        assert_eq!(index_from_coords(GridCoords::new(1, 1), 99), 4);
        assert_eq!(index_from_coords(GridCoords::new(2, 0), 99), 6);
        assert_eq!(index_from_coords(GridCoords::new(3, 0), 7), 7);
        assert_eq!(index_from_coords(GridCoords::new(0, -1), 7), 7);
        assert_eq!(index_from_coords(GridCoords::new(i32::MIN, i32::MAX), 7), 7);
    }

    #[test]
    fn test_edges_of() {
        assert_eq!(edges_of(0), Edges::TOP | Edges::LEFT);
        assert_eq!(edges_of(1), Edges::TOP);
        assert_eq!(edges_of(4), Edges::empty());
        assert_eq!(edges_of(8), Edges::BOTTOM | Edges::RIGHT);
        assert_eq!(edges_of(99), Edges::empty());
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    #[rstest]
    #[case(0, Direction::Up, 0)]
    #[case(0, Direction::Left, 0)]
    #[case(0, Direction::Right, 1)]
    #[case(0, Direction::Down, 3)]
    #[case(4, Direction::Left, 3)]
    #[case(4, Direction::Up, 1)]
    #[case(4, Direction::Down, 7)]
    #[case(4, Direction::Right, 5)]
    #[case(8, Direction::Right, 8)]
    #[case(8, Direction::Down, 8)]
    #[case(2, Direction::Right, 2)]
    #[case(6, Direction::Left, 6)]
    fn test_next_index(#[case] current: usize, #[case] direction: Direction, #[case] expected: usize) {
        assert_eq!(next_index(current, Some(direction)), expected);
    }

    #[test]
    fn test_next_index_without_direction_is_noop() {
        for i in 0..9 {
            assert_eq!(next_index(i, None), i);
        }
        assert_eq!(next_index(4, Direction::parse("sideways")), 4);
    }

    #[test]
    fn test_next_index_never_wraps() {
        for i in 0..9 {
            for direction in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
                let next = next_index(i, Some(direction));
                if edges_of(i).blocks(direction) {
                    assert_eq!(next, i);
                } else {
                    assert_ne!(next, i);
                }
            }
        }
    }

    #[test]
    fn test_next_index_from_unknown_index_starts_at_origin() {
        assert_eq!(next_index(42, Some(Direction::Right)), 1);
        assert_eq!(next_index(42, Some(Direction::Up)), 42);
    }
}

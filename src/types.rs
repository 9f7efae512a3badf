//! Core types for spark-align.
//!
//! Everything here is a small immutable value type. The lookup tables that
//! give these values meaning live in [`crate::matrix`].

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::matrix::ALIGNMENTS;

// =============================================================================
// Axis Tokens
// =============================================================================

/// One axis keyword of an alignment.
///
/// Variants are declared in lexicographic order of their names, so the
/// derived `Ord` agrees with sorting the keywords as strings. Canonical
/// pairs rely on that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum AxisToken {
    Bottom = 0,
    Center = 1,
    Left = 2,
    Right = 3,
    Top = 4,
}

impl AxisToken {
    pub const ALL: [Self; 5] = [Self::Bottom, Self::Center, Self::Left, Self::Right, Self::Top];

    /// Lowercase keyword.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bottom => "bottom",
            Self::Center => "center",
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
        }
    }

    /// True for tokens that can sit on the vertical axis (top, center, bottom).
    pub const fn is_vertical(&self) -> bool {
        matches!(self, Self::Top | Self::Center | Self::Bottom)
    }

    /// True for tokens that can sit on the horizontal axis (left, center, right).
    pub const fn is_horizontal(&self) -> bool {
        matches!(self, Self::Left | Self::Center | Self::Right)
    }

    /// Swap left and right; everything else is unchanged.
    pub const fn mirrored(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            other => other,
        }
    }
}

impl fmt::Display for AxisToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AxisToken {
    type Err = ParseError;

    /// Case-insensitive. `middle` is accepted as a synonym for `center`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bottom" => Ok(Self::Bottom),
            "center" | "middle" => Ok(Self::Center),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "top" => Ok(Self::Top),
            _ => Err(ParseError::UnknownToken(s.to_string())),
        }
    }
}

// =============================================================================
// Alignment Pair
// =============================================================================

/// A canonical alignment: two axis tokens, sorted lexicographically.
///
/// Sorting is the canonical form, not a vertical-then-horizontal order, so
/// `top left` is stored (and displayed) as `left top`. Use
/// [`vertical`](Self::vertical) and [`horizontal`](Self::horizontal) for the
/// semantic axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlignmentPair([AxisToken; 2]);

impl AlignmentPair {
    /// Order two tokens into canonical form without checking validity.
    pub(crate) const fn sorted(a: AxisToken, b: AxisToken) -> Self {
        if (a as u8) <= (b as u8) {
            Self([a, b])
        } else {
            Self([b, a])
        }
    }

    /// Build a pair from two tokens in any order.
    ///
    /// Returns `None` when the tokens do not name a matrix cell
    /// (`top bottom`, `left left`, ...).
    pub fn new(a: AxisToken, b: AxisToken) -> Option<Self> {
        let pair = Self::sorted(a, b);
        ALIGNMENTS.iter().copied().find(|candidate| *candidate == pair)
    }

    /// Both tokens in canonical (sorted) order.
    pub const fn tokens(&self) -> [AxisToken; 2] {
        self.0
    }

    /// The vertical component: top, bottom, or center when neither is present.
    pub const fn vertical(&self) -> AxisToken {
        match self.0 {
            [AxisToken::Top, _] | [_, AxisToken::Top] => AxisToken::Top,
            [AxisToken::Bottom, _] | [_, AxisToken::Bottom] => AxisToken::Bottom,
            _ => AxisToken::Center,
        }
    }

    /// The horizontal component: left, right, or center when neither is present.
    pub const fn horizontal(&self) -> AxisToken {
        match self.0 {
            [AxisToken::Left, _] | [_, AxisToken::Left] => AxisToken::Left,
            [AxisToken::Right, _] | [_, AxisToken::Right] => AxisToken::Right,
            _ => AxisToken::Center,
        }
    }

    /// Value equality against raw normalized tokens.
    pub fn matches<S: AsRef<str>>(&self, tokens: &[S]) -> bool {
        tokens.len() == 2
            && tokens
                .iter()
                .zip(self.0.iter())
                .all(|(raw, token)| raw.as_ref() == token.as_str())
    }
}

impl fmt::Display for AlignmentPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0[0], self.0[1])
    }
}

impl FromStr for AlignmentPair {
    type Err = ParseError;

    /// Strict parse of `"top left"`, `"Left-Top"`, `"middle"`, etc.
    ///
    /// Unlike the lenient resolver, unknown tokens and non-cells are errors.
    /// No RTL mirroring is applied.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = s
            .split([' ', '-'])
            .filter(|part| !part.is_empty())
            .map(AxisToken::from_str)
            .collect::<Result<Vec<_>, _>>()?;

        match tokens.as_slice() {
            [AxisToken::Center] => Ok(Self::sorted(AxisToken::Center, AxisToken::Center)),
            [a, b] => Self::new(*a, *b).ok_or_else(|| ParseError::NotAnAlignment(s.to_string())),
            other => Err(ParseError::TokenCount(other.len())),
        }
    }
}

// =============================================================================
// Descriptor - caller input
// =============================================================================

/// Anything a caller may hand the resolver as an alignment.
///
/// `Omitted` stands in for "no value" and for any input that is neither a
/// string nor a token sequence; it normalizes to an empty token list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Descriptor<'a> {
    /// Space- or hyphen-separated string, e.g. `"top left"` or `"top-left"`.
    Text(&'a str),
    /// Ordered token sequence, e.g. `["top", "left"]`.
    Tokens(&'a [&'a str]),
    /// An already-typed pair.
    Pair(AlignmentPair),
    #[default]
    Omitted,
}

impl<'a> From<&'a str> for Descriptor<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for Descriptor<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value.as_str())
    }
}

impl<'a> From<&'a [&'a str]> for Descriptor<'a> {
    fn from(value: &'a [&'a str]) -> Self {
        Self::Tokens(value)
    }
}

impl<'a, const N: usize> From<&'a [&'a str; N]> for Descriptor<'a> {
    fn from(value: &'a [&'a str; N]) -> Self {
        Self::Tokens(value.as_slice())
    }
}

impl<'a> From<&'a Vec<&'a str>> for Descriptor<'a> {
    fn from(value: &'a Vec<&'a str>) -> Self {
        Self::Tokens(value.as_slice())
    }
}

impl<'a> From<Option<&'a str>> for Descriptor<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(Self::Omitted, Self::Text)
    }
}

impl From<AlignmentPair> for Descriptor<'_> {
    fn from(value: AlignmentPair) -> Self {
        Self::Pair(value)
    }
}

// =============================================================================
// Direction - navigation input
// =============================================================================

/// Arrow-style movement inside the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// `(row, col)` step for one move.
    pub const fn delta(&self) -> (i32, i32) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    /// The grid border that blocks a move in this direction.
    pub const fn edge(&self) -> Edges {
        match self {
            Self::Up => Edges::TOP,
            Self::Down => Edges::BOTTOM,
            Self::Left => Edges::LEFT,
            Self::Right => Edges::RIGHT,
        }
    }

    /// Lenient parse: unrecognized input is `None`, which navigation treats as a no-op.
    pub fn parse(s: &str) -> Option<Self> {
        s.parse().ok()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        })
    }
}

impl FromStr for Direction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(ParseError::UnknownDirection(s.to_string())),
        }
    }
}

// =============================================================================
// Layout Direction
// =============================================================================

/// Text/layout direction. Under `Rtl`, left and right are mirrored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LayoutDirection {
    #[default]
    Ltr,
    Rtl,
}

impl LayoutDirection {
    pub const fn is_rtl(&self) -> bool {
        matches!(self, Self::Rtl)
    }
}

impl From<bool> for LayoutDirection {
    /// `true` means right-to-left.
    fn from(is_rtl: bool) -> Self {
        if is_rtl { Self::Rtl } else { Self::Ltr }
    }
}

impl FromStr for LayoutDirection {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ltr" => Ok(Self::Ltr),
            "rtl" => Ok(Self::Rtl),
            _ => Err(ParseError::UnknownLayoutDirection(s.to_string())),
        }
    }
}

// =============================================================================
// Grid Coordinates
// =============================================================================

/// `[row, col]` position in the matrix.
///
/// Signed so that a shifted position can step outside the grid before it is
/// clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridCoords {
    pub row: i32,
    pub col: i32,
}

impl GridCoords {
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Both axes within `0..GRID_SIZE`.
    pub const fn in_bounds(&self) -> bool {
        let size = crate::matrix::GRID_SIZE as i32;
        self.row >= 0 && self.row < size && self.col >= 0 && self.col < size
    }

    /// One step in `direction`. May leave the grid; saturates at the `i32` range.
    pub const fn shifted(self, direction: Direction) -> Self {
        let (dr, dc) = direction.delta();
        Self {
            row: self.row.saturating_add(dr),
            col: self.col.saturating_add(dc),
        }
    }
}

impl From<[i32; 2]> for GridCoords {
    fn from([row, col]: [i32; 2]) -> Self {
        Self { row, col }
    }
}

impl From<GridCoords> for [i32; 2] {
    fn from(coords: GridCoords) -> Self {
        [coords.row, coords.col]
    }
}

// =============================================================================
// Edges
// =============================================================================

bitflags::bitflags! {
    /// Grid borders a cell touches.
    ///
    /// Combine with bitwise OR: `Edges::TOP | Edges::LEFT` is the top-left corner.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Edges: u8 {
        const TOP = 1 << 0;
        const BOTTOM = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
    }
}

impl Edges {
    /// True if a move in `direction` would leave the grid.
    pub fn blocks(&self, direction: Direction) -> bool {
        self.contains(direction.edge())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_token_order_matches_string_order() {
        let mut by_enum = AxisToken::ALL.to_vec();
        by_enum.sort();
        let mut by_str: Vec<&str> = AxisToken::ALL.iter().map(|t| t.as_str()).collect();
        by_str.sort();
        let enum_strs: Vec<&str> = by_enum.iter().map(|t| t.as_str()).collect();
        assert_eq!(enum_strs, by_str);
    }

    #[test]
    fn test_axis_token_parse() {
        assert_eq!("TOP".parse::<AxisToken>(), Ok(AxisToken::Top));
        assert_eq!("middle".parse::<AxisToken>(), Ok(AxisToken::Center));
        assert_eq!(
            "diagonal".parse::<AxisToken>(),
            Err(ParseError::UnknownToken("diagonal".into()))
        );
    }

    #[test]
    fn test_axis_token_mirrored() {
        assert_eq!(AxisToken::Left.mirrored(), AxisToken::Right);
        assert_eq!(AxisToken::Right.mirrored(), AxisToken::Left);
        assert_eq!(AxisToken::Top.mirrored(), AxisToken::Top);
        assert_eq!(AxisToken::Center.mirrored(), AxisToken::Center);
    }

    // =========================================================================
    // AlignmentPair
    // =========================================================================

    #[test]
    fn test_pair_is_sorted() {
        let pair = AlignmentPair::new(AxisToken::Top, AxisToken::Left).unwrap();
        assert_eq!(pair.tokens(), [AxisToken::Left, AxisToken::Top]);
        assert_eq!(pair.to_string(), "left top");
    }

    #[test]
    fn test_pair_semantic_axes() {
        let pair = AlignmentPair::new(AxisToken::Center, AxisToken::Top).unwrap();
        assert_eq!(pair.vertical(), AxisToken::Top);
        assert_eq!(pair.horizontal(), AxisToken::Center);

        let pair = AlignmentPair::new(AxisToken::Right, AxisToken::Bottom).unwrap();
        assert_eq!(pair.vertical(), AxisToken::Bottom);
        assert_eq!(pair.horizontal(), AxisToken::Right);

        let pair = AlignmentPair::new(AxisToken::Center, AxisToken::Center).unwrap();
        assert_eq!(pair.vertical(), AxisToken::Center);
        assert_eq!(pair.horizontal(), AxisToken::Center);
    }

    #[test]
    fn test_pair_rejects_non_cells() {
        assert!(AlignmentPair::new(AxisToken::Top, AxisToken::Bottom).is_none());
        assert!(AlignmentPair::new(AxisToken::Left, AxisToken::Left).is_none());
        assert!(AlignmentPair::new(AxisToken::Left, AxisToken::Right).is_none());
    }

    #[test]
    fn test_pair_from_str() {
        let pair: AlignmentPair = "Top-Right".parse().unwrap();
        assert_eq!(pair.to_string(), "right top");

        let pair: AlignmentPair = "middle".parse().unwrap();
        assert_eq!(pair.to_string(), "center center");

        assert_eq!("top".parse::<AlignmentPair>(), Err(ParseError::TokenCount(1)));
        assert_eq!(
            "top left center".parse::<AlignmentPair>(),
            Err(ParseError::TokenCount(3))
        );
        assert_eq!(
            "top bottom".parse::<AlignmentPair>(),
            Err(ParseError::NotAnAlignment("top bottom".into()))
        );
    }

    #[test]
    fn test_pair_matches_raw_tokens() {
        let pair: AlignmentPair = "top left".parse().unwrap();
        assert!(pair.matches(&["left", "top"]));
        assert!(!pair.matches(&["top", "left"]));
        assert!(!pair.matches(&["left"]));
    }

    // =========================================================================
    // Descriptor / Direction / LayoutDirection
    // =========================================================================

    #[test]
    fn test_descriptor_from_option() {
        assert_eq!(Descriptor::from(None::<&str>), Descriptor::Omitted);
        assert_eq!(Descriptor::from(Some("top")), Descriptor::Text("top"));
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!("UP".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!(Direction::parse("sideways"), None);
        assert_eq!(Direction::parse("right"), Some(Direction::Right));
        assert!(matches!(
            "north".parse::<Direction>(),
            Err(ParseError::UnknownDirection(_))
        ));
    }

    #[test]
    fn test_layout_direction() {
        assert_eq!(LayoutDirection::default(), LayoutDirection::Ltr);
        assert!(LayoutDirection::from(true).is_rtl());
        assert_eq!("RTL".parse::<LayoutDirection>(), Ok(LayoutDirection::Rtl));
        assert!("up".parse::<LayoutDirection>().is_err());
    }

    // =========================================================================
    // GridCoords / Edges
    // =========================================================================

    #[test]
    fn test_coords_shift_and_bounds() {
        let c = GridCoords::new(0, 0);
        assert!(c.in_bounds());
        assert!(!c.shifted(Direction::Up).in_bounds());
        assert_eq!(c.shifted(Direction::Down), GridCoords::new(1, 0));
        assert_eq!(<[i32; 2]>::from(GridCoords::from([2, 1])), [2, 1]);
    }

    #[test]
    fn test_coords_shift_saturates() {
        let far = GridCoords::new(i32::MAX, i32::MIN);
        assert_eq!(far.shifted(Direction::Down), far);
        assert_eq!(far.shifted(Direction::Left), far);
        assert_eq!(far.shifted(Direction::Up), GridCoords::new(i32::MAX - 1, i32::MIN));
        assert!(!far.shifted(Direction::Right).in_bounds());
    }

    #[test]
    fn test_edges_blocks() {
        let corner = Edges::TOP | Edges::LEFT;
        assert!(corner.blocks(Direction::Up));
        assert!(corner.blocks(Direction::Left));
        assert!(!corner.blocks(Direction::Down));
        assert!(!Edges::empty().blocks(Direction::Right));
    }
}

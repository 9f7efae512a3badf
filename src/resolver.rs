//! Alignment Resolver - matrix operations bound to one configuration
//!
//! The free functions in [`crate::matrix`] and [`crate::grid`] take the
//! layout direction on every call. [`AlignmentResolver`] owns a
//! [`ResolverConfig`] instead, so an embedding app decides RTL once and
//! passes the resolver around.
//!
//! # Example
//!
//! ```
//! use spark_align::{AlignmentResolver, Descriptor, Direction, LayoutDirection, ResolverConfig};
//!
//! let resolver = AlignmentResolver::new(ResolverConfig {
//!     direction: LayoutDirection::Rtl,
//!     ..ResolverConfig::default()
//! });
//!
//! assert_eq!(resolver.index_of("top left"), Some(2));
//! assert_eq!(resolver.index_of(Descriptor::Omitted), None);
//! assert_eq!(resolver.resolve_or_default(Descriptor::Omitted), Some(4));
//! assert_eq!(resolver.next_index(4, Some(Direction::Left)), 3);
//! ```

use crate::grid::{self, GridCell};
use crate::matrix;
use crate::normalize::{self, Normalized};
use crate::types::{AlignmentPair, Descriptor, Direction, GridCoords, LayoutDirection};

// =============================================================================
// CONFIG
// =============================================================================

/// Resolver configuration, owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "kebab-case"))]
pub struct ResolverConfig {
    /// Mirror left/right when `Rtl`.
    pub direction: LayoutDirection,
    /// Used by [`AlignmentResolver::resolve_or_default`] for omitted input.
    pub default_alignment: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            direction: LayoutDirection::Ltr,
            default_alignment: "center".to_string(),
        }
    }
}

impl ResolverConfig {
    pub fn rtl() -> Self {
        Self {
            direction: LayoutDirection::Rtl,
            ..Self::default()
        }
    }
}

// =============================================================================
// RESOLVER
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlignmentResolver {
    config: ResolverConfig,
}

impl AlignmentResolver {
    pub fn new(config: ResolverConfig) -> Self {
        log::debug!(
            "alignment resolver: direction={:?} default={:?}",
            config.direction,
            config.default_alignment
        );
        Self { config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn direction(&self) -> LayoutDirection {
        self.config.direction
    }

    pub fn normalize<'a>(&self, descriptor: impl Into<Descriptor<'a>>) -> Normalized {
        normalize::normalize(descriptor, self.config.direction)
    }

    pub fn is_valid<'a>(&self, descriptor: impl Into<Descriptor<'a>>) -> bool {
        matrix::is_valid(descriptor, self.config.direction)
    }

    pub fn values_of<'a>(&self, descriptor: impl Into<Descriptor<'a>>) -> Option<AlignmentPair> {
        matrix::values_of(descriptor, self.config.direction)
    }

    pub fn index_of<'a>(&self, descriptor: impl Into<Descriptor<'a>>) -> Option<usize> {
        matrix::index_of(descriptor, self.config.direction)
    }

    /// Index of `descriptor`, substituting the configured default when it is omitted.
    ///
    /// Only `Omitted` is replaced; an explicit but invalid descriptor is still `None`.
    pub fn resolve_or_default<'a>(&self, descriptor: impl Into<Descriptor<'a>>) -> Option<usize> {
        let descriptor: Descriptor<'a> = descriptor.into();
        match descriptor {
            Descriptor::Omitted => self.index_of(self.config.default_alignment.as_str()),
            descriptor => self.index_of(descriptor),
        }
    }

    pub fn value_at_index(&self, index: usize) -> String {
        matrix::value_at_index(index)
    }

    pub fn coords_of(&self, index: usize) -> Option<GridCoords> {
        matrix::coords_of(index)
    }

    pub fn index_from_coords(&self, coords: GridCoords, fallback: usize) -> usize {
        matrix::index_from_coords(coords, fallback)
    }

    pub fn next_index(&self, current: usize, direction: Option<Direction>) -> usize {
        matrix::next_index(current, direction)
    }

    pub fn grid(&self, prefix: &str) -> Vec<Vec<GridCell>> {
        grid::default_grid(prefix)
    }

    pub fn item_id<'a>(&self, prefix: &str, descriptor: impl Into<Descriptor<'a>>) -> Option<String> {
        grid::item_id(prefix, descriptor, self.config.direction)
    }
}

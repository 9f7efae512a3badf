//! Taffy Bridge - alignment pairs as flexbox alignment
//!
//! Places a box's content at one of the nine anchor positions by driving
//! Taffy's `align_items` (vertical, cross axis) and `justify_content`
//! (horizontal, main axis) on a row-direction container.

use taffy::{
    AlignItems as TaffyAlignItems, FlexDirection as TaffyFlexDirection,
    JustifyContent as TaffyJustifyContent, Style,
};

use crate::types::{AlignmentPair, AxisToken};

// =============================================================================
// ENUM CONVERSIONS
// =============================================================================

fn to_taffy_align_items(vertical: AxisToken) -> TaffyAlignItems {
    match vertical {
        AxisToken::Top => TaffyAlignItems::FlexStart,
        AxisToken::Bottom => TaffyAlignItems::FlexEnd,
        _ => TaffyAlignItems::Center,
    }
}

fn to_taffy_justify_content(horizontal: AxisToken) -> TaffyJustifyContent {
    match horizontal {
        AxisToken::Left => TaffyJustifyContent::FlexStart,
        AxisToken::Right => TaffyJustifyContent::FlexEnd,
        _ => TaffyJustifyContent::Center,
    }
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Flexbox alignment for a row container anchoring its content at `pair`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlexAlignment {
    pub align_items: TaffyAlignItems,
    pub justify_content: TaffyJustifyContent,
}

/// Map a pair to `(align_items, justify_content)` for a row container.
pub fn flex_alignment(pair: AlignmentPair) -> FlexAlignment {
    FlexAlignment {
        align_items: to_taffy_align_items(pair.vertical()),
        justify_content: to_taffy_justify_content(pair.horizontal()),
    }
}

/// Make `style` a row container whose children sit at `pair`.
pub fn apply_to_style(pair: AlignmentPair, style: &mut Style) {
    let alignment = flex_alignment(pair);
    style.flex_direction = TaffyFlexDirection::Row;
    style.align_items = Some(alignment.align_items);
    style.justify_content = Some(alignment.justify_content);
}

/// A fresh container style anchored at `pair`.
pub fn anchored_style(pair: AlignmentPair) -> Style {
    let mut style = Style::default();
    apply_to_style(pair, &mut style);
    style
}

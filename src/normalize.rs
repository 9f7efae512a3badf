//! Alignment Normalizer - descriptor → canonical token list
//!
//! Turns free-form caller input into the sorted token form the matrix
//! lookups compare against:
//!
//! 1. Tokenize (split on spaces and hyphens)
//! 2. Lowercase, map `middle` → `center`
//! 3. Mirror left/right under RTL
//! 4. Expand the `center` shorthand to `center center`
//! 5. Sort lexicographically
//!
//! Nothing here fails. Malformed input produces an empty, partial or
//! over-long token list, and the lookups in [`crate::matrix`] simply report
//! no match.
//!
//! # Example
//!
//! ```
//! use spark_align::{normalize, LayoutDirection};
//!
//! let tokens = normalize("Top-Left", LayoutDirection::Rtl);
//! assert_eq!(tokens.to_string(), "right top");
//! ```

use std::fmt;

use crate::matrix::ALIGNMENTS;
use crate::types::{AlignmentPair, Descriptor, LayoutDirection};

/// Stands in for `left` while `right` is rewritten, so a token is swapped once.
const MIRROR_PLACEHOLDER: &str = "\u{0}";

// =============================================================================
// NORMALIZED TOKENS
// =============================================================================

/// Raw normalizer output.
///
/// Usually a two-token canonical pair, but may hold unknown tokens or any
/// number of them when the input was malformed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Normalized(Vec<String>);

impl Normalized {
    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Exactly two tokens (not necessarily a valid cell).
    pub fn is_pair(&self) -> bool {
        self.0.len() == 2
    }

    /// The first canonical pair equal to these tokens, by value.
    pub fn to_pair(&self) -> Option<AlignmentPair> {
        ALIGNMENTS.iter().copied().find(|pair| pair.matches(self.0.as_slice()))
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl fmt::Display for Normalized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

// =============================================================================
// RTL MIRRORING
// =============================================================================

/// Swap `left` ↔ `right` in a token when the layout is right-to-left.
///
/// Substitution goes through a placeholder, so `left` becomes `right` and
/// stays there instead of being rewritten back on the next step.
pub fn mirror_token(token: &str, direction: LayoutDirection) -> String {
    if !direction.is_rtl() {
        return token.to_string();
    }

    token
        .replacen("left", MIRROR_PLACEHOLDER, 1)
        .replacen("right", "left", 1)
        .replacen(MIRROR_PLACEHOLDER, "right", 1)
}

// =============================================================================
// NORMALIZE
// =============================================================================

/// Only string input is split. Empty fragments from repeated or trailing
/// separators are kept, so `"top  left"` has three tokens and matches nothing.
fn tokenize(descriptor: Descriptor<'_>) -> Vec<String> {
    match descriptor {
        Descriptor::Text(text) => text.split([' ', '-']).map(str::to_string).collect(),
        Descriptor::Tokens(tokens) => tokens.iter().map(|token| token.to_string()).collect(),
        Descriptor::Pair(pair) => pair
            .tokens()
            .iter()
            .map(|token| token.as_str().to_string())
            .collect(),
        Descriptor::Omitted => Vec::new(),
    }
}

/// Normalize any descriptor into its canonical token form.
pub fn normalize<'a>(descriptor: impl Into<Descriptor<'a>>, direction: LayoutDirection) -> Normalized {
    let mut tokens: Vec<String> = tokenize(descriptor.into())
        .into_iter()
        .map(|token| {
            let token = token.to_lowercase();
            let token = if token == "middle" { "center".to_string() } else { token };
            mirror_token(&token, direction)
        })
        .collect();

    if tokens.len() == 1 && tokens[0] == "center" {
        tokens.push("center".to_string());
    }

    tokens.sort();

    if tokens.len() != 2 {
        log::trace!("alignment normalized to {} token(s): {:?}", tokens.len(), tokens);
    }

    Normalized(tokens)
}

// =============================================================================
// TESTS
// =============================================================================

//! Frequency counting over the input symbol sequence.
//!
//! The frequency table is the only statistic the encoder retains from the
//! original symbol order. It is keyed by `char` in an ordered map so that
//! downstream tree construction sees entries in a fixed order; combined
//! with the tree builder's sequence-number tie-break this makes the whole
//! encode pipeline deterministic.

use crate::error::{InvalidInputError, Result};
use std::collections::BTreeMap;

/// Count symbol occurrences in `content`.
///
/// Counts sum to the number of symbols in the input. Iterating the
/// returned map visits symbols in ascending code-point order.
///
/// # Errors
/// Returns `InvalidInput` if `content` is empty: a Huffman tree needs
/// at least one distinct symbol.
pub fn count_frequencies(content: &str) -> Result<BTreeMap<char, u64>> {
    if content.is_empty() {
        return Err(InvalidInputError::EmptyInput.into());
    }

    let mut freqs = BTreeMap::new();
    for symbol in content.chars() {
        *freqs.entry(symbol).or_insert(0) += 1;
    }
    Ok(freqs)
}

//! Code table generation and its text serialization.
//!
//! Walking the Huffman tree assigns every leaf the bit string spelled by
//! its root-to-leaf path: `0` per left edge, `1` per right edge. Because
//! no internal node has exactly one child, root-to-leaf paths are unique
//! and the resulting table is injective and prefix-free, which is what
//! makes greedy left-to-right decoding unambiguous.
//!
//! # Wire format
//!
//! The codebook travels in the container as UTF-8 text, one line per
//! symbol, `<decimal code-point>:<bit-string>`, lines joined by `\n`.
//! Lines are emitted in ascending code-point order so that re-encoding
//! identical input yields a byte-identical container.

use crate::error::{MalformedContainerError, Result};
use crate::tree::Node;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// A non-empty bit string assigned to one symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Code {
    /// Bit values, one byte per bit (0 or 1), MSB-first
    bits: Vec<u8>,
}

impl Code {
    /// Append one bit (any nonzero value counts as 1).
    pub fn push(&mut self, bit: u8) {
        self.bits.push((bit != 0) as u8);
    }

    /// Drop all bits, keeping the allocation.
    pub fn clear(&mut self) {
        self.bits.clear();
    }

    /// Number of bits in this code.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True if no bits have been pushed.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Iterate the bits in order, each 0 or 1.
    pub fn bits(&self) -> impl Iterator<Item = u8> + '_ {
        self.bits.iter().copied()
    }

    /// True if `self` is a proper prefix of `other`.
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        self.bits.len() < other.bits.len() && other.bits[..self.bits.len()] == self.bits[..]
    }

    /// The single-bit code `0`, used for a lone-leaf root.
    fn zero() -> Self {
        Code { bits: vec![0] }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            write!(f, "{}", if bit == 1 { '1' } else { '0' })?;
        }
        Ok(())
    }
}

/// Mapping from symbol to its Huffman code.
///
/// Injective and prefix-free by construction from a binary tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codebook {
    codes: BTreeMap<char, Code>,
}

impl Codebook {
    /// Assign codes by depth-first walk of `root`.
    ///
    /// Uses an explicit stack: heavily skewed frequency distributions can
    /// produce trees as deep as the alphabet is large, which would
    /// otherwise ride the call stack.
    ///
    /// A root that is itself a leaf gets the unconditional code `0`;
    /// [`Node::Filler`] children are skipped entirely.
    pub fn from_tree(root: &Node) -> Self {
        let mut codes = BTreeMap::new();
        let mut stack: Vec<(&Node, Code)> = vec![(root, Code::default())];

        while let Some((node, prefix)) = stack.pop() {
            match node {
                Node::Leaf { symbol, .. } => {
                    let code = if prefix.is_empty() { Code::zero() } else { prefix };
                    codes.insert(*symbol, code);
                }
                Node::Internal { left, right, .. } => {
                    let mut left_prefix = prefix.clone();
                    left_prefix.push(0);
                    let mut right_prefix = prefix;
                    right_prefix.push(1);
                    stack.push((right.as_ref(), right_prefix));
                    stack.push((left.as_ref(), left_prefix));
                }
                Node::Filler => {}
            }
        }

        Codebook { codes }
    }

    /// Look up the code for `symbol`.
    pub fn code_for(&self, symbol: char) -> Option<&Code> {
        self.codes.get(&symbol)
    }

    /// Number of symbols in the table.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True if the table holds no symbols.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate (symbol, code) pairs in ascending code-point order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &Code)> {
        self.codes.iter().map(|(&s, c)| (s, c))
    }

    /// Serialize to the `codepoint:bits` line format.
    pub fn to_text(&self) -> String {
        let lines: Vec<String> = self
            .codes
            .iter()
            .map(|(&symbol, code)| format!("{}:{}", symbol as u32, code))
            .collect();
        lines.join("\n")
    }

    /// Parse the `codepoint:bits` line format back into a codebook.
    ///
    /// # Errors
    /// - `BadTableLine` if a line has no `:` separator or an unparsable
    ///   decimal code-point
    /// - `BadCodePoint` if the value is not a Unicode scalar
    /// - `BadCode` if the bit string is empty or contains a character
    ///   other than `0`/`1`
    pub fn from_text(text: &str) -> Result<Self> {
        let mut codes = BTreeMap::new();

        for line in text.lines() {
            let (point_str, bits_str) =
                line.split_once(':')
                    .ok_or_else(|| MalformedContainerError::BadTableLine {
                        line: line.to_string(),
                    })?;

            let value: u32 =
                point_str
                    .parse()
                    .map_err(|_| MalformedContainerError::BadTableLine {
                        line: line.to_string(),
                    })?;

            let symbol =
                char::from_u32(value).ok_or(MalformedContainerError::BadCodePoint { value })?;

            if bits_str.is_empty() || bits_str.bytes().any(|b| b != b'0' && b != b'1') {
                return Err(MalformedContainerError::BadCode {
                    value,
                    code: bits_str.to_string(),
                }
                .into());
            }

            let mut code = Code::default();
            for b in bits_str.bytes() {
                code.push(b - b'0');
            }
            codes.insert(symbol, code);
        }

        Ok(Codebook { codes })
    }

    /// Invert to code -> symbol for the decoder's candidate matcher.
    pub fn invert(&self) -> HashMap<Code, char> {
        self.codes
            .iter()
            .map(|(&symbol, code)| (code.clone(), symbol))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::freq::count_frequencies;
    use crate::tree::build_tree;

    fn codebook_for(content: &str) -> Codebook {
        let freqs = count_frequencies(content).unwrap();
        Codebook::from_tree(&build_tree(&freqs))
    }

    #[test]
    fn test_single_symbol_gets_zero() {
        let book = codebook_for("aaaa");
        assert_eq!(book.len(), 1);
        assert_eq!(book.code_for('a').unwrap().to_string(), "0");
    }

    #[test]
    fn test_two_equal_symbols_single_bits() {
        let book = codebook_for("ab");
        assert_eq!(book.code_for('a').unwrap().to_string(), "0");
        assert_eq!(book.code_for('b').unwrap().to_string(), "1");
    }

    #[test]
    fn test_eight_equal_symbols_three_bits_each() {
        let book = codebook_for("abcdefgh");
        for (_, code) in book.iter() {
            assert_eq!(code.len(), 3);
        }
        assert_eq!(book.code_for('a').unwrap().to_string(), "000");
        assert_eq!(book.code_for('h').unwrap().to_string(), "111");
    }

    #[test]
    fn test_prefix_free() {
        let book = codebook_for("abracadabra schwartz!");
        let codes: Vec<&Code> = book.iter().map(|(_, c)| c).collect();
        for i in 0..codes.len() {
            for j in 0..codes.len() {
                if i != j {
                    let (a, b) = (codes[i], codes[j]);
                    assert!(!a.is_prefix_of(b), "{a} is a prefix of {b}");
                    assert_ne!(a, b, "codes must be injective");
                }
            }
        }
    }

    #[test]
    fn test_text_round_trip() {
        let book = codebook_for("mississippi");
        let text = book.to_text();
        let parsed = Codebook::from_text(&text).unwrap();
        assert_eq!(parsed, book);
    }

    #[test]
    fn test_text_format_shape() {
        let book = codebook_for("aaaa");
        assert_eq!(book.to_text(), "97:0");
    }

    #[test]
    fn test_parse_rejects_missing_separator() {
        let result = Codebook::from_text("97");
        assert!(matches!(
            result,
            Err(Error::MalformedContainer(
                MalformedContainerError::BadTableLine { .. }
            ))
        ));
    }

    #[test]
    fn test_parse_rejects_bad_codepoint() {
        // 0xD800 is a surrogate, not a Unicode scalar value.
        let result = Codebook::from_text("55296:010");
        assert!(matches!(
            result,
            Err(Error::MalformedContainer(
                MalformedContainerError::BadCodePoint { value: 55296 }
            ))
        ));
    }

    #[test]
    fn test_parse_rejects_non_binary_code() {
        let result = Codebook::from_text("97:01x");
        assert!(matches!(
            result,
            Err(Error::MalformedContainer(
                MalformedContainerError::BadCode { .. }
            ))
        ));
    }

    #[test]
    fn test_parse_rejects_empty_code() {
        let result = Codebook::from_text("97:");
        assert!(matches!(
            result,
            Err(Error::MalformedContainer(
                MalformedContainerError::BadCode { .. }
            ))
        ));
    }

    #[test]
    fn test_invert() {
        let book = codebook_for("ab");
        let inverse = book.invert();
        assert_eq!(inverse.len(), 2);
        let zero = book.code_for('a').unwrap().clone();
        assert_eq!(inverse[&zero], 'a');
    }
}

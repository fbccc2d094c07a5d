//! Container serialization: the self-describing compressed artifact.
//!
//! Encoding composes the whole pipeline: frequency table -> tree ->
//! codebook -> bit packer, then wraps the result in a header the decoder
//! can use to rebuild the exact codebook. Decoding reverses it with a
//! greedy bit-by-bit matcher over the inverted codebook.
//!
//! # Container Format
//!
//! ```text
//! +------------------+
//! | pad (1 byte)     |  number of trailing filler bits in the payload
//! +------------------+
//! | table_len (4)    |  u32 big-endian length of the code table text
//! +------------------+
//! | code table       |  UTF-8 text, lines `codepoint:bits` joined by \n
//! | (table_len)      |
//! +------------------+
//! | payload          |  concatenated Huffman codes, zero-padded to a
//! | (remainder)      |  byte boundary
//! +------------------+
//! ```
//!
//! The container owns no references to the original input: the code table
//! plus the pad count are sufficient to reconstruct it exactly.
//!
//! # Atomicity
//!
//! Both operations buffer entirely in memory and return the complete
//! result or an error; a caller never observes partial output.

use crate::bitio::{BitReader, BitWriter};
use crate::codebook::{Code, Codebook};
use crate::error::{CorruptContainerError, MalformedContainerError, Result};
use crate::freq::count_frequencies;
use crate::tree::build_tree;

/// Size of the container header in bytes (pad byte + table length)
pub const HEADER_SIZE: usize = 5;

/// Compress `content` into a container.
///
/// A conforming encoder always emits a pad in 0-7.
///
/// # Errors
/// Returns `InvalidInput` for empty content.
pub fn encode(content: &str) -> Result<Vec<u8>> {
    let freqs = count_frequencies(content)?;
    let root = build_tree(&freqs);
    let codebook = Codebook::from_tree(&root);

    let mut writer = BitWriter::new();
    for symbol in content.chars() {
        let code = codebook
            .code_for(symbol)
            .expect("codebook was built from this content");
        writer.push_code(code);
    }
    let (payload, pad) = writer.finish();

    let table = codebook.to_text().into_bytes();

    let mut container = Vec::with_capacity(HEADER_SIZE + table.len() + payload.len());
    container.push(pad);
    container.extend_from_slice(&(table.len() as u32).to_be_bytes());
    container.extend_from_slice(&table);
    container.extend_from_slice(&payload);

    Ok(container)
}

/// Reconstruct the original content from a container.
///
/// Bits are consumed greedily: each bit extends a candidate code, and a
/// symbol is emitted the moment the candidate matches a table entry.
/// Prefix-freeness of the table makes this unambiguous.
///
/// # Errors
/// - `MalformedContainer` if the header, table, or pad is inconsistent
/// - `CorruptContainer` if the payload ends on a partial, non-matching code
pub fn decode(container: &[u8]) -> Result<String> {
    if container.len() < HEADER_SIZE {
        return Err(MalformedContainerError::HeaderTooShort {
            required: HEADER_SIZE,
            actual: container.len(),
        }
        .into());
    }

    let pad = container[0];
    let table_len = u32::from_be_bytes(container[1..5].try_into().unwrap()) as usize;

    let available = container.len() - HEADER_SIZE;
    if table_len > available {
        return Err(MalformedContainerError::TableOutOfBounds {
            declared: table_len,
            available,
        }
        .into());
    }

    let table_bytes = &container[HEADER_SIZE..HEADER_SIZE + table_len];
    let payload = &container[HEADER_SIZE + table_len..];

    let table_text =
        std::str::from_utf8(table_bytes).map_err(|_| MalformedContainerError::TableNotUtf8)?;
    let codebook = Codebook::from_text(table_text)?;
    let inverse = codebook.invert();

    let mut reader = BitReader::new(payload, pad)?;
    let mut content = String::new();
    let mut candidate = Code::default();

    while let Some(bit) = reader.next_bit() {
        candidate.push(bit);
        if let Some(&symbol) = inverse.get(&candidate) {
            content.push(symbol);
            candidate.clear();
        }
    }

    if !candidate.is_empty() {
        return Err(CorruptContainerError::DanglingCode {
            len: candidate.len(),
        }
        .into());
    }

    Ok(content)
}

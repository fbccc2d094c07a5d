//! huffpack-core: Canonical Huffman text codec
//!
//! This library losslessly compresses a text stream by replacing each
//! symbol with a variable-length bit code derived from symbol frequency,
//! and reverses the transform exactly. The container format is
//! self-describing: the decoder rebuilds the encoder's exact code table
//! from the header.
//!
//! # Architecture
//!
//! The pipeline is sequential, each phase consuming the previous phase's
//! complete output:
//! - `freq`: symbol frequency counting
//! - `tree`: priority-queue tree construction with deterministic tie-breaks
//! - `codebook`: code assignment by tree walk, plus the table wire format
//! - `bitio`: bit-level packing/unpacking with pad accounting
//! - `container`: header serialization and the top-level encode/decode
//!
//! # Design Principles
//!
//! - **No panics**: all failures are structured and recoverable
//! - **Deterministic**: identical input always yields a byte-identical
//!   container
//! - **All-or-nothing**: both operations buffer in memory; no partial
//!   output is ever observable
//!
//! # Example
//! ```
//! use huffpack_core::{decode, encode};
//!
//! let container = encode("abracadabra")?;
//! assert_eq!(decode(&container)?, "abracadabra");
//! # Ok::<(), huffpack_core::Error>(())
//! ```

pub mod bitio;
pub mod codebook;
pub mod container;
pub mod error;
pub mod freq;
pub mod tree;

// Re-export the codec surface and commonly used types
pub use container::{decode, encode};
pub use error::{Error, Result};

//! Sample text generation.
//!
//! When no input file is specified, we generate sample text with
//! interesting compression characteristics: mix of repetitive and
//! high-entropy sections.
//!
//! # Design
//!
//! Generated text has:
//! - Some highly compressible sections (runs of one character)
//! - Some moderately compressible sections (small letter alphabet)
//! - Some hard-to-compress sections (wide mixed alphabet)
//!
//! This makes the compression ratio worth looking at in the size report.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generate sample text with mixed compressibility.
///
/// # Arguments
/// - `seed`: random seed for determinism
/// - `size_chars`: approximate number of characters generated
pub fn generate_sample_text(seed: u64, size_chars: usize) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut text = String::with_capacity(size_chars);

    let mut remaining = size_chars;
    while remaining > 0 {
        let section = remaining.min(512);

        let section_type: u8 = rng.gen_range(0..10);
        match section_type {
            // 30% highly compressible (runs of one character)
            0..=2 => {
                let alphabet = b"abcdefghijklmnopqrstuvwxyz";
                let ch = alphabet[rng.gen_range(0..alphabet.len())] as char;
                text.extend(std::iter::repeat(ch).take(section));
            }

            // 40% moderately compressible (small text-like alphabet)
            3..=6 => {
                let alphabet = b"etaoin shrdlu.,!\n";
                for _ in 0..section {
                    let idx = rng.gen_range(0..alphabet.len());
                    text.push(alphabet[idx] as char);
                }
            }

            // 30% hard to compress (wide mixed alphabet incl. non-ASCII)
            _ => {
                let alphabet: Vec<char> =
                    ('a'..='z').chain('A'..='Z').chain('0'..='9').chain("éüßñ—€".chars()).collect();
                for _ in 0..section {
                    let idx = rng.gen_range(0..alphabet.len());
                    text.push(alphabet[idx]);
                }
            }
        }

        remaining -= section;
    }

    text
}

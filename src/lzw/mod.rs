//! Variable-width adaptive LZW codec.
//!
//! A 9-to-15-bit dictionary coder with an explicit flush mechanism,
//! intended to be embedded in a larger buffer-oriented pipeline: both
//! directions operate on whole in-memory buffers, there is no streaming
//! chunked I/O and no persistence of dictionary state across calls.
//!
//! ```
//! use meteolzw::lzw;
//!
//! let text = b"TOBEORNOTTOBEORTOBEORNOT";
//! let mut compressed = vec![0u8; text.len() * 2];
//! let n = lzw::compress(text, &mut compressed).expect("compression failed");
//!
//! let mut expanded = vec![0u8; text.len()];
//! let m = lzw::expand(&compressed[..n], &mut expanded).expect("expansion failed");
//! assert_eq!(&expanded[..m], text);
//! ```

pub(crate) mod constants;
mod bitstream;
mod dictionary;
mod compressor;
mod expander;

pub use compressor::{compress, set_verbose};
pub use expander::expand;

/// Compress `input`, growing a fresh output `Vec<u8>` as needed.
///
/// `initial_capacity` sizes the first attempt; on [`crate::Error::OutputExhausted`]
/// the buffer is doubled and compression is retried from scratch (the codec
/// carries no state across calls, so this is always safe).
pub fn compress_to_vec(input: &[u8], initial_capacity: usize) -> Vec<u8> {
    let mut capacity = initial_capacity.max(16);
    loop {
        let mut out = vec![0u8; capacity];
        match compress(input, &mut out) {
            Ok(n) => {
                out.truncate(n);
                return out;
            }
            Err(crate::Error::OutputExhausted) => capacity *= 2,
            Err(e) => unreachable!("compress only fails with OutputExhausted: {e}"),
        }
    }
}

/// Expand `input`, growing a fresh output `Vec<u8>` as needed.
pub fn expand_to_vec(input: &[u8], initial_capacity: usize) -> Result<Vec<u8>, crate::Error> {
    let mut capacity = initial_capacity.max(16);
    loop {
        let mut out = vec![0u8; capacity];
        match expand(input, &mut out) {
            Ok(n) => {
                out.truncate(n);
                return Ok(out);
            }
            Err(crate::Error::OutputExhausted) => capacity *= 2,
            Err(e) => return Err(e),
        }
    }
}

//! # meteolzw
//!
//! A self-contained, variable-width LZW codec: a pair of pure in-memory
//! routines that compress and decompress byte buffers using a 9-to-15-bit
//! adaptive dictionary coder with an explicit dictionary-flush mechanism.
//!
//! This is meant to be embedded inside a larger buffer-oriented pipeline
//! (its original home is a radar/meteorology composite-imagery library):
//! there is no file I/O, no streaming/chunked interface, and no framing
//! beyond what the codec itself emits. The wire format is fixed and must
//! remain bit-compatible with archives produced by the legacy codec this
//! crate re-implements - see `lzw` for the control-code layout and
//! dictionary sizing that are part of that contract.
//!
//! ## Buffer example
//!
//! ```
//! use meteolzw::lzw;
//!
//! let test_data = "This is the chaunt of the priests.".as_bytes();
//! let compressed = lzw::compress_to_vec(test_data, 64);
//! let expanded = lzw::expand_to_vec(&compressed, test_data.len()).expect("expansion failed");
//! assert_eq!(expanded, test_data);
//! ```

pub mod lzw;

/// Failure modes observable at the crate boundary (spec §7): either the
/// destination buffer was too small, or a compressed stream violated a
/// structural invariant of the format.
#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    #[error("output buffer exhausted")]
    OutputExhausted,
    #[error("malformed compressed stream")]
    Malformed,
}

//! Fixed numeric parameters of the wire format.
//!
//! None of these may be changed without breaking compatibility with
//! archives produced by the legacy codec this crate re-implements: the
//! control code values, the initial/maximum code width, and `TABLE_SIZE`
//! (which governs the compressor's hash probe sequence) are all part of
//! the on-wire contract.

/// First code after the literal byte codes (0..=255).
pub const FIRST_CODE: u16 = 259;

/// Terminates a compressed payload.
pub const END_OF_STREAM: u16 = 256;

/// Signals the decoder to widen the code width by one bit.
pub const BUMP_CODE: u16 = 257;

/// Signals the decoder to reinitialize the dictionary.
pub const FLUSH_CODE: u16 = 258;

/// Largest legal code value (2^15 - 1).
pub const MAX_CODE: u16 = 32767;

/// Width, in bits, of the first code emitted in a pass.
pub const MIN_CODE_BITS: u32 = 9;

/// Width, in bits, beyond which the coder must flush instead of bump.
pub const MAX_CODE_BITS: u32 = 15;

/// Size of the compressor's open-addressed hash table. Deliberately larger
/// than the code space (2^15 = 32768) to keep the load factor under 1 and
/// bound collision chains. Changing this changes which collisions occur
/// during encoding, and therefore which codes a given input is assigned -
/// it must stay exactly 35023.
pub const TABLE_SIZE: usize = 35023;

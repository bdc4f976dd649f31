//! The compressor: walks the input, growing the dictionary and emitting
//! codes through a `BitWriter`, per spec.md §4.3.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::Error;
use crate::lzw::bitstream::BitWriter;
use crate::lzw::constants::*;
use crate::lzw::dictionary::{HashDict, Probe};

/// Process-wide verbose level, the one piece of global mutable state this
/// crate keeps (see spec.md §4.5/§9): everything else lives in the
/// per-call `Compressor` value below.
static VERBOSE: AtomicU32 = AtomicU32::new(0);

/// Set the verbosity level; `0` is silent. When nonzero, a `#` is printed
/// to stderr on every `BUMP_CODE`, matching the legacy codec's progress
/// marker. This is purely observational and never alters the compressed
/// output.
pub fn set_verbose(level: u32) {
    VERBOSE.store(level, Ordering::Relaxed);
}

fn verbose() -> u32 {
    VERBOSE.load(Ordering::Relaxed)
}

struct Compressor {
    dict: HashDict,
    next_code: u16,
    code_bits: u32,
    next_bump_code: u16,
}

impl Compressor {
    fn new() -> Self {
        Self {
            dict: HashDict::new(),
            next_code: FIRST_CODE,
            code_bits: MIN_CODE_BITS,
            next_bump_code: (1u16 << MIN_CODE_BITS) - 1,
        }
    }

    fn flush(&mut self) {
        self.dict.reset();
        self.next_code = FIRST_CODE;
        self.code_bits = MIN_CODE_BITS;
        self.next_bump_code = (1u16 << MIN_CODE_BITS) - 1;
    }

    /// Insert a new entry and apply the bump/flush boundary checks that
    /// follow every miss-and-insert, in the order spec.md §4.3 step 3
    /// mandates: flush takes priority over bump.
    fn learn(&mut self, slot: usize, parent: u16, character: u8, writer: &mut BitWriter) -> Result<(), Error> {
        self.dict.insert(slot, self.next_code, parent, character);
        self.next_code += 1;
        if self.next_code as u32 > MAX_CODE as u32 {
            log::debug!("dictionary full at code {}, flushing", self.next_code);
            writer.write_bits(FLUSH_CODE, self.code_bits)?;
            self.flush();
        } else if self.next_code > self.next_bump_code {
            log::debug!("widening code to {} bits", self.code_bits + 1);
            writer.write_bits(BUMP_CODE, self.code_bits)?;
            if verbose() != 0 {
                eprint!("#");
            }
            self.code_bits += 1;
            self.next_bump_code = (self.next_bump_code << 1) | 1;
            debug_assert!(self.code_bits <= MAX_CODE_BITS, "bumped past the wire format's ceiling");
        }
        Ok(())
    }
}

/// Compress `input` into `output`, returning the number of bytes written.
///
/// Fails with [`Error::OutputExhausted`] if `output` is too small to hold
/// the compressed stream; in that case the contents of `output` are left
/// undefined.
pub fn compress(input: &[u8], output: &mut [u8]) -> Result<usize, Error> {
    let mut coder = Compressor::new();
    let mut writer = BitWriter::new(output);

    let mut bytes = input.iter().copied();
    let mut prefix = match bytes.next() {
        Some(b) => b as u16,
        None => {
            log::debug!("empty input, emitting END_OF_STREAM only");
            writer.write_bits(END_OF_STREAM, coder.code_bits)?;
            return Ok(writer.close());
        }
    };

    for c in bytes {
        match coder.dict.find_child(prefix, c) {
            Probe::Hit(code) => {
                prefix = code;
            }
            Probe::Miss(slot) => {
                writer.write_bits(prefix, coder.code_bits)?;
                coder.learn(slot, prefix, c, &mut writer)?;
                prefix = c as u16;
            }
        }
    }

    writer.write_bits(prefix, coder.code_bits)?;
    writer.write_bits(END_OF_STREAM, coder.code_bits)?;
    Ok(writer.close())
}

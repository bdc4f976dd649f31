//! The expander: reconstructs the original bytes from a code stream, per
//! spec.md §4.4.

use crate::Error;
use crate::lzw::bitstream::BitReader;
use crate::lzw::constants::*;
use crate::lzw::dictionary::CodeTable;

struct Pass {
    table: CodeTable,
    next_code: u16,
    code_bits: u32,
}

impl Pass {
    fn new() -> Self {
        Self { table: CodeTable::new(), next_code: FIRST_CODE, code_bits: MIN_CODE_BITS }
    }

    /// Walk `code -> parent -> ...` to the literal root, appending each
    /// character along the way, then push `code`'s own literal last. The
    /// forward byte sequence is obtained by draining the returned stack in
    /// reverse (last index first). `seed`, when present, is written to
    /// index 0 before the walk starts, implementing the `old_code`-plus-
    /// `character` exception in spec.md §4.4.
    fn decode_string(&self, seed: Option<u8>, mut code: u16) -> Result<Vec<u8>, Error> {
        let mut stack = Vec::new();
        if let Some(b) = seed {
            stack.push(b);
        }
        let mut steps = 0usize;
        while code > 255 {
            let entry = self.table.at(code).ok_or(Error::Malformed)?;
            stack.push(entry.character);
            code = entry.parent;
            steps += 1;
            if steps > TABLE_SIZE {
                return Err(Error::Malformed);
            }
        }
        stack.push(code as u8);
        Ok(stack)
    }
}

/// Expand a compressed `input` into `output`, returning the number of
/// bytes written.
///
/// Fails with [`Error::OutputExhausted`] if `output` is too small to hold
/// the expanded data, or [`Error::Malformed`] if `input` violates a
/// structural invariant of the format (a data code that was never
/// learned, or a dictionary chain that cannot terminate).
pub fn expand(input: &[u8], output: &mut [u8]) -> Result<usize, Error> {
    let mut reader = BitReader::new(input);
    let mut out_pos = 0usize;

    let mut write_byte = |b: u8, out_pos: &mut usize| -> Result<(), Error> {
        let slot = output.get_mut(*out_pos).ok_or(Error::OutputExhausted)?;
        *slot = b;
        *out_pos += 1;
        Ok(())
    };

    'outer: loop {
        let mut pass = Pass::new();
        let old_code_raw = reader.read_bits(pass.code_bits);
        if old_code_raw == END_OF_STREAM {
            return Ok(out_pos);
        }
        write_byte(old_code_raw as u8, &mut out_pos)?;
        let mut character = old_code_raw as u8;
        let mut old_code = old_code_raw;

        loop {
            let new_code = reader.read_bits(pass.code_bits);
            if new_code == END_OF_STREAM {
                return Ok(out_pos);
            }
            if new_code == FLUSH_CODE {
                log::debug!("flush received, reinitializing dictionary");
                continue 'outer;
            }
            if new_code == BUMP_CODE {
                log::debug!("widening code to {} bits", pass.code_bits + 1);
                pass.code_bits += 1;
                continue;
            }

            let stack = if new_code > pass.next_code {
                return Err(Error::Malformed);
            } else if new_code == pass.next_code {
                // KwKwK exception: the encoder just defined this code and
                // is using it in the same breath. Seed with the previous
                // string's first byte, then decode old_code.
                pass.decode_string(Some(character), old_code)?
            } else {
                pass.decode_string(None, new_code)?
            };

            character = *stack.last().expect("decode_string always pushes at least one byte");
            for &b in stack.iter().rev() {
                write_byte(b, &mut out_pos)?;
            }

            pass.table.insert(pass.next_code, old_code, character).ok_or(Error::Malformed)?;
            pass.next_code += 1;
            old_code = new_code;
        }
    }
}

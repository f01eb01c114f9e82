//! Control bytes, in input order:
//!
//! | Control       | Extra bytes | Meaning                                                        |
//! |---------------|-------------|----------------------------------------------------------------|
//! | `0x00..=0x7F` | `control`   | literal run of `control` bytes                                 |
//! | `0x80..=0xBF` | none        | offset `(c & 0xF) + 1`, length `(c >> 4) - 7`                  |
//! | `0xC0..=0xDF` | `b0`        | offset `b0 + 1`, length `c - 0xC0 + 2`                         |
//! | `0xE0..=0xFF` | `b0 b1`     | offset `((b0 & 0xF) << 8) + b1 + 1`, length `((c - 0xE0) << 4) + (b0 >> 4) + 3` |
//!
//! Back-references may overlap the bytes they produce; a reference with offset 1 repeats the
//! previous byte `length` times.

use crate::error::{DecompressError, MalformedStreamKind};

const LITERAL_LIMIT: u8 = 0x80;
const SHORT_LIMIT: u8 = 0xC0;
const MEDIUM_LIMIT: u8 = 0xE0;

/// Decodes `input[start..]` into `output`, which must be filled exactly.
///
/// Error offsets are positions within `input`.
///
/// # Errors
///
/// - [`DecompressError::MalformedStream`] if a control reads past `input` or writes outside `output`.
/// - [`DecompressError::Truncated`] if the stream ends before `output` is full.
pub fn decode(input: &[u8], start: usize, output: &mut [u8]) -> Result<(), DecompressError> {
    let mut in_pos = start;
    let mut out_pos = 0usize;

    while in_pos < input.len() {
        let control_offset = in_pos;
        let control = input[in_pos];
        in_pos += 1;
        let malformed = |kind| DecompressError::MalformedStream {
            offset: control_offset,
            kind,
        };

        if control < LITERAL_LIMIT {
            let len = control as usize;
            let literal = input
                .get(in_pos..in_pos + len)
                .ok_or(malformed(MalformedStreamKind::LiteralPastInputEnd))?;
            output
                .get_mut(out_pos..out_pos + len)
                .ok_or(malformed(MalformedStreamKind::OutputOverrun))?
                .copy_from_slice(literal);
            in_pos += len;
            out_pos += len;
            continue;
        }

        let (offset, length) = if control < SHORT_LIMIT {
            (
                (control & 0xF) as usize + 1,
                (control >> 4) as usize - 7,
            )
        } else if control < MEDIUM_LIMIT {
            let b0 = *input
                .get(in_pos)
                .ok_or(malformed(MalformedStreamKind::MissingControlBytes))?;
            in_pos += 1;
            (b0 as usize + 1, (control - SHORT_LIMIT) as usize + 2)
        } else {
            let extra = input
                .get(in_pos..in_pos + 2)
                .ok_or(malformed(MalformedStreamKind::MissingControlBytes))?;
            let (b0, b1) = (extra[0] as usize, extra[1] as usize);
            in_pos += 2;
            (
                ((b0 & 0xF) << 8) + b1 + 1,
                (((control - MEDIUM_LIMIT) as usize) << 4) + (b0 >> 4) + 3,
            )
        };

        copy_back_reference(output, out_pos, offset, length).map_err(malformed)?;
        out_pos += length;
    }

    if out_pos != output.len() {
        return Err(DecompressError::Truncated {
            produced: out_pos,
            expected: output.len(),
        });
    }
    Ok(())
}

/// Copies `length` bytes from `position - offset` to `position`, front to back.
#[inline]
fn copy_back_reference(
    output: &mut [u8],
    position: usize,
    offset: usize,
    length: usize,
) -> Result<(), MalformedStreamKind> {
    if offset > position {
        return Err(MalformedStreamKind::BackReferenceBeforeStart);
    }
    if length > output.len() - position {
        return Err(MalformedStreamKind::OutputOverrun);
    }

    if offset >= length {
        output.copy_within(position - offset..position - offset + length, position);
    } else {
        // Overlapping: each byte may be one this reference just wrote.
        for index in position..position + length {
            output[index] = output[index - offset];
        }
    }
    Ok(())
}

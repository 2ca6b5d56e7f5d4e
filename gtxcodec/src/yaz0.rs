use crate::consts::{
    BACKREF_EXTENDED_BIAS, MAGIC, MAX_DISTANCE, MAX_LENGTH, PROLOGUE_LEN, SIZE_OFFSET,
};
use alloc::vec::Vec;
use byteorder::{BigEndian, ByteOrder};
use snafu::{ensure, Snafu};

/// The prologue fields the decoder interprets.
///
/// Only the declared uncompressed size is meaningful to [`decompress`]; the
/// magic and reserved bytes are left to [`is_compressed`].
#[derive(Debug, Clone)]
pub struct StreamHeader {
    pub decompressed_size: u32,
}

#[derive(Debug, Snafu)]
pub enum DecompressError {
    #[snafu(display(
        "prologue disagrees with stream: {stream_len} byte stream, declared output size {declared_size}"
    ))]
    PrologueMismatch {
        stream_len: usize,
        declared_size: u32,
    },

    #[snafu(display(
        "token data exhausted before the declared {declared_size} output bytes were produced"
    ))]
    TruncatedInput { declared_size: u32 },

    #[snafu(display(
        "back-reference reaches {distance} bytes behind output position {position}"
    ))]
    InvalidBackReference { distance: usize, position: usize },
}

/// Returns true if `data` starts with the prologue shape encoders write:
/// the magic plus zeroed reserved bytes.
pub fn is_compressed(data: &[u8]) -> bool {
    data.len() >= PROLOGUE_LEN && data[..4] == MAGIC && data[8..15].iter().all(|&b| b == 0)
}

/// Reads the declared uncompressed size out of the 16-byte prologue.
pub fn read_header(data: &[u8]) -> Result<StreamHeader, DecompressError> {
    ensure!(
        data.len() >= PROLOGUE_LEN,
        PrologueMismatchSnafu {
            stream_len: data.len(),
            declared_size: 0u32,
        }
    );

    Ok(StreamHeader {
        decompressed_size: BigEndian::read_u32(&data[SIZE_OFFSET..SIZE_OFFSET + 4]),
    })
}

/// Expands a Yaz0 stream into exactly its declared number of bytes.
///
/// Token decode starts at prologue offset 16. Each control byte gates the
/// next 8 tokens, most-significant bit first: a set bit copies one literal
/// input byte, a clear bit copies `length` bytes from `distance` bytes back
/// in the output. The copy advances one byte at a time, so a back-reference
/// may overlap its own destination; `distance = 1` repeats the last written
/// byte.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>, DecompressError> {
    let header = read_header(data)?;
    let declared_size = header.decompressed_size;
    let size = declared_size as usize;
    let tokens = &data[PROLOGUE_LEN..];

    // A zero-size stream carries no token data, and vice versa.
    ensure!(
        (size == 0) == tokens.is_empty(),
        PrologueMismatchSnafu {
            stream_len: data.len(),
            declared_size,
        }
    );

    let mut output = Vec::with_capacity(size);
    let mut tokens = tokens.iter().copied();
    let mut next = || {
        tokens
            .next()
            .ok_or(DecompressError::TruncatedInput { declared_size })
    };

    let mut control = 0u8;
    let mut bits_remaining = 0u8;

    while output.len() < size {
        if bits_remaining == 0 {
            control = next()?;
            bits_remaining = 8;
        }

        if control & 0x80 != 0 {
            output.push(next()?);
        } else {
            let b1 = next()?;
            let b2 = next()?;
            let distance = ((usize::from(b1 & 0xF) << 8) | usize::from(b2)) + 1;
            let length = match b1 >> 4 {
                0 => usize::from(next()?) + BACKREF_EXTENDED_BIAS,
                n => usize::from(n) + 2,
            };
            debug_assert!(distance <= MAX_DISTANCE && length <= MAX_LENGTH);

            ensure!(
                distance <= output.len(),
                InvalidBackReferenceSnafu {
                    distance,
                    position: output.len(),
                }
            );

            let mut src = output.len() - distance;
            for _ in 0..length.min(size - output.len()) {
                let byte = output[src];
                output.push(byte);
                src += 1;
            }
        }

        control <<= 1;
        bits_remaining -= 1;
    }

    Ok(output)
}

/// Encodes `data` as a token body with every byte stored as a literal.
///
/// Each group of 8 literals is preceded by an all-ones control byte, so the
/// output is exactly `data.len() + ceil(data.len() / 8)` bytes. No match
/// search is performed, and the 16-byte prologue is *not* included; see
/// [`compress`] for a complete stream.
pub fn compress_body(data: &[u8]) -> Vec<u8> {
    let mut output = Vec::with_capacity(data.len() + (data.len() + 7) / 8);
    for chunk in data.chunks(8) {
        output.push(0xFF);
        output.extend_from_slice(chunk);
    }

    output
}

/// Encodes `data` as a complete Yaz0 stream: magic, big-endian uncompressed
/// size, zeroed reserved bytes, then the literal-only body of
/// [`compress_body`].
pub fn compress(data: &[u8]) -> Vec<u8> {
    let mut output =
        Vec::with_capacity(PROLOGUE_LEN + data.len() + (data.len() + 7) / 8);
    output.extend_from_slice(&MAGIC);

    let mut size = [0u8; 4];
    BigEndian::write_u32(&mut size, data.len() as u32);
    output.extend_from_slice(&size);
    output.extend_from_slice(&[0u8; 8]);

    output.extend_from_slice(&compress_body(data));
    output
}

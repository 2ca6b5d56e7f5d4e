//! Codecs for the texture and archive payloads of Wii U (GX2) game assets.
//!
//! Three decoders and one encoder, all pure buffer-to-buffer transforms:
//!
//! - [`rgba8::decode`] untiles a GX2 micro-tiled RGBA8 surface into a
//!   row-major pixel buffer.
//! - [`dxt5::decode`] untiles and expands DXT5 (BC3) block data into a
//!   row-major RGBA8 pixel buffer. DXT5 surfaces use their own block-level
//!   tiling, distinct from the RGBA8 one.
//! - [`yaz0::decompress`] expands a Yaz0 stream (16-byte prologue followed by
//!   flag-gated literal/back-reference tokens) into its declared size.
//! - [`yaz0::compress`] produces a valid Yaz0 stream without performing any
//!   match search: every byte is stored as a literal.
//!
//! # Scope
//!
//! Container parsing is out of scope: no GTX/SARC headers, mip chains or
//! atlas layout, and nothing here touches the filesystem. Callers hand in a
//! payload buffer plus dimensions where relevant and own the returned buffer.
//!
//! The tiling formulas are hardware-defined and reproduced bit-for-bit; see
//! [`tiling`] for the raw offset functions. Malformed input is reported
//! through per-module error enums instead of reading out of bounds.
//!
//! # Stream format
//!
//! See [consts] for the Yaz0 prologue layout and token forms.
#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
pub mod dxt5;
#[cfg(feature = "alloc")]
pub mod rgba8;
#[cfg(feature = "alloc")]
pub mod yaz0;

pub mod tiling;
pub mod utils;

#[cfg(feature = "alloc")]
pub use yaz0::StreamHeader;

pub mod consts {
    //! Layout constants for the Yaz0 stream format.
    //!
    //! A stream is a 16-byte prologue followed by token data:
    //!
    //! ```plain
    //! .- prologue ----------------------------------------.
    //! | Bytes[0..4] | Bytes[4..8]      | Bytes[8..16]     |
    //! |-------------+------------------+------------------|
    //! | `Yaz0`      | u32be size       | reserved (zero)  |
    //! `---------------------------------------------------`
    //! ```
    //!
    //! The decoder only interprets the size field; the magic and reserved
    //! bytes are written by encoders and checked by
    //! [`crate::yaz0::is_compressed`].
    //!
    //! Tokens are gated by control bytes. Each control byte supplies the kind
    //! bits for the next 8 tokens, consumed most-significant-bit first: a set
    //! bit marks a literal, a clear bit a back-reference.
    //!
    //! ```plain
    //! .- literal ---------------.
    //! |         Byte[0]         |
    //! |  7  6  5  4  3  2  1  0 |
    //! |-------------------------|
    //! |          value          |
    //! `-------------------------`
    //! ```
    //!
    //! - control bit 1
    //! - 8-bit byte value, emitted as-is
    //!
    //! ```plain
    //! .- back-reference, short ---------------------------.
    //! |         Byte[0]         |         Byte[1]         |
    //! |  7  6  5  4  3  2  1  0 |  7  6  5  4  3  2  1  0 |
    //! |------------+------------+-------------------------|
    //! |  len - 2   |         distance - 1 (12 bits)       |
    //! `---------------------------------------------------`
    //! ```
    //!
    //! - control bit 0
    //! - 4-bit length, stored with a bias of -2 (3..=17 in practice; a zero
    //!   nibble selects the extended form instead)
    //! - 12-bit backward distance, stored with a bias of -1: 1..=4096,
    //!   measured from the current output position
    //!
    //! ```plain
    //! .- back-reference, extended ------------------------------------------.
    //! |         Byte[0]         |         Byte[1]         |     Byte[2]     |
    //! |  7  6  5  4  3  2  1  0 |  7  6  5  4  3  2  1  0 |     7 .. 0      |
    //! |-------------+-----------+-------------------------+-----------------|
    //! |  0  0  0  0 |         distance - 1 (12 bits)      |    len - 18     |
    //! `----------------------------------------------------------------------`
    //! ```
    //!
    //! - control bit 0, length nibble 0
    //! - 12-bit backward distance as in the short form
    //! - 8-bit length, stored with a bias of -18: 18..=273

    /// Prologue magic written by encoders.
    pub const MAGIC: [u8; 4] = *b"Yaz0";

    /// Total prologue length in bytes; token data starts here.
    pub const PROLOGUE_LEN: usize = 16;

    /// Offset of the big-endian u32 uncompressed-size field.
    pub const SIZE_OFFSET: usize = 4;

    /// Length bias of the extended back-reference form.
    pub const BACKREF_EXTENDED_BIAS: usize = 0x12;

    /// Largest backward distance a back-reference can encode.
    pub const MAX_DISTANCE: usize = 4096;

    /// Largest length an (extended) back-reference can encode.
    pub const MAX_LENGTH: usize = 273;
}

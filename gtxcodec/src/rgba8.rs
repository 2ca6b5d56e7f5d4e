use crate::tiling;
use alloc::{vec, vec::Vec};
use itertools::iproduct;
use snafu::{ensure, Snafu};

#[derive(Debug, Snafu)]
pub enum DecodeError {
    #[snafu(display("surface dimensions must be nonzero, got {width}x{height}"))]
    InvalidDimensions { width: u32, height: u32 },

    #[snafu(display(
        "tiled input too short: pixel ({x}, {y}) maps to bytes {offset}..{}, but only {len} are available",
        offset + 4
    ))]
    TruncatedInput {
        x: u32,
        y: u32,
        offset: u64,
        len: usize,
    },
}

/// Untiles a GX2 micro-tiled RGBA8 surface into a row-major pixel buffer.
///
/// `data` is the tiled surface. Tiled allocations cover whole 16-row tiles,
/// so for heights that are not multiples of 16 the input must be the larger
/// tile-aligned size, not `width * height * 4`. The 4 bytes of each pixel
/// are copied as-is; no channel reordering is performed.
pub fn decode(width: u32, height: u32, data: &[u8]) -> Result<Vec<u8>, DecodeError> {
    ensure!(
        width != 0 && height != 0,
        InvalidDimensionsSnafu { width, height }
    );

    let mut output = vec![0u8; width as usize * height as usize * 4];

    for (y, x) in iproduct!(0..height, 0..width) {
        let src = tiling::rgba8_byte_offset(x, y, width);
        ensure!(
            src + 4 <= data.len() as u64,
            TruncatedInputSnafu {
                x,
                y,
                offset: src,
                len: data.len(),
            }
        );

        let src = src as usize;
        let dst = (y as usize * width as usize + x as usize) * 4;
        output[dst..dst + 4].copy_from_slice(&data[src..src + 4]);
    }

    Ok(output)
}

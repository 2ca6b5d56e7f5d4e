use crate::{tiling, utils};
use alloc::{vec, vec::Vec};
use byteorder::{ByteOrder, LittleEndian};
use itertools::iproduct;
use snafu::{ensure, Snafu};

/// Size of one compressed 4x4 block in bytes.
pub const BLOCK_SIZE: usize = 16;

#[derive(Debug, Snafu)]
pub enum DecodeError {
    #[snafu(display(
        "surface dimensions must be nonzero multiples of 4, got {width}x{height}"
    ))]
    InvalidDimensions { width: u32, height: u32 },

    #[snafu(display(
        "block input too short: block ({bx}, {by}) maps to bytes {offset}..{}, but only {len} are available",
        offset + BLOCK_SIZE as u64
    ))]
    TruncatedInput {
        bx: u32,
        by: u32,
        offset: u64,
        len: usize,
    },
}

/// Decodes a tiled DXT5 surface into a row-major RGBA8 pixel buffer.
///
/// `width` and `height` must be nonzero multiples of 4 so the 4x4 block grid
/// tiles the surface exactly. The blocks are first untiled into row-major
/// block order, then each block is expanded.
pub fn decode(width: u32, height: u32, data: &[u8]) -> Result<Vec<u8>, DecodeError> {
    ensure!(
        width != 0 && height != 0 && width % 4 == 0 && height % 4 == 0,
        InvalidDimensionsSnafu { width, height }
    );

    let block_width = width / 4;
    let block_height = height / 4;
    let blocks = linearize_blocks(block_width, block_height, data)?;

    let mut output = vec![0u8; width as usize * height as usize * 4];
    for (by, bx) in iproduct!(0..block_height, 0..block_width) {
        let index = (by as usize * block_width as usize + bx as usize) * BLOCK_SIZE;
        let pixels = decode_block(&blocks[index..index + BLOCK_SIZE]);

        for (row, col) in iproduct!(0..4u32, 0..4u32) {
            let px = bx * 4 + col;
            let py = by * 4 + row;
            let dst = (py as usize * width as usize + px as usize) * 4;
            output[dst..dst + 4].copy_from_slice(&pixels[(row * 4 + col) as usize]);
        }
    }

    Ok(output)
}

/// Reorders the tiled 16-byte blocks of a DXT5 surface into row-major block
/// order.
///
/// `block_width` and `block_height` are the grid dimensions in 4x4 blocks.
/// Every source block is bounds-checked against `data`; tiled allocations
/// can exceed `block_width * block_height * 16` when the grid height is not
/// tile-aligned.
pub fn linearize_blocks(
    block_width: u32,
    block_height: u32,
    data: &[u8],
) -> Result<Vec<u8>, DecodeError> {
    let mut blocks =
        vec![0u8; block_width as usize * block_height as usize * BLOCK_SIZE];

    for (by, bx) in iproduct!(0..block_height, 0..block_width) {
        let src = tiling::dxt5_block_index(bx, by, block_width) * BLOCK_SIZE as u64;
        ensure!(
            src + BLOCK_SIZE as u64 <= data.len() as u64,
            TruncatedInputSnafu {
                bx,
                by,
                offset: src,
                len: data.len(),
            }
        );

        let src = src as usize;
        let dst = (by as usize * block_width as usize + bx as usize) * BLOCK_SIZE;
        blocks[dst..dst + BLOCK_SIZE].copy_from_slice(&data[src..src + BLOCK_SIZE]);
    }

    Ok(blocks)
}

/// Expands one 16-byte block into its 4x4 RGBA pixels, row-major.
fn decode_block(block: &[u8]) -> [[u8; 4]; 16] {
    let color0 = LittleEndian::read_u16(&block[8..10]);
    let color1 = LittleEndian::read_u16(&block[10..12]);
    let color_bits = LittleEndian::read_u32(&block[12..16]);

    let c0 = utils::expand_565(color0);
    let c1 = utils::expand_565(color1);
    let palette = [c0, c1, third(c0, c1), third(c1, c0)];

    let alpha = utils::alpha_ramp(block[0], block[1]);
    let alpha_bits = LittleEndian::read_u48(&block[2..8]);

    let mut pixels = [[0u8; 4]; 16];
    for (i, pixel) in pixels.iter_mut().enumerate() {
        let [r, g, b] = palette[((color_bits >> (2 * i)) & 3) as usize];
        let a = alpha[((alpha_bits >> (3 * i)) & 7) as usize];
        *pixel = [r, g, b, a];
    }

    pixels
}

/// Two-thirds/one-third channel blend for the interpolated palette entries.
/// Integer truncation, no rounding bias.
fn third(two: [u8; 3], one: [u8; 3]) -> [u8; 3] {
    let mut out = [0u8; 3];
    for (channel, (&a, &b)) in two.iter().zip(&one).enumerate() {
        out[channel] = ((u16::from(a) * 2 + u16::from(b)) / 3) as u8;
    }

    out
}

use gtxcodec::tiling::{dxt5_block_index, rgba8_byte_offset};
use std::collections::HashSet;

#[test]
fn rgba8_offsets_permute_tile_aligned_surfaces() {
    for &(width, height) in &[(64, 16), (64, 32), (64, 64), (128, 16), (256, 32)] {
        let surface_bytes = u64::from(width) * u64::from(height) * 4;

        let mut seen = HashSet::new();
        for y in 0..height {
            for x in 0..width {
                let pos = rgba8_byte_offset(x, y, width);
                assert!(
                    pos + 4 <= surface_bytes,
                    "{width}x{height}: pixel ({x}, {y}) maps past the surface"
                );
                assert!(
                    seen.insert(pos),
                    "{width}x{height}: two pixels map to byte offset {pos}"
                );
            }
        }

        assert_eq!(seen.len(), (width * height) as usize);
    }
}

#[test]
fn dxt5_block_indices_permute_tile_aligned_grids() {
    for &(bw, bh) in &[(32, 16), (32, 32), (32, 64), (64, 32), (512, 128)] {
        let block_count = u64::from(bw) * u64::from(bh);

        let mut seen = HashSet::new();
        for by in 0..bh {
            for bx in 0..bw {
                let pos = dxt5_block_index(bx, by, bw);
                assert!(
                    pos < block_count,
                    "{bw}x{bh} grid: block ({bx}, {by}) maps past the grid"
                );
                assert!(
                    seen.insert(pos),
                    "{bw}x{bh} grid: two blocks map to index {pos}"
                );
            }
        }

        assert_eq!(seen.len(), block_count as usize);
    }
}

use gtxcodec::yaz0::{
    compress, compress_body, decompress, is_compressed, read_header, DecompressError,
};

/// Builds a stream out of a declared size and raw token data.
fn stream(size: u32, tokens: &[u8]) -> Vec<u8> {
    let mut data = Vec::with_capacity(16 + tokens.len());
    data.extend_from_slice(b"Yaz0");
    data.extend_from_slice(&size.to_be_bytes());
    data.extend_from_slice(&[0u8; 8]);
    data.extend_from_slice(tokens);
    data
}

#[test]
fn literal_run_decodes_verbatim() {
    let data = stream(8, &[0xFF, 1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(decompress(&data).unwrap(), [1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn distance_one_back_reference_repeats_last_byte() {
    // One literal, then a distance-1 back-reference capped by the declared
    // size: only two more bytes are produced.
    let data = stream(3, &[0b1000_0000, 0x41, 0x00, 0x00, 0x00]);
    assert_eq!(decompress(&data).unwrap(), [0x41, 0x41, 0x41]);
}

#[test]
fn zero_nibble_selects_extended_length() {
    // Length byte 0x00 means 18 bytes copied from distance 1.
    let data = stream(19, &[0b1000_0000, 0x41, 0x00, 0x00, 0x00]);
    assert_eq!(decompress(&data).unwrap(), [0x41; 19]);
}

#[test]
fn overlapping_back_reference_tiles_a_pattern() {
    // Literals "ab", then distance 2, length 8.
    let data = stream(10, &[0b1100_0000, b'a', b'b', 0x60, 0x01]);
    assert_eq!(decompress(&data).unwrap(), b"ababababab");
}

#[test]
fn back_reference_is_capped_at_the_declared_size() {
    // Length 3 with only one byte of output left to produce.
    let data = stream(2, &[0b1000_0000, b'x', 0x10, 0x00]);
    assert_eq!(decompress(&data).unwrap(), b"xx");
}

#[test]
fn decode_is_deterministic() {
    let data = stream(10, &[0b1100_0000, b'a', b'b', 0x60, 0x01]);
    assert_eq!(decompress(&data).unwrap(), decompress(&data).unwrap());
}

#[test]
fn short_prologue_is_rejected() {
    assert!(matches!(
        decompress(&[0u8; 8]),
        Err(DecompressError::PrologueMismatch { .. })
    ));
}

#[test]
fn size_and_token_data_must_agree() {
    // Declared output with no token data.
    assert!(matches!(
        decompress(&stream(4, &[])),
        Err(DecompressError::PrologueMismatch { .. })
    ));
    // Token data with no declared output.
    assert!(matches!(
        decompress(&stream(0, &[0xFF, 1])),
        Err(DecompressError::PrologueMismatch { .. })
    ));
    // Both empty is a valid empty stream.
    assert_eq!(decompress(&stream(0, &[])).unwrap(), Vec::<u8>::new());
}

#[test]
fn exhausted_token_data_is_rejected() {
    assert!(matches!(
        decompress(&stream(4, &[0xFF, 1])),
        Err(DecompressError::TruncatedInput { .. })
    ));
    // Back-reference cut off after its first byte.
    assert!(matches!(
        decompress(&stream(4, &[0b1000_0000, 1, 0x20])),
        Err(DecompressError::TruncatedInput { .. })
    ));
}

#[test]
fn back_reference_before_output_start_is_rejected() {
    // First token is a back-reference; there is nothing to copy from yet.
    assert!(matches!(
        decompress(&stream(2, &[0b0000_0000, 0x10, 0x00])),
        Err(DecompressError::InvalidBackReference { .. })
    ));
}

#[test]
fn compress_body_is_all_literals() {
    let input: Vec<u8> = (1..=20).collect();
    let body = compress_body(&input);

    assert_eq!(body.len(), input.len() + 3);
    let mut expected = vec![0xFF];
    expected.extend(1..=8u8);
    expected.push(0xFF);
    expected.extend(9..=16u8);
    expected.push(0xFF);
    expected.extend(17..=20u8);
    assert_eq!(body, expected);

    assert!(compress_body(&[]).is_empty());
}

#[test]
fn compress_body_size_formula() {
    for len in [0usize, 1, 7, 8, 9, 63, 64, 1000] {
        let input = vec![0xABu8; len];
        assert_eq!(compress_body(&input).len(), len + (len + 7) / 8);
    }
}

#[test]
fn compressed_streams_round_trip() {
    let inputs: [&[u8]; 4] = [
        b"",
        b"a",
        b"compressible compressible compressible",
        &[0u8; 1000],
    ];
    for input in inputs {
        let data = compress(input);
        assert!(is_compressed(&data));
        assert_eq!(
            read_header(&data).unwrap().decompressed_size,
            input.len() as u32
        );
        assert_eq!(decompress(&data).unwrap(), input);
    }
}

#[test]
fn prologue_probe_rejects_other_data() {
    assert!(!is_compressed(b"Yaz0"));
    assert!(!is_compressed(&[0u8; 32]));

    let mut data = compress(b"abc");
    data[10] = 1; // reserved bytes must be zero
    assert!(!is_compressed(&data));
}

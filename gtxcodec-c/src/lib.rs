//! C ABI for the gtxcodec codecs.
//!
//! Every function takes raw input and output buffers as pointer/length
//! pairs, decodes into the caller's output buffer, and returns the number of
//! bytes written, or -1 on any decode failure or undersized output buffer.
//! Sizing helpers are provided so callers can allocate outputs up front.

use gtxcodec::{dxt5, rgba8, yaz0};

unsafe fn fill_output(result: Vec<u8>, output: *mut u8, output_len: usize) -> isize {
    if result.len() > output_len {
        return -1;
    }

    unsafe { core::ptr::copy_nonoverlapping(result.as_ptr(), output, result.len()) };
    result.len() as isize
}

/// Untiles a GX2 micro-tiled RGBA8 surface into row-major RGBA pixels.
///
/// - `data`: pointer to the tiled surface
/// - `data_len`: length of the tiled surface, in bytes
/// - `output`: pointer to the output buffer
/// - `output_len`: length of the output buffer, in bytes; at least
///   `width * height * 4`
///
/// Returns the number of bytes written, or -1 on failure.
///
/// # Safety
///
/// `data` and `output` must be valid for `data_len` reads and `output_len`
/// writes respectively.
#[no_mangle]
pub unsafe extern "C" fn gtx_decode_rgba8(
    width: u32,
    height: u32,
    data: *const u8,
    data_len: usize,
    output: *mut u8,
    output_len: usize,
) -> isize {
    let data = unsafe { core::slice::from_raw_parts(data, data_len) };

    match rgba8::decode(width, height, data) {
        Ok(pixels) => unsafe { fill_output(pixels, output, output_len) },
        Err(_) => -1,
    }
}

/// Untiles and decompresses a DXT5 surface into row-major RGBA pixels.
///
/// - `data`: pointer to the tiled block data
/// - `data_len`: length of the block data, in bytes
/// - `output`: pointer to the output buffer
/// - `output_len`: length of the output buffer, in bytes; at least
///   `width * height * 4`
///
/// Returns the number of bytes written, or -1 on failure.
///
/// # Safety
///
/// `data` and `output` must be valid for `data_len` reads and `output_len`
/// writes respectively.
#[no_mangle]
pub unsafe extern "C" fn gtx_decode_dxt5(
    width: u32,
    height: u32,
    data: *const u8,
    data_len: usize,
    output: *mut u8,
    output_len: usize,
) -> isize {
    let data = unsafe { core::slice::from_raw_parts(data, data_len) };

    match dxt5::decode(width, height, data) {
        Ok(pixels) => unsafe { fill_output(pixels, output, output_len) },
        Err(_) => -1,
    }
}

/// Upper bound on the size of a Yaz0 stream produced by [`gtx_compress`]
/// for `data_len` input bytes.
#[no_mangle]
pub extern "C" fn gtx_compress_bound(data_len: usize) -> usize {
    16 + data_len + (data_len + 7) / 8
}

/// Compresses a buffer into a complete Yaz0 stream (literal-only encoding).
///
/// - `data`: pointer to the raw input
/// - `data_len`: length of the raw input, in bytes
/// - `output`: pointer to the output buffer
/// - `output_len`: length of the output buffer, in bytes; at least
///   [`gtx_compress_bound`] of `data_len`
///
/// Returns the number of bytes written, or -1 if the output buffer is too
/// small.
///
/// # Safety
///
/// `data` and `output` must be valid for `data_len` reads and `output_len`
/// writes respectively.
#[no_mangle]
pub unsafe extern "C" fn gtx_compress(
    data: *const u8,
    data_len: usize,
    output: *mut u8,
    output_len: usize,
) -> isize {
    let data = unsafe { core::slice::from_raw_parts(data, data_len) };
    unsafe { fill_output(yaz0::compress(data), output, output_len) }
}

/// Reads the declared uncompressed size out of a Yaz0 stream prologue.
///
/// Returns the size, or -1 if the stream is shorter than the prologue.
///
/// # Safety
///
/// `data` must be valid for `data_len` reads.
#[no_mangle]
pub unsafe extern "C" fn gtx_decompressed_size(data: *const u8, data_len: usize) -> i64 {
    let data = unsafe { core::slice::from_raw_parts(data, data_len) };

    match yaz0::read_header(data) {
        Ok(header) => i64::from(header.decompressed_size),
        Err(_) => -1,
    }
}

/// Decompresses a Yaz0 stream.
///
/// - `data`: pointer to the stream, prologue included
/// - `data_len`: length of the stream, in bytes
/// - `output`: pointer to the output buffer
/// - `output_len`: length of the output buffer, in bytes; at least
///   [`gtx_decompressed_size`] of the stream
///
/// Returns the number of bytes written, or -1 on failure.
///
/// # Safety
///
/// `data` and `output` must be valid for `data_len` reads and `output_len`
/// writes respectively.
#[no_mangle]
pub unsafe extern "C" fn gtx_decompress(
    data: *const u8,
    data_len: usize,
    output: *mut u8,
    output_len: usize,
) -> isize {
    let data = unsafe { core::slice::from_raw_parts(data, data_len) };

    match yaz0::decompress(data) {
        Ok(raw) => unsafe { fill_output(raw, output, output_len) },
        Err(_) => -1,
    }
}

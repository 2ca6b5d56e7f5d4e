use argh::FromArgs;
use gtxcodec::{dxt5, rgba8, yaz0};
use image::{ImageFormat, RgbaImage};
use std::str::FromStr;

/// GX2 texture and Yaz0 stream codec cli.
#[derive(FromArgs)]
struct Cli {
    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum Command {
    Deswizzle(Deswizzle),
    Dxt5(Dxt5),
    Compress(Compress),
    Decompress(Decompress),
}

#[derive(Debug)]
enum Format {
    Png,
    Bmp,
}

impl FromStr for Format {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("png") {
            Ok(Format::Png)
        } else if s.eq_ignore_ascii_case("bmp") {
            Ok(Format::Bmp)
        } else {
            Err("invalid string")
        }
    }
}

impl Format {
    fn image_format(&self) -> ImageFormat {
        match self {
            Format::Png => ImageFormat::Png,
            Format::Bmp => ImageFormat::Bmp,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Cli { command } = argh::from_env();

    match command {
        Command::Deswizzle(options) => deswizzle(options),
        Command::Dxt5(options) => decode_dxt5(options),
        Command::Compress(options) => compress(options),
        Command::Decompress(options) => decompress(options),
    }
}

/// Untiles a raw RGBA8 surface and writes it as an image.
#[derive(FromArgs)]
#[argh(subcommand, name = "deswizzle")]
struct Deswizzle {
    /// surface width in pixels
    #[argh(option)]
    width: u32,
    /// surface height in pixels
    #[argh(option)]
    height: u32,
    /// output format, defaults to png (png, bmp)
    #[argh(option, default = "Format::Png")]
    format: Format,

    /// the tiled input file
    #[argh(positional)]
    input: String,
    /// the output image file
    #[argh(positional)]
    output: String,
}

fn deswizzle(options: Deswizzle) -> Result<(), Box<dyn std::error::Error>> {
    let Deswizzle {
        width,
        height,
        format,
        input,
        output,
    } = options;

    let tiled = std::fs::read(&input)?;
    println!("Untiling {width}x{height} RGBA8 surface from `{input}`");

    let pixels = rgba8::decode(width, height, &tiled)?;
    save_image(width, height, pixels, &output, format)
}

/// Untiles and decompresses a raw DXT5 surface and writes it as an image.
#[derive(FromArgs)]
#[argh(subcommand, name = "dxt5")]
struct Dxt5 {
    /// surface width in pixels (multiple of 4)
    #[argh(option)]
    width: u32,
    /// surface height in pixels (multiple of 4)
    #[argh(option)]
    height: u32,
    /// output format, defaults to png (png, bmp)
    #[argh(option, default = "Format::Png")]
    format: Format,

    /// the tiled block input file
    #[argh(positional)]
    input: String,
    /// the output image file
    #[argh(positional)]
    output: String,
}

fn decode_dxt5(options: Dxt5) -> Result<(), Box<dyn std::error::Error>> {
    let Dxt5 {
        width,
        height,
        format,
        input,
        output,
    } = options;

    let blocks = std::fs::read(&input)?;
    println!("Decoding {width}x{height} DXT5 surface from `{input}`");

    let pixels = dxt5::decode(width, height, &blocks)?;
    save_image(width, height, pixels, &output, format)
}

fn save_image(
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    output: &str,
    format: Format,
) -> Result<(), Box<dyn std::error::Error>> {
    RgbaImage::from_vec(width, height, pixels)
        .ok_or("failed to create image")?
        .save_with_format(output, format.image_format())?;

    println!("Written {width}x{height} image to `{output}`");
    Ok(())
}

/// Compresses a file into a Yaz0 stream (literal-only encoding).
#[derive(FromArgs)]
#[argh(subcommand, name = "compress")]
struct Compress {
    /// the input file
    #[argh(positional)]
    input: String,
    /// the output file
    #[argh(positional)]
    output: String,
}

fn compress(options: Compress) -> Result<(), Box<dyn std::error::Error>> {
    let Compress { input, output } = options;

    let raw = std::fs::read(&input)?;
    let stream = yaz0::compress(&raw);

    std::fs::write(&output, &stream)?;
    println!(
        "Written {} bytes ({} raw) to `{output}`",
        stream.len(),
        raw.len()
    );

    Ok(())
}

/// Decompresses a Yaz0 stream.
#[derive(FromArgs)]
#[argh(subcommand, name = "decompress")]
struct Decompress {
    /// the input file
    #[argh(positional)]
    input: String,
    /// the output file
    #[argh(positional)]
    output: String,
}

fn decompress(options: Decompress) -> Result<(), Box<dyn std::error::Error>> {
    let Decompress { input, output } = options;

    let stream = std::fs::read(&input)?;
    if !yaz0::is_compressed(&stream) {
        return Err(format!("`{input}` does not carry a Yaz0 prologue").into());
    }

    let raw = yaz0::decompress(&stream)?;

    std::fs::write(&output, &raw)?;
    println!("Written {} bytes to `{output}`", raw.len());

    Ok(())
}

use std::{
    fs::File,
    io::{BufReader, Write},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use bmpfx_core::{BmpHeader, Operation, Rotation};
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(name = "bmpfx", version, about = "Apply simple filters to 24-bit BMP images")]
struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the header fields of a BMP file.
    Info(InfoArgs),
    /// Darken toward the edges.
    Vignette(IoArgs),
    /// Lighten highlights and darken shadows by a factor.
    Clarendon(FactorArgs),
    /// Average the channels of every pixel.
    Grayscale(IoArgs),
    /// Rotate 90 degrees clockwise.
    Rotate90(IoArgs),
    /// Rotate by a multiple of 90 degrees clockwise.
    Rotate(RotateArgs),
    /// Enlarge by integer factors (nearest neighbor).
    Enlarge(EnlargeArgs),
    /// Threshold to black and white.
    HighContrast(IoArgs),
    /// Move every channel toward white by a factor.
    Lighten(FactorArgs),
    /// Scale every channel by a factor.
    Darken(FactorArgs),
    /// Reduce to black, white, red, green and blue.
    Posterize(IoArgs),
    /// Apply a JSON list of operations in order.
    Chain(ChainArgs),
}

#[derive(Args, Debug)]
struct InfoArgs {
    /// Input BMP path.
    input: PathBuf,
}

#[derive(Args, Debug)]
struct IoArgs {
    /// Input BMP path.
    input: PathBuf,

    /// Output BMP path.
    output: PathBuf,
}

#[derive(Args, Debug)]
struct FactorArgs {
    #[command(flatten)]
    io: IoArgs,

    /// Scaling factor.
    #[arg(long, allow_negative_numbers = true)]
    factor: f64,
}

#[derive(Args, Debug)]
struct RotateArgs {
    #[command(flatten)]
    io: IoArgs,

    /// Number of clockwise quarter turns (negative turns counter-clockwise).
    #[arg(
        long,
        allow_negative_numbers = true,
        conflicts_with = "degrees",
        required_unless_present = "degrees"
    )]
    turns: Option<i32>,

    /// Clockwise angle in degrees; must be a multiple of 90.
    #[arg(long, allow_negative_numbers = true)]
    degrees: Option<i32>,
}

#[derive(Args, Debug)]
struct EnlargeArgs {
    #[command(flatten)]
    io: IoArgs,

    /// Horizontal scale factor.
    #[arg(long, default_value_t = 1)]
    x_scale: u32,

    /// Vertical scale factor.
    #[arg(long, default_value_t = 1)]
    y_scale: u32,
}

#[derive(Args, Debug)]
struct ChainArgs {
    #[command(flatten)]
    io: IoArgs,

    /// JSON file holding an array of operations, e.g. `[{"op": "grayscale"}]`.
    #[arg(long)]
    ops: PathBuf,
}

impl Command {
    /// Resolve a per-transform subcommand to its operation and paths.
    ///
    /// Returns `None` for `info` and `chain`.
    fn transform(&self) -> anyhow::Result<Option<(Operation, &IoArgs)>> {
        let resolved = match self {
            Command::Info(_) | Command::Chain(_) => return Ok(None),
            Command::Vignette(io) => (Operation::Vignette, io),
            Command::Clarendon(a) => (Operation::Clarendon { factor: a.factor }, &a.io),
            Command::Grayscale(io) => (Operation::Grayscale, io),
            Command::Rotate90(io) => (Operation::Rotate90, io),
            Command::Rotate(a) => {
                let turns = match (a.turns, a.degrees) {
                    (Some(turns), _) => turns,
                    (None, Some(degrees)) => Rotation::from_degrees(degrees)?.turns() as i32,
                    (None, None) => anyhow::bail!("either --turns or --degrees is required"),
                };
                (Operation::Rotate { turns }, &a.io)
            }
            Command::Enlarge(a) => (
                Operation::Enlarge {
                    x_scale: a.x_scale,
                    y_scale: a.y_scale,
                },
                &a.io,
            ),
            Command::HighContrast(io) => (Operation::HighContrast, io),
            Command::Lighten(a) => (Operation::Lighten { factor: a.factor }, &a.io),
            Command::Darken(a) => (Operation::Darken { factor: a.factor }, &a.io),
            Command::Posterize(io) => (Operation::Posterize, io),
        };
        Ok(Some(resolved))
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.cmd {
        Command::Info(args) => cmd_info(args),
        Command::Chain(args) => cmd_chain(args),
        cmd => match cmd.transform()? {
            Some((op, io)) => cmd_apply(op, io),
            None => Ok(()),
        },
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn cmd_info(args: &InfoArgs) -> anyhow::Result<()> {
    let bytes = std::fs::read(&args.input)
        .with_context(|| format!("read '{}'", args.input.display()))?;
    let header = bmpfx_core::inspect_bmp(&bytes)
        .with_context(|| format!("parse '{}'", args.input.display()))?;

    write_header(&mut std::io::stdout().lock(), &args.input, &header)?;
    Ok(())
}

fn write_header(out: &mut impl Write, path: &Path, header: &BmpHeader) -> std::io::Result<()> {
    writeln!(out, "file:           {}", path.display())?;
    writeln!(out, "file size:      {} bytes", header.file_size)?;
    writeln!(out, "pixel offset:   {}", header.pixel_offset)?;
    writeln!(out, "dimensions:     {}x{}", header.width, header.height)?;
    writeln!(out, "bits per pixel: {}", header.bits_per_pixel)?;
    writeln!(out, "row padding:    {} bytes", header.row_padding())?;
    Ok(())
}

fn cmd_apply(op: Operation, io: &IoArgs) -> anyhow::Result<()> {
    let image = load(&io.input)?;
    let result = op
        .apply(&image)
        .with_context(|| format!("apply {}", op.name()))?;
    save(&io.output, &result)?;
    println!("Successfully applied {}!", op.name());
    Ok(())
}

fn cmd_chain(args: &ChainArgs) -> anyhow::Result<()> {
    let ops = read_ops_json(&args.ops)?;
    let image = load(&args.io.input)?;
    let result = bmpfx_core::apply_chain(&image, &ops).context("apply operation chain")?;
    save(&args.io.output, &result)?;
    println!("Successfully applied {} operation(s)!", ops.len());
    Ok(())
}

fn read_ops_json(path: &Path) -> anyhow::Result<Vec<Operation>> {
    let f = File::open(path).with_context(|| format!("open operations '{}'", path.display()))?;
    let r = BufReader::new(f);
    let ops: Vec<Operation> =
        serde_json::from_reader(r).with_context(|| "parse operations JSON")?;
    Ok(ops)
}

fn load(path: &Path) -> anyhow::Result<bmpfx_core::Image> {
    let image = bmpfx_core::read_image(path)
        .with_context(|| format!("read image '{}'", path.display()))?;
    info!(
        width = image.width(),
        height = image.height(),
        "loaded {}",
        path.display()
    );
    Ok(image)
}

fn save(path: &Path, image: &bmpfx_core::Image) -> anyhow::Result<()> {
    bmpfx_core::write_image(path, image)
        .with_context(|| format!("Could not write image to '{}'", path.display()))
}

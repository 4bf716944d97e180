use std::path::PathBuf;
use std::process;

use clap::Parser;
use sw4img::{read_image, Image, ImageKind, ImageSource, Patch};

/// Print header and patch summary for an SW4 image file.
#[derive(Debug, Parser)]
#[command(name = "sw4info")]
struct Args {
    /// Log decoding progress.
    #[arg(short, long)]
    verbose: bool,

    /// Summarize a random demonstration image instead of a file.
    #[arg(long, conflicts_with = "file")]
    random: bool,

    /// Image file to inspect.
    #[arg(required_unless_present = "random")]
    file: Option<PathBuf>,
}

fn format_header(image: &Image) -> String {
    let mut out = String::new();
    if let Some(name) = &image.filename {
        out.push_str(&format!("File: {}\n", name));
    }
    let kind = match image.kind() {
        ImageKind::CrossSection => "cross-section",
        ImageKind::Map => "map",
    };
    out.push_str(&format!("  Kind: {} ({}={})\n", kind, image.plane, image.coordinate));
    out.push_str(&format!(
        "  Precision: {} bytes\n",
        image.precision.width()
    ));
    out.push_str(&format!("  Patches: {}\n", image.number_of_patches));
    out.push_str(&format!("  Cycle: {}\n", image.cycle));
    out.push_str(&format!("  Time: {} s\n", image.time));
    if let Some(mode) = image.mode {
        out.push_str(&format!("  Mode: {}\n", mode));
    }
    out.push_str(&format!("  Grid info: {}\n", image.grid_info));
    if !image.creation_time.is_empty() {
        out.push_str(&format!("  Created: {}\n", image.creation_time));
    }
    out
}

fn format_patch(patch: &Patch) -> String {
    let mut out = String::new();
    let (rows, cols) = patch.data.shape();
    let e = &patch.extent;
    out.push_str(&format!("Patch {}:\n", patch.number));
    out.push_str(&format!("  ni x nj: {} x {}\n", patch.ni, patch.nj));
    out.push_str(&format!("  Shape: {} rows x {} cols\n", rows, cols));
    out.push_str(&format!("  h: {}  zmin: {}\n", patch.h, patch.zmin));
    out.push_str(&format!("  ib: {}  jb: {}\n", patch.ib, patch.jb));
    out.push_str(&format!(
        "  Extent: x [{}, {}]  y [{}, {}]\n",
        e.x_min, e.x_max, e.y_min, e.y_max
    ));
    out.push_str(&format!(
        "  Min: {:.6e}  Max: {:.6e}\n",
        patch.min(),
        patch.max()
    ));
    out.push_str(&format!(
        "  Std: {:.6e}  RMS: {:.6e}\n",
        patch.std(),
        patch.rms()
    ));
    out
}

fn format_image_info(image: &Image) -> String {
    let mut out = format_header(image);
    for patch in &image.patches {
        out.push('\n');
        out.push_str(&format_patch(patch));
    }
    out
}

fn run(args: &Args) -> Result<String, String> {
    let source = match (&args.file, args.random) {
        (_, true) => ImageSource::Random,
        (Some(path), false) => ImageSource::Path(path.clone()),
        (None, false) => {
            return Err("Usage: sw4info [-v] <file.sw4img>".to_string());
        }
    };
    let label = match &source {
        ImageSource::Path(p) => p.display().to_string(),
        _ => "random image".to_string(),
    };
    let image = read_image(source).map_err(|e| format!("Error reading '{}': {}", label, e))?;
    Ok(format_image_info(&image))
}

fn main() {
    let args = Args::parse();
    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(&args) {
        Ok(output) => print!("{}", output),
        Err(msg) => {
            eprintln!("{}", msg);
            process::exit(1);
        }
    }
}

//! Line-driven demo: every stdin line becomes the label's new content and
//! every resulting frame is printed to stdout as one JSON line.

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use calligraph::{
    options::{Options, Variant},
    Calligraph, Frame,
};
use clap::Parser;

/// Diff stdin lines into label transition frames.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Options TOML file to start from.
    #[arg(conflicts_with = "preset")]
    options: Option<PathBuf>,

    /// Load the named preset from the preset directory.
    #[arg(short, long)]
    preset: Option<String>,

    /// Directory holding `<name>.toml` presets.
    #[arg(long, default_value = "presets")]
    preset_dir: PathBuf,

    /// Print the available preset names and exit.
    #[arg(long)]
    list_presets: bool,

    /// Store the resolved options as this preset and exit.
    #[arg(long, value_name = "NAME")]
    save_preset: Option<String>,

    /// Diff as a number (right-anchored columns, rolling digits).
    #[arg(long)]
    number: bool,

    /// Animate the first line in instead of showing it at rest.
    #[arg(long)]
    initial: bool,
}

fn load_options(args: &Args) -> Result<Options, String> {
    let mut options = if let Some(path) = &args.options {
        Options::load(path).map_err(|e| {
            format!("Failed to load options from {}: {e}", path.display())
        })?
    } else if let Some(name) = &args.preset {
        Options::load_preset(name, &args.preset_dir)
            .map_err(|e| format!("Failed to load preset '{name}': {e}"))?
    } else {
        Options::default()
    };
    if args.number {
        options.variant = Variant::Number;
    }
    if args.initial {
        options.initial = true;
    }
    Ok(options)
}

fn list_presets(args: &Args) -> io::Result<()> {
    let mut out = io::stdout().lock();
    for name in Options::list_presets(&args.preset_dir) {
        writeln!(out, "{name}")?;
    }
    out.flush()
}

fn emit(out: &mut impl Write, frame: &Frame) -> io::Result<()> {
    serde_json::to_writer(&mut *out, frame)?;
    writeln!(out)
}

fn run(options: Options) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut lines = stdin.lock().lines();
    let first = lines.next().transpose()?.unwrap_or_default();

    let mut label = Calligraph::new(first, options);
    emit(&mut out, label.frame())?;

    for line in lines {
        let line = line?;
        match label.set_content(line) {
            Some(frame) => emit(&mut out, frame)?,
            None => log::debug!("unchanged; skipping frame"),
        }
    }
    out.flush()
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    if args.list_presets {
        if let Err(e) = list_presets(&args) {
            log::error!("I/O error: {e}");
            std::process::exit(1);
        }
        return;
    }

    let options = match load_options(&args) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    if let Some(name) = &args.save_preset {
        let path = args.preset_dir.join(format!("{name}.toml"));
        match options.save(&path) {
            Ok(()) => log::info!("Saved label preset '{name}'"),
            Err(e) => {
                log::error!("Failed to save preset '{name}': {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    if let Err(e) = run(options) {
        log::error!("I/O error: {e}");
        std::process::exit(1);
    }
}

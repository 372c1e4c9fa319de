use std::path::PathBuf;

use clap::Parser;
use seqtrace::config::{DEFAULT_OUTPUT_IMAGE, DEFAULT_OUTPUT_SCRIPT};
use seqtrace::render::{DEFAULT_PLANTUML_BIN, DEFAULT_SERVER_URL};
use seqtrace::{run, Options, RenderOutcome};
use tracing_subscriber::EnvFilter;

/// Generate a sequence diagram from log data.
#[derive(Parser, Debug)]
#[command(name = "seqtrace", version)]
struct Args {
    /// The log file to process
    filename: PathBuf,

    /// The output PlantUML script file
    #[arg(long, default_value = DEFAULT_OUTPUT_SCRIPT)]
    output_script: PathBuf,

    /// The output image file
    #[arg(long, default_value = DEFAULT_OUTPUT_IMAGE)]
    output_image: PathBuf,

    /// Only generate the PlantUML script without generating the image
    #[arg(long)]
    no_image: bool,

    /// Generate the sequence diagram locally
    #[arg(long)]
    local: bool,

    /// PlantUML binary used with --local
    #[arg(long, env = "SEQTRACE_PLANTUML_BIN", default_value = DEFAULT_PLANTUML_BIN)]
    plantuml_bin: String,

    /// PlantUML server image endpoint
    #[arg(long, env = "SEQTRACE_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    server_url: String,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    let default_level = match args.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let options = Options {
        output_script: args.output_script,
        output_image: args.output_image,
        skip_image: args.no_image,
        use_local_renderer: args.local,
        plantuml_bin: args.plantuml_bin,
        server_url: args.server_url,
    };

    match run(&args.filename, &options) {
        Ok(summary) => {
            println!("PlantUML script saved to {}", summary.script_path.display());
            if let Some((image, RenderOutcome::Rendered)) = summary.image {
                println!("Sequence diagram image saved to {}", image.display());
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

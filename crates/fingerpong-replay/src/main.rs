use std::fs::File;
use std::io::{self, BufReader};
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use fingerpong_paddle::{FrameController, PaddleConfig};
use fingerpong_replay::{OutputMode, ReplayError, run_replay};

#[derive(Debug, Default)]
struct Args {
    config: Option<String>,
    frames: Option<String>,
    scenes: bool,
    log_json: bool,
}

impl Args {
    fn parse() -> Self {
        let mut args = Args::default();
        for arg in std::env::args().skip(1) {
            if let Some(path) = arg.strip_prefix("--config=") {
                args.config = Some(path.to_string());
            } else if let Some(path) = arg.strip_prefix("--frames=") {
                args.frames = Some(path.to_string());
            } else if arg == "--scenes" {
                args.scenes = true;
            } else if arg == "--log-json" {
                args.log_json = true;
            } else {
                eprintln!("ignoring unknown argument: {arg}");
            }
        }
        args
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .init();
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Replay failed");
            ExitCode::FAILURE
        },
    }
}

fn run(args: &Args) -> Result<(), ReplayError> {
    let config = match &args.config {
        Some(path) => PaddleConfig::from_path(path)?,
        None => PaddleConfig::load(),
    };
    config.validate()?;

    tracing::info!(
        width = config.arena.width,
        height = config.arena.height,
        "Fingerpong replay starting"
    );

    let mut controller = FrameController::from_config(&config);
    let mode = if args.scenes {
        OutputMode::Scenes
    } else {
        OutputMode::Snapshots
    };
    let stdout = io::stdout().lock();

    match &args.frames {
        Some(path) => {
            let file = File::open(path)?;
            run_replay(&mut controller, BufReader::new(file), stdout, mode)?;
        },
        None => {
            run_replay(&mut controller, io::stdin().lock(), stdout, mode)?;
        },
    }
    Ok(())
}

use std::{path::PathBuf, process::ExitCode};

use clap::{ArgAction, Parser};

#[macro_use]
extern crate log;

mod canvas;
mod commands;
mod grid;
mod image_util;
mod layout;
mod logger;
mod sequence;

use commands::ConvertCommand;
use layout::AssetLayout;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Project root containing the `public/` asset folders.
    #[clap(short, long, default_value = ".", global = true)]
    root: PathBuf,

    /// More log output. Repeat for trace output.
    #[clap(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Asset to convert. Converts everything when omitted.
    #[clap(subcommand)]
    command: Option<ConvertCommand>,
}

fn main() -> ExitCode {
    let args = Cli::parse();
    logger::init(match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    });
    info!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let layout = AssetLayout::new(args.root);
    let command = args.command.unwrap_or_default();

    if let Err(err) = command.execute(&layout) {
        error!("{err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

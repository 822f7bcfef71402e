use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Mutex;

mod controller;
mod domain;
mod header;
mod input;
mod location;
mod model;
mod sort;
mod ui;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use url::Url;

use domain::{AppConfig, AppError};
use input::Input;
use model::{Model, Status};
use ui::TableUI;

#[derive(Parser)]
#[command(about = "Demo of url driven table column sorting")]
struct Cli {
    /// Starting location, including any order_by parameter
    #[arg(default_value = "http://localhost/invoices/")]
    url: String,

    /// Append logs to this file (set RUST_LOG to control verbosity)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    match run() {
        Err(e) => {
            ratatui::restore();
            eprintln!("Error: {:?}", e);
            ExitCode::FAILURE
        }
        Ok(_) => {
            ratatui::restore();
            ExitCode::SUCCESS
        }
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        let file = std::fs::File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    }
    info!("Starting tablesort at {}", cli.url);

    let url = Url::parse(&cli.url)?;
    let cfg = AppConfig::default();
    let mut model = Model::init(&cfg, url);
    let input = Input::new(&cfg);
    let ui = TableUI::new(&cfg);

    let mut terminal = ratatui::init();

    while model.status != Status::QUITTING {
        terminal.draw(|f| ui.draw(&model, f))?;

        if let Some(message) = input.poll()? {
            model.update(message)?;
        }
    }

    Ok(())
}

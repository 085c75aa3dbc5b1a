use clap::Parser;
use env_logger::{Builder, Env};
use log::{error, info};
use song_filter::{cli::Cli, io};

const LOG_LEVEL: &str = "SONG_FILTER_LOG";
const LOG_STYLE: &str = "SONG_FILTER_LOG_STYLE";

fn main() {
    let env = Env::default()
        .filter_or(LOG_LEVEL, "warn")
        .write_style(LOG_STYLE);
    Builder::from_env(env).init();

    if let Err(err) = run() {
        error!("{}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let query = cli.query()?;

    let list = io::load(io::SongReader::from_path(&cli.data)?, &query)?;

    // The output file is only created once the whole report has rendered
    let mut report = Vec::new();
    io::write_report(&list, &query, &mut report)?;
    std::fs::write(&cli.output, report)?;

    info!("Wrote {}", cli.output.display());

    Ok(())
}

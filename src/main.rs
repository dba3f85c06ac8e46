mod api;
mod cmd;
mod config;
mod freshness;
mod logger;
mod prompt;
mod rulings;
mod sync;
mod util;

use api::{Client, Fetch};
use cmd::{Args, Command};
use config::ConfigBuilder;
use prompt::{AssumeYes, ConsolePrompt, Prompt};
use sync::BulkSync;
use util::format;

use clap::Parser;
use log::{info, LevelFilter};

use std::error::Error;
use std::io::Write;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let loglevel = if args.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    if let Err(e) = logger::init(loglevel) {
        eprintln!("Unable to initialize logging: {}", e);
    }

    if let Err(e) = run(args).await {
        println!("{}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let mut builder = match &args.config {
        Some(path) => ConfigBuilder::load_from(path)?,
        None => ConfigBuilder::load()?,
    };
    if let Some(save_dir) = args.save_dir {
        builder = builder.save_dir(save_dir);
    }
    if let Some(api_url) = args.api_url {
        builder = builder.api_url(api_url);
    }
    let config = builder.build()?;
    let client = Client::new()?;

    match args.command.unwrap_or(Command::Sync) {
        Command::Sync => {
            println!("Downloading Bulk Data elements...");
            let prompt: Box<dyn Prompt> = if args.yes { Box::new(AssumeYes) } else { Box::new(ConsolePrompt::new()) };
            let report = BulkSync::new(&config, &client, prompt).run().await?;
            println!(
                "Bulk Data Downloaded. {} files, {} in {:?}.",
                report.files.len(),
                format::human_readable(report.bytes),
                config.save_dir
            );
        }
        Command::List => {
            let list = client.list_bulk_data(&config.api_url).await?;
            let mut out = std::io::stdout().lock();
            for bulk_data in &list.data {
                writeln!(out, "{}", bulk_data)?;
            }
        }
        Command::Rulings { path } => {
            let path = path.unwrap_or_else(|| config.rulings_path());
            let count = rulings::print_rulings(&path, &mut std::io::stdout().lock()).await?;
            info!("Printed {} rulings from {:?}.", count, path);
        }
    }
    Ok(())
}

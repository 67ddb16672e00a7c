use clap::{Parser, Subcommand};
use donut::config;
use donut::gui::app::AppModel;
use donut::gui::menu::State;
use donut::sys::runtime;
use donut_geom::svg;
use relm4::prelude::*;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "donut", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Open the menu in a window (default)
    Show,
    /// Write the menu as an SVG document
    Svg {
        /// Output file; stdout when omitted
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },
    /// Write the default config file if none exists and print its path
    Init,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Show) {
        Commands::Show => show(),
        Commands::Svg { output } => export_svg(output),
        Commands::Init => {
            let path = config::write_default_config()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn show() -> anyhow::Result<()> {
    let config = config::load_or_default();
    let state = State::from_config(&config)?;

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx);

    let app = RelmApp::new("org.donut.menu");

    app.run::<AppModel>((state, rx));
    Ok(())
}

fn export_svg(output: Option<PathBuf>) -> anyhow::Result<()> {
    let config = config::load_config()?;
    let document = svg::render(&config.validate()?, config.size, &config.style)?;

    match output {
        Some(path) => {
            fs_err::write(&path, document)?;
            log::info!("Wrote {}", path.display());
        }
        None => print!("{document}"),
    }
    Ok(())
}

use clap::Parser;
use lilac::config;
use lilac::gui::app::{AppInit, AppModel};
use lilac::gui::{self, APP_ID};
use lilac::sys::runtime;
use relm4::prelude::*;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lilac", version, about, long_about = None)]
struct Cli {
    /// Read settings from this file instead of the user config directory
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Start with the animation paused
    #[arg(long)]
    paused: bool,

    /// Write a commented config template and exit
    #[arg(long)]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config_path = config::resolve_path(cli.config.as_deref())?;

    if cli.init_config {
        let path = config::write_default_config(&config_path)?;
        println!("{}", path.display());
        return Ok(());
    }

    let config = config::load_or_default(&config_path);
    let layout = config.layout(gui::canvas_center())?;

    let (tx, rx) = async_channel::bounded(32);

    let _services = runtime::start_background_services(tx, config_path.clone())?;

    let app = RelmApp::new(APP_ID).with_args(Vec::new());

    app.run::<AppModel>(AppInit {
        config,
        config_path,
        layout,
        start_paused: cli.paused,
        events: rx,
    });

    Ok(())
}

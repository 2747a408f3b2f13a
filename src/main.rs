use admindash::config::Config;
use admindash::logger::{self, Logger};
use admindash::ui;
use anyhow::Result;

const USAGE: &str = "Usage: admindash [--generate-config] [--help]

  --generate-config   write a default config file and exit
  --help              show this message";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("{}", USAGE);
        return Ok(());
    }

    if args.iter().any(|a| a == "--generate-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    if let Some(unknown) = args.first() {
        eprintln!("❌ Unknown argument: {}\n\n{}", unknown, USAGE);
        std::process::exit(2);
    }

    let config = Config::load()?;
    let logger = Logger::from_config(config.logging.enabled)?;
    logger::init(&config.logging, &logger)?;

    // Run the TUI application
    ui::run_app(config, logger).await
}

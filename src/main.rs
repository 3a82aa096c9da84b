use anyhow::Result;
use cheeze_wizards::{
    cli::{self, Cli, Commands},
    config::Config,
};
use clap::Parser;
use log::info;
use tokio::runtime::Runtime;

fn main() -> Result<()> {
    let args = Cli::parse();
    let config = Config::load(args.config.as_deref())?;
    simple_logging::log_to_file(&config.log_file, config.log_level)?;
    let api = config.client()?;
    info!("using {} as {}", api.configuration().base_path, api.configuration().email());
    let rt = Runtime::new()?;
    match args.command {
        Commands::Repl => cli::run(&rt, &api),
        command => {
            println!("{}", cli::respond(&rt, &api, command)?);
            Ok(())
        }
    }
}

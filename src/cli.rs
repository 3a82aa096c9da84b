use crate::error::CommandError;
use anyhow::Result;
use cheeze_wizards_api::{Affinity, ApiResponse, CheezeWizardsApi, DuelsParams, WizardsParams};
use clap::{Args, Parser, Subcommand};
use log::info;
use rustyline::{DefaultEditor, error::ReadlineError};
use std::{path::PathBuf, str::FromStr};
use tokio::runtime::Runtime;

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Configuration file, defaults to CheezeWizards.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

/// One line typed at the interactive prompt.
#[derive(Parser)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct Line {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Get a wizard by id, or every wizard
    #[command(alias = "w")]
    Wizard { id: Option<u64> },
    /// Get the wizards matching the filters
    #[command(alias = "ws")]
    Wizards(WizardsArgs),
    /// Get a duel by id, or every duel
    #[command(alias = "d")]
    Duel { id: Option<u64> },
    /// Get the duels matching the filters
    #[command(alias = "ds")]
    Duels(DuelsArgs),
    /// Start an interactive prompt
    Repl,
}

#[derive(Args, Debug, Default, PartialEq)]
pub struct WizardsArgs {
    /// Owner address
    #[arg(short, long)]
    owner: Option<String>,
    /// not_set, neutral, fire, wind, water or 0-4
    #[arg(short, long, value_parser = parse_affinity)]
    affinity: Option<Affinity>,
    #[arg(long)]
    min_power: Option<u128>,
    #[arg(long)]
    max_power: Option<u128>,
}

impl WizardsArgs {
    fn params(&self) -> Option<WizardsParams> {
        let params = WizardsParams {
            owner: self.owner.clone(),
            affinity: self.affinity,
            min_power: self.min_power,
            max_power: self.max_power,
        };
        (params != WizardsParams::default()).then_some(params)
    }
}

#[derive(Args, Debug, Default, PartialEq)]
pub struct DuelsArgs {
    #[arg(long)]
    starts_after: Option<u64>,
    #[arg(long)]
    starts_before: Option<u64>,
    #[arg(long)]
    ends_after: Option<u64>,
    #[arg(long)]
    ends_before: Option<u64>,
    /// Repeat to match several wizards
    #[arg(short, long = "wizard-id")]
    wizard_ids: Vec<u64>,
    /// Only completed duels, pass `false` to send it explicitly
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    exclude_in_progress: Option<bool>,
    /// Only duels in progress, pass `false` to send it explicitly
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    exclude_finished: Option<bool>,
}

impl DuelsArgs {
    fn params(&self) -> Option<DuelsParams> {
        let params = DuelsParams {
            starts_after: self.starts_after,
            starts_before: self.starts_before,
            ends_after: self.ends_after,
            ends_before: self.ends_before,
            wizard_ids: self.wizard_ids.clone(),
            exclude_in_progress: self.exclude_in_progress,
            exclude_finished: self.exclude_finished,
        };
        (params != DuelsParams::default()).then_some(params)
    }
}

pub fn run(rt: &Runtime, api: &CheezeWizardsApi) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    loop {
        match rl.readline("cheeze-wizards >> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if matches!(line, "quit" | "exit") {
                    return Ok(());
                }
                if let Err(e) = rl.add_history_entry(line) {
                    eprintln!("failed to add history entry: {}", e);
                }
                let command = match parse_line(line) {
                    Ok(command) => command,
                    Err(e) => {
                        eprintln!("{}", e);
                        continue;
                    }
                };
                match respond(rt, api, command) {
                    Ok(out) => println!("{}", out),
                    Err(e) => eprintln!("{}", e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("Quit");
            }
            Err(ReadlineError::Eof) => {
                println!("quit");
                return Ok(());
            }
            Err(err) => {
                println!("Error: {:#?}", err);
            }
        }
    }
}

pub fn respond(
    rt: &Runtime,
    api: &CheezeWizardsApi,
    command: Commands,
) -> Result<String, CommandError> {
    let resp = rt.block_on(fetch(api, command))?;
    info!("received {}", resp.status);
    render(&resp)
}

async fn fetch(api: &CheezeWizardsApi, command: Commands) -> Result<ApiResponse, CommandError> {
    let resp = match command {
        Commands::Wizard { id } => api.wizard(id).await?,
        Commands::Wizards(args) => api.wizards(args.params().as_ref()).await?,
        Commands::Duel { id } => api.duel(id).await?,
        Commands::Duels(args) => api.duels(args.params().as_ref()).await?,
        Commands::Repl => return Err(CommandError::NestedRepl),
    };
    Ok(resp)
}

fn render(resp: &ApiResponse) -> Result<String, CommandError> {
    Ok(format!(
        "status: {}\n{}",
        resp.status.as_u16(),
        serde_json::to_string_pretty(&resp.data)?
    ))
}

fn parse_affinity(s: &str) -> Result<Affinity, String> {
    match s.parse::<u8>() {
        Ok(n) => Affinity::try_from(n).map_err(|_| format!("no affinity numbered {n}")),
        Err(_) => Affinity::from_str(s).map_err(|e| format!("{e}: {s}")),
    }
}

fn parse_line(line: &str) -> Result<Commands, clap::Error> {
    Line::try_parse_from(line.split_whitespace()).map(|l| l.command)
}

use anyhow::{Context, Result, bail};
use clap::Parser;

use crate::config;
use crate::launch::{self, LaunchSpec};
use crate::locate::{self, SearchConfig};

/// Root CLI for terra-profile
#[derive(Parser)]
#[command(name = "terra-profile")]
#[command(about = "Run a command with the AWS profile derived from the nearest account file")]
pub struct Cli {
    /// Enable debug output
    #[arg(short, long)]
    pub debug: bool,

    /// Disable Terragrunt interactive prompts in the child process
    #[arg(short, long)]
    pub non_interactive: bool,

    /// Disable the Terragrunt provider cache
    #[arg(short = 'p', long)]
    pub disable_provider_cache: bool,

    /// Account file to search for
    #[arg(short, long, value_name = "FILE", default_value = "account.hcl")]
    pub account: String,

    /// Command to execute and its arguments, forwarded verbatim
    #[arg(value_name = "CMD", trailing_var_arg = true, allow_hyphen_values = true)]
    pub cmd: Vec<String>,
}

/// Dispatch after parse
pub fn run() {
    let cli = Cli::parse();

    if cli.debug {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .format_timestamp(None)
            .init();
    }

    match execute(&cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("error: {e:#}");
            std::process::exit(1);
        }
    }
}

fn execute(cli: &Cli) -> Result<i32> {
    let Some((program, args)) = cli.cmd.split_first() else {
        bail!("usage: terra-profile [OPTIONS] <CMD> [ARGS]...");
    };

    let start_dir = std::env::current_dir().context("resolving current directory")?;
    let search = SearchConfig {
        file_name: cli.account.clone(),
        start_dir,
    };

    let account_path = locate::locate_account_file(&search)?;
    log::debug!("located account file: {}", account_path.display());

    let account_name = config::account_name_from_file(&account_path)?;
    log::debug!("account_name={account_name}");

    let spec = LaunchSpec {
        program: program.clone(),
        args: args.to_vec(),
        env: launch::env_overrides(
            &account_name,
            cli.non_interactive,
            !cli.disable_provider_cache,
        ),
    };
    launch::run(&spec)
}

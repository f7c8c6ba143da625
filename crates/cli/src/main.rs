mod cmd;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cmd::RuleArgs;
use output::OutputFormat;

/// nob - Compile one target from its dependencies
#[derive(Parser)]
#[command(name = "nob")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable debug logging
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Log filter (overrides RUST_LOG), e.g. "info" or "nobuild_lib=debug"
  #[arg(long, global = true)]
  log_level: Option<String>,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Run the compiler for one rule
  Build {
    #[command(flatten)]
    rule: RuleArgs,

    /// Print the command line before running it (also NOBUILD_ECHO=1)
    #[arg(long)]
    echo: bool,

    /// Run the compiler in this directory
    #[arg(short = 'C', long = "directory", value_name = "DIR")]
    dir: Option<std::path::PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
  },

  /// Print the command line a build would run, without running it
  Show {
    #[command(flatten)]
    rule: RuleArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
  },

  /// Show version and name limits
  Info,
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  let filter = match (&cli.log_level, cli.verbose) {
    (Some(level), _) => EnvFilter::new(level),
    (None, true) => EnvFilter::new("debug"),
    (None, false) => EnvFilter::from_default_env(),
  };

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  match cli.command {
    Commands::Build {
      rule,
      echo,
      dir,
      format,
    } => cmd::cmd_build(rule, echo, dir, format),
    Commands::Show { rule, format } => cmd::cmd_show(rule, format),
    Commands::Info => {
      cmd::cmd_info();
      Ok(())
    }
  }
}

//! eldood - print the attendance grid of a scheduling poll.

use std::io::IsTerminal;
use std::process;
use std::time::Duration;

use anyhow::Result;
use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, ValueEnum};
use colored::Colorize;

use eldood::{render, Gateway, RenderConfig};

/// Show who can make it on which date of an eldood poll
#[derive(Parser, Debug)]
#[command(name = "eldood", version, about)]
struct Cli {
    /// Poll token, as found in the poll's URL
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    token: String,

    /// When to use color, for the attendance cells and error messages
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: u64,

    /// Log request details to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// `terminal` tells whether the stream being written is a terminal.
    fn enabled_for(self, terminal: bool) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => terminal && std::env::var_os("NO_COLOR").is_none(),
        }
    }
}

/// --help and --version go to stdout and succeed; anything else is a usage error.
fn usage_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() {
        1
    } else {
        0
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

async fn run(cli: &Cli) -> Result<()> {
    let gateway = Gateway::new(Some(Duration::from_secs(cli.timeout))).await?;
    let poll = gateway.get_poll(&cli.token).await?;

    let config = if cli.color.enabled_for(std::io::stdout().is_terminal()) {
        RenderConfig::default()
    } else {
        RenderConfig::plain()
    };
    print!("{}", render(&poll, &config)?);
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            process::exit(usage_exit_code(&err));
        }
    };

    init_logging(cli.verbose);
    colored::control::set_override(cli.color.enabled_for(std::io::stderr().is_terminal()));

    if let Err(err) = run(&cli).await {
        eprintln!("{} {:#}", "error:".red().bold(), err);
        process::exit(1);
    }
}

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use snakediff::commands::session::DEFAULT_CONTEXT;
use snakediff::commands::{DiffInput, DiffSession, PatchOptions};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "snakediff",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Minimal line diffs with Myers' linear space algorithm",
    long_about = "This tool compares two text files line by line using the linear space \
    variant of Myers' O(ND) difference algorithm. \
    It prints the minimal edit script, a unified patch or a short summary.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        long,
        value_enum,
        global = true,
        default_value_t = ColorChoice::Auto,
        help = "When to colorize the output"
    )]
    color: ColorChoice,
    #[arg(
        short = 'w',
        long,
        global = true,
        help = "Ignore whitespace when comparing lines"
    )]
    ignore_all_space: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "script",
        about = "Print the raw edit script",
        long_about = "This command prints the edit script turning OLD into NEW, one record per line: \
        `keep <len>`, `remove <len>` or `add <len> @<position in NEW>`."
    )]
    Script {
        #[arg(index = 1, help = "The original file")]
        old: PathBuf,
        #[arg(index = 2, help = "The modified file")]
        new: PathBuf,
    },
    #[command(
        name = "patch",
        about = "Print a unified patch",
        long_about = "This command prints the differences between OLD and NEW as unified hunks \
        surrounded by context lines."
    )]
    Patch {
        #[arg(index = 1, help = "The original file")]
        old: PathBuf,
        #[arg(index = 2, help = "The modified file")]
        new: PathBuf,
        #[arg(
            short = 'U',
            long,
            default_value_t = DEFAULT_CONTEXT,
            help = "Number of context lines around each hunk"
        )]
        unified: usize,
    },
    #[command(
        name = "stat",
        about = "Summarise the differences",
        long_about = "This command prints the number of inserted and deleted lines \
        together with the edit distance between OLD and NEW."
    )]
    Stat {
        #[arg(index = 1, help = "The original file")]
        old: PathBuf,
        #[arg(index = 2, help = "The modified file")]
        new: PathBuf,
    },
}

fn init_logging() {
    let default_filter = if cfg!(feature = "debug_diff") {
        "trace"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.color {
        ColorChoice::Always => colored::control::set_override(true),
        ColorChoice::Never => colored::control::set_override(false),
        ColorChoice::Auto => {}
    }

    let context = match &cli.command {
        Commands::Patch { unified, .. } => *unified,
        _ => DEFAULT_CONTEXT,
    };
    let session = DiffSession::new(
        Box::new(std::io::stdout()),
        PatchOptions::new(context, cli.ignore_all_space),
    );

    match &cli.command {
        Commands::Script { old, new } => {
            session.script(&DiffInput::from_file(old)?, &DiffInput::from_file(new)?)?
        }
        Commands::Patch { old, new, .. } => {
            session.patch(&DiffInput::from_file(old)?, &DiffInput::from_file(new)?)?
        }
        Commands::Stat { old, new } => {
            session.stat(&DiffInput::from_file(old)?, &DiffInput::from_file(new)?)?
        }
    }

    Ok(())
}

//! CLI command definitions, routing, and tracing setup.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use mdtut_core::{DebugPrinter, NavPrinter, Program, Tutorial, load_many};
use mdtut_discovery::FilePath;
use mdtut_shared::{AppConfig, ExtractConfig, init_config, load_config};
use tracing::{debug, info};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// mdtut: markdown tutorials as trees, navs and scripts.
#[derive(Parser)]
#[command(
    name = "mdtut",
    version,
    about = "Turn a directory of markdown lessons into a tutorial tree, a left nav, or a runnable script.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Extract labeled code blocks as a shell script.
    Print {
        /// Label selecting which blocks to extract (defaults to config, then every labeled block).
        #[arg(short, long)]
        label: Option<String>,

        /// Number of leading blocks emitted before the subshell.
        #[arg(short, long)]
        preambled: Option<usize>,

        /// Emit the extracted blocks as JSON instead of a script.
        #[arg(long)]
        json: bool,

        /// Lesson files or course directories.
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Dump the tutorial tree as indented text.
    Tree {
        /// Lesson files or course directories.
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Render the tutorial tree as an HTML left-nav fragment.
    Nav {
        /// Lesson files or course directories.
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "mdtut=warn",
        1 => "mdtut=info",
        2 => "mdtut=debug",
        _ => "mdtut=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Print {
            label,
            preambled,
            json,
            paths,
        } => cmd_print(&paths, label.as_deref(), preambled, json),
        Command::Tree { paths } => cmd_tree(&paths),
        Command::Nav { paths } => cmd_nav(&paths),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(),
        },
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn load_tree(paths: &[PathBuf]) -> Result<Tutorial> {
    let paths: Vec<FilePath> = paths.iter().map(|p| FilePath::from(p.as_path())).collect();
    let tree = load_many(&paths).wrap_err("failed to load tutorial")?;
    debug!(lessons = tree.lesson_count(), "tutorial loaded");
    Ok(tree)
}

fn cmd_print(
    paths: &[PathBuf],
    label: Option<&str>,
    preambled: Option<usize>,
    json: bool,
) -> Result<()> {
    let config = load_config()?;
    let extract = ExtractConfig::from(&config).with_overrides(label, preambled);
    let tree = load_tree(paths)?;

    let program = Program::from_tutorial(extract.label.clone(), &tree);
    info!(
        label = %extract.label,
        files = program.files().len(),
        blocks = program.block_count(),
        "extracted blocks"
    );

    if json {
        println!("{}", program.to_json()?);
    } else {
        print!("{}", program.render_preambled(extract.preambled));
    }
    Ok(())
}

fn cmd_tree(paths: &[PathBuf]) -> Result<()> {
    let tree = load_tree(paths)?;
    let mut printer = DebugPrinter::new();
    tree.accept(&mut printer);
    print!("{}", printer.into_output());
    Ok(())
}

fn cmd_nav(paths: &[PathBuf]) -> Result<()> {
    let tree = load_tree(paths)?;
    let mut printer = NavPrinter::new();
    tree.accept(&mut printer);
    print!("{}", printer.into_output());
    Ok(())
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

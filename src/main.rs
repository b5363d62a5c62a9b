//! ColorPick - color picker with history, palette, and scheme generation
//!
//! Every subcommand opens the persisted colors, performs one action, and
//! exits. Logs go to stderr so stdout stays scriptable.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use colorpick::cli::{
    ClearArgs, CliResult, ConfigArgs, ConvertArgs, CopyArgs, ListArgs, PickArgs, RemoveArgs,
    SaveArgs, SchemeArgs, ShowArgs,
};
use colorpick::constants::APP_BINARY_NAME;

/// ColorPick - sample colors, keep a history and palette, generate schemes
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Pick a color and add it to the history
    Pick(PickArgs),
    /// Show the current color and saved colors
    Show(ShowArgs),
    /// Convert a color between HEX, RGB, and HSL
    Convert(ConvertArgs),
    /// Save a color to the palette
    Save(SaveArgs),
    /// Remove a color from the palette
    Remove(RemoveArgs),
    /// Clear the history, the palette, or both
    Clear(ClearArgs),
    /// List history or palette entries
    List(ListArgs),
    /// Generate a monochromatic or complementary scheme
    Scheme(SchemeArgs),
    /// Copy the current color to the clipboard
    Copy(CopyArgs),
    /// Configuration management
    Config(ConfigArgs),
}

impl Commands {
    async fn execute(&self) -> CliResult<()> {
        match self {
            Self::Pick(args) => args.execute().await,
            Self::Show(args) => args.execute(),
            Self::Convert(args) => args.execute(),
            Self::Save(args) => args.execute(),
            Self::Remove(args) => args.execute(),
            Self::Clear(args) => args.execute(),
            Self::List(args) => args.execute(),
            Self::Scheme(args) => args.execute(),
            Self::Copy(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = cli.command.execute().await {
        eprintln!("Error: {e}");
        std::process::exit(e.code.code());
    }
}

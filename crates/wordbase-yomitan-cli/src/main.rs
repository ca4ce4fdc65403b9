#![doc = include_str!("../README.md")]

mod dict;

use {
    anyhow::Result,
    std::path::PathBuf,
    tracing::level_filters::LevelFilter,
    tracing_subscriber::EnvFilter,
};

/// Inspect Yomitan dictionary archives.
#[derive(Debug, clap::Parser)]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, clap::Parser)]
enum Command {
    /// Show the index of a dictionary and how many records it holds
    #[clap(alias = "i")]
    Info {
        /// Path to the dictionary `.zip` archive
        path: PathBuf,
    },
    /// Decode a dictionary and print its records as JSON
    Dump {
        /// Path to the dictionary `.zip` archive
        path: PathBuf,
        /// Only print records of this kind
        #[arg(long, value_enum)]
        kind: Option<dict::DumpKind>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();
    let args = <Args as clap::Parser>::parse();

    match args.command {
        Command::Info { path } => dict::info(&path),
        Command::Dump { path, kind } => dict::dump(&path, kind),
    }
}

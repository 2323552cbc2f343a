use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use nquads::Decoder;
use oxigraph::store::Store;
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "nquads")]
#[command(about = "Validate, print, and load RDF N-Quads files")]
#[command(arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Verbose mode - sets the RUST_LOG level to info, defaults to warning level
    #[clap(long, short, action, default_value = "false", global = true)]
    verbose: bool,
    /// Debug mode - sets the RUST_LOG level to debug, defaults to warning level
    #[clap(long, action, default_value = "false", global = true)]
    debug: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check that a file parses as N-Quads and print the statement count
    Validate {
        /// Path to the .nq file
        file: PathBuf,
    },
    /// Re-emit every statement in canonical lexical form
    Dump {
        /// Path to the .nq file
        file: PathBuf,
    },
    /// Load a file into a transient in-memory store and report counts
    Load {
        /// Path to the .nq file
        file: PathBuf,
    },
}

fn open_decoder(file: &Path) -> Result<Decoder<File>> {
    let f = File::open(file).with_context(|| format!("opening {}", file.display()))?;
    Ok(Decoder::new(f))
}

fn main() -> Result<()> {
    let cmd = Cli::parse();

    let log_level = if cmd.verbose { "info" } else { "warn" };
    let log_level = if cmd.debug { "debug" } else { log_level };
    std::env::set_var("RUST_LOG", log_level);
    env_logger::init();

    match cmd.command {
        Commands::Validate { file } => {
            let mut dec = open_decoder(&file)?;
            let mut count = 0u64;
            while let Some(_quad) = dec
                .next_quad()
                .with_context(|| format!("decoding {}", file.display()))?
            {
                count += 1;
            }
            info!("{} is valid N-Quads", file.display());
            println!("{} statements", count);
        }
        Commands::Dump { file } => {
            let mut dec = open_decoder(&file)?;
            while let Some(quad) = dec
                .next_quad()
                .with_context(|| format!("decoding {}", file.display()))?
            {
                println!("{}", quad);
            }
        }
        Commands::Load { file } => {
            let mut dec = open_decoder(&file)?;
            let store = Store::new()?;
            while let Some(quad) = dec
                .next_quad()
                .with_context(|| format!("decoding {}", file.display()))?
            {
                store.insert(quad.to_oxigraph()?.as_ref())?;
            }
            let named_graphs = store.named_graphs().count();
            info!("loaded {} into a transient store", file.display());
            println!(
                "{} quads across {} named graphs (plus the default graph)",
                store.len()?,
                named_graphs
            );
        }
    }

    Ok(())
}

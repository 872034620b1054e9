use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use copycat::clipboard::{SystemClipboard, copy_snippet};
use copycat::config::AppPaths;
use copycat::store::{FileBackend, SnippetStore};

#[derive(Parser)]
#[command(name = "copycat")]
#[command(about = "Clipboard snippet manager", long_about = None)]
struct Cli {
    /// Snippet file to use instead of the default data location
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive snippet list (default)
    Tui,

    /// List snippets
    List {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Append a snippet
    Add { text: String },

    /// Replace the snippet at INDEX
    Edit { index: usize, text: String },

    /// Remove the snippet at INDEX
    Rm { index: usize },

    /// Copy the snippet at INDEX to the system clipboard
    ///
    /// On Linux this waits until another program takes over the clipboard.
    Copy { index: usize },

    /// Print the snippet file location
    Path,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = AppPaths::resolve(cli.file.as_deref());

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => run_tui(&paths)?,
        Commands::List { json } => {
            let store = open_store(&paths);
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(store.list()).context("serialize snippets")?
                );
            } else {
                for (i, s) in store.list().iter().enumerate() {
                    println!("{}\t{}", i, s);
                }
            }
        }
        Commands::Add { text } => {
            let mut store = open_store(&paths);
            let idx = store.try_add(text)?;
            println!("{}", idx);
        }
        Commands::Edit { index, text } => {
            let mut store = open_store(&paths);
            store.try_edit(index, text)?;
            println!("{}", index);
        }
        Commands::Rm { index } => {
            let mut store = open_store(&paths);
            let removed = store.try_remove(index)?;
            println!("{}", removed);
        }
        Commands::Copy { index } => {
            let store = open_store(&paths);
            copy_snippet(&mut SystemClipboard::new(), &store, index)?;
            println!("copied {}", index);
        }
        Commands::Path => {
            println!("{}", paths.data_file.display());
        }
    }

    Ok(())
}

fn open_store(paths: &AppPaths) -> SnippetStore {
    copycat::logging::init_stderr();
    SnippetStore::open(FileBackend::new(&paths.data_file))
}

fn run_tui(paths: &AppPaths) -> Result<()> {
    if let Err(err) = copycat::logging::init_file(&paths.log_file) {
        eprintln!("logging disabled: {:#}", err);
    }
    copycat::tui::run_with_options(copycat::tui::TuiRunOptions {
        data_file: paths.data_file.clone(),
    })
}

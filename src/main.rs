use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use dataset_formula::{evaluate_formula, format_display, substitute_keys, Dataset};
use itertools::Itertools;
use tracing::Level;

/// Render dataset-bound labels and formulas from the command line.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[command(flatten)]
    dataset: DatasetArgs,
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(ClapArgs, Debug)]
struct DatasetArgs {
    /// Dataset as an inline JSON object
    #[arg(long, global = true, conflicts_with = "dataset_file")]
    dataset: Option<String>,
    /// Path to a file holding the dataset JSON object
    #[arg(long, global = true)]
    dataset_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replace {key} markers in plain text
    Substitute {
        text: String,
    },
    /// Evaluate an arithmetic formula
    Eval {
        formula: String,
        /// Print the substituted formula before the result
        #[arg(long)]
        show_formula: bool,
    },
    /// Show a formula with values substituted but not evaluated
    Display {
        formula: String,
    },
    /// List the keys of the loaded dataset
    Keys,
}

fn main() {
    // Parse CLI arguments.
    let args = Args::parse();
    init_tracing(args.verbose);

    // Load the dataset; none given means an empty one.
    let dataset = match load_dataset(&args.dataset) {
        Ok(ds) => ds,
        Err(e) => {
            eprintln!("Invalid dataset: {e}");
            std::process::exit(1);
        }
    };

    match args.command {
        Command::Substitute { text } => println!("{}", substitute_keys(&text, Some(&dataset))),
        Command::Eval { formula, show_formula } => match evaluate_formula(&formula, &dataset) {
            Ok(result) if show_formula => {
                println!("{} = {result}", format_display(&formula, &dataset))
            }
            Ok(result) => println!("{result}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
        Command::Display { formula } => println!("{}", format_display(&formula, &dataset)),
        Command::Keys => println!(
            "Dataset loaded with {} keys: {}",
            dataset.len(),
            dataset.keys().sorted().join(", ")
        ),
    }
}

fn load_dataset(args: &DatasetArgs) -> Result<Dataset, String> {
    let json = match (&args.dataset, &args.dataset_file) {
        (Some(inline), _) => inline.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?,
        (None, None) => return Ok(Dataset::new()),
    };
    Dataset::from_json(&json).map_err(|e| e.to_string())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "packlist",
    version,
    about = "Convert shipment order documents (.docx) into picking JSON"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an order document into the picking app's orders.json
    Convert {
        /// Path to the .docx order document
        input_file: PathBuf,

        /// Preview format when not writing a file: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the JSON file (defaults to orders.json when no name is given)
        #[arg(
            short = 'O',
            long = "out",
            value_name = "FILE",
            num_args = 0..=1,
            default_missing_value = packlist_core::DEFAULT_OUTPUT_FILE
        )]
        out: Option<PathBuf>,

        /// Date to write instead of today (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Fail instead of using the UNKNOWN order id when no order number is found
        #[arg(long)]
        strict: bool,

        /// Custom label profile (JSON)
        #[arg(short, long, value_name = "FILE")]
        profile: Option<PathBuf>,
    },
    /// Show the paragraphs and tables of a document as they are read
    Inspect {
        /// Path to the .docx document
        input_file: PathBuf,
    },
    /// Inspect and validate label profiles
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Print the active profile as JSON
    Show {
        /// Custom profile to show instead of the builtin one
        #[arg(short, long, value_name = "FILE")]
        profile: Option<PathBuf>,
    },
    /// Validate a custom profile file
    Validate {
        /// Path to JSON profile file
        file: PathBuf,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert {
            input_file,
            output,
            out,
            date,
            strict,
            profile,
        } => commands::convert::run(
            input_file,
            &output,
            out,
            date.as_deref(),
            strict,
            profile.as_deref(),
        ),
        Commands::Inspect { input_file } => commands::inspect::run(input_file),
        Commands::Profile { action } => match action {
            ProfileAction::Show { profile } => commands::profile::show(profile.as_deref()),
            ProfileAction::Validate { file } => commands::profile::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

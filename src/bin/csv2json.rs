use anyhow::Result;
use clap::Parser;
use console::style;
use repotools::convert::{convert, RowPolicy};
use repotools::report::Reporter;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "csv2json")]
#[command(about = "Convert a CSV file to a JSON document with validation")]
#[command(version)]
struct Cli {
    #[arg(help = "Path to input CSV file")]
    input_file: PathBuf,

    #[arg(help = "Optional path to output JSON file")]
    output_file: Option<PathBuf>,

    #[arg(
        long,
        value_enum,
        default_value = "strict",
        help = "How to reconcile records whose field count differs from the header"
    )]
    row_policy: RowPolicy,

    #[arg(short, long, help = "Suppress informational messages")]
    quiet: bool,
}

impl Cli {
    fn execute(&self) -> Result<()> {
        let reporter = Reporter::new(!self.quiet);
        let result = convert(
            &self.input_file,
            self.output_file.as_deref(),
            self.row_policy,
            &reporter,
        )?;
        println!("Processed {} records", result.count);
        Ok(())
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", style("error:").red().bold());
            ExitCode::FAILURE
        }
    }
}

use anyhow::Result;
use clap::Parser;
use console::style;
use repotools::git::GitClient;
use repotools::report::Reporter;
use repotools::stats::{self, Format};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "git-stats")]
#[command(about = "Display git repository statistics")]
#[command(version)]
struct Cli {
    #[arg(default_value = ".", help = "Path to git repository")]
    path: PathBuf,

    #[arg(long, value_enum, default_value = "text", help = "Output format")]
    format: Format,

    #[arg(short, long, help = "Enable verbose output")]
    verbose: bool,

    #[arg(
        long,
        value_parser = humantime::parse_duration,
        default_value = "30s",
        help = "Bounded wait for each git invocation (e.g. 10s, 2min)"
    )]
    timeout: Duration,
}

impl Cli {
    fn execute(&self) -> Result<()> {
        let reporter = Reporter::new(self.verbose);
        let client = GitClient::open(&self.path, self.timeout)?;
        reporter.info(&format!("Analyzing repository: {}", client.path().display()));

        let record = stats::collect(&client)?;
        println!("{}", stats::render(&record, self.format)?);
        Ok(())
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", style("error:").red().bold());
            if cli.verbose {
                for cause in err.chain().skip(1) {
                    eprintln!("  caused by: {cause}");
                }
            }
            ExitCode::FAILURE
        }
    }
}

use crate::error::Result;
use crate::git::GitClient;
use crate::model::StatsRecord;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

/// Run the three git queries and aggregate them into one record.
pub fn collect(client: &GitClient) -> Result<StatsRecord> {
    Ok(StatsRecord {
        commits: client.count_commits()?,
        authors: client.count_authors()?,
        branches: client.count_branches()?,
    })
}

/// Render the record as a fixed four-line text report or as JSON with stable
/// key order `commits, authors, branches`.
pub fn render(stats: &StatsRecord, format: Format) -> Result<String> {
    match format {
        Format::Json => Ok(serde_json::to_string_pretty(stats)?),
        Format::Text => Ok(format!(
            "Git Repository Statistics\nCommits:  {}\nAuthors:  {}\nBranches: {}",
            stats.commits, stats.authors, stats.branches
        )),
    }
}

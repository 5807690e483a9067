use clap::{CommandFactory, Parser};

use crate::config::SourceOverrides;

#[derive(Debug, Parser)]
#[command(
    name = "issue-digest",
    version,
    about = "Browse extracted company cards and macro themes",
    after_help = "Locations may be file paths or http(s) URLs. Each list is tried in order \
                  and the first one that loads wins."
)]
pub struct CliArgs {
    /// Print the digest and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless output as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(long)]
    pub debug: bool,

    /// Directory holding both JSON documents (repeatable, tried in order)
    #[arg(long = "root", value_name = "DIR|URL")]
    pub roots: Vec<String>,

    /// Candidate location for the company cards document (repeatable)
    #[arg(long = "companies", value_name = "LOCATION")]
    pub companies: Vec<String>,

    /// Candidate location for the macro themes document (repeatable)
    #[arg(long = "themes", value_name = "LOCATION")]
    pub themes: Vec<String>,
}

impl CliArgs {
    pub fn source_overrides(&self) -> SourceOverrides {
        SourceOverrides {
            roots: self.roots.clone(),
            companies: self.companies.clone(),
            themes: self.themes.clone(),
        }
    }

    pub fn help_text() -> String {
        let mut command = Self::command();
        let mut buffer = Vec::new();
        command.write_help(&mut buffer).ok();
        String::from_utf8_lossy(&buffer).to_string()
    }
}

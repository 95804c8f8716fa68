use crate::version::long_version;
use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(version, long_version = long_version(), about)]
pub struct Cli {
    /// Search for this term and exit instead of starting the interactive box
    pub term: Vec<String>,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Path to the search history storage file
    #[arg(short, long)]
    pub storage: Option<String>,

    /// Keep the history in memory only
    #[arg(long, conflicts_with = "storage")]
    pub no_persist: bool,

    /// Print the search history, most recent first, and exit
    #[arg(long)]
    pub history: bool,

    /// Clear the search history and the last search, then exit
    #[arg(long)]
    pub clear_history: bool,

    /// Write debug logs to this file
    #[arg(short, long)]
    pub debug: Option<String>,
}

impl Cli {
    /// The one-shot search term, if one was given on the command line.
    pub fn one_shot_term(&self) -> Option<String> {
        if self.term.is_empty() {
            None
        } else {
            Some(self.term.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_are_joined() {
        let cli = Cli::parse_from(["searchbox", "rust", "tui"]);
        assert_eq!(cli.one_shot_term(), Some("rust tui".to_string()));
    }

    #[test]
    fn test_no_term_starts_interactive() {
        let cli = Cli::parse_from(["searchbox", "--storage", "/tmp/s.json"]);
        assert_eq!(cli.one_shot_term(), None);
        assert_eq!(cli.storage.as_deref(), Some("/tmp/s.json"));
    }

    #[test]
    fn test_no_persist_conflicts_with_storage() {
        let result = Cli::try_parse_from(["searchbox", "--no-persist", "--storage", "/tmp/s.json"]);
        assert!(result.is_err());
    }
}

use crate::history::SearchHistory;
use crate::term::SearchTerm;
use rand::Rng;
use std::io;
use tracing::{info, warn};

/// Candidate terms used to pre-fill the input.
pub const RANDOM_SUGGESTIONS: [&str; 9] = [
    "南大家园",
    "家园工作室",
    "云家园",
    "南昌大学",
    "家园小镇",
    "机房",
    "研发组",
    "设计组",
    "小家园",
];

pub const DEFAULT_BASE_URL: &str = "https://www.bing.com/search";
pub const DEFAULT_QUERY_PARAM: &str = "q";

/// Web search endpoint that terms are sent to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEngine {
    base_url: String,
    query_param: String,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_QUERY_PARAM)
    }
}

impl SearchEngine {
    pub fn new(base_url: impl Into<String>, query_param: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            query_param: query_param.into(),
        }
    }

    /// Builds the results page URL for `term`, percent-encoding it as the query parameter.
    pub fn url_for(&self, term: &SearchTerm) -> String {
        format!(
            "{}?{}={}",
            self.base_url,
            self.query_param,
            urlencoding::encode(term.as_str())
        )
    }
}

/// Opens a URL somewhere outside the application.
pub trait Launcher: std::fmt::Debug {
    fn open(&self, url: &str) -> io::Result<()>;
}

/// Opens URLs in the system's default browser without waiting for it.
#[derive(Debug, Default)]
pub struct BrowserLauncher;

impl Launcher for BrowserLauncher {
    fn open(&self, url: &str) -> io::Result<()> {
        open::that_detached(url)
    }
}

/// Validates terms, sends them to the search engine and records them in the history.
#[derive(Debug)]
pub struct Dispatcher {
    engine: SearchEngine,
    launcher: Box<dyn Launcher>,
}

impl Dispatcher {
    pub fn new(engine: SearchEngine, launcher: Box<dyn Launcher>) -> Self {
        Self { engine, launcher }
    }

    pub fn engine(&self) -> &SearchEngine {
        &self.engine
    }

    /// Searches for `raw` and records it in `history`.
    ///
    /// Blank input is ignored and returns `None`. A failure to open the results page is logged
    /// only; the term is recorded regardless.
    pub fn perform_search(&self, raw: &str, history: &mut SearchHistory) -> Option<SearchTerm> {
        let term = SearchTerm::parse(raw)?;
        let url = self.engine.url_for(&term);

        info!("Searching for {:?}", term.as_str());
        if let Err(e) = self.launcher.open(&url) {
            warn!("Failed to open {}: {}", url, e);
        }

        history.record(&term);
        Some(term)
    }
}

/// Picks one of [`RANDOM_SUGGESTIONS`] uniformly at random.
pub fn random_suggestion() -> &'static str {
    let index = rand::thread_rng().gen_range(0..RANDOM_SUGGESTIONS.len());
    RANDOM_SUGGESTIONS[index]
}

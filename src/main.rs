use clap::Parser;
use searchbox::{
    app::App,
    cli::Cli,
    config::Config,
    history::SearchHistory,
    search::{BrowserLauncher, Dispatcher},
    storage::{FileStorage, MemoryStorage, Storage},
};
use std::path::PathBuf;
use tracing::info;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();
    if let Some(path) = &args.debug {
        searchbox::logging::init(path)?;
    }

    let config = Config::load(&args.config);
    if let Some(path) = config.get_path() {
        info!("Loaded config from {}", path);
    }

    let storage: Box<dyn Storage> = if args.no_persist {
        Box::new(MemoryStorage::new())
    } else {
        let path = args
            .storage
            .as_ref()
            .map(PathBuf::from)
            .or_else(|| config.storage_path())
            .unwrap_or_else(FileStorage::default_path);
        let storage = FileStorage::open(path);
        info!("Using storage file {:?}", storage.path());
        Box::new(storage)
    };

    let mut history = SearchHistory::load(storage);
    let dispatcher = Dispatcher::new(config.build_engine(), Box::new(BrowserLauncher));

    if args.clear_history {
        history.clear();
        println!("Search history cleared");
        return Ok(());
    }

    if args.history {
        for term in history.entries() {
            println!("{}", term);
        }
        return Ok(());
    }

    if let Some(term) = args.one_shot_term() {
        match dispatcher.perform_search(&term, &mut history) {
            Some(term) => println!("{}", dispatcher.engine().url_for(&term)),
            None => info!("Ignoring blank search term"),
        }
        return Ok(());
    }

    let terminal = ratatui::init();
    let app = App::new(history, dispatcher, config.build_clock());
    let result = app.run(terminal).await;

    ratatui::restore();
    result
}

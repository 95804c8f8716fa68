use shadow_rs::shadow;

shadow!(build);

pub mod app;
pub mod cli;
pub mod clock;
pub mod command;
pub mod config;
pub mod event;
pub mod help;
pub mod history;
pub mod input;
pub mod keybindings;
pub mod list_view_state;
pub mod logging;
pub mod search;
pub mod storage;
pub mod term;
pub mod ui;
pub mod utils;
pub mod version;

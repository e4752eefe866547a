//! Roll history for dado.
//!
//! A [`HistoryLog`] records roll outcomes for later display. It is an
//! explicitly constructed handle: create one at startup and pass clones to
//! whatever records or renders rolls.

pub mod config;
pub mod export;
pub mod log;

pub use config::HistoryConfig;
pub use export::{entry_markdown, entry_text};
pub use log::HistoryLog;

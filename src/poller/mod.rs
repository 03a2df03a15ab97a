pub mod interface;
mod watcher;

pub use interface::{MessageSink, StatusSource};
pub use watcher::StatusPoller;

// Public modules
pub mod config;
pub mod omnivore;
pub mod summary;

// Re-export commonly used types
pub use config::Config;
pub use omnivore::{Label, OmnivoreClient, SavedItem};
pub use summary::{render_table, LibrarySummary};

// Core site logic - the state, the views derived from it, and the admin handlers
pub mod admin;
pub mod assets;
pub mod collate;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod navigation;
pub mod portfolio;
pub mod preferences;
pub mod search;
pub mod seed;
pub mod store;

pub use admin::AdminPanel;
pub use config::Config;
pub use error::Error;
pub use export::{ExportFormat, Exporter};
pub use navigation::{ExternalLink, Navigator, Page};
pub use portfolio::{CategoryFilter, PortfolioQuery, PortfolioView, SortKey, ViewMode};
pub use preferences::{FontScale, Preferences};
pub use search::{SearchOverlay, SearchResults};
pub use store::{InquiryDraft, SiteStore};

/// Result type alias because typing Result<T, Error> everywhere is tedious
pub type Result<T> = std::result::Result<T, Error>;

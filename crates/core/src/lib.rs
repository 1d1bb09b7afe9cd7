pub mod builder;
pub mod collapse;
pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod model;
pub mod projector;
pub mod root;
pub mod scanner;
pub mod sorter;
pub mod store;

pub use collapse::CollapsedFolders;
pub use config::Config;
pub use error::{Error, Result};
pub use filter::HiddenRule;
pub use model::*;
pub use root::TraversalRoot;
pub use store::*;

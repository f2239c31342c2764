pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use self::adapters::{dom::MemoryDocument, http::HttpTransport};
pub use self::core::{
    fetcher::{get_kus, KuFetcher, KUS_PATH},
    renderer::{Renderer, KUS_CONTAINER_ID},
    startup::{on_document_ready, ReadyTrigger},
};
pub use self::domain::model::{Ku, KuList, LoadOutcome};
pub use self::utils::error::{KusError, Result};

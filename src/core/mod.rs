pub mod fetcher;
pub mod renderer;
pub mod startup;

pub use crate::domain::model::{Ku, KuList, LoadOutcome};
pub use crate::domain::ports::{Document, ListContainer, Transport, TransportResponse};
pub use crate::utils::error::Result;

//! Store adapters - campaign and value proposition persistence.

mod in_memory;
mod realtime;

pub use in_memory::{InMemoryCampaignStore, InMemoryValuePropStore};
pub use realtime::{RealtimeStore, RealtimeStoreConfig};

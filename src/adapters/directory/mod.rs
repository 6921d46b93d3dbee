//! Directory adapters - plan/participant read API implementations.

mod in_memory;

pub use in_memory::InMemoryPlanDirectory;

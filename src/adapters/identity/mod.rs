//! Identity adapters.

mod stub;

pub use stub::StubIdentityReader;

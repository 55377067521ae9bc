//! Cache backing store interface.

pub mod backend;

pub use backend::CacheBackend;

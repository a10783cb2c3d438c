//! Query Layer
//!
//! Derived views over the record store.

mod view_query;

pub use view_query::ViewQuery;

//! Repository Layer
//!
//! Data access abstraction and the in-memory record store.

mod collation;
mod record_store;
mod traits;


pub use collation::compare_names;
pub use record_store::RecordStore;
pub use traits::Repository;

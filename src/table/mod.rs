//! Precomputed lookup-table acceleration for solve queries.

mod core;

pub use core::LookupTable;

//! Data for the catalog pages.

mod listings;

pub use listings::*;

//! Catalog error types.

use thiserror::Error;

/// Errors that can occur constructing catalog data.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Slug is empty or contains characters unsafe for URLs.
    #[error("Invalid slug: {0:?}")]
    InvalidSlug(String),

    /// Listing name is empty.
    #[error("Listing name must not be empty")]
    EmptyName,

    /// Price amount is negative.
    #[error("Invalid price: {0} cents")]
    InvalidPrice(i64),
}

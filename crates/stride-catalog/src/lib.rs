//! Catalog domain types for the Stride storefront.
//!
//! This crate provides the data model and pure display logic behind the
//! catalog card renderer:
//!
//! - **Listing**: the shoe listing shown on catalog cards
//! - **Card**: display variant resolution and variant styling
//! - **Money**: cents-based prices and display formatting
//! - **Theme**: shared palette and font-weight scale
//!
//! # Example
//!
//! ```rust,ignore
//! use stride_catalog::prelude::*;
//! use chrono::Utc;
//!
//! let listing = ShoeListing::new(
//!     "air-jordan-1",
//!     "Air Jordan 1",
//!     "/images/air-jordan-1.jpg",
//!     Money::from_decimal(100.0, Currency::USD),
//!     Utc::now(),
//!     1,
//! )?;
//!
//! // Released just now, so the card shows the new-release flag.
//! let variant = CardVariant::for_listing(&listing, Utc::now());
//! assert_eq!(variant.flag_message(), "Just released!");
//! ```

pub mod card;
pub mod error;
pub mod listing;
pub mod money;
pub mod text;
pub mod theme;

pub use card::{CardStyle, CardVariant};
pub use error::CatalogError;
pub use listing::{ShoeListing, NEW_RELEASE_WINDOW_DAYS};
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::card::{CardStyle, CardVariant};
    pub use crate::error::CatalogError;
    pub use crate::listing::{ShoeListing, NEW_RELEASE_WINDOW_DAYS};
    pub use crate::money::{Currency, Money};
    pub use crate::text::pluralize;
    pub use crate::theme::FontWeight;
}

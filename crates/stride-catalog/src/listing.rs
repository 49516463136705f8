//! Shoe listing model.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::money::Money;

/// How long after release a shoe is still considered a new release.
pub const NEW_RELEASE_WINDOW_DAYS: i64 = 30;

/// A shoe listing in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShoeListing {
    /// URL-safe identifier, used to build the detail route.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Image source URL.
    pub image_url: String,
    /// Base price. Always shown.
    pub price: Money,
    /// Sale price. Present exactly when the listing is discounted.
    #[serde(default)]
    pub sale_price: Option<Money>,
    /// Release date, compared against "now" for the new-release flag.
    pub released_at: DateTime<Utc>,
    /// Number of colorways available.
    pub num_colors: u32,
}

impl ShoeListing {
    /// Create a new listing, validating the fields the renderer relies on.
    pub fn new(
        slug: impl Into<String>,
        name: impl Into<String>,
        image_url: impl Into<String>,
        price: Money,
        released_at: DateTime<Utc>,
        num_colors: u32,
    ) -> Result<Self, CatalogError> {
        let slug = slug.into();
        if !is_valid_slug(&slug) {
            return Err(CatalogError::InvalidSlug(slug));
        }

        let name = name.into();
        if name.trim().is_empty() {
            return Err(CatalogError::EmptyName);
        }

        if price.is_negative() {
            return Err(CatalogError::InvalidPrice(price.amount_cents));
        }

        Ok(Self {
            slug,
            name,
            image_url: image_url.into(),
            price,
            sale_price: None,
            released_at,
            num_colors,
        })
    }

    /// Set a sale price on this listing.
    pub fn with_sale_price(mut self, sale_price: Money) -> Self {
        self.sale_price = Some(sale_price);
        self
    }

    /// Check if the listing is discounted.
    pub fn is_on_sale(&self) -> bool {
        self.sale_price.is_some()
    }

    /// Check if the listing was released within the new-release window.
    ///
    /// A release date in the future also counts as new: the elapsed
    /// duration is negative and therefore within the window.
    pub fn is_new_release(&self, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(self.released_at) <= Duration::days(NEW_RELEASE_WINDOW_DAYS)
    }

    /// Path of the detail route for this listing.
    pub fn detail_path(&self) -> String {
        format!("/shoe/{}", self.slug)
    }
}

/// A slug is non-empty lowercase ASCII letters, digits, and hyphens.
fn is_valid_slug(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

//! Card display variants and styling.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::listing::ShoeListing;
use crate::theme;

/// The mutually exclusive display mode of a catalog card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CardVariant {
    /// Listing has a sale price.
    OnSale,
    /// Released within the new-release window.
    NewRelease,
    /// Neither on sale nor recently released.
    #[default]
    Default,
}

impl CardVariant {
    /// Resolve the display variant for a listing.
    ///
    /// A listing can be both on sale and newly released; the sale
    /// variant wins.
    pub fn for_listing(listing: &ShoeListing, now: DateTime<Utc>) -> Self {
        if listing.is_on_sale() {
            CardVariant::OnSale
        } else if listing.is_new_release(now) {
            CardVariant::NewRelease
        } else {
            CardVariant::Default
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CardVariant::OnSale => "on-sale",
            CardVariant::NewRelease => "new-release",
            CardVariant::Default => "default",
        }
    }

    /// Promotional flag text for this variant.
    pub fn flag_message(&self) -> &'static str {
        match self {
            CardVariant::OnSale => "Sale",
            CardVariant::NewRelease => "Just released!",
            CardVariant::Default => "",
        }
    }

    /// Style bindings for this variant.
    pub fn style(&self) -> CardStyle {
        match self {
            CardVariant::OnSale => CardStyle {
                flag_background: theme::color::PRIMARY,
                flag_visible: true,
                price_color: theme::color::GRAY_700,
                price_strikethrough: true,
            },
            CardVariant::NewRelease => CardStyle {
                flag_background: theme::color::SECONDARY,
                flag_visible: true,
                price_color: theme::color::BLACK,
                price_strikethrough: false,
            },
            CardVariant::Default => CardStyle {
                flag_background: theme::color::TRANSPARENT,
                flag_visible: false,
                price_color: theme::color::BLACK,
                price_strikethrough: false,
            },
        }
    }
}

/// Variant-specific style bindings applied to a rendered card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardStyle {
    /// Flag background color.
    pub flag_background: &'static str,
    /// Whether the promotional flag is shown.
    pub flag_visible: bool,
    /// Base price text color.
    pub price_color: &'static str,
    /// Whether the base price is struck through.
    pub price_strikethrough: bool,
}

//! Demo catalog data.
//!
//! Stand-in for a catalog service. The listings are arranged to cover
//! every card variant, including a sale on a recent release.

use chrono::{DateTime, Duration, Utc};

use stride_catalog::prelude::*;

/// Build the demo catalog, with release dates relative to `now`.
pub fn demo_catalog(now: DateTime<Utc>) -> Result<Vec<ShoeListing>, CatalogError> {
    let usd = Currency::USD;

    Ok(vec![
        // Fresh release.
        ShoeListing::new(
            "pegasus-41",
            "Pegasus 41",
            "/images/pegasus-41.jpg",
            Money::from_decimal(140.0, usd),
            now - Duration::days(3),
            4,
        )?,
        // On sale and recent; the sale flag wins.
        ShoeListing::new(
            "vaporfly-4",
            "Vaporfly 4",
            "/images/vaporfly-4.jpg",
            Money::from_decimal(260.0, usd),
            now - Duration::days(10),
            2,
        )?
        .with_sale_price(Money::from_decimal(208.0, usd)),
        // Long-running model on clearance.
        ShoeListing::new(
            "invincible-3",
            "Invincible 3",
            "/images/invincible-3.jpg",
            Money::from_decimal(180.0, usd),
            now - Duration::days(200),
            6,
        )?
        .with_sale_price(Money::from_decimal(129.0, usd)),
        // Just inside the new-release window.
        ShoeListing::new(
            "zoom-fly-6",
            "Zoom Fly 6",
            "/images/zoom-fly-6.jpg",
            Money::from_decimal(170.0, usd),
            now - Duration::days(29),
            3,
        )?,
        // Catalog staples.
        ShoeListing::new(
            "structure-25",
            "Structure 25",
            "/images/structure-25.jpg",
            Money::from_decimal(140.0, usd),
            now - Duration::days(90),
            1,
        )?,
        ShoeListing::new(
            "air-max-90",
            "Air Max 90",
            "/images/air-max-90.jpg",
            Money::from_decimal(130.0, usd),
            now - Duration::days(400),
            9,
        )?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_covers_every_variant() {
        let now = Utc::now();
        let catalog = demo_catalog(now).unwrap();

        let variants: Vec<CardVariant> = catalog
            .iter()
            .map(|l| CardVariant::for_listing(l, now))
            .collect();

        assert!(variants.contains(&CardVariant::OnSale));
        assert!(variants.contains(&CardVariant::NewRelease));
        assert!(variants.contains(&CardVariant::Default));
    }

    #[test]
    fn test_demo_slugs_are_unique() {
        let catalog = demo_catalog(Utc::now()).unwrap();
        let mut slugs: Vec<&str> = catalog.iter().map(|l| l.slug.as_str()).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), catalog.len());
    }
}

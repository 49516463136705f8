//! Shoe detail section - hero for a single listing.

use chrono::{DateTime, Utc};

use stride_catalog::prelude::*;

/// Render the detail hero for one listing.
pub fn render_shoe_detail(listing: &ShoeListing, now: DateTime<Utc>) -> String {
    let variant = CardVariant::for_listing(listing, now);

    let pricing = match listing.sale_price {
        Some(sale) => {
            let savings = listing
                .price
                .try_subtract(&sale)
                .filter(|s| s.is_positive())
                .map(|s| format!(r#"<span class="detail-savings">Save {}</span>"#, s.display()))
                .unwrap_or_default();
            format!(
                r#"<span class="detail-price detail-price--sale">{}</span>
            <span class="detail-price-original">{}</span>
            {}"#,
                sale.display(),
                listing.price.display(),
                savings
            )
        }
        None => format!(
            r#"<span class="detail-price">{}</span>"#,
            listing.price.display()
        ),
    };

    let flag = if variant.flag_message().is_empty() {
        String::new()
    } else {
        format!(
            r#"<div class="shoe-flag" style="background-color: {};">{}</div>"#,
            variant.style().flag_background,
            variant.flag_message()
        )
    };

    format!(
        r#"<section class="shoe-detail" data-section="detail">
    <div class="detail-image-wrapper">
        {flag}
        <img class="detail-image" alt="" src="{src}">
    </div>
    <div class="detail-info">
        <h1 class="detail-name">{name}</h1>
        <div class="detail-pricing">{pricing}</div>
        <p class="detail-colors">{colors}</p>
        <a class="detail-back" href="/">Back to catalog</a>
    </div>
</section>"#,
        flag = flag,
        src = html_escape(&listing.image_url),
        name = html_escape(&listing.name),
        pricing = pricing,
        colors = pluralize("Color", listing.num_colors),
    )
}

/// Render the not-found section for an unknown route.
pub fn render_not_found(requested: &str) -> String {
    format!(
        r#"<section class="not-found" data-section="not-found">
    <h1>404</h1>
    <p>Nothing at {}</p>
    <a href="/">Back to catalog</a>
</section>"#,
        html_escape(requested)
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn listing() -> ShoeListing {
        ShoeListing::new(
            "vaporfly-4",
            "Vaporfly 4",
            "/images/vaporfly-4.jpg",
            Money::from_decimal(260.0, Currency::USD),
            Utc::now() - Duration::days(200),
            2,
        )
        .unwrap()
    }

    #[test]
    fn test_detail_shows_savings_when_on_sale() {
        let l = listing().with_sale_price(Money::from_decimal(208.0, Currency::USD));
        let html = render_shoe_detail(&l, Utc::now());

        assert!(html.contains("$208.00"));
        assert!(html.contains("$260.00"));
        assert!(html.contains("Save $52.00"));
        assert!(html.contains(">Sale</div>"));
    }

    #[test]
    fn test_detail_without_sale_has_single_price() {
        let html = render_shoe_detail(&listing(), Utc::now());

        assert!(html.contains("$260.00"));
        assert!(!html.contains("detail-savings"));
        assert!(!html.contains("shoe-flag"));
    }

    #[test]
    fn test_not_found_escapes_requested_path() {
        let html = render_not_found("<script>alert(1)</script>");
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}

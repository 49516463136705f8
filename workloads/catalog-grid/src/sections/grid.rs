//! Catalog grid section - one card per listing.

use chrono::{DateTime, Utc};

use stride_catalog::prelude::*;

/// Render the catalog grid section.
pub fn render_shoe_grid(listings: &[ShoeListing], now: DateTime<Utc>) -> String {
    if listings.is_empty() {
        return r#"<section class="shoe-grid shoe-grid--empty" data-section="grid">
    <p class="empty-state">No shoes in the catalog yet. Check back soon.</p>
</section>"#
            .to_string();
    }

    let cards: String = listings.iter().map(|l| render_shoe_card(l, now)).collect();

    format!(
        r#"<section class="shoe-grid" data-section="grid">
    {}
</section>"#,
        cards
    )
}

/// Render a single catalog card.
///
/// Pure function of the listing and `now`: the variant is resolved,
/// variant styling is applied inline, and the whole card links to the
/// listing's detail route. The sale-price slot is always rendered so
/// the row keeps its layout when no sale price is present.
pub fn render_shoe_card(listing: &ShoeListing, now: DateTime<Utc>) -> String {
    let variant = CardVariant::for_listing(listing, now);
    let style = variant.style();

    let flag_style = format!(
        "background-color: {}; display: {};",
        style.flag_background,
        if style.flag_visible { "block" } else { "none" }
    );
    let price_style = format!(
        "color: {}; text-decoration: {};",
        style.price_color,
        if style.price_strikethrough {
            "line-through"
        } else {
            "none"
        }
    );
    let sale_price = listing
        .sale_price
        .map(|p| p.display())
        .unwrap_or_default();

    format!(
        r#"<a class="shoe-link" href="{href}">
    <article class="shoe-card" data-variant="{variant}">
        <div class="shoe-image-wrapper">
            <div class="shoe-flag" style="{flag_style}">{flag}</div>
            <img class="shoe-image" alt="" src="{src}">
        </div>
        {spacer}
        <div class="shoe-row">
            <h3 class="shoe-name">{name}</h3>
            <span class="shoe-price" style="{price_style}">{price}</span>
            <span class="shoe-sale-price">{sale_price}</span>
        </div>
        <div class="shoe-row">
            <p class="shoe-colors">{colors}</p>
        </div>
    </article>
</a>"#,
        href = html_escape(&listing.detail_path()),
        variant = variant.as_str(),
        flag_style = flag_style,
        flag = variant.flag_message(),
        src = html_escape(&listing.image_url),
        spacer = spacer(12),
        name = html_escape(&listing.name),
        price_style = price_style,
        price = listing.price.display(),
        sale_price = sale_price,
        colors = pluralize("Color", listing.num_colors),
    )
}

/// Fixed-size vertical spacer between the image and the text block.
fn spacer(size_px: u32) -> String {
    format!(r#"<div class="spacer" style="height: {}px;"></div>"#, size_px)
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

    fn listing(released_days_ago: i64, num_colors: u32) -> ShoeListing {
        ShoeListing::new(
            "air-jordan-1",
            "Air Jordan 1",
            "/images/air-jordan-1.jpg",
            Money::from_decimal(100.0, Currency::USD),
            Utc::now() - Duration::days(released_days_ago),
            num_colors,
        )
        .unwrap()
    }

    #[test]
    fn test_default_card_hides_flag_and_keeps_price_plain() {
        // Scenario: released 31 days ago, no sale price, one colorway.
        let html = render_shoe_card(&listing(31, 1), Utc::now());

        assert!(html.contains(r#"data-variant="default""#));
        assert!(html.contains("display: none"));
        assert!(html.contains("text-decoration: none"));
        assert!(!html.contains("line-through"));
        assert!(html.contains("1 Color<"));
        assert!(html.contains("$100.00"));
    }

    #[test]
    fn test_new_release_card_shows_flag() {
        let html = render_shoe_card(&listing(3, 3), Utc::now());

        assert!(html.contains(r#"data-variant="new-release""#));
        assert!(html.contains("Just released!"));
        assert!(html.contains("display: block"));
        assert!(html.contains("3 Colors"));
    }

    #[test]
    fn test_sale_wins_over_new_release_and_strikes_base_price() {
        let l = listing(3, 1).with_sale_price(Money::from_decimal(80.0, Currency::USD));
        let html = render_shoe_card(&l, Utc::now());

        assert!(html.contains(r#"data-variant="on-sale""#));
        assert!(html.contains(">Sale</div>"));
        assert!(html.contains("line-through"));
        assert!(html.contains("$100.00"));
        assert!(html.contains("$80.00"));
    }

    #[test]
    fn test_zero_colors_label() {
        let html = render_shoe_card(&listing(31, 0), Utc::now());
        assert!(html.contains("0 Colors"));
    }

    #[test]
    fn test_sale_price_slot_is_reserved_when_absent() {
        let html = render_shoe_card(&listing(31, 1), Utc::now());
        assert!(html.contains(r#"<span class="shoe-sale-price"></span>"#));
    }

    #[test]
    fn test_card_links_to_detail_route() {
        let html = render_shoe_card(&listing(31, 1), Utc::now());
        assert!(html.contains(r#"href="/shoe/air-jordan-1""#));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let l = listing(3, 2);
        let now = Utc::now();
        assert_eq!(render_shoe_card(&l, now), render_shoe_card(&l, now));
    }

    #[test]
    fn test_listing_text_is_escaped() {
        let mut l = listing(31, 1);
        l.name = "Air <Jordan> & Co".to_string();
        let html = render_shoe_card(&l, Utc::now());

        assert!(html.contains("Air &lt;Jordan&gt; &amp; Co"));
        assert!(!html.contains("<Jordan>"));
    }

    #[test]
    fn test_empty_catalog_renders_empty_state() {
        let html = render_shoe_grid(&[], Utc::now());
        assert!(html.contains("shoe-grid--empty"));
        assert!(html.contains("No shoes"));
    }

    #[test]
    fn test_grid_renders_one_card_per_listing() {
        let listings = vec![listing(3, 1), listing(400, 2)];
        let html = render_shoe_grid(&listings, Utc::now());
        assert_eq!(html.matches("shoe-card").count(), 2);
    }
}

//! Catalog header section - title and shoe count.

use stride_catalog::text::pluralize;

/// Render the catalog header section.
pub fn render_catalog_header(total: usize) -> String {
    format!(
        r#"<section class="catalog-header" data-section="header">
    <h1>All Shoes</h1>
    <p class="shoe-count">{}</p>
</section>"#,
        pluralize("Shoe", total as u32)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_counts_shoes() {
        assert!(render_catalog_header(1).contains("1 Shoe<"));
        assert!(render_catalog_header(6).contains("6 Shoes"));
    }
}

//! Shoe catalog grid - storefront workload.
//!
//! Renders the shoe catalog as a grid of product cards, plus a detail
//! page per shoe. Each card derives a display variant from its listing
//! (on sale, new release, or default) and applies the variant styling
//! inline.

mod data;
mod page;
mod sections;

use anyhow::Result;
use chrono::{DateTime, Utc};
use spin_sdk::http::{IntoResponse, Request, Response};
use spin_sdk::http_component;

use stride_catalog::prelude::*;
use stride_catalog::theme::color;
use stride_observability::{LogFormat, LogLevel, RequestId, StructuredLogger};

use data::demo_catalog;
use page::{HeadContent, Shell};
use sections::{render_catalog_header, render_not_found, render_shoe_detail, render_shoe_grid};

/// Main HTTP handler for the catalog.
#[http_component]
fn handle(req: Request) -> Result<impl IntoResponse> {
    let request_id = RequestId::generate();
    let path = req.path().to_string();

    let logger = StructuredLogger::new(request_id.clone())
        .with_workload("catalog-grid")
        .with_route(&path)
        .with_min_level(LogLevel::Debug)
        .with_format(LogFormat::Human);

    logger.info("Request started");

    let now = Utc::now();
    let catalog = demo_catalog(now)?;

    let (status, html) = match route(&path) {
        Route::Grid => {
            logger
                .debug_builder("Rendering catalog grid")
                .field_i64("listings", catalog.len() as i64)
                .emit();
            (200, grid_page(&catalog, now))
        }
        Route::Shoe(slug) => match catalog.iter().find(|l| l.slug == slug) {
            Some(listing) => {
                logger
                    .debug_builder("Rendering shoe detail")
                    .field("slug", slug)
                    .emit();
                (200, detail_page(listing, now))
            }
            None => {
                logger
                    .warn_builder("Unknown shoe slug")
                    .field("slug", slug)
                    .emit();
                (404, not_found_page(&path))
            }
        },
        Route::NotFound => {
            logger.warn("Unknown route");
            (404, not_found_page(&path))
        }
    };

    logger.info("Request complete");

    Ok(Response::builder()
        .status(status)
        .header("content-type", "text/html; charset=utf-8")
        .header("x-request-id", request_id.to_string())
        .body(html)
        .build())
}

/// Routes served by this workload.
#[derive(Debug, PartialEq, Eq)]
enum Route<'a> {
    Grid,
    Shoe(&'a str),
    NotFound,
}

/// Split the route from a path like `/shoe/air-max-90?ref=grid`.
fn route(path: &str) -> Route<'_> {
    let path = path.split('?').next().unwrap_or(path);

    if let Some(rest) = path.strip_prefix("/shoe/") {
        let slug = rest.split('/').next().unwrap_or("");
        if slug.is_empty() {
            return Route::NotFound;
        }
        return Route::Shoe(slug);
    }

    match path {
        "" | "/" | "/catalog" => Route::Grid,
        _ => Route::NotFound,
    }
}

fn grid_page(catalog: &[ShoeListing], now: DateTime<Utc>) -> String {
    let shell = page_shell("Shoes | Stride");
    let mut html = shell.render_opening();
    html.push_str(&render_catalog_header(catalog.len()));
    html.push_str(&render_shoe_grid(catalog, now));
    html.push_str(&shell.render_closing());
    html
}

fn detail_page(listing: &ShoeListing, now: DateTime<Utc>) -> String {
    let shell = page_shell(&format!("{} | Stride", listing.name));
    let mut html = shell.render_opening();
    html.push_str(&render_shoe_detail(listing, now));
    html.push_str(&shell.render_closing());
    html
}

fn not_found_page(requested: &str) -> String {
    let shell = page_shell("Not Found | Stride");
    let mut html = shell.render_opening();
    html.push_str(&render_not_found(requested));
    html.push_str(&shell.render_closing());
    html
}

fn page_shell(title: &str) -> Shell {
    Shell::new(
        HeadContent::new(title)
            .with_meta("viewport", "width=device-width, initial-scale=1")
            .with_style(&stylesheet()),
    )
    .with_body_start(
        r#"<body>
    <header class="site-header">
        <nav><a href="/">Stride</a></nav>
    </header>
    <main class="catalog-container">
"#
        .to_string(),
    )
    .with_body_end(
        r#"
    </main>
    <footer class="site-footer">
        <p>Stride - running shoes, fresh weekly</p>
    </footer>
</body>
</html>"#
            .to_string(),
    )
}

/// Page CSS. Variant-specific values (flag background and visibility,
/// price color and strikethrough) are applied inline per card.
fn stylesheet() -> String {
    format!(
        r#"
* {{ box-sizing: border-box; }}
body {{ font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; padding: 0; background: {white}; color: {gray900}; }}
.site-header {{ background: {gray900}; padding: 1rem 2rem; }}
.site-header a {{ color: {white}; text-decoration: none; font-weight: {bold}; }}
.site-footer {{ background: {gray900}; color: {white}; padding: 2rem; text-align: center; margin-top: 2rem; }}
.catalog-container {{ max-width: 1200px; margin: 0 auto; padding: 2rem; }}

/* Header */
.catalog-header {{ display: flex; justify-content: space-between; align-items: baseline; }}
.shoe-count {{ color: {gray700}; }}

/* Grid */
.shoe-grid {{ display: grid; grid-template-columns: repeat(auto-fill, minmax(275px, 1fr)); gap: 32px; }}
.empty-state {{ color: {gray700}; }}
.shoe-link {{ text-decoration: none; color: inherit; }}
.shoe-image-wrapper {{ position: relative; }}
.shoe-flag {{ position: absolute; top: 0; right: 0; margin-right: -4px; color: {white}; width: fit-content; border-radius: 2px; padding: 8px 10px; font-weight: {bold}; }}
.shoe-image {{ width: 100%; }}
.shoe-row {{ position: relative; display: flex; font-size: 1rem; justify-content: space-between; }}
.shoe-name {{ font-weight: {medium}; color: {gray900}; margin: 0; }}
.shoe-colors {{ color: {gray700}; margin: 0; }}
.shoe-sale-price {{ position: absolute; bottom: -20px; right: 0; font-weight: {medium}; color: {primary}; }}

/* Detail */
.shoe-detail {{ display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; }}
.detail-image-wrapper {{ position: relative; }}
.detail-image {{ width: 100%; border-radius: 8px; }}
.detail-name {{ margin: 0 0 1rem; }}
.detail-price {{ font-size: 1.5rem; font-weight: {medium}; }}
.detail-price--sale {{ color: {primary}; }}
.detail-price-original {{ text-decoration: line-through; color: {gray700}; margin-left: 0.5rem; }}
.detail-savings {{ background: {gray100}; border-radius: 4px; padding: 0.25rem 0.5rem; margin-left: 0.5rem; }}
.detail-colors {{ color: {gray700}; }}
.detail-back {{ color: {gray700}; }}

/* Not found */
.not-found {{ text-align: center; padding: 4rem; }}
"#,
        white = color::WHITE,
        gray100 = color::GRAY_100,
        gray700 = color::GRAY_700,
        gray900 = color::GRAY_900,
        primary = color::PRIMARY,
        medium = FontWeight::Medium.css_value(),
        bold = FontWeight::Bold.css_value(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_dispatch() {
        assert_eq!(route("/"), Route::Grid);
        assert_eq!(route(""), Route::Grid);
        assert_eq!(route("/catalog"), Route::Grid);
        assert_eq!(route("/shoe/air-max-90"), Route::Shoe("air-max-90"));
        assert_eq!(route("/shoe/air-max-90?ref=grid"), Route::Shoe("air-max-90"));
        assert_eq!(route("/shoe/air-max-90/reviews"), Route::Shoe("air-max-90"));
        assert_eq!(route("/shoe/"), Route::NotFound);
        assert_eq!(route("/cart"), Route::NotFound);
    }

    #[test]
    fn test_grid_page_is_a_complete_document() {
        let now = Utc::now();
        let catalog = demo_catalog(now).unwrap();
        let html = grid_page(&catalog, now);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Shoes | Stride</title>"));
        assert_eq!(html.matches("data-variant").count(), catalog.len());
        assert!(html.ends_with("</html>"));
    }

    #[test]
    fn test_detail_page_for_known_listing() {
        let now = Utc::now();
        let catalog = demo_catalog(now).unwrap();
        let listing = catalog.iter().find(|l| l.slug == "vaporfly-4").unwrap();
        let html = detail_page(listing, now);

        assert!(html.contains("<title>Vaporfly 4 | Stride</title>"));
        assert!(html.contains(r#"data-section="detail""#));
    }

    #[test]
    fn test_not_found_page() {
        let html = not_found_page("/shoe/nonexistent");
        assert!(html.contains("404"));
        assert!(html.contains("/shoe/nonexistent"));
    }
}

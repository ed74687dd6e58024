//! Embedded frontend bundle.
//!
//! Trunk fingerprints the wasm, js and css it emits (`store-map-ui-<hash>.js`),
//! so those can be cached for good. `index.html` names the current hashes and
//! must be revalidated on every load or a deploy leaves browsers on stale code.

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir, File};
use mime_guess::from_path;

static BUNDLE: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const INDEX: &str = "index.html";

const REVALIDATE: &str = "no-cache";
const IMMUTABLE: &str = "public, max-age=31536000, immutable";
const SHORT_LIVED: &str = "public, max-age=300";

/// Shortest hex run trunk appends that we treat as a content hash.
const MIN_HASH_LEN: usize = 16;

/// Serves the embedded file at the request path.
///
/// Extension-less paths that are not in the bundle are client-side pages
/// and get `index.html`. A missing file with an extension is a 404 so a
/// broken asset link does not come back as HTML.
pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let wanted = if path.is_empty() { INDEX } else { path };

    if let Some(file) = BUNDLE.get_file(wanted) {
        return respond(wanted, file);
    }
    if has_extension(wanted) {
        log::debug!("no embedded asset at /{}", wanted);
        return HttpResponse::NotFound().body("Not Found");
    }
    match BUNDLE.get_file(INDEX) {
        Some(index) => respond(INDEX, index),
        None => {
            log::error!("bundle has no {}; was the frontend built?", INDEX);
            HttpResponse::NotFound().body("Not Found")
        }
    }
}

fn respond(name: &str, file: &'static File<'static>) -> HttpResponse {
    let mime = from_path(name).first_or_octet_stream();
    HttpResponse::Ok()
        .content_type(mime.as_ref())
        .insert_header((header::CACHE_CONTROL, cache_control(name)))
        .body(file.contents())
}

/// Cache policy for a bundle file by name.
fn cache_control(name: &str) -> &'static str {
    if name == INDEX || name.ends_with(".html") {
        REVALIDATE
    } else if is_fingerprinted(name) {
        IMMUTABLE
    } else {
        SHORT_LIVED
    }
}

/// `store-map-ui-3f9c0d1e2a4b5c6d.js` style names.
fn is_fingerprinted(name: &str) -> bool {
    let file = name.rsplit('/').next().unwrap_or(name);
    let stem = file.split('.').next().unwrap_or(file);
    match stem.rsplit_once('-') {
        Some((_, hash)) => {
            // wasm-bindgen output carries a `_bg` suffix after the hash.
            let hash = hash.strip_suffix("_bg").unwrap_or(hash);
            hash.len() >= MIN_HASH_LEN && hash.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

fn has_extension(path: &str) -> bool {
    path.rsplit('/')
        .next()
        .is_some_and(|last| last.contains('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_always_revalidated() {
        assert_eq!(cache_control("index.html"), REVALIDATE);
        assert_eq!(cache_control("login/index.html"), REVALIDATE);
    }

    #[test]
    fn hashed_trunk_output_is_immutable() {
        assert_eq!(cache_control("store-map-ui-3f9c0d1e2a4b5c6d.js"), IMMUTABLE);
        assert_eq!(cache_control("store-map-ui-3f9c0d1e2a4b5c6d_bg.wasm"), IMMUTABLE);
        assert_eq!(cache_control("styles-a1b2c3d4e5f60718.css"), IMMUTABLE);
        assert_eq!(cache_control("js/identity-0123456789abcdef.js"), IMMUTABLE);
    }

    #[test]
    fn unhashed_files_get_a_short_lifetime() {
        assert_eq!(cache_control("js/identity.js"), SHORT_LIVED);
        assert_eq!(cache_control("favicon.ico"), SHORT_LIVED);
        // Not hex, and too short to be a content hash.
        assert_eq!(cache_control("store-map-ui.js"), SHORT_LIVED);
        assert_eq!(cache_control("date-picker.js"), SHORT_LIVED);
        assert_eq!(cache_control("app-abc123.js"), SHORT_LIVED);
    }

    #[test]
    fn pages_and_assets_are_told_apart() {
        assert!(!has_extension("login"));
        assert!(!has_extension("ui/store-market-map"));
        assert!(has_extension("missing.js"));
        assert!(has_extension("js/missing.js"));
    }
}

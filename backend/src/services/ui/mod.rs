//! # UI Hosting
//!
//! Serves the compiled frontend bundle, embedded into the binary at build
//! time. The REST API the page talks to lives elsewhere; this host only
//! delivers the page.
//!
//! ## Routes
//!
//! *   **`GET /`**: redirects to the landing page.
//! *   **`GET /healthz`**: liveness check, answers `ok`.
//! *   **anything else**: the embedded file at that path, or `index.html` so
//!     client-side pages such as `/login` and `/ui/store-market-map` load.

mod assets;

use actix_web::http::header;
use actix_web::web::{self, get};
use actix_web::HttpResponse;

/// Target of the `/` redirect, shared as app data.
#[derive(Clone)]
pub struct LandingPath(pub String);

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", get().to(redirect_to_landing))
        .route("/healthz", get().to(healthz))
        .default_service(web::route().to(assets::serve_embedded));
}

async fn redirect_to_landing(landing: web::Data<LandingPath>) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, landing.0.as_str()))
        .finish()
}

async fn healthz() -> HttpResponse {
    HttpResponse::Ok().content_type("text/plain").body("ok")
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    fn landing() -> web::Data<LandingPath> {
        web::Data::new(LandingPath("/ui/store-market-map".to_string()))
    }

    #[actix_web::test]
    async fn root_redirects_to_landing() {
        let app = test::init_service(App::new().app_data(landing()).configure(configure_routes)).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

        assert_eq!(resp.status(), 302);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/ui/store-market-map"
        );
    }

    #[actix_web::test]
    async fn page_routes_fall_back_to_index() {
        let app = test::init_service(App::new().app_data(landing()).configure(configure_routes)).await;

        for uri in ["/login", "/ui/store-market-map"] {
            let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
            assert!(resp.status().is_success(), "{uri}");
            let content_type = resp.headers().get(header::CONTENT_TYPE).unwrap();
            assert!(content_type.to_str().unwrap().starts_with("text/html"), "{uri}");
        }
    }

    #[actix_web::test]
    async fn index_is_served_uncached_and_missing_assets_are_not_found() {
        let app = test::init_service(App::new().app_data(landing()).configure(configure_routes)).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/login").to_request()).await;
        assert_eq!(resp.headers().get(header::CACHE_CONTROL).unwrap(), "no-cache");

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/store-map-ui-0123456789abcdef.js").to_request(),
        )
        .await;
        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn healthz_answers_ok() {
        let app = test::init_service(App::new().app_data(landing()).configure(configure_routes)).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/healthz").to_request()).await;
        assert!(resp.status().is_success());
        let body = test::read_body(resp).await;
        assert_eq!(body.as_ref(), b"ok");
    }
}

//! The home page and the static informational pages.
//!
//! Every page off the site root renders the same HTML shell with a
//! page-specific title; the front-end assets fill in the rest.

use salvo::writing::Text;
use salvo::{Depot, FlowCtrl, Request, Response, Router, handler};

use realty_core::constants::STATIC_PAGE_COMPONENTS;

/// Human-readable titles for the static page components, in the same order
/// as [`STATIC_PAGE_COMPONENTS`].
const STATIC_PAGE_TITLES: [&str; 9] = [
    "About Us",
    "Buy With Us",
    "For Sale",
    "Home Buying",
    "Home Selling",
    "Nikita Homes",
    "Rental",
    "Terms of Service",
    "Market",
];

pub(super) fn page_html(title: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title} | Nikita Global Realty</title>\n</head>\n<body>\n\
         <main id=\"app\" data-page=\"{title}\"></main>\n</body>\n</html>\n"
    )
}

/// ## Summary
/// GET / - The landing page.
#[handler]
pub async fn home(res: &mut Response) {
    res.render(Text::Html(page_html("Home")));
}

/// Renders one static page shell. One instance is mounted per component.
struct StaticPage {
    title: &'static str,
}

#[salvo::async_trait]
impl salvo::Handler for StaticPage {
    async fn handle(
        &self,
        _req: &mut Request,
        _depot: &mut Depot,
        res: &mut Response,
        _ctrl: &mut FlowCtrl,
    ) {
        res.render(Text::Html(page_html(self.title)));
    }
}

/// ## Summary
/// Mounts every static informational page off the site root.
#[must_use]
pub fn routes() -> Router {
    let mut router = Router::new();
    for (component, title) in STATIC_PAGE_COMPONENTS.iter().zip(STATIC_PAGE_TITLES) {
        router = router.push(Router::with_path(*component).get(StaticPage { title }));
    }
    router
}

#[cfg(test)]
mod tests {
    use salvo::Service;
    use salvo::http::StatusCode;
    use salvo::test::{ResponseExt, TestClient};

    use super::*;

    #[test]
    fn test_every_component_has_a_title() {
        assert_eq!(STATIC_PAGE_COMPONENTS.len(), STATIC_PAGE_TITLES.len());
    }

    #[test_log::test(tokio::test)]
    async fn test_home_page_renders() {
        let service = Service::new(Router::new().get(home));

        let mut response = TestClient::get("http://127.0.0.1:8680/")
            .send(&service)
            .await;

        assert_eq!(response.status_code, Some(StatusCode::OK));
        let body = response.take_string().await.unwrap();
        assert!(body.contains("Home | Nikita Global Realty"));
    }

    #[test_log::test(tokio::test)]
    async fn test_static_pages_render() {
        let service = Service::new(routes());

        for component in STATIC_PAGE_COMPONENTS {
            let response = TestClient::get(format!("http://127.0.0.1:8680/{component}"))
                .send(&service)
                .await;
            assert_eq!(
                response.status_code,
                Some(StatusCode::OK),
                "page {component} did not render"
            );
        }
    }

    #[test_log::test(tokio::test)]
    async fn test_unknown_page_is_404() {
        let service = Service::new(routes());

        let response = TestClient::get("http://127.0.0.1:8680/no_such_page")
            .send(&service)
            .await;

        assert_eq!(response.status_code, Some(StatusCode::NOT_FOUND));
    }
}

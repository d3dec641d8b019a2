//! The site chat assistant.
//!
//! Replies are canned and keyword-matched; the assistant only steers
//! visitors toward the right form or page.

use salvo::http::StatusCode;
use salvo::writing::Json;
use salvo::{Request, Response, Router, handler};
use serde::{Deserialize, Serialize};
use tracing::error;

use super::ErrorResponse;
use realty_core::constants::{API_ROUTE_COMPONENT, CHAT_ROUTE_COMPONENT};

/// ## Summary
/// Chat request payload
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// ## Summary
/// Chat response payload
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// Picks a canned reply for a visitor message. First keyword wins, so more
/// specific intents are checked before broader ones.
fn assistant_reply(message: &str) -> &'static str {
    let message = message.to_lowercase();

    if message.contains("appointment") || message.contains("viewing") {
        "You can book an appointment through our appointment form. Pick a date and time that \
         suits you and we will confirm it."
    } else if message.contains("sell") {
        "We offer home selling consultations. Head to the Home Selling page or book an \
         appointment and one of our agents will walk you through the process."
    } else if message.contains("buy") {
        "Looking to buy? Browse our listings on the For Sale page, or see the Buy With Us page \
         for how we work with buyers."
    } else if message.contains("rent") {
        "Our current rentals are on the Rental page. If nothing fits, leave an inquiry and we \
         will reach out when something suitable comes up."
    } else if message.contains("price") || message.contains("market") {
        "Market conditions change quickly. The Market page has our latest overview, or book a \
         consultation for a property-specific estimate."
    } else if message.contains("contact") || message.contains("agent") {
        "You can reach us through the contact form and an agent will get back to you shortly."
    } else {
        "Hi! I can help with buying, selling, rentals, appointments, and market questions. What \
         are you looking for?"
    }
}

/// ## Summary
/// POST /api/chat/ - Returns a canned assistant reply
///
/// ## Errors
/// Returns HTTP 400 if the body is not a chat message
#[handler]
async fn chat_handler(req: &mut Request, res: &mut Response) {
    let chat_req: ChatRequest = match req.parse_json().await {
        Ok(r) => r,
        Err(e) => {
            error!(error = ?e, "Failed to parse chat request");
            res.status_code(StatusCode::BAD_REQUEST);
            res.render(Json(ErrorResponse {
                error: "Invalid request body".to_string(),
            }));
            return;
        }
    };

    res.render(Json(ChatResponse {
        reply: assistant_reply(&chat_req.message).to_string(),
    }));
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT)
        .push(Router::with_path(CHAT_ROUTE_COMPONENT).post(chat_handler))
}

#[cfg(test)]
mod tests {
    use salvo::Service;
    use salvo::http::StatusCode;
    use salvo::test::{ResponseExt, TestClient};

    use super::*;

    #[test]
    fn test_reply_routes_on_keywords() {
        assert!(assistant_reply("I want to SELL my house").contains("selling"));
        assert!(assistant_reply("how do I buy a home?").contains("buy"));
        assert!(assistant_reply("any rentals available?").contains("Rental"));
        assert!(assistant_reply("can I book a viewing?").contains("appointment"));
        assert!(assistant_reply("what's the market like?").contains("Market"));
    }

    #[test]
    fn test_appointment_beats_sell() {
        // "appointment to sell" should route to booking, not selling
        assert!(assistant_reply("appointment to sell my flat").contains("appointment form"));
    }

    #[test]
    fn test_fallback_reply() {
        assert!(assistant_reply("hello there").contains("What are you looking for?"));
    }

    #[test_log::test(tokio::test)]
    async fn test_chat_endpoint() {
        let service = Service::new(routes());

        let mut response = TestClient::post("http://127.0.0.1:8680/api/chat")
            .json(&serde_json::json!({ "message": "I want to rent" }))
            .send(&service)
            .await;

        assert_eq!(response.status_code, Some(StatusCode::OK));
        let body: serde_json::Value = response.take_json().await.unwrap();
        assert!(body["reply"].as_str().unwrap().contains("Rental"));
    }

    #[test_log::test(tokio::test)]
    async fn test_chat_rejects_bad_body() {
        let service = Service::new(routes());

        let response = TestClient::post("http://127.0.0.1:8680/api/chat")
            .json(&serde_json::json!({ "note": "wrong shape" }))
            .send(&service)
            .await;

        assert_eq!(response.status_code, Some(StatusCode::BAD_REQUEST));
    }
}

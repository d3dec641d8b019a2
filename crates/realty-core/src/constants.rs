//! Route component constants shared across crates.
//!
//! The full paths are the site's wire contract; handlers are mounted from the
//! components so the prefixes and the router can never drift apart.

pub const SIGNUP_ROUTE_COMPONENT: &str = "signup";
pub const LOGIN_ROUTE_COMPONENT: &str = "login";
pub const LOGOUT_ROUTE_COMPONENT: &str = "logout";

pub const CONTACT_ROUTE_COMPONENT: &str = "contact";
pub const CONTACT_SUBMIT_COMPONENT: &str = "submit";
pub const CONTACT_INQUIRY_COMPONENT: &str = "submitting";
pub const CONTACT_SUBMIT_PATH: &str =
    const_str::concat!("/", CONTACT_ROUTE_COMPONENT, "/", CONTACT_SUBMIT_COMPONENT, "/");
pub const CONTACT_INQUIRY_PATH: &str =
    const_str::concat!("/", CONTACT_ROUTE_COMPONENT, "/", CONTACT_INQUIRY_COMPONENT, "/");

pub const APPOINTMENT_ROUTE_COMPONENT: &str = "appointment";
pub const APPOINTMENT_SUBMIT_PATH: &str =
    const_str::concat!("/", APPOINTMENT_ROUTE_COMPONENT, "/", CONTACT_SUBMIT_COMPONENT, "/");

pub const API_ROUTE_COMPONENT: &str = "api";
pub const CHAT_ROUTE_COMPONENT: &str = "chat";
pub const CHAT_API_PATH: &str =
    const_str::concat!("/", API_ROUTE_COMPONENT, "/", CHAT_ROUTE_COMPONENT, "/");

pub const PROPERTIES_ROUTE_COMPONENT: &str = "properties";
pub const PROPERTY_INQUIRY_COMPONENT: &str = "inquiry";
pub const PROPERTIES_PATH: &str = const_str::concat!("/", PROPERTIES_ROUTE_COMPONENT, "/");
pub const PROPERTY_INQUIRY_SUBMIT_PATH: &str = const_str::concat!(
    "/",
    PROPERTIES_ROUTE_COMPONENT,
    "/",
    PROPERTY_INQUIRY_COMPONENT,
    "/",
    CONTACT_SUBMIT_COMPONENT,
    "/"
);

/// Static informational pages, mounted verbatim off the site root.
pub const STATIC_PAGE_COMPONENTS: [&str; 9] = [
    "about",
    "buywithus",
    "forsale",
    "homebuying",
    "homesell",
    "nikita_home",
    "rental",
    "terms",
    "market",
];

#[cfg(test)]
mod tests {
    use super::*;

    // The published paths are a contract; these must never drift.
    #[test]
    fn test_published_paths_are_verbatim() {
        assert_eq!(CONTACT_SUBMIT_PATH, "/contact/submit/");
        assert_eq!(CONTACT_INQUIRY_PATH, "/contact/submitting/");
        assert_eq!(APPOINTMENT_SUBMIT_PATH, "/appointment/submit/");
        assert_eq!(CHAT_API_PATH, "/api/chat/");
        assert_eq!(PROPERTIES_PATH, "/properties/");
        assert_eq!(PROPERTY_INQUIRY_SUBMIT_PATH, "/properties/inquiry/submit/");
    }
}

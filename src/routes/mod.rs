pub mod admin;
pub mod auth;
pub mod bootstrap;
pub mod content;
pub mod debug;
pub mod health;
pub mod listings;
pub mod session;
pub mod submit;

pub use admin::{approve_property, pending_properties, reject_property};
pub use auth::{login, logout, request_otp, verify_otp};
pub use bootstrap::client_config;
pub use content::{benefits, brokerage_info, faq, how_it_works, seo_metadata};
pub use debug::list_buyers;
pub use health::health_check;
pub use listings::{featured_listings, get_listing, list_listings, request_callback};
pub use submit::submit_property;

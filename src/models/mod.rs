pub mod brokerage;
pub mod property;
pub mod user;

pub use brokerage::{brokerage_for_rent, format_inr};
pub use property::{ListingFilter, Property, PropertyType, SubmitPropertyRequest};
pub use user::{LeadRow, PendingSignup, Role, UserSession};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{RETURNING_USER_EMAIL, RETURNING_USER_NAME, RETURNING_USER_PHONE};

/// Marketplace role attached to a session
/// Renters sign up as buyers, owners listing rental space as sellers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Buyer,
    Seller,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Buyer => write!(f, "buyer"),
            Role::Seller => write!(f, "seller"),
        }
    }
}

/// Signup form details, parked until the OTP step completes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingSignup {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub role: Role,
}

/// An authenticated session profile
/// Lives in process memory only; a restart signs everyone out
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSession {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
}

impl UserSession {
    pub fn from_signup(signup: PendingSignup) -> Self {
        Self {
            name: signup.name,
            email: signup.email,
            phone: signup.phone,
            role: signup.role,
        }
    }

    /// The canned profile the login form signs in
    /// There is no account lookup; only the role varies per request
    pub fn returning_user(role: Role) -> Self {
        Self {
            name: RETURNING_USER_NAME.to_string(),
            email: RETURNING_USER_EMAIL.to_string(),
            phone: RETURNING_USER_PHONE.to_string(),
            role,
        }
    }
}

/// Row written to the hosted `buyers`/`sellers` table after a login success
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadRow {
    pub name: String,
    pub email: String,
    pub mobile: String,
}

impl LeadRow {
    pub fn from_session(session: &UserSession) -> Self {
        Self {
            name: session.name.clone(),
            email: session.email.clone(),
            mobile: session.phone.clone(),
        }
    }
}

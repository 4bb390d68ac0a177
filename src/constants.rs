/// Monthly rent threshold separating the two brokerage tiers (rupees)
/// Rents above this pay the premium fee, everything else pays standard
pub const BROKERAGE_RENT_THRESHOLD: i64 = 50_000;

/// Fixed brokerage for rents at or below the threshold (rupees)
pub const BROKERAGE_STANDARD_FEE: i64 = 12_499;

/// Fixed brokerage for rents above the threshold (rupees)
pub const BROKERAGE_PREMIUM_FEE: i64 = 16_999;

/// Square footage recorded when a submission omits the field or sends
/// a non-positive value
pub const DEFAULT_SQFT: i64 = 800;

/// Amenities attached to every new listing
/// The submission form does not collect amenities yet
pub const DEFAULT_AMENITIES: [&str; 2] = ["Gym", "Security"];

/// Stock photograph served for every listing card
/// Submissions carry photo filenames only, never image bytes
pub const STOCK_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1502672260266-1c1ef2d93688?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80";

/// Number of live listings surfaced on the home page
pub const FEATURED_LISTING_COUNT: usize = 3;

/// Sentinel filter value that disables a criterion
pub const FILTER_ALL: &str = "All";

// =============================================================================
// Returning-user profile
// =============================================================================
// The login form performs no account lookup; every login signs in this
// canned profile under the requested role.

pub const RETURNING_USER_NAME: &str = "Returning User";

pub const RETURNING_USER_PHONE: &str = "+91 98765 43210";

pub const RETURNING_USER_EMAIL: &str = "user@example.com";

// =============================================================================
// Error Messages
// =============================================================================

/// Error message for a submission without a video walkthrough
pub const ERR_VIDEO_REQUIRED: &str = "A video walkthrough is mandatory for listing.";

/// Error message for a submission without photos
pub const ERR_PHOTOS_REQUIRED: &str = "Please upload property photos.";

/// Error message for a BHK value outside the supported range
pub const ERR_INVALID_BHK: &str = "BHK must be a number between 1 and 4";

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{
    DEFAULT_AMENITIES, DEFAULT_SQFT, ERR_INVALID_BHK, ERR_PHOTOS_REQUIRED, ERR_VIDEO_REQUIRED,
    FILTER_ALL, STOCK_IMAGE_URL,
};
use crate::error::{AppError, Result};
use crate::token;

/// Kind of rental unit a listing offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyType {
    Apartment,
    #[serde(rename = "Independent House")]
    IndependentHouse,
    Villa,
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyType::Apartment => write!(f, "Apartment"),
            PropertyType::IndependentHouse => write!(f, "Independent House"),
            PropertyType::Villa => write!(f, "Villa"),
        }
    }
}

/// A rental listing
///
/// Everything except the owner-entered basics is derived at submission
/// time: title, bathroom count, the stock photograph and the flat
/// amenity list. Listings sit in the pending queue until moderation
/// approves them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    /// Listing ID (64 hex characters)
    pub id: String,
    /// Derived headline, e.g. "2 BHK Apartment in Indiranagar"
    pub title: String,
    /// Locality and city joined for display
    pub location: String,
    pub city: String,
    /// Monthly rent in rupees
    pub rent: i64,
    /// Bedroom count (1-4)
    pub bhk: u8,
    /// Derived as half the bedrooms, rounded up
    pub bathrooms: u8,
    pub sqft: i64,
    /// Stock photo URL; uploads never leave the owner's machine
    pub image: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub amenities: Vec<String>,
    /// Walkthrough video filename as submitted
    pub video: String,
    /// Day/month/year the submission arrived
    #[serde(rename = "submittedOn")]
    pub submitted_on: String,
}

/// Owner-submitted listing form
///
/// `bhk` arrives as a string because the form sends its select value
/// verbatim; it is coerced and range-checked here. Photos and video are
/// filenames only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitPropertyRequest {
    #[serde(rename = "propertyType")]
    pub property_type: PropertyType,
    pub city: String,
    pub locality: String,
    pub bhk: String,
    pub rent: i64,
    pub sqft: Option<i64>,
    /// Free-text pitch; captured but not persisted on the listing
    pub description: Option<String>,
    pub video: String,
    pub photos: Vec<String>,
    #[serde(rename = "ownerName")]
    pub owner_name: String,
    #[serde(rename = "ownerPhone")]
    pub owner_phone: String,
    #[serde(rename = "ownerEmail")]
    pub owner_email: String,
}

impl Property {
    /// Build a pending listing from a submission.
    ///
    /// Checks the two hard requirements (video walkthrough, at least one
    /// photo) and coerces the BHK string; everything else is taken as
    /// sent. The title falls back to the city when the locality is blank.
    pub fn from_submission(request: &SubmitPropertyRequest) -> Result<Self> {
        if request.video.trim().is_empty() {
            return Err(AppError::InvalidInput(ERR_VIDEO_REQUIRED.to_string()));
        }
        if request.photos.is_empty() {
            return Err(AppError::InvalidInput(ERR_PHOTOS_REQUIRED.to_string()));
        }

        let bhk: u8 = request
            .bhk
            .trim()
            .parse()
            .map_err(|_| AppError::InvalidInput(ERR_INVALID_BHK.to_string()))?;
        if !(1..=4).contains(&bhk) {
            return Err(AppError::InvalidInput(ERR_INVALID_BHK.to_string()));
        }

        let locality = request.locality.trim();
        let city = request.city.trim();
        let title_place = if locality.is_empty() { city } else { locality };

        Ok(Self {
            id: token::fresh_id(),
            title: format!("{} BHK {} in {}", bhk, request.property_type, title_place),
            location: format!("{}, {}", locality, city),
            city: city.to_string(),
            rent: request.rent,
            bhk,
            bathrooms: bhk.div_ceil(2),
            sqft: request.sqft.filter(|&s| s > 0).unwrap_or(DEFAULT_SQFT),
            image: STOCK_IMAGE_URL.to_string(),
            property_type: request.property_type,
            amenities: DEFAULT_AMENITIES.iter().map(|s| s.to_string()).collect(),
            video: request.video.clone(),
            submitted_on: Utc::now().format("%-d/%-m/%Y").to_string(),
        })
    }

    /// Detail-page pitch generated from the listing itself.
    /// Submitted descriptions are not stored, so this is all there is.
    pub fn description(&self) -> String {
        format!(
            "This stunning {} in {} offers modern living spaces and premium amenities. \
             Located centrally in {}, it provides easy access to transport hubs, schools, \
             and shopping centers. Perfect for families or working professionals looking \
             for a hassle-free stay.",
            self.property_type, self.city, self.location
        )
    }
}

/// Browse filter, both fields optional with the `All` sentinel
#[derive(Debug, Clone, Deserialize)]
pub struct ListingFilter {
    #[serde(default = "default_filter")]
    pub city: String,
    #[serde(default = "default_filter")]
    pub bhk: String,
}

fn default_filter() -> String {
    FILTER_ALL.to_string()
}

impl ListingFilter {
    /// City matches by exact equality, BHK by exact numeric equality.
    /// A BHK value that fails to parse matches no listing at all.
    pub fn matches(&self, property: &Property) -> bool {
        let city_ok = self.city == FILTER_ALL || property.city == self.city;
        let bhk_ok = self.bhk == FILTER_ALL
            || self
                .bhk
                .parse::<u8>()
                .map_or(false, |wanted| property.bhk == wanted);
        city_ok && bhk_ok
    }
}

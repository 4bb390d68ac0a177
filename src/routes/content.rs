//! Marketing content endpoints.
//!
//! The landing pages render from these payloads. Copy lives here
//! verbatim rather than in a CMS; the only dynamic part is hiding a
//! role's sections from the other role, mirroring how the pages
//! compose per session.

use axum::{extract::Query, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::constants::{BROKERAGE_PREMIUM_FEE, BROKERAGE_STANDARD_FEE};
use crate::models::{format_inr, Role};

#[derive(Debug, Deserialize)]
pub struct ContentQuery {
    pub role: Option<Role>,
}

impl ContentQuery {
    /// A role's section shows unless the caller claims the other role
    fn wants(&self, role: Role) -> bool {
        self.role.map_or(true, |claimed| claimed == role)
    }
}

/// Fixed brokerage tiers
pub async fn brokerage_info() -> Json<Value> {
    Json(json!({
        "heading": "Transparent Fixed Brokerage",
        "subheading": "Pay only when the deal is finalized.",
        "tiers": [
            {
                "label": "Rent below ₹50,000",
                "fee": BROKERAGE_STANDARD_FEE,
                "feeDisplay": format_inr(BROKERAGE_STANDARD_FEE),
                "note": "One-time brokerage upon finalization."
            },
            {
                "label": "Rent above ₹50,000",
                "fee": BROKERAGE_PREMIUM_FEE,
                "feeDisplay": format_inr(BROKERAGE_PREMIUM_FEE),
                "note": "One-time brokerage upon finalization."
            }
        ]
    }))
}

/// Process explainer, filtered by claimed role
pub async fn how_it_works(Query(params): Query<ContentQuery>) -> Json<Value> {
    let mut body = json!({
        "heading": "How It Works",
        "subheading": "A streamlined process for Renters and Owners.",
    });

    if params.wants(Role::Buyer) {
        body["renters"] = json!({
            "heading": "For Renters (Buyers)",
            "body": "Your consultation call locks your actual requirements: locality, budget, layout, non-negotiables. This removes pointless site visits. Photos and video tours are available upfront so you screen houses without wasting weekends. Only houses that match your criteria move forward. You pay a flat, low brokerage—never one month’s rent, never percentage cuts."
        });
    }
    if params.wants(Role::Seller) {
        body["owners"] = json!({
            "heading": "For Owners (Sellers)",
            "body": "Your consultation call fixes what you expect: rent range, tenant profile, restrictions, and non-negotiables. You don’t deal with random tenants who don’t fit. Only aligned, pre-screened renters reach you. No/ Zero brokerage for renting the house. Just list it for free and we will do the rest."
        });
    }

    Json(body)
}

/// Benefit lists, filtered by claimed role
pub async fn benefits(Query(params): Query<ContentQuery>) -> Json<Value> {
    let mut body = json!({
        "heading": "Why Choose FlatConnectio?",
        "subheading": "Real benefits over the traditional model.",
    });

    if params.wants(Role::Buyer) {
        body["renters"] = json!({
            "heading": "Benefits for Renters",
            "items": [
                "You reduce your cost of moving.",
                "You pay very low brokerage.",
                "You stop wasting weekends on irrelevant houses and spend time earning more money and have good time with your loved ones.",
                "You keep more money for setting up the home you want.",
                "You avoid decision fatigue created by mismatched rentals."
            ]
        });
    }
    if params.wants(Role::Seller) {
        body["owners"] = json!({
            "heading": "Benefits for Owners",
            "items": [
                "You avoid random tenants who don’t meet your expectations.",
                "You spend zero time screening.",
                "You reduce vacancy periods by meeting aligned tenants faster.",
                "No brokerage for selling the house i.e. completely free."
            ]
        });
    }

    Json(body)
}

/// Frequently asked questions, same list for everyone
pub async fn faq() -> Json<Value> {
    Json(json!({
        "heading": "Frequently Asked Questions",
        "subheading": "Everything you need to know about our low brokerage model.",
        "faqs": [
            {
                "question": "How can I rent a house without paying one month’s rent as brokerage?",
                "answer": "By choosing a flat-brokerage model that charges a fixed, significantly lower brokerage instead of one month’s rent or percentage-based cuts."
            },
            {
                "question": "What is flat brokerage for renting a house?",
                "answer": "A fixed brokerage amount that does not increase with the property’s rent value. It stays predictable and much lower than traditional brokerage."
            },
            {
                "question": "How does flat brokerage help me save money?",
                "answer": "You avoid paying a full month’s rent or a percentage of the rent. The savings are available for furnishing, upgrades, or shifting expenses."
            },
            {
                "question": "How does requirement-locking save time when renting a house?",
                "answer": "Requirements are captured once and used to filter out irrelevant houses, eliminating wasted site visits."
            },
            {
                "question": "Can I find a house for rent faster with flat brokerage?",
                "answer": "Yes. Pre-filtered matches eliminate noise, repeat briefings, and irrelevant listings, allowing you to reach the right house faster."
            },
            {
                "question": "Is this suitable for owners looking to rent out their property?",
                "answer": "Yes. Owners meet only pre-aligned tenants and avoid unnecessary screening and delays."
            }
        ]
    }))
}

/// schema.org JSON-LD block the pages embed for search engines
pub async fn seo_metadata() -> Json<Value> {
    Json(json!({
        "@context": "https://schema.org",
        "@type": "RealEstateAgent",
        "name": "FlatConnectio",
        "description": "Very low, flat brokerage. Rent a house without paying one month's rent as brokerage.",
        "priceRange": "₹12,499 - ₹16,999",
        "address": {
            "@type": "PostalAddress",
            "addressCountry": "IN"
        },
        "makesOffer": {
            "@type": "Offer",
            "itemOffered": {
                "@type": "Service",
                "name": "Flat Rental Brokerage"
            },
            "priceSpecification": {
                "@type": "PriceSpecification",
                "price": "12499",
                "priceCurrency": "INR",
                "description": "Fixed brokerage for rents below 50k"
            }
        }
    }))
}

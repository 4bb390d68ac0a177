//! Hosted lead-table client.
//!
//! Lead rows land in a hosted Postgres exposed over a PostgREST-style
//! HTTP API. The publishable key travels as both the `apikey` header
//! and a bearer token on every request.

use serde_json::Value;
use std::time::Duration;

use crate::models::{LeadRow, Role};

/// Request timeout for hosted table calls
const HOSTED_TIMEOUT: Duration = Duration::from_secs(10);

/// Which hosted table a lead row lands in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadTable {
    Buyers,
    Sellers,
}

impl LeadTable {
    pub fn name(&self) -> &'static str {
        match self {
            LeadTable::Buyers => "buyers",
            LeadTable::Sellers => "sellers",
        }
    }

    /// Buyers sign up to rent, sellers to list
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Buyer => LeadTable::Buyers,
            Role::Seller => LeadTable::Sellers,
        }
    }
}

/// HTTP client for the hosted table endpoints
#[derive(Clone)]
pub struct HostedTableClient {
    http: reqwest::Client,
    rest_url: String,
    api_key: String,
}

impl HostedTableClient {
    /// Build a client rooted at `{base}/rest/v1`
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(HOSTED_TIMEOUT).build()?;

        Ok(Self {
            http,
            rest_url: format!("{}/rest/v1", base_url.trim_end_matches('/')),
            api_key: api_key.to_string(),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{}", self.rest_url, table)
    }

    /// Insert one lead row. The caller decides whether to await or detach.
    pub async fn insert_lead(&self, table: LeadTable, row: &LeadRow) -> Result<(), reqwest::Error> {
        self.http
            .post(self.table_url(table.name()))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=minimal")
            .json(row)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }

    /// Fetch every row of the buyers table (`select=*`)
    pub async fn list_buyers(&self) -> Result<Vec<Value>, reqwest::Error> {
        let rows = self
            .http
            .get(self.table_url(LeadTable::Buyers.name()))
            .query(&[("select", "*")])
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(rows)
    }
}

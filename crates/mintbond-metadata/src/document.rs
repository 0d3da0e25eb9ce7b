//! Token metadata documents.
//!
//! The ERC-721-style JSON document an external minting collaborator
//! expects: `name`, `description`, `image` and a list of
//! `{trait_type, value}` attributes. Field names are part of the wire
//! format and must serialize exactly as written here.

use serde::{Deserialize, Serialize};

use mintbond_core::types::{BondMetrics, BondSpec, MarketObservation};

use crate::error::MetadataResult;
use crate::formatting::{format_dollars, format_percent};

/// Default token image, pinned on IPFS.
pub const DEFAULT_IMAGE_URI: &str =
    "https://ipfs.io/ipfs/QmV7V5qYUQYNFvQDtz8xafrd2pSSsVP5xkPSCdMAsXbrBT";

/// An attribute value: either a single string or a list of strings
/// (used for the payment schedule).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Single display value
    Text(String),
    /// Ordered list of display values
    List(Vec<String>),
}

/// A single metadata attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Attribute name shown by marketplaces
    pub trait_type: String,
    /// Attribute value
    pub value: AttributeValue,
}

impl Attribute {
    /// Creates a single-valued attribute.
    #[must_use]
    pub fn text(trait_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            trait_type: trait_type.into(),
            value: AttributeValue::Text(value.into()),
        }
    }

    /// Creates a list-valued attribute.
    #[must_use]
    pub fn list(trait_type: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            trait_type: trait_type.into(),
            value: AttributeValue::List(values),
        }
    }
}

/// Token metadata document for a valued bond.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    /// Token display name
    pub name: String,
    /// Token description
    pub description: String,
    /// Image URI
    pub image: String,
    /// Display attributes
    pub attributes: Vec<Attribute>,
}

impl TokenMetadata {
    /// Builds the metadata document for a valued bond.
    ///
    /// Value formats follow the established document conventions:
    /// schedule dates as `MM/DD/YYYY`, yield as a two-decimal
    /// percentage, DV01 as dollars per basis point (the stored value
    /// scaled by 10 000), convexity to two decimals.
    #[must_use]
    pub fn for_bond(
        spec: &BondSpec,
        observation: &MarketObservation,
        metrics: &BondMetrics,
    ) -> Self {
        let coupon = spec.coupon_rate_percent().normalize();
        let years = spec.years_to_maturity();

        let schedule: Vec<String> = metrics
            .payment_schedule
            .iter()
            .map(|d| d.format_mdy())
            .collect();

        Self {
            name: format!("{coupon}% {years} year Bond"),
            description: format!(
                "ETH {coupon}% Coupon, {years} year Maturity Annual Coupon Fixed Income Bond"
            ),
            image: DEFAULT_IMAGE_URI.to_string(),
            attributes: vec![
                Attribute::list("Payment Schedule", schedule),
                Attribute::text("Generated Price", observation.price().to_string()),
                Attribute::text(
                    "Yield to Maturity",
                    format_percent(metrics.yield_to_maturity),
                ),
                Attribute::text("DV01", format_dollars(metrics.dv01_dollars())),
                Attribute::text("Convexity", format!("{:.2}", metrics.convexity)),
            ],
        }
    }

    /// Replaces the image URI.
    #[must_use]
    pub fn with_image(mut self, uri: impl Into<String>) -> Self {
        self.image = uri.into();
        self
    }

    /// Serializes the document to a JSON string.
    pub fn to_json(&self) -> MetadataResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

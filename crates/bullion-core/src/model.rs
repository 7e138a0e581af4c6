//! Domain and wire types shared by the controller, fetchers and renderers.
//!
//! Field names follow the backend's JSON exactly, so these types are both the
//! in-memory model and the request/response bodies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unit a bar's weight is expressed in.
///
/// Units the site does not know are kept as sent and printed verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightUnit {
    /// Metric gram.
    #[serde(rename = "gram", alias = "g", alias = "grams")]
    Gram,
    /// Metric kilogram.
    #[serde(rename = "kilogram", alias = "kg", alias = "kilograms")]
    Kilogram,
    /// Troy ounce (31.1034768 g).
    #[serde(
        rename = "troy oz",
        alias = "troy-ounce",
        alias = "troy_ounce",
        alias = "oz"
    )]
    TroyOunce,
    #[serde(untagged)]
    Other(String),
}

impl WeightUnit {
    /// Label as printed on product cards.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Gram => "gram",
            Self::Kilogram => "kilogram",
            Self::TroyOunce => "troy oz",
            Self::Other(unit) => unit,
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Magnitude plus unit. The magnitude is kept as the backend sends it
/// (`"1"`, `"400"`) so nothing is lost to float formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weight {
    #[serde(rename = "weight")]
    pub magnitude: String,
    #[serde(rename = "weight_unit")]
    pub unit: WeightUnit,
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.magnitude, self.unit)
    }
}

/// A bar offered by the brokerage. Never mutated after it is received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub weight: Weight,
    /// Fineness as a string, e.g. `"999.9"` or `"995.0+"`.
    pub purity: String,
    pub certification: String,
    pub description: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// `GET /api/products` response body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductList {
    pub products: Vec<Product>,
}

/// `GET /api/spot-price` response body. Only the gold quote is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpotPrice {
    /// USD per troy ounce.
    pub gold_price_usd: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub silver_price_usd: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl SpotPrice {
    /// Gold quote formatted for display, e.g. `$2,650.50`.
    #[must_use]
    pub fn gold_display(&self) -> String {
        format_usd(self.gold_price_usd)
    }
}

/// Format a dollar amount with thousands separators and two decimals.
#[must_use]
pub fn format_usd(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

/// Editable field of the lead form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeadField {
    FullName,
    Email,
    Phone,
    Country,
    ConsultationMethod,
    Message,
}

impl LeadField {
    pub const ALL: [Self; 6] = [
        Self::FullName,
        Self::Email,
        Self::Phone,
        Self::Country,
        Self::ConsultationMethod,
        Self::Message,
    ];

    /// JSON / form-encoding name of the field.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FullName => "full_name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Country => "country",
            Self::ConsultationMethod => "consultation_method",
            Self::Message => "message",
        }
    }

    /// Whether the input surface must refuse an empty value.
    #[must_use]
    pub const fn is_required(self) -> bool {
        matches!(self, Self::FullName | Self::Email)
    }
}

impl FromStr for LeadField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| format!("unknown lead field '{s}'"))
    }
}

/// Consultation methods offered by the contact form, as `(value, label)`.
pub const CONSULTATION_METHODS: [(&str, &str); 4] = [
    ("phone", "Phone Call"),
    ("video", "Video Conference"),
    ("email", "Email"),
    ("in-person", "In-Person Meeting"),
];

/// The lead draft. An empty string means the visitor left the field blank.
///
/// Serializes to the exact body of `POST /api/leads`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub consultation_method: String,
    pub message: String,
}

impl LeadForm {
    #[must_use]
    pub fn get(&self, field: LeadField) -> &str {
        match field {
            LeadField::FullName => &self.full_name,
            LeadField::Email => &self.email,
            LeadField::Phone => &self.phone,
            LeadField::Country => &self.country,
            LeadField::ConsultationMethod => &self.consultation_method,
            LeadField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: LeadField, value: impl Into<String>) {
        let slot = match field {
            LeadField::FullName => &mut self.full_name,
            LeadField::Email => &mut self.email,
            LeadField::Phone => &mut self.phone,
            LeadField::Country => &mut self.country,
            LeadField::ConsultationMethod => &mut self.consultation_method,
            LeadField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// `true` when every field is blank.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Required fields that are blank (whitespace counts as blank).
    #[must_use]
    pub fn missing_required(&self) -> Vec<LeadField> {
        LeadField::ALL
            .into_iter()
            .filter(|f| f.is_required() && self.get(*f).trim().is_empty())
            .collect()
    }
}

/// `POST /api/leads` success body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadReceipt {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub message: String,
}

/// `GET /api/health` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub service: String,
}

/// Outcome of the most recent submission attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Success(String),
    Error(String),
}

impl SubmissionStatus {
    /// Text to show the visitor, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Success(msg) | Self::Error(msg) => Some(msg),
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

//! Raw session input: the typed record one prediction request starts from,
//! plus the console form that collects it from the operator.

mod form;

pub use form::SessionForm;

use serde::{Deserialize, Serialize};

/// Month labels the form offers. Jan and Apr are intentionally absent: the
/// training data holds no sessions for them, so the form never asks.
pub const MONTH_CHOICES: [&str; 10] = [
    "Feb", "Mar", "May", "June", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Categorical id ranges, all 1-based.
pub const TRAFFIC_TYPE_MAX: u8 = 20;
pub const REGION_MAX: u8 = 9;
pub const OPERATING_SYSTEM_MAX: u8 = 8;
pub const BROWSER_MAX: u8 = 13;

/// One visitor session as entered through the form. Numeric fields are
/// non-negative, rate fields stay within [0, 1]; the form enforces both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub administrative_pages: u32,
    pub administrative_duration: f64,
    pub informational_pages: u32,
    pub informational_duration: f64,
    pub product_related_pages: u32,
    pub product_related_duration: f64,
    pub bounce_rate: f64,
    pub exit_rate: f64,
    pub page_value: f64,
    pub special_day_proximity: f64,
    pub month: String,
    pub visitor_type: VisitorType,
    pub traffic_type: u8,
    pub region: u8,
    pub operating_system: u8,
    pub browser: u8,
    pub is_weekend: bool,
}

/// Visitor category. Serialized labels match the trained pipeline's
/// vocabulary byte for byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisitorType {
    #[serde(rename = "Returning_Visitor")]
    Returning,
    #[serde(rename = "New_Visitor")]
    New,
    #[serde(rename = "Other")]
    Other,
}

impl VisitorType {
    pub const ALL: [VisitorType; 3] = [VisitorType::Returning, VisitorType::New, VisitorType::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            VisitorType::Returning => "Returning_Visitor",
            VisitorType::New => "New_Visitor",
            VisitorType::Other => "Other",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == label)
    }
}

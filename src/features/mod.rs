//! Feature derivation: raw session record → the exact named-column vector the
//! trained pipeline consumes.

mod derive;

pub use derive::{derive, month_number};

use crate::session::SessionRecord;
use serde::Serialize;

/// Number of named columns the trained pipeline expects.
pub const COLUMN_COUNT: usize = 22;

/// Derived feature record: the raw session verbatim plus the engineered
/// fields. Built once per request by [`derive`], never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureRecord {
    pub session: SessionRecord,
    /// Calendar month 1-12; `None` when the label resolves through neither
    /// the alias table nor the canonical abbreviation table.
    pub month_number: Option<u32>,
    pub total_page_visits: u32,
    pub total_duration: f64,
    pub pages_per_minute: f64,
    pub product_engagement: f64,
}

/// One model input cell. The pipeline encodes categoricals itself, so string
/// columns cross the boundary as raw labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnValue<'a> {
    Int(i64),
    Float(f64),
    Text(&'a str),
}

impl FeatureRecord {
    /// Named columns in training order. Names must match the artifact's
    /// input names byte for byte; a missing month number becomes a NaN cell
    /// for the pipeline's imputer.
    pub fn columns(&self) -> [(&'static str, ColumnValue<'_>); COLUMN_COUNT] {
        let s = &self.session;
        let month_num = self
            .month_number
            .map(f64::from)
            .unwrap_or(f64::NAN);
        [
            ("Administrative", ColumnValue::Int(i64::from(s.administrative_pages))),
            ("Administrative_Duration", ColumnValue::Float(s.administrative_duration)),
            ("Informational", ColumnValue::Int(i64::from(s.informational_pages))),
            ("Informational_Duration", ColumnValue::Float(s.informational_duration)),
            ("ProductRelated", ColumnValue::Int(i64::from(s.product_related_pages))),
            ("ProductRelated_Duration", ColumnValue::Float(s.product_related_duration)),
            ("BounceRates", ColumnValue::Float(s.bounce_rate)),
            ("ExitRates", ColumnValue::Float(s.exit_rate)),
            ("PageValues", ColumnValue::Float(s.page_value)),
            ("SpecialDay", ColumnValue::Float(s.special_day_proximity)),
            ("Month", ColumnValue::Text(s.month.as_str())),
            ("OperatingSystems", ColumnValue::Int(i64::from(s.operating_system))),
            ("Browser", ColumnValue::Int(i64::from(s.browser))),
            ("Region", ColumnValue::Int(i64::from(s.region))),
            ("TrafficType", ColumnValue::Int(i64::from(s.traffic_type))),
            ("VisitorType", ColumnValue::Text(s.visitor_type.as_str())),
            ("Weekend", ColumnValue::Int(i64::from(s.is_weekend))),
            ("Month_Num", ColumnValue::Float(month_num)),
            ("TotalPageVisits", ColumnValue::Int(i64::from(self.total_page_visits))),
            ("TotalDuration", ColumnValue::Float(self.total_duration)),
            ("PagesPerMinute", ColumnValue::Float(self.pages_per_minute)),
            ("ProductEngagement", ColumnValue::Float(self.product_engagement)),
        ]
    }
}

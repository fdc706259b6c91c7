//! Turns the classifier's label and probability into the presented verdict.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    WillPurchase,
    WillNotPurchase,
}

impl Outcome {
    pub fn from_label(converts: bool) -> Self {
        if converts {
            Outcome::WillPurchase
        } else {
            Outcome::WillNotPurchase
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::WillPurchase => "will_purchase",
            Outcome::WillNotPurchase => "will_not_purchase",
        }
    }
}

/// Verdict for a single prediction request
#[derive(Debug, Clone, Serialize)]
pub struct Verdict {
    pub request_id: String,
    pub outcome: Outcome,
    /// Probability of the positive (purchase) class, whatever the outcome.
    pub probability: f32,
    pub ts: DateTime<Utc>,
}

impl Verdict {
    pub fn new(converts: bool, probability: f32) -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
            outcome: Outcome::from_label(converts),
            probability,
            ts: Utc::now(),
        }
    }

    /// Probability as a percentage with one decimal place, e.g. "87.3%".
    pub fn probability_percent(&self) -> String {
        format!("{:.1}%", self.probability * 100.0)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Outcome::WillPurchase => write!(
                f,
                "Prediction: the visitor WILL purchase.\nThe model is {} confident in this prediction.",
                self.probability_percent()
            ),
            Outcome::WillNotPurchase => write!(
                f,
                "Prediction: the visitor will NOT purchase.\nThe computed purchase probability is only {}.",
                self.probability_percent()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probability_renders_to_one_decimal() {
        let v = Verdict::new(true, 0.873);
        assert_eq!(v.probability_percent(), "87.3%");
        let v = Verdict::new(false, 0.0449);
        assert_eq!(v.probability_percent(), "4.5%");
    }

    #[test]
    fn display_matches_outcome() {
        let yes = Verdict::new(true, 0.9);
        assert!(yes.to_string().contains("WILL purchase"));
        assert!(yes.to_string().contains("90.0%"));

        let no = Verdict::new(false, 0.123);
        assert!(no.to_string().contains("will NOT purchase"));
        assert!(no.to_string().contains("12.3%"));
    }

    #[test]
    fn negative_verdict_still_reports_purchase_probability() {
        let v = Verdict::new(false, 0.4);
        assert_eq!(v.outcome, Outcome::WillNotPurchase);
        assert_eq!(v.probability, 0.4);
    }
}

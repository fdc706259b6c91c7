//! Classifier boundary: the trained conversion model consumed as an opaque
//! artifact behind a trait, so the request path never touches ONNX directly.

mod onnx;

pub use onnx::OnnxClassifier;

use crate::features::FeatureRecord;
use std::fmt;
use std::path::PathBuf;

/// Binary conversion classifier. Implementations are read-only after
/// construction and deterministic for a given artifact and feature record.
pub trait Classifier {
    /// Binary label: does the model predict a purchase?
    fn classify(&self, features: &FeatureRecord) -> Result<bool, ClassifierError>;
    /// Probability of the positive (purchase) class, in [0, 1].
    fn score(&self, features: &FeatureRecord) -> Result<f32, ClassifierError>;
}

#[derive(Debug)]
pub enum ClassifierError {
    /// No artifact file at the configured path. Fatal at startup.
    ArtifactMissing(PathBuf),
    /// The artifact exists but a session could not be built from it.
    Artifact(String),
    /// The graph ran but an input or output misbehaved.
    Inference(String),
}

impl fmt::Display for ClassifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifierError::ArtifactMissing(path) => {
                write!(f, "model artifact not found at {}", path.display())
            }
            ClassifierError::Artifact(why) => write!(f, "model artifact unusable: {}", why),
            ClassifierError::Inference(why) => write!(f, "inference failed: {}", why),
        }
    }
}

impl std::error::Error for ClassifierError {}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedClassifier {
        label: bool,
        probability: f32,
    }

    impl Classifier for FixedClassifier {
        fn classify(&self, _features: &FeatureRecord) -> Result<bool, ClassifierError> {
            Ok(self.label)
        }

        fn score(&self, _features: &FeatureRecord) -> Result<f32, ClassifierError> {
            Ok(self.probability)
        }
    }

    #[test]
    fn trait_objects_work_as_injected_dependency() {
        let stub = FixedClassifier { label: true, probability: 0.9 };
        let classifier: &dyn Classifier = &stub;
        let record = crate::features::derive(crate::session::SessionRecord {
            administrative_pages: 0,
            administrative_duration: 0.0,
            informational_pages: 0,
            informational_duration: 0.0,
            product_related_pages: 1,
            product_related_duration: 60.0,
            bounce_rate: 0.02,
            exit_rate: 0.04,
            page_value: 0.0,
            special_day_proximity: 0.0,
            month: "Nov".to_string(),
            visitor_type: crate::session::VisitorType::Returning,
            traffic_type: 1,
            region: 1,
            operating_system: 1,
            browser: 1,
            is_weekend: false,
        });
        assert!(classifier.classify(&record).unwrap());
        assert_eq!(classifier.score(&record).unwrap(), 0.9);
    }

    #[test]
    fn missing_artifact_error_names_the_path() {
        let err = ClassifierError::ArtifactMissing(PathBuf::from("conversion_pipeline.onnx"));
        assert!(err.to_string().contains("conversion_pipeline.onnx"));
    }
}

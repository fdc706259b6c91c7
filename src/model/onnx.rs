//! ONNX-backed classifier over the exported conversion pipeline.
//! Inputs: one [1, 1] cell per named column (int64 / float32 / string); the
//! artifact does its own categorical encoding and imputation. Outputs, in
//! artifact order: predicted label (int64) and class probabilities
//! (float32 [1, 2], positive class second).

use super::{Classifier, ClassifierError};
use crate::features::{ColumnValue, FeatureRecord, COLUMN_COUNT};
use ndarray::Array2;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug)]
pub struct OnnxClassifier {
    session: ort::Session,
    label_output: String,
    probability_output: String,
}

impl OnnxClassifier {
    /// Load the artifact once at startup. A missing or unreadable file is
    /// fatal: nothing can be predicted without the trained pipeline.
    pub fn load(path: &Path) -> Result<Self, ClassifierError> {
        if !path.exists() {
            return Err(ClassifierError::ArtifactMissing(path.to_path_buf()));
        }

        let session = ort::Session::builder()
            .and_then(|builder| builder.commit_from_file(path))
            .map_err(|e| ClassifierError::Artifact(e.to_string()))?;

        if session.inputs.len() != COLUMN_COUNT {
            warn!(
                expected = COLUMN_COUNT,
                found = session.inputs.len(),
                "artifact input count differs from the derived column schema"
            );
        }

        let label_output = session
            .outputs
            .first()
            .map(|o| o.name.clone())
            .unwrap_or_else(|| "label".to_string());
        let probability_output = session
            .outputs
            .get(1)
            .map(|o| o.name.clone())
            .unwrap_or_else(|| "probabilities".to_string());
        debug!(path = %path.display(), %label_output, %probability_output, "artifact loaded");

        Ok(Self {
            session,
            label_output,
            probability_output,
        })
    }

    fn build_inputs(
        &self,
        features: &FeatureRecord,
    ) -> Result<Vec<(&'static str, ort::Value)>, ClassifierError> {
        let mut inputs = Vec::with_capacity(COLUMN_COUNT);
        for (name, cell) in features.columns() {
            let value = match cell {
                ColumnValue::Int(v) => {
                    ort::Value::from_array(Array2::from_elem((1, 1), v).into_dyn()).map(|t| t.into_dyn())
                }
                ColumnValue::Float(v) => {
                    ort::Value::from_array(Array2::from_elem((1, 1), v as f32).into_dyn()).map(|t| t.into_dyn())
                }
                ColumnValue::Text(s) => {
                    ort::Value::from_string_array(Array2::from_elem((1, 1), s.to_string()).into_dyn()).map(|t| t.into_dyn())
                }
            }
            .map_err(|e| ClassifierError::Inference(format!("column {}: {}", name, e)))?;
            inputs.push((name, value));
        }
        Ok(inputs)
    }
}

impl Classifier for OnnxClassifier {
    fn classify(&self, features: &FeatureRecord) -> Result<bool, ClassifierError> {
        let inputs = self.build_inputs(features)?;
        let outputs = self
            .session
            .run(inputs)
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;
        let value = outputs.get(self.label_output.as_str()).ok_or_else(|| {
            ClassifierError::Inference(format!("artifact has no {} output", self.label_output))
        })?;
        let (_, data) = value
            .try_extract_raw_tensor::<i64>()
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;
        let label = data
            .first()
            .copied()
            .ok_or_else(|| ClassifierError::Inference("empty label tensor".to_string()))?;
        Ok(label != 0)
    }

    fn score(&self, features: &FeatureRecord) -> Result<f32, ClassifierError> {
        let inputs = self.build_inputs(features)?;
        let outputs = self
            .session
            .run(inputs)
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;
        let value = outputs.get(self.probability_output.as_str()).ok_or_else(|| {
            ClassifierError::Inference(format!("artifact has no {} output", self.probability_output))
        })?;
        let (_, data) = value
            .try_extract_raw_tensor::<f32>()
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;
        // Row layout is [p(no purchase), p(purchase)].
        let positive = data.get(1).copied().ok_or_else(|| {
            ClassifierError::Inference("probability tensor has no positive-class column".to_string())
        })?;
        Ok(positive.clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_artifact_fails_fast() {
        let err = OnnxClassifier::load(Path::new("nonexistent.onnx")).unwrap_err();
        match err {
            ClassifierError::ArtifactMissing(path) => {
                assert_eq!(path, Path::new("nonexistent.onnx"));
            }
            other => panic!("expected ArtifactMissing, got {:?}", other),
        }
    }
}

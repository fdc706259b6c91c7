//! Request-path benchmark: derive + classify + score through the injected
//! classifier seam (deterministic stub, no artifact needed).

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use convpredict::features::{derive, FeatureRecord};
use convpredict::model::{Classifier, ClassifierError};
use convpredict::session::{SessionRecord, VisitorType};
use convpredict::verdict::Verdict;

struct FixedClassifier {
    probability: f32,
}

impl Classifier for FixedClassifier {
    fn classify(&self, _features: &FeatureRecord) -> Result<bool, ClassifierError> {
        Ok(self.probability >= 0.5)
    }

    fn score(&self, _features: &FeatureRecord) -> Result<f32, ClassifierError> {
        Ok(self.probability)
    }
}

fn make_session() -> SessionRecord {
    SessionRecord {
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
        visitor_type: VisitorType::Returning,
        traffic_type: 1,
        region: 1,
        operating_system: 1,
        browser: 1,
        is_weekend: false,
    }
}

fn bench_request_path(c: &mut Criterion) {
    let classifier: &dyn Classifier = &FixedClassifier { probability: 0.87 };

    c.bench_function("derive_classify_score", |b| {
        b.iter(|| {
            let features = derive(black_box(make_session()));
            let converts = classifier.classify(&features).unwrap();
            let probability = classifier.score(&features).unwrap();
            black_box(Verdict::new(converts, probability))
        })
    });
}

criterion_group!(benches, bench_request_path);
criterion_main!(benches);

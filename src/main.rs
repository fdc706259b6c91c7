//! convpredict entrypoint: load the trained artifact (fatal if absent), then
//! loop the console form — collect a session, derive features, classify,
//! present the verdict.

use convpredict::{
    config::AppConfig,
    features,
    logging::{PredictionLog, StructuredLogger},
    model::{Classifier, ClassifierError, OnnxClassifier},
    session::SessionForm,
    verdict::Verdict,
};
use std::io::{self, BufRead, Write};
use tracing::info;

/// One prediction request end to end. `Ok(None)` means the operator closed
/// the input stream mid-form.
fn run_one_request<R: BufRead, W: Write>(
    form: &mut SessionForm<R, W>,
    classifier: &dyn Classifier,
) -> Result<Option<Verdict>, Box<dyn std::error::Error + Send + Sync>> {
    let record = match form.collect() {
        Ok(r) => r,
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let features = features::derive(record);
    let converts = classifier.classify(&features)?;
    let probability = classifier.score(&features)?;
    let verdict = Verdict::new(converts, probability);

    info!(
        request_id = %verdict.request_id,
        outcome = verdict.outcome.as_str(),
        probability,
        month_number = ?features.month_number,
        total_page_visits = features.total_page_visits,
        "prediction"
    );
    Ok(Some(verdict))
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config_path = std::env::var("CONVPREDICT_CONFIG_PATH")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| std::path::PathBuf::from("config.json"));
    let config = AppConfig::load(&config_path);

    StructuredLogger::init(config.log.json, &config.log.level);

    info!(model_path = ?config.model_path, "conversion predictor starting");

    let classifier = match OnnxClassifier::load(&config.model_path) {
        Ok(c) => c,
        Err(e @ ClassifierError::ArtifactMissing(_)) => {
            eprintln!(
                "ERROR: {}. Place the trained pipeline there or point model_path elsewhere in {}.",
                e,
                config_path.display()
            );
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    let stdin = io::stdin();
    let mut form = SessionForm::new(stdin.lock(), io::stdout());

    loop {
        let Some(verdict) = run_one_request(&mut form, &classifier)? else {
            info!("input closed, stopping");
            break;
        };

        println!("\n{}\n", verdict);
        if config.log.json {
            StructuredLogger::emit_json(
                &PredictionLog::from_verdict(&verdict),
                &mut io::stderr().lock(),
            );
        }

        if !config.form.repeat || !form.confirm("Score another session?", false)? {
            break;
        }
    }

    info!("conversion predictor stopping");
    Ok(())
}

use std::collections::HashSet;

use serde::Serialize;
use serde_json::json;

use crate::cli::utils::{output_error, output_success};
use crate::cli::OutputFormat;
use crate::config::AppConfig;
use crate::store::TalkerStore;
use crate::types::Talker;
use crate::validation::talker_pipeline;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Problem {
    pub id: i64,
    pub message: String,
}

/// Records the talker pipeline would reject, plus ids that appear more than once
pub fn find_problems(talkers: &[Talker]) -> anyhow::Result<Vec<Problem>> {
    let pipeline = talker_pipeline();
    let mut problems = Vec::new();
    let mut seen = HashSet::new();

    for talker in talkers {
        if talker.id < 1 {
            problems.push(Problem { id: talker.id, message: "id deve ser positivo".to_string() });
        }
        if !seen.insert(talker.id) {
            problems.push(Problem { id: talker.id, message: "id duplicado".to_string() });
        }
        if let Err(err) = pipeline.run(&serde_json::to_value(talker)?) {
            problems.push(Problem { id: talker.id, message: err.message });
        }
    }

    Ok(problems)
}

pub async fn handle(config: &AppConfig, output_format: &OutputFormat) -> anyhow::Result<i32> {
    let store = TalkerStore::new(config.storage.talker_file.clone());
    let talkers = store.load().await?;
    let problems = find_problems(&talkers)?;

    if problems.is_empty() {
        output_success(
            output_format,
            &format!("{} talkers checked, no problems found", talkers.len()),
            Some(json!({ "checked": talkers.len() })),
        )?;
        return Ok(0);
    }

    if let OutputFormat::Text = output_format {
        for problem in &problems {
            eprintln!("#{}: {}", problem.id, problem.message);
        }
    }
    output_error(
        output_format,
        &format!("{} problem(s) in {}", problems.len(), store.path().display()),
        Some(serde_json::to_value(&problems)?),
    )?;
    Ok(1)
}

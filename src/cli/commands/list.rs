use crate::cli::utils::output_talkers;
use crate::cli::OutputFormat;
use crate::config::AppConfig;
use crate::store::TalkerStore;

pub async fn handle(config: &AppConfig, output_format: &OutputFormat) -> anyhow::Result<i32> {
    let store = TalkerStore::new(config.storage.talker_file.clone());
    let talkers = store.load().await?;

    output_talkers(output_format, &talkers)?;
    Ok(0)
}

use serde_json::{json, Value};

use crate::cli::OutputFormat;
use crate::types::Talker;

/// Output a success message in the appropriate format
pub fn output_success(
    output_format: &OutputFormat,
    message: &str,
    data: Option<Value>,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": true,
                "message": message
            });

            if let Some(Value::Object(fields)) = data {
                if let Some(obj) = response.as_object_mut() {
                    obj.extend(fields);
                }
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

/// Output an error message in the appropriate format
pub fn output_error(
    output_format: &OutputFormat,
    message: &str,
    details: Option<Value>,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": false,
                "error": message
            });

            if let Some(details) = details {
                response["details"] = details;
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            eprintln!("Error: {}", message);
        }
    }
    Ok(())
}

/// One line per talker in text mode, the raw array in JSON mode
pub fn output_talkers(output_format: &OutputFormat, talkers: &[Talker]) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(talkers)?);
        }
        OutputFormat::Text => {
            if talkers.is_empty() {
                println!("No talkers stored");
            }
            for talker in talkers {
                println!("{}", format_talker(talker));
            }
        }
    }
    Ok(())
}

pub fn format_talker(talker: &Talker) -> String {
    format!(
        "#{} {} ({} anos) - assistido em {}, nota {}",
        talker.id, talker.name, talker.age, talker.talk.watched_at, talker.talk.rate
    )
}

use serde_json::json;

use crate::cli::utils::output_success;
use crate::cli::OutputFormat;
use crate::token::generate_token;

pub fn handle(length: usize, output_format: &OutputFormat) -> anyhow::Result<i32> {
    let token = generate_token(length);

    match output_format {
        OutputFormat::Text => println!("{}", token),
        OutputFormat::Json => output_success(output_format, "Token generated", Some(json!({ "token": token })))?,
    }
    Ok(0)
}

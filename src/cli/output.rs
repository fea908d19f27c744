//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, TextprepArgs};
use crate::error::Result;

/// Result of running a pipeline over an input file.
#[derive(Debug, Serialize, Deserialize)]
pub struct RunResult {
    /// One vectorizer string per input record, in input order.
    pub documents: Vec<String>,
    pub has_tokenizer: bool,
    pub duration_ms: u64,
}

/// Description of a configured pipeline.
#[derive(Debug, Serialize, Deserialize)]
pub struct PipelineSummary {
    pub steps: Vec<String>,
    pub has_tokenizer: bool,
    pub parallel: bool,
}

fn to_json<T: Serialize>(result: &T, args: &TextprepArgs) -> Result<String> {
    Ok(if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    })
}

/// Write processed records in the requested format.
///
/// The human format writes one record per line, exactly as handed to the
/// vectorizer.
pub fn output_run_result<W: Write>(
    writer: &mut W,
    result: &RunResult,
    args: &TextprepArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            for document in &result.documents {
                writeln!(writer, "{document}")?;
            }
        }
        OutputFormat::Json => writeln!(writer, "{}", to_json(result, args)?)?,
    }
    Ok(())
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &TextprepArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => {
            println!("{}", to_json(result, args)?);
            Ok(())
        }
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &TextprepArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    if let Some(obj) = value.as_object() {
        for (key, value) in obj {
            match value {
                serde_json::Value::Array(items) => {
                    println!("{key}:");
                    for (i, item) in items.iter().enumerate() {
                        match item.as_str() {
                            Some(text) => println!("  {}. {}", i + 1, text),
                            None => println!("  {}. {}", i + 1, item),
                        }
                    }
                }
                _ => println!("{key}: {value}"),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn args(format: &str) -> TextprepArgs {
        TextprepArgs::parse_from(["textprep", "-f", format, "steps", "pipeline.json"])
    }

    fn result() -> RunResult {
        RunResult {
            documents: vec!["check engine\tlight".to_string(), String::new()],
            has_tokenizer: true,
            duration_ms: 3,
        }
    }

    #[test]
    fn test_human_output_one_line_per_record() {
        let mut buffer = Vec::new();
        output_run_result(&mut buffer, &result(), &args("human")).unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "check engine\tlight\n\n");
    }

    #[test]
    fn test_json_output() {
        let mut buffer = Vec::new();
        output_run_result(&mut buffer, &result(), &args("json")).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["documents"][0], "check engine\tlight");
        assert_eq!(value["has_tokenizer"], true);
    }
}

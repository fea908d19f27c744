//! Command implementations for the textprep CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use csv::{ReaderBuilder, StringRecord};
use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::PipelineConfig;
use crate::error::{Result, TextprepError};
use crate::preprocess::document::{Corpus, Document};

/// How text is extracted from input records.
#[derive(Clone, Debug, Default)]
pub struct RecordFormat {
    /// Column delimiter; `None` treats each whole line as the text.
    /// Delimited input is read as CSV, so quoted fields may contain the
    /// delimiter or line breaks.
    pub delimiter: Option<char>,
    /// Columns joined with a single space to form the text. Empty means all columns.
    pub columns: Vec<usize>,
    /// Skip the first record.
    pub skip_header: bool,
}

impl RecordFormat {
    fn from_args(args: &RunArgs) -> Self {
        RecordFormat {
            delimiter: args.delimiter,
            columns: args.columns.clone(),
            skip_header: args.skip_header,
        }
    }

    /// Extract the text of one delimited record.
    pub fn text_of(&self, record: &StringRecord) -> Result<String> {
        if self.columns.is_empty() {
            return Ok(record.iter().collect::<Vec<_>>().join(" "));
        }

        let selected = self
            .columns
            .iter()
            .map(|&column| {
                record.get(column).ok_or_else(|| {
                    TextprepError::other(format!(
                        "Record has {} columns, column {} requested",
                        record.len(),
                        column
                    ))
                })
            })
            .collect::<Result<Vec<&str>>>()?;
        Ok(selected.join(" "))
    }
}

/// Read one document per input record.
///
/// Without a delimiter every line is a record. With one, the input is parsed
/// as CSV and blank lines are ignored.
pub fn read_corpus<R: BufRead>(reader: R, format: &RecordFormat) -> Result<Corpus> {
    let corpus = match format.delimiter {
        None => read_lines(reader, format.skip_header)?,
        Some(delimiter) => read_delimited(reader, delimiter, format)?,
    };

    debug!("Read {} records", corpus.len());
    Ok(corpus)
}

fn read_lines<R: BufRead>(reader: R, skip_header: bool) -> Result<Corpus> {
    reader
        .lines()
        .skip(usize::from(skip_header))
        .map(|line| Ok(Document::Text(line?)))
        .collect()
}

fn read_delimited<R: Read>(reader: R, delimiter: char, format: &RecordFormat) -> Result<Corpus> {
    if !delimiter.is_ascii() {
        return Err(TextprepError::config(format!(
            "Delimiter must be a single ASCII character, got '{delimiter}'"
        )));
    }

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter as u8)
        .has_headers(format.skip_header)
        .flexible(true)
        .from_reader(reader);

    let mut corpus = Corpus::new();
    for record in reader.records() {
        let record = record.map_err(|e| TextprepError::other(format!("Invalid record: {e}")))?;
        let text = format.text_of(&record).map_err(|e| {
            let line = record.position().map_or(0, |pos| pos.line());
            TextprepError::other(format!("Line {line}: {e}"))
        })?;
        corpus.push(Document::Text(text));
    }
    Ok(corpus)
}

fn open_input(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open input file '{}'", path.display()))?;
    Ok(BufReader::new(file))
}

/// Execute a CLI command.
pub fn execute_command(args: TextprepArgs) -> Result<()> {
    match &args.command {
        Command::Run(run_args) => run_pipeline(run_args.clone(), &args),
        Command::Steps(steps_args) => show_steps(steps_args.clone(), &args),
    }
}

/// Run a pipeline over an input file.
fn run_pipeline(args: RunArgs, cli_args: &TextprepArgs) -> Result<()> {
    let mut pipeline = PipelineConfig::load_pipeline(&args.config)?;
    if args.parallel {
        pipeline = pipeline.with_parallel(true);
    }

    let reader = open_input(&args.input)?;
    let corpus = read_corpus(reader, &RecordFormat::from_args(&args))?;

    let start_time = Instant::now();
    let documents = pipeline.run(&corpus);
    let duration = start_time.elapsed();
    info!(
        "Processed {} records from {}",
        documents.len(),
        args.input.display()
    );

    let result = RunResult {
        documents,
        has_tokenizer: pipeline.has_tokenizer(),
        duration_ms: duration.as_millis() as u64,
    };

    match &args.output {
        Some(path) => write_to_file(path, &result, cli_args),
        None => output_run_result(&mut io::stdout().lock(), &result, cli_args),
    }
}

fn write_to_file(path: &Path, result: &RunResult, cli_args: &TextprepArgs) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file '{}'", path.display()))?;
    let mut writer = BufWriter::new(file);
    output_run_result(&mut writer, result, cli_args)?;
    writer.flush()?;
    Ok(())
}

/// Show the steps a config builds.
fn show_steps(args: StepsArgs, cli_args: &TextprepArgs) -> Result<()> {
    let pipeline = PipelineConfig::load_pipeline(&args.config)?;

    output_result(
        "Pipeline steps",
        &PipelineSummary {
            steps: pipeline
                .step_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
            has_tokenizer: pipeline.has_tokenizer(),
            parallel: pipeline.is_parallel(),
        },
        cli_args,
    )
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_read_whole_lines() {
        let input = Cursor::new("first record\r\nsecond; record\n\n");
        let corpus = read_corpus(input, &RecordFormat::default()).unwrap();

        assert_eq!(
            corpus,
            vec![
                Document::text("first record"),
                Document::text("second; record"),
                Document::text(""),
            ]
        );
    }

    #[test]
    fn test_read_selected_columns() {
        let format = RecordFormat {
            delimiter: Some(';'),
            columns: vec![2, 1],
            skip_header: true,
        };
        let input = Cursor::new("id;title;body\n1;Engine;check light\n");
        let corpus = read_corpus(input, &format).unwrap();

        assert_eq!(corpus, vec![Document::text("check light Engine")]);
    }

    #[test]
    fn test_all_columns_when_none_selected() {
        let format = RecordFormat {
            delimiter: Some('\t'),
            ..Default::default()
        };
        let corpus = read_corpus(Cursor::new("a\tb\tc\n"), &format).unwrap();
        assert_eq!(corpus, vec![Document::text("a b c")]);
    }

    #[test]
    fn test_quoted_field_keeps_delimiter() {
        let format = RecordFormat {
            delimiter: Some(','),
            columns: vec![1],
            skip_header: false,
        };
        let input = Cursor::new("1,\"engine light, flashing\",x\n");
        let corpus = read_corpus(input, &format).unwrap();

        assert_eq!(corpus, vec![Document::text("engine light, flashing")]);
    }

    #[test]
    fn test_quoted_line_break_stays_in_one_record() {
        let format = RecordFormat {
            delimiter: Some(','),
            columns: vec![1],
            skip_header: true,
        };
        let input = Cursor::new("id,text\n1,\"brake\nnoise\"\n2,airbag\n");
        let corpus = read_corpus(input, &format).unwrap();

        assert_eq!(
            corpus,
            vec![Document::text("brake\nnoise"), Document::text("airbag")]
        );
    }

    #[test]
    fn test_non_ascii_delimiter_is_rejected() {
        let format = RecordFormat {
            delimiter: Some('§'),
            ..Default::default()
        };
        let result = read_corpus(Cursor::new("a§b\n"), &format);
        assert!(matches!(result, Err(TextprepError::Config(_))));
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let format = RecordFormat {
            delimiter: Some(';'),
            columns: vec![5],
            skip_header: false,
        };
        let result = read_corpus(Cursor::new("a;b\n"), &format);
        assert!(matches!(result, Err(TextprepError::Other(_))));
    }

    #[test]
    fn test_missing_input_names_the_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("records.txt");

        let err = open_input(&path).unwrap_err();
        assert!(matches!(err, TextprepError::Anyhow(_)));
        assert!(err.to_string().contains("records.txt"));
    }
}

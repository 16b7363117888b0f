//! Dataset ingest and binary group filtering.
//!
//! The teaching tool works off a single survey table with a numeric "Total happiness"
//! outcome and a handful of categorical columns (sex, marital status, and so on). The
//! table is loaded once at process start, held immutably, and shared by reference with
//! every computation; nothing here mutates or persists it.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::Context;

use crate::error::{DatasetError, InvalidGroupingError};

/// Name of the fixed numeric outcome column.
pub const OUTCOME_COLUMN: &str = "Total happiness";

/// Cells treated as missing, matching how the source CSV encodes absent answers.
const MISSING_MARKERS: [&str; 2] = ["", "NA"];

/// An immutable in-memory survey table: one numeric outcome column plus one or more
/// categorical grouping columns.
#[derive(Debug, Clone)]
pub struct Dataset {
    grouping_columns: Vec<String>,
    /// Outcome score per row; `None` where the cell was missing.
    scores: Vec<Option<f64>>,
    /// Category label per grouping column per row, indexed as `labels[column][row]`.
    labels: Vec<Vec<Option<String>>>,
}

/// The two category labels of a binary grouping column and their outcome samples,
/// in first-seen order.
#[derive(Debug, Clone)]
pub struct GroupSamples {
    pub categories: [String; 2],
    pub sample1: Vec<f64>,
    pub sample2: Vec<f64>,
}

impl GroupSamples {
    /// Total number of rows that survived missing-value removal.
    pub fn n_rows(&self) -> usize {
        self.sample1.len() + self.sample2.len()
    }

    /// Arithmetic mean of the first group's outcome scores.
    pub fn mean1(&self) -> f64 {
        mean(&self.sample1)
    }

    /// Arithmetic mean of the second group's outcome scores.
    pub fn mean2(&self) -> f64 {
        mean(&self.sample2)
    }
}

fn mean(sample: &[f64]) -> f64 {
    // Samples produced by `group_samples` are never empty.
    sample.iter().sum::<f64>() / sample.len() as f64
}

impl Dataset {
    /// Load the dataset from a CSV file on disk. Called once at startup.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("failed to open dataset '{}'", path.display()))?;
        Self::from_reader(file)
            .with_context(|| format!("failed to load dataset '{}'", path.display()))
    }

    /// Load the dataset from any CSV reader.
    ///
    /// The header row must contain [`OUTCOME_COLUMN`]; every other column is treated as
    /// categorical. Empty and `"NA"` cells are missing values. A non-missing outcome cell
    /// that does not parse as a number aborts the load with its line number, rather than
    /// silently dropping the row.
    pub fn from_reader<R: Read>(reader: R) -> anyhow::Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader
            .headers()
            .context("failed to read dataset headers")?
            .clone();

        let outcome_idx = headers
            .iter()
            .position(|name| name == OUTCOME_COLUMN)
            .ok_or(DatasetError::MissingOutcomeColumn(OUTCOME_COLUMN))?;

        let grouping_indices: Vec<usize> = (0..headers.len()).filter(|&i| i != outcome_idx).collect();
        let grouping_columns: Vec<String> = grouping_indices
            .iter()
            .map(|&i| headers[i].to_string())
            .collect();

        let mut scores = Vec::new();
        let mut labels = vec![Vec::new(); grouping_columns.len()];

        for (idx, result) in reader.records().enumerate() {
            // Header occupies line 1, so the first record is line 2.
            let line = idx + 2;
            let record = result.with_context(|| format!("line {line}: malformed CSV record"))?;

            scores.push(parse_score(record.get(outcome_idx), line)?);
            for (slot, &col_idx) in labels.iter_mut().zip(&grouping_indices) {
                slot.push(parse_label(record.get(col_idx)));
            }
        }

        if scores.is_empty() {
            return Err(DatasetError::Empty.into());
        }

        Ok(Dataset {
            grouping_columns,
            scores,
            labels,
        })
    }

    /// Categorical column names in file order, e.g. to populate a variable dropdown.
    pub fn grouping_columns(&self) -> &[String] {
        &self.grouping_columns
    }

    /// Number of rows loaded, before any missing-value removal.
    pub fn n_rows(&self) -> usize {
        self.scores.len()
    }

    /// Partition the outcome scores by a binary grouping column.
    ///
    /// Rows missing either the outcome score or the grouping label are dropped first.
    /// The two category labels are taken in first-seen order over the surviving rows,
    /// so the pair is deterministic for a fixed dataset.
    ///
    /// # Errors
    ///
    /// [`DatasetError::UnknownColumn`] if `column` does not name a grouping column, and
    /// [`InvalidGroupingError`] if the surviving rows contain anything other than exactly
    /// two distinct labels.
    pub fn group_samples(&self, column: &str) -> anyhow::Result<GroupSamples> {
        let col_idx = self
            .grouping_columns
            .iter()
            .position(|name| name == column)
            .ok_or_else(|| DatasetError::UnknownColumn(column.to_string()))?;
        let column_labels = &self.labels[col_idx];

        // Missing-value removal happens before category discovery, matching the
        // select-then-dropna order of the original pipeline.
        let mut surviving: Vec<(&str, f64)> = Vec::with_capacity(self.scores.len());
        for (label, score) in column_labels.iter().zip(&self.scores) {
            if let (Some(label), Some(score)) = (label, score) {
                surviving.push((label.as_str(), *score));
            }
        }

        let mut categories: Vec<&str> = Vec::with_capacity(2);
        for &(label, _) in &surviving {
            if !categories.contains(&label) {
                categories.push(label);
            }
        }

        if categories.len() != 2 {
            return Err(InvalidGroupingError {
                column: column.to_string(),
                group_count: categories.len(),
            }
            .into());
        }

        let mut sample1 = Vec::new();
        let mut sample2 = Vec::new();
        for (label, score) in surviving {
            if label == categories[0] {
                sample1.push(score);
            } else {
                sample2.push(score);
            }
        }

        Ok(GroupSamples {
            categories: [categories[0].to_string(), categories[1].to_string()],
            sample1,
            sample2,
        })
    }
}

fn parse_score(raw: Option<&str>, line: usize) -> anyhow::Result<Option<f64>> {
    match raw {
        None => Ok(None),
        Some(raw) if MISSING_MARKERS.contains(&raw) => Ok(None),
        Some(raw) => {
            let value = raw.parse::<f64>().map_err(|_| DatasetError::NonNumericOutcome {
                line,
                value: raw.to_string(),
            })?;
            Ok(Some(value))
        }
    }
}

fn parse_label(raw: Option<&str>) -> Option<String> {
    match raw {
        None => None,
        Some(raw) if MISSING_MARKERS.contains(&raw) => None,
        Some(raw) => Some(raw.to_string()),
    }
}

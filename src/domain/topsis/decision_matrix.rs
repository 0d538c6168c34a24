//! Decision Matrix - alternatives (rows) by criteria (columns).

use serde::Serialize;

use super::{TopsisError, ValueLocation};

/// One alternative: its label and one value per criterion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alternative {
    pub label: String,
    pub values: Vec<f64>,
}

impl Alternative {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }
}

/// The decision matrix handed to the scorer.
///
/// Every row has exactly one finite value per criterion. Emptiness is not
/// rejected here; the scorer reports it as `InsufficientData`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionMatrix {
    label_header: String,
    criteria: Vec<String>,
    alternatives: Vec<Alternative>,
}

impl DecisionMatrix {
    /// Creates a matrix from typed rows.
    ///
    /// # Errors
    ///
    /// - `RaggedRow` if a row's value count differs from the criteria count
    /// - `NonNumericValue` if a value is NaN or infinite
    pub fn new(
        label_header: impl Into<String>,
        criteria: Vec<String>,
        alternatives: Vec<Alternative>,
    ) -> Result<Self, TopsisError> {
        for (row, alternative) in alternatives.iter().enumerate() {
            if alternative.values.len() != criteria.len() {
                return Err(TopsisError::RaggedRow {
                    row,
                    expected: criteria.len(),
                    actual: alternative.values.len(),
                });
            }
            if let Some((column, value)) = alternative
                .values
                .iter()
                .enumerate()
                .find(|(_, v)| !v.is_finite())
            {
                return Err(TopsisError::NonNumericValue {
                    location: ValueLocation::Cell {
                        row,
                        label: alternative.label.clone(),
                        column: criteria[column].clone(),
                    },
                    value: value.to_string(),
                });
            }
        }

        Ok(Self {
            label_header: label_header.into(),
            criteria,
            alternatives,
        })
    }

    /// Creates a matrix from string cells.
    ///
    /// The first header names the label column, the rest name criteria. The
    /// first cell of each row is the label, carried through unchanged; the
    /// remaining cells must parse as finite numbers (surrounding whitespace
    /// ignored).
    pub fn from_raw(headers: &[String], rows: &[Vec<String>]) -> Result<Self, TopsisError> {
        let label_header = headers.first().cloned().unwrap_or_default();
        let criteria: Vec<String> = headers.iter().skip(1).cloned().collect();

        let mut alternatives = Vec::with_capacity(rows.len());
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != headers.len() {
                return Err(TopsisError::RaggedRow {
                    row,
                    expected: criteria.len(),
                    actual: cells.len().saturating_sub(1),
                });
            }

            let label = cells.first().cloned().unwrap_or_default();
            let values = cells
                .iter()
                .skip(1)
                .zip(&criteria)
                .map(|(cell, column)| parse_cell(cell, row, &label, column))
                .collect::<Result<Vec<_>, _>>()?;

            alternatives.push(Alternative { label, values });
        }

        Self::new(label_header, criteria, alternatives)
    }

    /// Creates a builder for constructing a decision matrix.
    pub fn builder() -> DecisionMatrixBuilder {
        DecisionMatrixBuilder::new()
    }

    pub fn label_header(&self) -> &str {
        &self.label_header
    }

    pub fn criteria(&self) -> &[String] {
        &self.criteria
    }

    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }

    /// Returns the number of alternatives (rows).
    pub fn alternative_count(&self) -> usize {
        self.alternatives.len()
    }

    /// Returns the number of criteria (columns, label excluded).
    pub fn criterion_count(&self) -> usize {
        self.criteria.len()
    }

    /// Returns the values of one criterion column, in row order.
    pub fn column(&self, index: usize) -> impl Iterator<Item = f64> + Clone + '_ {
        self.alternatives.iter().map(move |a| a.values[index])
    }
}

fn parse_cell(cell: &str, row: usize, label: &str, column: &str) -> Result<f64, TopsisError> {
    let trimmed = cell.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(TopsisError::NonNumericValue {
            location: ValueLocation::Cell {
                row,
                label: label.to_string(),
                column: column.to_string(),
            },
            value: trimmed.to_string(),
        }),
    }
}

/// Builder for constructing DecisionMatrix instances.
#[derive(Debug)]
pub struct DecisionMatrixBuilder {
    label_header: String,
    criteria: Vec<String>,
    alternatives: Vec<Alternative>,
}

impl Default for DecisionMatrixBuilder {
    fn default() -> Self {
        Self {
            label_header: "Alternative".to_string(),
            criteria: Vec::new(),
            alternatives: Vec::new(),
        }
    }
}

impl DecisionMatrixBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the label column header.
    pub fn label_header(mut self, header: impl Into<String>) -> Self {
        self.label_header = header.into();
        self
    }

    /// Sets the criteria names.
    pub fn criteria(mut self, names: Vec<impl Into<String>>) -> Self {
        self.criteria = names.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Adds an alternative row.
    pub fn alternative(mut self, label: impl Into<String>, values: Vec<f64>) -> Self {
        self.alternatives.push(Alternative::new(label, values));
        self
    }

    /// Builds the decision matrix.
    pub fn build(self) -> Result<DecisionMatrix, TopsisError> {
        DecisionMatrix::new(self.label_header, self.criteria, self.alternatives)
    }
}

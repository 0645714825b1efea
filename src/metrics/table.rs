//! 2x2 exposure/outcome tables and the study choices that drive metric policy.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Value substituted for empty cells before log or variance terms.
pub const CONTINUITY_CORRECTION: f64 = 0.5;

/// Validation failures raised while building a table from caller input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("cell `{cell}` must be a non-negative integer, got {value}")]
    Negative { cell: char, value: i64 },
    #[error("cell `{cell}` is not an integer: {text:?}")]
    NotAnInteger { cell: char, text: String },
    #[error("cell `{cell}` is missing")]
    Missing { cell: char },
}

/// Unknown token supplied for a study design or goal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} `{token}` (expected one of: {expected})")]
pub struct ParseChoiceError {
    kind: &'static str,
    token: String,
    expected: &'static str,
}

/// Raw cell counts.
///
/// ```text
///              outcome   no outcome
/// exposed         a          b
/// control         c          d
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContingencyTable {
    pub a: u64,
    pub b: u64,
    pub c: u64,
    pub d: u64,
}

impl ContingencyTable {
    pub fn new(a: u64, b: u64, c: u64, d: u64) -> Self {
        Self { a, b, c, d }
    }

    /// Build a table from signed input, rejecting negative counts.
    pub fn try_from_signed(a: i64, b: i64, c: i64, d: i64) -> Result<Self, TableError> {
        Ok(Self {
            a: non_negative('a', a)?,
            b: non_negative('b', b)?,
            c: non_negative('c', c)?,
            d: non_negative('d', d)?,
        })
    }

    /// Build a table from optional text fields, as submitted by a form or CSV row.
    pub fn parse_cells(
        a: Option<&str>,
        b: Option<&str>,
        c: Option<&str>,
        d: Option<&str>,
    ) -> Result<Self, TableError> {
        Ok(Self {
            a: parse_cell('a', a)?,
            b: parse_cell('b', b)?,
            c: parse_cell('c', c)?,
            d: parse_cell('d', d)?,
        })
    }

    /// Summed in `f64` so counts near `u64::MAX` cannot overflow.
    pub fn exposed_total(&self) -> f64 {
        self.a as f64 + self.b as f64
    }

    pub fn control_total(&self) -> f64 {
        self.c as f64 + self.d as f64
    }

    pub fn corrected(&self) -> CorrectedTable {
        CorrectedTable {
            a: correct(self.a),
            b: correct(self.b),
            c: correct(self.c),
            d: correct(self.d),
        }
    }
}

fn non_negative(cell: char, value: i64) -> Result<u64, TableError> {
    u64::try_from(value).map_err(|_| TableError::Negative { cell, value })
}

/// Parse one cell; surrounding whitespace is ignored.
pub fn parse_cell(cell: char, text: Option<&str>) -> Result<u64, TableError> {
    let text = match text.map(str::trim) {
        Some(t) if !t.is_empty() => t,
        _ => return Err(TableError::Missing { cell }),
    };
    if let Ok(value) = text.parse::<u64>() {
        return Ok(value);
    }
    match text.parse::<i64>() {
        Ok(value) => non_negative(cell, value),
        Err(_) => Err(TableError::NotAnInteger {
            cell,
            text: text.to_string(),
        }),
    }
}

fn correct(count: u64) -> f64 {
    if count == 0 {
        CONTINUITY_CORRECTION
    } else {
        count as f64
    }
}

/// Table with every zero cell replaced by [`CONTINUITY_CORRECTION`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrectedTable {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl CorrectedTable {
    pub fn exposed_total(&self) -> f64 {
        self.a + self.b
    }

    pub fn control_total(&self) -> f64 {
        self.c + self.d
    }

    pub fn risk_exposed(&self) -> f64 {
        self.a / self.exposed_total()
    }

    pub fn risk_control(&self) -> f64 {
        self.c / self.control_total()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum StudyDesign {
    Rct,
    NonRct,
    CohortProspective,
    CohortRetrospective,
    CaseControl,
}

impl StudyDesign {
    pub const ALL: [StudyDesign; 5] = [
        Self::Rct,
        Self::NonRct,
        Self::CohortProspective,
        Self::CohortRetrospective,
        Self::CaseControl,
    ];

    /// Case-control sampling is conditioned on the outcome, so incidence is unknown.
    pub fn supports_incidence(&self) -> bool {
        !matches!(self, Self::CaseControl)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rct => "rct",
            Self::NonRct => "non-rct",
            Self::CohortProspective => "cohort-prospective",
            Self::CohortRetrospective => "cohort-retrospective",
            Self::CaseControl => "case-control",
        }
    }
}

impl fmt::Display for StudyDesign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StudyDesign {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Self::ALL
            .into_iter()
            .find(|design| design.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| ParseChoiceError {
                kind: "study design",
                token: token.to_string(),
                expected: "rct, non-rct, cohort-prospective, cohort-retrospective, case-control",
            })
    }
}

/// Whether the measured outcome is one the intervention should produce or prevent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum StudyGoal {
    Desirable,
    Undesirable,
}

impl StudyGoal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Desirable => "desirable",
            Self::Undesirable => "undesirable",
        }
    }
}

impl fmt::Display for StudyGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StudyGoal {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "desirable" => Ok(Self::Desirable),
            "undesirable" => Ok(Self::Undesirable),
            other => Err(ParseChoiceError {
                kind: "study goal",
                token: other.to_string(),
                expected: "desirable, undesirable",
            }),
        }
    }
}

use crate::core::years::year_key;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// * `year` - Season of the race (number or string)
/// * `fields` - All other fields of the row: outcome counts (e.g. `DNF`), the winner's race time
/// (`Time`), the makes on the podium (`1`, `2`, `3`), and usage counts per model (e.g. `VT`)
#[derive(Debug, Deserialize, Clone, Default)]
pub struct RaceYearRecord {
    #[serde(rename = "Year", default)]
    pub year: Value,
    #[serde(flatten)]
    pub fields: HashMap<String, Value>,
}

impl RaceYearRecord {
    /// from_text_fields creates a record from a row of text cells, e.g. a CSV row. Empty cells are
    /// treated as absent fields.
    pub fn from_text_fields(row: HashMap<String, String>) -> RaceYearRecord {
        let mut record = RaceYearRecord::default();

        for (key, cell) in row.into_iter() {
            if cell.trim().is_empty() {
                continue;
            }

            if key == "Year" {
                record.year = Value::String(cell);
            } else {
                record.fields.insert(key, Value::String(cell));
            }
        }

        record
    }

    pub fn year_key(&self) -> Option<String> {
        year_key(&self.year)
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// usage returns the numeric value of a field without truncation. Absent, empty, non-finite,
    /// and non-numeric fields count as zero, numeric strings are converted.
    pub fn usage(&self, key: &str) -> f64 {
        let val = match self.fields.get(key) {
            Some(Value::Number(num)) => num.as_f64(),
            Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
            Some(Value::Bool(true)) => Some(1.0),
            _ => None,
        };

        val.filter(|x| x.is_finite()).unwrap_or(0.0)
    }

    /// count returns the numeric value of a field truncated to an integer (see usage).
    pub fn count(&self, key: &str) -> i64 {
        match self.fields.get(key) {
            Some(Value::Number(num)) => num.as_i64().unwrap_or_else(|| self.usage(key) as i64),
            _ => self.usage(key) as i64,
        }
    }

    pub fn outcome_count(&self, outcome: Outcome) -> i64 {
        self.count(outcome.key())
    }

    /// race_time returns the winner's race time string (None if absent or not a string).
    pub fn race_time(&self) -> Option<&str> {
        match self.fields.get("Time") {
            Some(Value::String(text)) => Some(text.as_str()),
            _ => None,
        }
    }

    /// podium_code returns the trimmed make code for a podium position (None if absent or empty).
    pub fn podium_code(&self, position: PodiumPosition) -> Option<String> {
        let code = match self.fields.get(position.key())? {
            Value::String(text) => text.trim().to_owned(),
            Value::Number(num) => num.to_string(),
            _ => return None,
        };

        if code.is_empty() {
            None
        } else {
            Some(code)
        }
    }
}

/// Outcome contains the result types counted per race.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Finished,
    Dns,  // did not start
    Dsq,  // disqualified
    Dnf,  // did not finish
    Nc,   // not classified
    Wd,   // withdrawn
    Retired,
    Dnq,  // did not qualify
    Dnpq, // did not pre-qualify
}

/// OUTCOMES is the stacking order of the result types chart.
pub const OUTCOMES: [Outcome; 9] = [
    Outcome::Finished,
    Outcome::Dns,
    Outcome::Dsq,
    Outcome::Dnf,
    Outcome::Nc,
    Outcome::Wd,
    Outcome::Retired,
    Outcome::Dnq,
    Outcome::Dnpq,
];

impl Outcome {
    /// key returns the field name of the outcome in the input records.
    pub fn key(&self) -> &'static str {
        match self {
            Outcome::Finished => "Finished",
            Outcome::Dns => "DNS",
            Outcome::Dsq => "DSQ",
            Outcome::Dnf => "DNF",
            Outcome::Nc => "NC",
            Outcome::Wd => "WD",
            Outcome::Retired => "Retired",
            Outcome::Dnq => "DNQ",
            Outcome::Dnpq => "DNPQ",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Outcome::Finished => "#2E7D32",
            Outcome::Dns => "#FB8C00",
            Outcome::Dsq => "#000000",
            Outcome::Dnf => "#D32F2F",
            Outcome::Nc => "#9E9E9E",
            Outcome::Wd => "#6A1B9A",
            Outcome::Retired => "#616161",
            Outcome::Dnq => "#455A64",
            Outcome::Dnpq => "#B71C1C",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PodiumPosition {
    First,
    Second,
    Third,
}

pub const PODIUM_POSITIONS: [PodiumPosition; 3] = [
    PodiumPosition::First,
    PodiumPosition::Second,
    PodiumPosition::Third,
];

impl PodiumPosition {
    pub fn key(&self) -> &'static str {
        match self {
            PodiumPosition::First => "1",
            PodiumPosition::Second => "2",
            PodiumPosition::Third => "3",
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            PodiumPosition::First => 1,
            PodiumPosition::Second => 2,
            PodiumPosition::Third => 3,
        }
    }

    /// row returns the heatmap row of the position (1st at the top).
    pub fn row(&self) -> usize {
        self.number() as usize - 1
    }

    pub fn label(&self) -> &'static str {
        match self {
            PodiumPosition::First => "1st",
            PodiumPosition::Second => "2nd",
            PodiumPosition::Third => "3rd",
        }
    }
}

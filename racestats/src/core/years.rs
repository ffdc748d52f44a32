use serde_json::Value;

pub const FIRST_YEAR: u32 = 1995;
pub const LAST_YEAR: u32 = 2025;

/// YearAxis is the ordered sequence of year categories shared by all charts. Every per-year array
/// in the crate is indexed by the position of a year in this sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct YearAxis {
    categories: Vec<String>,
}

impl YearAxis {
    pub fn new(first_year: u32, last_year: u32) -> YearAxis {
        YearAxis {
            categories: (first_year..=last_year).map(|y| y.to_string()).collect(),
        }
    }

    /// bathurst returns the axis covering all seasons contained in the reference tables.
    pub fn bathurst() -> YearAxis {
        YearAxis::new(FIRST_YEAR, LAST_YEAR)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn label(&self, idx: usize) -> Option<&str> {
        self.categories.get(idx).map(|y| y.as_str())
    }

    /// index_of returns the position of a year on the axis (None if the year is not covered).
    pub fn index_of(&self, year: u32) -> Option<usize> {
        self.index_of_label(&year.to_string())
    }

    pub fn index_of_label(&self, label: &str) -> Option<usize> {
        self.categories.iter().position(|y| y == label)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.categories.iter().map(|y| y.as_str()).enumerate()
    }
}

/// year_key stringifies a year value such that 2000, 2000.0 and "2000" all result in "2000".
/// Returns None for values that cannot denote a year (null, arrays, objects, empty strings).
pub fn year_key(value: &Value) -> Option<String> {
    match value {
        Value::Number(num) => {
            if let Some(x) = num.as_i64() {
                Some(x.to_string())
            } else {
                let x = num.as_f64()?;
                if x.fract() == 0.0 {
                    Some(format!("{}", x as i64))
                } else {
                    Some(x.to_string())
                }
            }
        }
        Value::String(text) => {
            let text = text.trim();
            if text.is_empty() {
                None
            } else {
                Some(text.to_owned())
            }
        }
        _ => None,
    }
}

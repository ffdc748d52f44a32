use crate::core::record::RaceYearRecord;
use log::{debug, warn};
use std::collections::HashMap;

/// YearLookup provides random access to the race records by year label. If the input contains
/// several records for the same year, the last one wins.
#[derive(Debug)]
pub struct YearLookup<'a> {
    by_year: HashMap<String, &'a RaceYearRecord>,
}

impl<'a> YearLookup<'a> {
    pub fn new(records: &'a [RaceYearRecord]) -> YearLookup<'a> {
        let mut by_year = HashMap::with_capacity(records.len());

        for record in records.iter() {
            let key = match record.year_key() {
                Some(key) => key,
                None => {
                    debug!("Skipping race record without a valid year: {:?}", record.year);
                    continue;
                }
            };

            if by_year.insert(key.to_owned(), record).is_some() {
                warn!(
                    "Found more than one race record for {}, using the last one",
                    key
                );
            }
        }

        YearLookup { by_year }
    }

    pub fn get(&self, year: &str) -> Option<&'a RaceYearRecord> {
        self.by_year.get(year).copied()
    }

    pub fn len(&self) -> usize {
        self.by_year.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_year.is_empty()
    }
}

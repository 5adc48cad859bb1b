use std::collections::BTreeMap;

use chrono::NaiveDate;

/// Values recorded against calendar dates, e.g. a daily exchange rate series.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Historical<T: Clone> {
    history: BTreeMap<NaiveDate, T>,
}

impl<T: Clone> Historical<T> {
    pub fn on(&self, date: NaiveDate) -> Option<&T> {
        self.history.get(&date)
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }
}

impl<T: Clone> FromIterator<(NaiveDate, T)> for Historical<T> {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, T)>>(iter: I) -> Self {
        Self {
            history: iter.into_iter().collect(),
        }
    }
}

use chrono::NaiveDate;

use super::Dish;

/// One calendar day's menu. `date` serializes as an ISO-8601 string.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Day {
    date: NaiveDate,
    dishes: Vec<Dish>,
}

impl Day {
    #[must_use]
    pub fn new(date: NaiveDate, dishes: Vec<Dish>) -> Self {
        Self { date, dishes }
    }

    #[must_use]
    pub fn empty(date: NaiveDate) -> Self {
        Self::new(date, Vec::new())
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }
}

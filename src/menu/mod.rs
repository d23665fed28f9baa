mod day;
mod dish;
mod price;

pub use day::Day;
pub use dish::Dish;
pub use price::{extract_price, PriceSet};

use chrono::NaiveDate;

/// Picks the day whose date exactly equals `target`. A missing date yields
/// an empty menu for that date rather than an error; "no dishes listed" and
/// "date absent from the schedule" intentionally look the same downstream.
#[must_use]
pub fn select_day(days: Vec<Day>, target: NaiveDate) -> Day {
    days.into_iter()
        .find(|day| day.date() == target)
        .unwrap_or_else(|| Day::empty(target))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_select_day_exact_match() {
        let monday = Day::new(
            date("2024-01-01"),
            vec![Dish::new(
                "Brezn".to_string(),
                PriceSet::uniform(1.2),
                vec![],
                "Beilagen".to_string(),
            )],
        );
        let tuesday = Day::empty(date("2024-01-02"));
        let selected = select_day(vec![monday.clone(), tuesday], date("2024-01-01"));
        assert_eq!(selected, monday);
    }

    #[test]
    fn test_select_day_synthesizes_missing_date() {
        let days = vec![Day::empty(date("2024-01-01"))];
        let selected = select_day(days, date("2024-01-02"));
        assert_eq!(selected, Day::empty(date("2024-01-02")));
        assert!(selected.dishes().is_empty());
    }
}

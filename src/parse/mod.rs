mod labels;
pub mod query;
mod static_selector;
mod text;

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::menu::{extract_price, Day, Dish, PriceSet};
use query::{DishField, MarkupQuery, PatternQuery, StructuralQuery};

/// Converts the schedule page into the ordered day list. Drift in the page
/// markup degrades the result toward fewer days or defaulted fields; it
/// never makes the parse fail.
pub struct Parser {
    queries: Vec<Box<dyn MarkupQuery>>,
}

impl Parser {
    /// The production composition: structural query first, pattern-matching
    /// fallback when the structural one finds no day blocks at all.
    #[must_use]
    pub fn resilient() -> Self {
        Self::with_queries(vec![
            Box::new(StructuralQuery),
            Box::new(PatternQuery),
        ])
    }

    #[must_use]
    pub fn with_queries(queries: Vec<Box<dyn MarkupQuery>>) -> Self {
        Self { queries }
    }

    #[must_use]
    pub fn parse(&self, html: &str) -> Vec<Day> {
        for query in &self.queries {
            let blocks = query.day_blocks(html);
            if blocks.is_empty() {
                log::debug!("{} found no day blocks", query.name());
                continue;
            }
            return blocks
                .iter()
                .filter_map(|block| day_from_block(query.as_ref(), block))
                .collect();
        }
        log::warn!("no day blocks found by any markup query");
        Vec::new()
    }
}

fn day_from_block(query: &dyn MarkupQuery, block: &str) -> Option<Day> {
    let Some(date) = block_date(block) else {
        log::debug!("skipping day block without a parseable date header");
        return None;
    };
    let dishes = query
        .dish_items(block)
        .iter()
        .map(|item| dish_from_item(query, item))
        .collect();
    Some(Day::new(date, dishes))
}

fn block_date(block: &str) -> Option<NaiveDate> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re =
        RE.get_or_init(|| Regex::new(r"\d{2}\.\d{2}\.\d{4}").expect("regex should be valid"));
    let matched = re.find(block)?;
    NaiveDate::parse_from_str(matched.as_str(), "%d.%m.%Y").ok()
}

fn field_or(query: &dyn MarkupQuery, item: &str, field: DishField, fallback: &str) -> String {
    query
        .field_text(item, field)
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

fn dish_from_item(query: &dyn MarkupQuery, item: &str) -> Dish {
    let name = field_or(query, item, DishField::Name, Dish::FALLBACK_NAME);
    let price_text = query.field_text(item, DishField::Price).unwrap_or_default();
    let dish_type = field_or(query, item, DishField::Category, Dish::FALLBACK_TYPE);
    let tag_field = query.field_text(item, DishField::Tags).unwrap_or_default();
    let labels = labels::collect_labels(&query.dish_text(item), &tag_field);
    Dish::new(
        name,
        PriceSet::uniform(extract_price(&price_text)),
        labels,
        dish_type,
    )
}

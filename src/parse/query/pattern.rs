use std::sync::OnceLock;

use regex::Regex;

use super::{DishField, MarkupQuery};
use crate::parse::text::strip_tags;

/// Fallback implementation: raw patterns over the page source, no DOM. Keeps
/// working when the markup is too mangled for the HTML parser to recover the
/// expected structure, at the cost of depending on exact attribute spelling.
#[derive(Debug, Default)]
pub struct PatternQuery;

fn captures_first(re: &Regex, haystack: &str) -> Option<String> {
    re.captures(haystack).map(|caps| strip_tags(&caps[1]))
}

impl MarkupQuery for PatternQuery {
    fn name(&self) -> &'static str {
        "pattern query"
    }

    fn day_blocks(&self, html: &str) -> Vec<String> {
        static RE: OnceLock<Regex> = OnceLock::new();
        let re = RE.get_or_init(|| {
            Regex::new(r#"(?s)<div class="c-schedule__item">(.*?)</div>\s*</div>"#)
                .expect("regex should be valid")
        });
        re.captures_iter(html)
            .map(|caps| caps[1].to_string())
            .collect()
    }

    fn dish_items(&self, day_block: &str) -> Vec<String> {
        static RE: OnceLock<Regex> = OnceLock::new();
        let re = RE
            .get_or_init(|| Regex::new(r"(?s)<li[^>]*>(.*?)</li>").expect("regex should be valid"));
        re.captures_iter(day_block)
            .map(|caps| caps[1].to_string())
            .collect()
    }

    fn field_text(&self, dish_item: &str, field: DishField) -> Option<String> {
        static NAME_RE: OnceLock<Regex> = OnceLock::new();
        static PRICE_RE: OnceLock<Regex> = OnceLock::new();
        static CATEGORY_RE: OnceLock<Regex> = OnceLock::new();
        static TAG_RE: OnceLock<Regex> = OnceLock::new();
        match field {
            DishField::Name => captures_first(
                NAME_RE.get_or_init(|| {
                    Regex::new(r#"(?s)<p class="c-menu-dish__title">(.*?)</p>"#)
                        .expect("regex should be valid")
                }),
                dish_item,
            ),
            DishField::Price => captures_first(
                PRICE_RE.get_or_init(|| {
                    Regex::new(r#"(?s)class="js-meal-price">(.*?)</span>"#)
                        .expect("regex should be valid")
                }),
                dish_item,
            ),
            DishField::Category => captures_first(
                CATEGORY_RE.get_or_init(|| {
                    Regex::new(r#"(?s)class="stwm-artname">(.*?)</span>"#)
                        .expect("regex should be valid")
                }),
                dish_item,
            ),
            DishField::Tags => {
                let re = TAG_RE.get_or_init(|| {
                    Regex::new(r#"data-tag="([^"]*)""#).expect("regex should be valid")
                });
                let tags: Vec<&str> = re
                    .captures_iter(dish_item)
                    .filter_map(|caps| caps.get(1))
                    .map(|m| m.as_str())
                    .collect();
                if tags.is_empty() {
                    None
                } else {
                    Some(tags.join(","))
                }
            }
        }
    }

    fn dish_text(&self, dish_item: &str) -> String {
        strip_tags(dish_item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_field_text_from_dish_item() {
        let html = fs::read_to_string("./src/parse/html_examples/dish_item.html").unwrap();
        let query = PatternQuery;
        assert_eq!(
            query.field_text(&html, DishField::Name).as_deref(),
            Some("Rinderbraten in Biersoße (R,S) mit Kartoffeln")
        );
        assert_eq!(
            query.field_text(&html, DishField::Price).as_deref(),
            Some("4,20 €")
        );
        assert_eq!(
            query.field_text(&html, DishField::Category).as_deref(),
            Some("Fleisch")
        );
        assert_eq!(
            query.field_text(&html, DishField::Tags).as_deref(),
            Some("Rind,Glutenfrei")
        );
    }

    #[test]
    fn test_day_blocks_and_dish_items() {
        let html = fs::read_to_string("./src/parse/html_examples/schedule.html").unwrap();
        let query = PatternQuery;
        let blocks = query.day_blocks(&html);
        assert_eq!(blocks.len(), 2);
        assert_eq!(query.dish_items(&blocks[0]).len(), 3);
        assert_eq!(query.dish_items(&blocks[1]).len(), 1);
    }

    #[test]
    fn test_nested_markup_is_stripped_from_name() {
        let item = r#"<p class="c-menu-dish__title">Gemüsecurry <span>mit Reis</span></p>"#;
        assert_eq!(
            PatternQuery.field_text(item, DishField::Name).as_deref(),
            Some("Gemüsecurry mit Reis")
        );
    }
}

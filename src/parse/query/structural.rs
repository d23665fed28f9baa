use scraper::{ElementRef, Html, Selector};

use super::{DishField, MarkupQuery};
use crate::parse::text::remove_excess_whitespace;
use crate::static_selector;

/// Primary implementation: CSS selectors against the parsed DOM. Survives
/// attribute reordering and formatting changes that break raw patterns.
#[derive(Debug, Default)]
pub struct StructuralQuery;

fn element_text(element: ElementRef) -> String {
    let joined = element.text().collect::<Vec<_>>().join(" ");
    remove_excess_whitespace(&joined).trim().to_string()
}

fn first_text(fragment: &Html, selector: &Selector) -> Option<String> {
    fragment.select(selector).next().map(element_text)
}

impl MarkupQuery for StructuralQuery {
    fn name(&self) -> &'static str {
        "structural query"
    }

    fn day_blocks(&self, html: &str) -> Vec<String> {
        static_selector!(DAY_SELECTOR <- "div.c-schedule__item");
        let document = Html::parse_document(html);
        document
            .select(&DAY_SELECTOR)
            .map(|element| element.html())
            .collect()
    }

    fn dish_items(&self, day_block: &str) -> Vec<String> {
        static_selector!(DISH_SELECTOR <- "ul.c-menu-dish-list li");
        let fragment = Html::parse_fragment(day_block);
        fragment
            .select(&DISH_SELECTOR)
            .map(|element| element.html())
            .collect()
    }

    fn field_text(&self, dish_item: &str, field: DishField) -> Option<String> {
        static_selector!(NAME_SELECTOR <- "p.c-menu-dish__title");
        static_selector!(PRICE_SELECTOR <- ".js-meal-price");
        static_selector!(CATEGORY_SELECTOR <- ".stwm-artname");
        static_selector!(TAG_SELECTOR <- ".js-meal-filter-tag");
        let fragment = Html::parse_fragment(dish_item);
        match field {
            DishField::Name => first_text(&fragment, &NAME_SELECTOR),
            DishField::Price => first_text(&fragment, &PRICE_SELECTOR),
            DishField::Category => first_text(&fragment, &CATEGORY_SELECTOR),
            DishField::Tags => {
                let tags: Vec<&str> = fragment
                    .select(&TAG_SELECTOR)
                    .filter_map(|element| element.value().attr("data-tag"))
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
        let fragment = Html::parse_fragment(dish_item);
        element_text(fragment.root_element())
    }
}

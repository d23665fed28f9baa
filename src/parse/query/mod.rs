mod pattern;
mod structural;

pub use pattern::PatternQuery;
pub use structural::StructuralQuery;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DishField {
    Name,
    Price,
    Category,
    Tags,
}

/// The markup-query capability the parser is generic over. Day blocks and
/// dish items travel as owned HTML snippets so a structural (CSS selector)
/// and a pattern-matching implementation can answer the same questions and
/// be chained for resilience against markup drift.
pub trait MarkupQuery {
    fn name(&self) -> &'static str;

    /// One snippet per day block found in the page, in source order.
    fn day_blocks(&self, html: &str) -> Vec<String>;

    /// One snippet per dish item inside a day block, in source order.
    fn dish_items(&self, day_block: &str) -> Vec<String>;

    /// Text of one designated field of a dish item; `None` when the field's
    /// markup is absent. For `Tags` this is the comma-joined tag codes.
    fn field_text(&self, dish_item: &str, field: DishField) -> Option<String>;

    /// The dish item's full visible text, markup stripped.
    fn dish_text(&self, dish_item: &str) -> String;
}

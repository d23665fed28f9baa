use super::PriceSet;

/// One menu item. Field order matches the external JSON schema; `labels`
/// is kept sorted so serialization is deterministic.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Dish {
    name: String,
    prices: PriceSet,
    labels: Vec<String>,
    dish_type: String,
}

impl Dish {
    pub const FALLBACK_NAME: &'static str = "Unbekannt";
    pub const FALLBACK_TYPE: &'static str = "Sonstiges";

    #[must_use]
    pub fn new(name: String, prices: PriceSet, labels: Vec<String>, dish_type: String) -> Self {
        Self {
            name,
            prices,
            labels,
            dish_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn dish_type(&self) -> &str {
        &self.dish_type
    }
}

use std::sync::OnceLock;

use regex::Regex;

static UNIT: &str = "100g";

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
struct AudiencePrice {
    base_price: f64,
    price_per_unit: f64,
    unit: &'static str,
}

impl AudiencePrice {
    fn new(base_price: f64) -> Self {
        Self {
            base_price,
            price_per_unit: 0.0,
            unit: UNIT,
        }
    }
}

/// Per-audience pricing as the external schema wants it. The source lists a
/// single price per dish, so all three slots carry the same amount.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct PriceSet {
    students: AudiencePrice,
    staff: AudiencePrice,
    guests: AudiencePrice,
}

impl PriceSet {
    #[must_use]
    pub fn uniform(amount: f64) -> Self {
        Self {
            students: AudiencePrice::new(amount),
            staff: AudiencePrice::new(amount),
            guests: AudiencePrice::new(amount),
        }
    }
}

/// Total function from arbitrary text to an amount: first `digits,digits`
/// substring wins, comma is the decimal separator, anything else is `0.0`.
#[must_use]
pub fn extract_price(text: &str) -> f64 {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\d+,\d+").expect("regex should be valid"));
    re.find(text)
        .and_then(|m| m.as_str().replace(',', ".").parse().ok())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_price() {
        assert_eq!(extract_price("3,50 €"), 3.50);
        assert_eq!(extract_price(""), 0.0);
        assert_eq!(extract_price("kostenlos"), 0.0);
        assert_eq!(extract_price("12,00"), 12.0);
    }

    #[test]
    fn test_extract_price_takes_first_match() {
        assert_eq!(extract_price("1,10 € / 2,20 €"), 1.10);
    }

    #[test]
    fn test_uniform_price_set_serializes_all_audiences() {
        let set = PriceSet::uniform(3.5);
        let value = serde_json::to_value(&set).unwrap();
        for audience in ["students", "staff", "guests"] {
            assert_eq!(value[audience]["base_price"], 3.5);
            assert_eq!(value[audience]["price_per_unit"], 0.0);
            assert_eq!(value[audience]["unit"], "100g");
        }
    }
}

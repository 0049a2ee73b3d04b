//! Currency rate resource definitions.
//!
//! The same rate table rendered two ways: a structured JSON document and a
//! plain-text listing. Both carry identical data.

use serde_json::json;

use super::ResourceDefinition;
use crate::domains::payments::RateTable;
use crate::domains::resources::error::ResourceError;

/// JSON rendering of the currency rate table.
pub struct RatesJsonResource;

impl ResourceDefinition for RatesJsonResource {
    const URI: &'static str = "payments://rates/json";
    const NAME: &'static str = "Currency Rates (JSON)";
    const DESCRIPTION: &'static str =
        "Supported currency codes and their rates per one unit of the base currency, as JSON";
    const MIME_TYPE: &'static str = "application/json";

    fn render(rates: &RateTable) -> Result<String, ResourceError> {
        let mut table = serde_json::Map::new();
        for (code, rate) in rates.iter() {
            table.insert(code.to_string(), json!(rate));
        }
        let document = json!({
            "base": rates.base(),
            "rates": table,
        });
        serde_json::to_string_pretty(&document).map_err(|e| ResourceError::internal(e.to_string()))
    }
}

/// Plain-text rendering of the currency rate table.
pub struct RatesTextResource;

impl ResourceDefinition for RatesTextResource {
    const URI: &'static str = "payments://rates/text";
    const NAME: &'static str = "Currency Rates (Text)";
    const DESCRIPTION: &'static str =
        "Supported currency codes and their rates per one unit of the base currency, as text";
    const MIME_TYPE: &'static str = "text/plain";

    fn render(rates: &RateTable) -> Result<String, ResourceError> {
        let mut lines = vec![format!("Currency rates per 1 {}", rates.base())];
        for (code, rate) in rates.iter() {
            lines.push(format!("{}: {}", code, rate));
        }
        Ok(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    /// Parse the text rendering back into a code->rate map.
    fn parse_text(rendered: &str) -> BTreeMap<String, f64> {
        rendered
            .lines()
            .skip(1) // header
            .filter_map(|line| {
                let (code, rate) = line.split_once(": ")?;
                Some((code.to_string(), rate.parse().ok()?))
            })
            .collect()
    }

    #[test]
    fn test_json_rendering_shape() {
        let rendered = RatesJsonResource::render(&RateTable::standard()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed["base"], "GBP");
        assert_eq!(parsed["rates"]["EUR"], 1.15);
        assert_eq!(parsed["rates"]["GBP"], 1.0);
    }

    #[test]
    fn test_text_rendering_shape() {
        let rendered = RatesTextResource::render(&RateTable::standard()).unwrap();
        assert!(rendered.starts_with("Currency rates per 1 GBP"));
        assert!(rendered.contains("EUR: 1.15"));
    }

    #[test]
    fn test_renderings_round_trip_to_same_table() {
        let rates = RateTable::standard();

        let from_text = parse_text(&RatesTextResource::render(&rates).unwrap());

        let json_doc: serde_json::Value =
            serde_json::from_str(&RatesJsonResource::render(&rates).unwrap()).unwrap();
        let from_json: BTreeMap<String, f64> = json_doc["rates"]
            .as_object()
            .unwrap()
            .iter()
            .map(|(k, v)| (k.clone(), v.as_f64().unwrap()))
            .collect();

        assert_eq!(from_text, from_json);
        assert_eq!(from_json.len(), 4);
    }
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::types::Category;

/// A single normalized field value. `None` serializes as `null`.
pub type FieldValue = Option<Number>;

/// Flat field → value mapping produced by one provider for one request.
///
/// Numbers keep the provider's representation, so an integer price stays
/// an integer on the wire.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryResult {
    fields: BTreeMap<String, FieldValue>,
}

impl CategoryResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, name: impl Into<String>, value: FieldValue) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.insert(name.into(), value);
    }

    /// `Some(None)` means the field is present but null.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn get_f64(&self, name: &str) -> Option<f64> {
        self.fields.get(name)?.as_ref()?.as_f64()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.fields.iter()
    }
}

/// Combined response: only categories that were requested, resolved and
/// fetched successfully are present.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub economy: Option<CategoryResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<CategoryResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub air: Option<CategoryResult>,
}

impl AggregateResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: Category) -> Option<&CategoryResult> {
        self.slot(category).as_ref()
    }

    pub fn insert(&mut self, category: Category, result: CategoryResult) {
        *self.slot_mut(category) = Some(result);
    }

    pub fn contains(&self, category: Category) -> bool {
        self.get(category).is_some()
    }

    /// Categories present in the response, in wire order.
    pub fn categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|category| self.contains(*category))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.economy.is_none() && self.weather.is_none() && self.air.is_none()
    }

    fn slot(&self, category: Category) -> &Option<CategoryResult> {
        match category {
            Category::Economy => &self.economy,
            Category::Weather => &self.weather,
            Category::AirQuality => &self.air,
        }
    }

    fn slot_mut(&mut self, category: Category) -> &mut Option<CategoryResult> {
        match category {
            Category::Economy => &mut self.economy,
            Category::Weather => &mut self.weather,
            Category::AirQuality => &mut self.air,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integer_price_keeps_representation() {
        let result = CategoryResult::new().with_field("btc_usd", Some(Number::from(68421)));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json, json!({"btc_usd": 68421}));
    }

    #[test]
    fn test_null_field_serializes_as_null() {
        let result = CategoryResult::new()
            .with_field("temperature", Number::from_f64(22.5))
            .with_field("wind_speed", None);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json, json!({"temperature": 22.5, "wind_speed": null}));
        assert_eq!(result.get("wind_speed"), Some(&None));
        assert_eq!(result.get_f64("temperature"), Some(22.5));
    }

    #[test]
    fn test_empty_response_serializes_as_empty_object() {
        let response = AggregateResponse::new();
        assert_eq!(serde_json::to_string(&response).unwrap(), "{}");
        assert!(response.is_empty());
    }

    #[test]
    fn test_response_only_contains_inserted_categories() {
        let mut response = AggregateResponse::new();
        response.insert(
            Category::AirQuality,
            CategoryResult::new().with_field("pm10", Some(Number::from(45))),
        );

        assert_eq!(response.categories(), vec![Category::AirQuality]);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, json!({"air": {"pm10": 45}}));
    }
}

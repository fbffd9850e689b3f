//! Typed read views over the province dataset
//!
//! The raw JSON stays the source of truth (it is what gets validated and
//! served). These views are built leniently for presentation: a field with
//! the wrong type reads as absent instead of failing.

use serde::Serialize;
use serde_json::{Map, Value};

/// A single named statistic attached to a province
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    /// Metric key in the province's `metrics` mapping
    pub key: String,
    /// Numeric value; booleans are not numbers
    pub value: Option<f64>,
    pub label: Option<String>,
    pub unit: Option<String>,
}

impl Metric {
    fn from_entry(key: &str, value: &Value) -> Self {
        let obj = value.as_object();
        Self {
            key: key.to_string(),
            value: obj.and_then(|m| m.get("value")).and_then(Value::as_f64),
            label: string_field(obj, "label"),
            unit: string_field(obj, "unit"),
        }
    }

    /// Label to show, falling back to the metric key
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.key)
    }
}

/// Semiconductor fabrication facility
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fab {
    pub name: Option<String>,
    /// Capacity in thousand wafers per month
    pub capacity_kwpm: Option<f64>,
}

impl Fab {
    fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        Some(Self {
            name: string_field(Some(obj), "name"),
            capacity_kwpm: obj.get("capacity_kwpm").and_then(Value::as_f64),
        })
    }
}

/// Province-level entry keyed by adcode
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Province {
    pub adcode: String,
    pub name_en: Option<String>,
    pub name_cn: Option<String>,
    pub region: Option<String>,
    /// Metrics in source order
    pub metrics: Vec<Metric>,
    /// Fabs in source order; non-object entries are dropped
    pub fabs: Vec<Fab>,
    /// Company references; plain strings or objects with a `name`
    pub companies: Vec<String>,
}

impl Province {
    /// Builds the view from a raw province entry. Returns None if the entry
    /// is not a JSON object.
    pub fn from_value(adcode: &str, value: &Value) -> Option<Self> {
        let obj = value.as_object()?;

        let metrics = obj
            .get("metrics")
            .and_then(Value::as_object)
            .map(|m| m.iter().map(|(k, v)| Metric::from_entry(k, v)).collect())
            .unwrap_or_default();

        let fabs = obj
            .get("fabs")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Fab::from_value).collect())
            .unwrap_or_default();

        let companies = obj
            .get("companies")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(company_name).collect())
            .unwrap_or_default();

        Some(Self {
            adcode: adcode.to_string(),
            name_en: string_field(Some(obj), "name_en"),
            name_cn: string_field(Some(obj), "name_cn"),
            region: string_field(Some(obj), "region"),
            metrics,
            fabs,
            companies,
        })
    }

    /// Name to show, preferring the English name
    pub fn display_name(&self) -> &str {
        self.name_en
            .as_deref()
            .or(self.name_cn.as_deref())
            .unwrap_or(&self.adcode)
    }

    /// Total fab capacity over fabs that report one
    pub fn total_capacity_kwpm(&self) -> f64 {
        self.fabs.iter().filter_map(|f| f.capacity_kwpm).sum()
    }
}

/// JSON type name used in diagnostics
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn string_field(obj: Option<&Map<String, Value>>, key: &str) -> Option<String> {
    obj.and_then(|m| m.get(key))
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn company_name(value: &Value) -> Option<String> {
    match value {
        Value::String(name) => Some(name.clone()),
        Value::Object(obj) => string_field(Some(obj), "name"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_province_from_value() {
        let value = json!({
            "name_en": "Shanghai",
            "name_cn": "上海",
            "region": "East",
            "metrics": {
                "gdp": {"value": 4.7, "label": "GDP", "unit": "trillion CNY"},
                "fabs_count": {"value": 12}
            },
            "fabs": [
                {"name": "SMIC Fab 8", "capacity_kwpm": 60},
                {"name": "Hua Hong Fab 1", "capacity_kwpm": 35.5},
                "garbage"
            ],
            "companies": ["SMIC", {"name": "Hua Hong"}, 42]
        });

        let province = Province::from_value("310000", &value).unwrap();
        assert_eq!(province.display_name(), "Shanghai");
        assert_eq!(province.metrics.len(), 2);
        assert_eq!(province.metrics[0].key, "gdp");
        assert_eq!(province.metrics[0].display_label(), "GDP");
        assert_eq!(province.metrics[1].display_label(), "fabs_count");
        assert_eq!(province.metrics[1].value, Some(12.0));
        assert_eq!(province.fabs.len(), 2);
        assert_eq!(province.total_capacity_kwpm(), 95.5);
        assert_eq!(province.companies, vec!["SMIC", "Hua Hong"]);
    }

    #[test]
    fn test_non_object_is_none() {
        assert!(Province::from_value("110000", &json!("bad")).is_none());
    }

    #[test]
    fn test_wrong_types_read_as_absent() {
        let value = json!({
            "name_en": 5,
            "metrics": {"gdp": {"value": true, "label": 3}}
        });
        let province = Province::from_value("110000", &value).unwrap();
        assert_eq!(province.name_en, None);
        assert_eq!(province.display_name(), "110000");
        assert_eq!(province.metrics[0].value, None);
        assert_eq!(province.metrics[0].label, None);
    }
}

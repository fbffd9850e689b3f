//! Province dataset validator
//!
//! Walks the province mapping and collects issues instead of failing:
//! - Top level must be an object keyed by adcode
//! - Each province must be an object with name_en, name_cn, region, metrics
//! - metrics must be a non-empty object of metric objects with a numeric value
//! - fabs and companies, when present, must be arrays
//!
//! A malformed entry gets one issue and no field-level checks, so garbage
//! data does not cascade into follow-up errors. Issue order follows the
//! input's key order.
//!
//! Path grammar: `$`, `$.<adcode>`, `$.<adcode>.metrics.<key>.value`,
//! `$.<adcode>.fabs[<index>].capacity_kwpm`.

use serde_json::{Map, Value};

use super::report::{ValidationIssue, ValidationReport};
use crate::data::json_type_name;

/// Fields every province entry must carry
pub const REQUIRED_FIELDS: [&str; 4] = ["name_en", "name_cn", "region", "metrics"];

/// Validates a parsed province dataset.
///
/// Pure and deterministic: the same input always yields the same report.
pub fn validate(provinces: &Value) -> ValidationReport {
    ProvinceValidator::default().run(provinces)
}

/// Collects issues over one validation pass.
#[derive(Debug, Default)]
struct ProvinceValidator {
    issues: Vec<ValidationIssue>,
}

impl ProvinceValidator {
    fn run(mut self, provinces: &Value) -> ValidationReport {
        let Some(entries) = provinces.as_object() else {
            self.error(
                "$",
                format!(
                    "Top-level value must be an object mapping adcode to province, got {}",
                    json_type_name(provinces)
                ),
            );
            return ValidationReport::from_issues(0, self.issues);
        };

        for (adcode, province) in entries {
            self.check_province(adcode, province);
        }

        ValidationReport::from_issues(entries.len(), self.issues)
    }

    fn check_province(&mut self, adcode: &str, province: &Value) {
        let path = format!("$.{}", adcode);

        let Some(obj) = province.as_object() else {
            self.error(&path, "Province entry must be an object");
            return;
        };

        for field in REQUIRED_FIELDS {
            if !obj.contains_key(field) {
                self.error(&path, format!("Missing required field '{}'", field));
            }
        }

        self.check_metrics(&path, obj.get("metrics"));

        if let Some(fabs) = obj.get("fabs") {
            self.check_fabs(&path, fabs);
        }

        if let Some(companies) = obj.get("companies") {
            if !companies.is_array() {
                self.error(
                    make_path(&path, "companies"),
                    format!("companies must be an array, got {}", json_type_name(companies)),
                );
            }
        }
    }

    fn check_metrics(&mut self, province_path: &str, metrics: Option<&Value>) {
        let metrics_path = make_path(province_path, "metrics");

        let metrics = match metrics.and_then(Value::as_object) {
            Some(m) if !m.is_empty() => m,
            _ => {
                self.error(metrics_path, "metrics must be a non-empty object");
                return;
            }
        };

        for (key, metric) in metrics {
            let metric_path = make_path(&metrics_path, key);

            let Some(metric) = metric.as_object() else {
                self.error(&metric_path, "Metric entry must be an object");
                continue;
            };

            self.check_metric(&metric_path, metric);
        }
    }

    fn check_metric(&mut self, metric_path: &str, metric: &Map<String, Value>) {
        match metric.get("value") {
            None => self.error(metric_path, "Metric is missing required field 'value'"),
            // Value::Bool is its own variant, so booleans never pass as numbers
            Some(value) if !value.is_number() => self.error(
                make_path(metric_path, "value"),
                format!("Metric value must be numeric, got {}", json_type_name(value)),
            ),
            Some(_) => {}
        }

        for field in ["label", "unit"] {
            if let Some(value) = metric.get(field) {
                if !value.is_string() {
                    self.warning(
                        make_path(metric_path, field),
                        format!(
                            "Metric {} should be a string, got {}",
                            field,
                            json_type_name(value)
                        ),
                    );
                }
            }
        }
    }

    fn check_fabs(&mut self, province_path: &str, fabs: &Value) {
        let fabs_path = make_path(province_path, "fabs");

        let Some(items) = fabs.as_array() else {
            self.error(
                fabs_path,
                format!("fabs must be an array, got {}", json_type_name(fabs)),
            );
            return;
        };

        for (i, fab) in items.iter().enumerate() {
            let fab_path = format!("{}[{}]", fabs_path, i);

            let Some(fab) = fab.as_object() else {
                self.error(&fab_path, "Fab entry must be an object");
                continue;
            };

            if !fab.contains_key("name") {
                self.warning(&fab_path, "Fab is missing 'name'");
            }

            if let Some(capacity) = fab.get("capacity_kwpm") {
                if !capacity.is_number() {
                    self.warning(
                        make_path(&fab_path, "capacity_kwpm"),
                        format!(
                            "Fab capacity_kwpm should be numeric, got {}",
                            json_type_name(capacity)
                        ),
                    );
                }
            }
        }
    }

    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.issues.push(ValidationIssue::error(path, message));
    }

    fn warning(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.issues.push(ValidationIssue::warning(path, message));
    }
}

/// Creates a dotted path from prefix and field name.
fn make_path(prefix: &str, field: &str) -> String {
    format!("{}.{}", prefix, field)
}

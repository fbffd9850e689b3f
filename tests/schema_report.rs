//! Schema Report Tests
//!
//! Properties of the province validator:
//! - Well-formed datasets produce no issues
//! - Empty metrics and boolean values are errors
//! - Malformed entries are contained to a single error
//! - Validation is deterministic

use std::collections::BTreeMap;

use proptest::prelude::*;
use provmap::schema::{validate, IssueLevel, ValidationSummary};
use serde_json::{json, Map, Value};

// =============================================================================
// Strategies
// =============================================================================

fn metric_strategy() -> impl Strategy<Value = Value> {
    (
        -1.0e9..1.0e9f64,
        proptest::option::of("[A-Za-z ]{1,12}"),
        proptest::option::of("[a-z]{1,8}"),
    )
        .prop_map(|(value, label, unit)| {
            let mut metric = Map::new();
            metric.insert("value".into(), json!(value));
            if let Some(label) = label {
                metric.insert("label".into(), json!(label));
            }
            if let Some(unit) = unit {
                metric.insert("unit".into(), json!(unit));
            }
            Value::Object(metric)
        })
}

fn fab_strategy() -> impl Strategy<Value = Value> {
    ("[A-Z][a-z]{2,8} Fab [0-9]", proptest::option::of(0u32..500))
        .prop_map(|(name, capacity)| match capacity {
            Some(c) => json!({"name": name, "capacity_kwpm": c}),
            None => json!({"name": name}),
        })
}

fn province_strategy() -> impl Strategy<Value = Value> {
    (
        "[A-Z][a-z]{2,10}",
        "[\u{4e00}-\u{4e50}]{1,3}",
        prop::sample::select(vec!["North", "East", "South", "Southwest", "Northeast"]),
        prop::collection::btree_map("[a-z_]{1,10}", metric_strategy(), 1..5),
        prop::collection::vec(fab_strategy(), 0..3),
    )
        .prop_map(|(name_en, name_cn, region, metrics, fabs)| {
            json!({
                "name_en": name_en,
                "name_cn": name_cn,
                "region": region,
                "metrics": metrics,
                "fabs": fabs,
                "companies": []
            })
        })
}

fn dataset_strategy() -> impl Strategy<Value = BTreeMap<String, Value>> {
    prop::collection::btree_map("[1-6][0-9]{5}", province_strategy(), 0..8)
}

fn zhejiang() -> Value {
    json!({
        "name_en": "Zhejiang",
        "name_cn": "浙江",
        "region": "East",
        "metrics": {"gdp": {"value": 7.7, "unit": "trillion"}}
    })
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Well-formed datasets validate cleanly.
    #[test]
    fn prop_well_formed_dataset_is_ok(dataset in dataset_strategy()) {
        let count = dataset.len();
        let report = validate(&json!(dataset));

        prop_assert!(report.ok);
        prop_assert!(report.issues.is_empty());
        prop_assert_eq!(report.summary.provinces, count);
    }

    /// A boolean metric value is never accepted as numeric.
    #[test]
    fn prop_boolean_value_is_error(dataset in dataset_strategy(), flag in any::<bool>()) {
        prop_assume!(!dataset.is_empty());

        let mut value = json!(dataset);
        let (adcode, key) = {
            let (adcode, province) = value.as_object().unwrap().iter().next().unwrap();
            let key = province["metrics"].as_object().unwrap().keys().next().unwrap().clone();
            (adcode.clone(), key)
        };
        value[&adcode]["metrics"][&key]["value"] = json!(flag);

        let report = validate(&value);
        let path = format!("$.{}.metrics.{}.value", adcode, key);
        prop_assert!(!report.ok);
        prop_assert!(report
            .issues
            .iter()
            .any(|i| i.path == path && i.level == IssueLevel::Error));
    }

    /// Validating twice yields the same report.
    #[test]
    fn prop_validate_is_idempotent(dataset in dataset_strategy(), broken in any::<bool>()) {
        let mut value = json!(dataset);
        if broken {
            value["999999"] = json!({"metrics": {}, "fabs": "none"});
        }
        prop_assert_eq!(validate(&value), validate(&value));
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_zhejiang_scenario() {
    let report = validate(&json!({"330000": zhejiang()}));

    assert!(report.ok);
    assert_eq!(
        report.summary,
        ValidationSummary {
            provinces: 1,
            errors: 0,
            warnings: 0
        }
    );
    assert!(report.issues.is_empty());
}

#[test]
fn test_empty_metrics_is_error_at_metrics_path() {
    let mut province = zhejiang();
    province["metrics"] = json!({});

    let report = validate(&json!({"330000": province}));
    assert!(!report.ok);
    assert!(report
        .errors()
        .any(|i| i.path == "$.330000.metrics"));
}

#[test]
fn test_malformed_entry_is_contained() {
    let report = validate(&json!({
        "110000": "bad",
        "330000": zhejiang()
    }));

    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.issues[0].path, "$.110000");
    assert!(report.issues[0].is_error());
    assert_eq!(report.summary.provinces, 2);
    assert_eq!(report.summary.errors, 1);
}

#[test]
fn test_non_object_top_level() {
    for value in [json!(null), json!([]), json!("provinces"), json!(42)] {
        let report = validate(&value);
        assert!(!report.ok);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].path, "$");
    }
}

#[test]
fn test_warnings_do_not_fail_report() {
    let mut province = zhejiang();
    province["metrics"]["gdp"]["unit"] = json!(1);
    province["fabs"] = json!([{"capacity_kwpm": "30"}]);

    let report = validate(&json!({"330000": province}));
    assert!(report.ok);
    assert_eq!(report.summary.warnings, 3);
    assert_eq!(report.summary.errors, 0);
}

#[test]
fn test_bundled_sample_data_is_valid() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data/provinces.json");
    let content = std::fs::read_to_string(path).unwrap();
    let value: Value = serde_json::from_str(&content).unwrap();

    let report = validate(&value);
    assert!(report.ok, "sample data issues: {:?}", report.issues);
    assert!(report.issues.is_empty());
}

//! Company summary statistics
//!
//! Revenue rules for `revenue_b_cny` (billions of CNY):
//! - missing, `null`, `false`, `""`, `[]`, `{}` count as zero
//! - JSON numbers are taken as-is
//! - strings holding a finite float (whitespace trimmed) are parsed
//! - anything else fails the whole summary with a `Format` error
//!
//! This is stricter than a plain truthiness-then-float coercion on purpose:
//! `true` is not read as 1.0, and `"inf"`/`"nan"` are not read as floats.
//!
//! Counts are list lengths; non-object entries are counted but carry no
//! revenue.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::data::{json_type_name, DataError, DataResult};
use crate::observability::Event;

/// Revenue field of a company record
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Revenue {
    /// Absent or falsy; sums as zero
    Missing,
    Reported(f64),
}

impl Revenue {
    /// Interprets the `revenue_b_cny` field of a record.
    pub fn parse(value: Option<&Value>) -> Result<Self, String> {
        match value {
            None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(Revenue::Missing),
            Some(Value::String(s)) if s.is_empty() => Ok(Revenue::Missing),
            Some(Value::Array(items)) if items.is_empty() => Ok(Revenue::Missing),
            Some(Value::Object(map)) if map.is_empty() => Ok(Revenue::Missing),
            Some(Value::Number(n)) => n
                .as_f64()
                .map(Revenue::Reported)
                .ok_or_else(|| format!("revenue_b_cny {} is out of range", n)),
            Some(Value::String(s)) => s
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(Revenue::Reported)
                .ok_or_else(|| format!("revenue_b_cny '{}' is not numeric", s)),
            Some(other) => Err(format!(
                "revenue_b_cny must be numeric, got {}",
                json_type_name(other)
            )),
        }
    }

    /// Amount in billions of CNY
    pub fn amount(&self) -> f64 {
        match self {
            Revenue::Missing => 0.0,
            Revenue::Reported(v) => *v,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Revenue::Missing)
    }
}

/// Counts and revenue sums over both company groups
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanySummary {
    pub semi_count: usize,
    pub ai_count: usize,
    pub total_count: usize,
    pub semi_revenue_b_cny: f64,
    pub ai_revenue_b_cny: f64,
    pub total_revenue_b_cny: f64,
}

#[derive(Debug, Default)]
struct GroupTotals {
    count: usize,
    revenue: f64,
    missing_revenue: usize,
}

fn group_totals(group: &str, records: &[Value]) -> DataResult<GroupTotals> {
    let mut totals = GroupTotals {
        count: records.len(),
        ..Default::default()
    };

    for (index, record) in records.iter().enumerate() {
        let Some(obj) = record.as_object() else {
            continue;
        };

        let revenue = Revenue::parse(obj.get("revenue_b_cny"))
            .map_err(|reason| DataError::format(group, index, reason))?;

        if revenue.is_missing() {
            totals.missing_revenue += 1;
        }
        totals.revenue += revenue.amount();
    }

    Ok(totals)
}

/// Summarizes the semiconductor and AI company lists.
///
/// # Errors
///
/// Returns `DataError::Format` naming the group and record index of the
/// first revenue value that cannot be read as a number.
pub fn summarize(semi_companies: &[Value], ai_companies: &[Value]) -> DataResult<CompanySummary> {
    let semi = group_totals("semi_companies", semi_companies)?;
    let ai = group_totals("ai_companies", ai_companies)?;

    if semi.missing_revenue + ai.missing_revenue > 0 {
        tracing::debug!(
            event = Event::RevenueMissing.as_str(),
            semi = semi.missing_revenue,
            ai = ai.missing_revenue
        );
    }

    let summary = CompanySummary {
        semi_count: semi.count,
        ai_count: ai.count,
        total_count: semi.count + ai.count,
        semi_revenue_b_cny: semi.revenue,
        ai_revenue_b_cny: ai.revenue,
        total_revenue_b_cny: semi.revenue + ai.revenue,
    };

    tracing::debug!(
        event = Event::SummaryComputed.as_str(),
        total_count = summary.total_count,
        total_revenue_b_cny = summary.total_revenue_b_cny
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataErrorCode;
    use serde_json::json;

    #[test]
    fn test_empty_inputs() {
        let summary = summarize(&[], &[]).unwrap();
        assert_eq!(summary, CompanySummary::default());
    }

    #[test]
    fn test_basic_sums() {
        let summary =
            summarize(&[json!({"revenue_b_cny": 2.5})], &[json!({"revenue_b_cny": 1.5})]).unwrap();
        assert_eq!(summary.semi_count, 1);
        assert_eq!(summary.ai_count, 1);
        assert_eq!(summary.total_count, 2);
        assert_eq!(summary.semi_revenue_b_cny, 2.5);
        assert_eq!(summary.ai_revenue_b_cny, 1.5);
        assert_eq!(summary.total_revenue_b_cny, 4.0);
    }

    #[test]
    fn test_missing_and_falsy_revenue_is_zero() {
        let semi = [
            json!({"name": "A"}),
            json!({"name": "B", "revenue_b_cny": null}),
            json!({"name": "C", "revenue_b_cny": 0}),
            json!({"name": "D", "revenue_b_cny": ""}),
            json!({"name": "E", "revenue_b_cny": false}),
            json!({"name": "F", "revenue_b_cny": 3}),
        ];
        let summary = summarize(&semi, &[]).unwrap();
        assert_eq!(summary.semi_count, 6);
        assert_eq!(summary.semi_revenue_b_cny, 3.0);
    }

    #[test]
    fn test_non_object_entries_counted_without_revenue() {
        let ai = [json!("Zhipu"), json!(null), json!({"revenue_b_cny": 1.25})];
        let summary = summarize(&[], &ai).unwrap();
        assert_eq!(summary.ai_count, 3);
        assert_eq!(summary.ai_revenue_b_cny, 1.25);
    }

    #[test]
    fn test_numeric_string_is_coerced() {
        let summary = summarize(&[json!({"revenue_b_cny": " 7.5 "})], &[]).unwrap();
        assert_eq!(summary.semi_revenue_b_cny, 7.5);
    }

    #[test]
    fn test_non_numeric_revenue_fails() {
        let semi = [json!({"revenue_b_cny": 1}), json!({"revenue_b_cny": "n/a"})];
        let err = summarize(&semi, &[]).unwrap_err();
        assert_eq!(err.code(), DataErrorCode::Format);
        assert!(err.to_string().contains("record 1 in semi_companies"));

        let err = summarize(&[], &[json!({"revenue_b_cny": true})]).unwrap_err();
        assert!(err.to_string().contains("ai_companies"));
    }

    #[test]
    fn test_non_finite_string_rejected() {
        assert!(Revenue::parse(Some(&json!("NaN"))).is_err());
        assert!(Revenue::parse(Some(&json!("inf"))).is_err());
    }

    #[test]
    fn test_revenue_distinguishes_missing_from_zero() {
        assert_eq!(Revenue::parse(None).unwrap(), Revenue::Missing);
        assert_eq!(Revenue::parse(Some(&json!(0))).unwrap(), Revenue::Reported(0.0));
        assert_eq!(Revenue::parse(Some(&json!([]))).unwrap(), Revenue::Missing);
        assert!(Revenue::parse(Some(&json!([1]))).is_err());
    }

    #[test]
    fn test_inputs_untouched() {
        let semi = vec![json!({"revenue_b_cny": "2"})];
        let before = semi.clone();
        summarize(&semi, &[]).unwrap();
        assert_eq!(semi, before);
    }

    #[test]
    fn test_summary_json_keys() {
        let json = serde_json::to_value(summarize(&[], &[]).unwrap()).unwrap();
        for key in [
            "semi_count",
            "ai_count",
            "total_count",
            "semi_revenue_b_cny",
            "ai_revenue_b_cny",
            "total_revenue_b_cny",
        ] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
    }
}

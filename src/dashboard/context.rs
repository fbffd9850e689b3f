//! Query façade over the loaded datasets

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use super::report_cache::ReportCache;
use crate::aggregate::{self, CompanySummary};
use crate::data::{as_list, DataConfig, DataLoader, DataResult, FileSource, Province, ResourceId};
use crate::observability::Event;
use crate::schema::ValidationReport;

/// A province found by adcode
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProvinceEntry {
    pub adcode: String,
    /// Raw entry as stored in the dataset
    pub data: Value,
}

impl ProvinceEntry {
    /// Typed view for presentation; None if the entry is not an object
    pub fn view(&self) -> Option<Province> {
        Province::from_value(&self.adcode, &self.data)
    }
}

/// Both company lists plus their summary
#[derive(Debug, Clone, Serialize)]
pub struct CompanyProfiles {
    pub semi_companies: Arc<Value>,
    pub ai_companies: Arc<Value>,
    pub summary: CompanySummary,
}

/// Shared, read-only state behind every request.
pub struct DashboardContext {
    loader: DataLoader,
    reports: ReportCache,
}

impl DashboardContext {
    pub fn new(loader: DataLoader) -> Self {
        Self {
            loader,
            reports: ReportCache::new(),
        }
    }

    /// Context reading datasets from the configured data directory
    pub fn from_config(config: &DataConfig) -> Self {
        Self::new(DataLoader::new(FileSource::new(config.clone())))
    }

    pub fn loader(&self) -> &DataLoader {
        &self.loader
    }

    /// Loads every dataset now so missing or malformed files surface at
    /// startup rather than on the first request.
    pub fn preload(&self) -> DataResult<()> {
        for id in ResourceId::ALL {
            self.loader.load(id)?;
        }
        Ok(())
    }

    /// Full province mapping
    pub fn provinces(&self) -> DataResult<Arc<Value>> {
        self.loader.provinces()
    }

    /// Looks up one province.
    ///
    /// Returns `Ok(None)` when the adcode is absent or its stored value is
    /// empty (`null`, `false`, `0`, `""`, `[]`, `{}`).
    pub fn province(&self, adcode: &str) -> DataResult<Option<ProvinceEntry>> {
        let provinces = self.loader.provinces()?;

        let entry = provinces
            .get(adcode)
            .filter(|data| !is_empty_value(data))
            .map(|data| ProvinceEntry {
                adcode: adcode.to_string(),
                data: data.clone(),
            });

        if entry.is_none() {
            tracing::debug!(event = Event::ProvinceNotFound.as_str(), adcode);
        }
        Ok(entry)
    }

    /// Validation report of the province dataset, computed once
    pub fn schema_report(&self) -> DataResult<Arc<ValidationReport>> {
        let provinces = self.loader.provinces()?;
        Ok(self.reports.get_or_compute(&provinces))
    }

    /// Counts and revenue sums over both company lists
    pub fn company_summary(&self) -> DataResult<CompanySummary> {
        let semi = self.loader.semi_companies()?;
        let ai = self.loader.ai_companies()?;
        aggregate::summarize(as_list(&semi), as_list(&ai))
    }

    /// Company lists with their summary
    pub fn company_profiles(&self) -> DataResult<CompanyProfiles> {
        let semi_companies = self.loader.semi_companies()?;
        let ai_companies = self.loader.ai_companies()?;
        let summary = aggregate::summarize(as_list(&semi_companies), as_list(&ai_companies))?;

        Ok(CompanyProfiles {
            semi_companies,
            ai_companies,
            summary,
        })
    }
}

/// Values that count as "no data" for a lookup
fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DataErrorCode, MemorySource};
    use serde_json::json;

    fn context() -> DashboardContext {
        let source = MemorySource::new()
            .with(
                ResourceId::Provinces,
                json!({
                    "110000": {
                        "name_en": "Beijing",
                        "name_cn": "北京",
                        "region": "North",
                        "metrics": {"gdp": {"value": 4.4}}
                    },
                    "120000": {},
                    "130000": null
                }),
            )
            .with(
                ResourceId::SemiCompanies,
                json!([{"name": "SMIC", "revenue_b_cny": 45.2}]),
            )
            .with(
                ResourceId::AiCompanies,
                json!({"companies": [{"name": "Zhipu", "revenue_b_cny": 0.3}, {"name": "Moonshot"}]}),
            );
        DashboardContext::new(DataLoader::new(source))
    }

    #[test]
    fn test_province_found() {
        let ctx = context();
        let entry = ctx.province("110000").unwrap().unwrap();
        assert_eq!(entry.adcode, "110000");
        assert_eq!(entry.data["name_en"], "Beijing");
        assert_eq!(entry.view().unwrap().display_name(), "Beijing");
    }

    #[test]
    fn test_province_not_found() {
        let ctx = context();
        assert!(ctx.province("999999").unwrap().is_none());
    }

    #[test]
    fn test_empty_province_is_not_found() {
        let ctx = context();
        assert!(ctx.province("120000").unwrap().is_none());
        assert!(ctx.province("130000").unwrap().is_none());
    }

    #[test]
    fn test_schema_report_cached() {
        let ctx = context();
        let first = ctx.schema_report().unwrap();
        let second = ctx.schema_report().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.summary.provinces, 3);
        assert!(!first.ok);
    }

    #[test]
    fn test_company_profiles() {
        let ctx = context();
        let profiles = ctx.company_profiles().unwrap();
        assert_eq!(profiles.summary.semi_count, 1);
        assert_eq!(profiles.summary.ai_count, 2);
        assert_eq!(profiles.summary.total_count, 3);
        assert_eq!(profiles.ai_companies[0]["name"], "Zhipu");

        let json = serde_json::to_value(&profiles).unwrap();
        assert!(json["semi_companies"].is_array());
        assert!(json["ai_companies"].is_array());
        assert_eq!(json["summary"]["total_count"], 3);
    }

    #[test]
    fn test_missing_dataset_propagates() {
        let ctx = DashboardContext::new(DataLoader::new(MemorySource::new()));
        assert_eq!(ctx.province("110000").unwrap_err().code(), DataErrorCode::FileAccess);
        assert!(ctx.preload().is_err());
    }

    #[test]
    fn test_preload() {
        let ctx = context();
        ctx.preload().unwrap();
        for id in ResourceId::ALL {
            assert!(ctx.loader().is_loaded(id));
        }
    }

    #[test]
    fn test_is_empty_value() {
        assert!(is_empty_value(&json!(0)));
        assert!(is_empty_value(&json!("")));
        assert!(is_empty_value(&json!([])));
        assert!(!is_empty_value(&json!({"a": 1})));
        assert!(!is_empty_value(&json!(true)));
    }
}

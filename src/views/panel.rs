//! Province panel view model

use serde::Serialize;

use crate::data::{Metric, Province};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricRow {
    pub key: String,
    pub label: String,
    /// Formatted value, "n/a" when not numeric
    pub value: String,
    pub unit: Option<String>,
}

impl From<&Metric> for MetricRow {
    fn from(metric: &Metric) -> Self {
        Self {
            key: metric.key.clone(),
            label: metric.display_label().to_string(),
            value: metric.value.map(format_number).unwrap_or_else(|| "n/a".into()),
            unit: metric.unit.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FabRow {
    pub name: String,
    pub capacity_kwpm: Option<String>,
}

/// Everything the panel template shows for a province
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProvincePanel {
    pub adcode: String,
    pub title: String,
    pub name_en: Option<String>,
    pub name_cn: Option<String>,
    pub region: Option<String>,
    pub metrics: Vec<MetricRow>,
    pub fabs: Vec<FabRow>,
    pub companies: Vec<String>,
    pub total_capacity_kwpm: Option<String>,
}

impl From<&Province> for ProvincePanel {
    fn from(province: &Province) -> Self {
        let fabs: Vec<FabRow> = province
            .fabs
            .iter()
            .map(|fab| FabRow {
                name: fab.name.clone().unwrap_or_else(|| "Unnamed fab".into()),
                capacity_kwpm: fab.capacity_kwpm.map(format_number),
            })
            .collect();

        let total_capacity_kwpm = province
            .fabs
            .iter()
            .any(|fab| fab.capacity_kwpm.is_some())
            .then(|| format_number(province.total_capacity_kwpm()));

        Self {
            adcode: province.adcode.clone(),
            title: province.display_name().to_string(),
            name_en: province.name_en.clone(),
            name_cn: province.name_cn.clone(),
            region: province.region.clone(),
            metrics: province.metrics.iter().map(MetricRow::from).collect(),
            fabs,
            companies: province.companies.clone(),
            total_capacity_kwpm,
        }
    }
}

impl ProvincePanel {
    /// Panel for an entry with no readable fields: the adcode and nothing else
    pub fn placeholder(adcode: &str) -> Self {
        Self {
            adcode: adcode.to_string(),
            title: adcode.to_string(),
            name_en: None,
            name_cn: None,
            region: None,
            metrics: Vec::new(),
            fabs: Vec::new(),
            companies: Vec::new(),
            total_capacity_kwpm: None,
        }
    }
}

/// Formats a number without a trailing ".0" for whole values
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

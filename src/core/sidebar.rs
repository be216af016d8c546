use crate::core::directory::CountryGroups;
use serde::Serialize;

const PREVIEW_NAMES: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountrySummary {
    pub country: String,
    pub count: usize,
    pub preview: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DirectoryStats {
    pub founders: usize,
    pub countries: usize,
}

impl DirectoryStats {
    pub fn from_groups(groups: &CountryGroups) -> Self {
        Self {
            founders: groups.total_records(),
            countries: groups.len(),
        }
    }

    pub fn worldwide(&self) -> String {
        format!("{} founders worldwide", self.founders)
    }

    pub fn headline(&self) -> String {
        format!("{} founders from {} countries", self.founders, self.countries)
    }
}

/// 側欄列表：依人數遞減排序，人數相同時保留首次出現的順序
pub fn country_summaries(groups: &CountryGroups) -> Vec<CountrySummary> {
    let mut summaries: Vec<CountrySummary> = groups
        .iter()
        .map(|(country, records)| {
            let mut preview = records
                .iter()
                .take(PREVIEW_NAMES)
                .map(|record| record.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            if records.len() > PREVIEW_NAMES {
                preview.push_str(&format!(" +{} more", records.len() - PREVIEW_NAMES));
            }

            CountrySummary {
                country: country.to_string(),
                count: records.len(),
                preview,
            }
        })
        .collect();

    summaries.sort_by(|a, b| b.count.cmp(&a.count));
    summaries
}

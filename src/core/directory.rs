use crate::domain::model::FounderRecord;
use crate::domain::ports::DirectorySource;
use crate::utils::error::{GlobeError, Result};
use crate::utils::validation::is_valid_lng_lat;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Records grouped by country. Country order follows first appearance in the input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountryGroups {
    order: Vec<String>,
    groups: HashMap<String, Vec<FounderRecord>>,
}

impl CountryGroups {
    pub fn get(&self, country: &str) -> Option<&[FounderRecord]> {
        self.groups.get(country).map(Vec::as_slice)
    }

    pub fn contains(&self, country: &str) -> bool {
        self.groups.contains_key(country)
    }

    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[FounderRecord])> {
        self.order
            .iter()
            .filter_map(|country| self.get(country).map(|records| (country.as_str(), records)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn total_records(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

pub fn validate_coordinates(record: &FounderRecord) -> bool {
    is_valid_lng_lat(record.coordinates.lng(), record.coordinates.lat())
}

/// 依國家分組；同一國家內保持原始順序，不做任何去重
pub fn group_by_country(records: &[FounderRecord]) -> CountryGroups {
    let mut grouped = CountryGroups::default();

    for record in records {
        if !validate_coordinates(record) {
            report_invalid(record);
            continue;
        }

        match grouped.groups.get_mut(&record.country) {
            Some(group) => group.push(record.clone()),
            None => {
                grouped.order.push(record.country.clone());
                grouped
                    .groups
                    .insert(record.country.clone(), vec![record.clone()]);
            }
        }
    }

    grouped
}

fn report_invalid(record: &FounderRecord) {
    let diagnostic = GlobeError::InvalidCoordinate {
        id: record.id,
        lng: record.coordinates.lng(),
        lat: record.coordinates.lat(),
    };
    tracing::warn!("⚠️ Skipping {}: {}", record.name, diagnostic);
}

/// The load-time-constant set of founders. Only records with valid coordinates are kept.
#[derive(Debug)]
pub struct FounderDirectory {
    records: Vec<FounderRecord>,
    skipped: usize,
    groups: OnceLock<CountryGroups>,
}

impl FounderDirectory {
    pub fn from_records(records: Vec<FounderRecord>) -> Self {
        let total = records.len();
        let mut seen_ids = HashSet::new();
        let mut valid = Vec::with_capacity(total);

        for record in records {
            if !validate_coordinates(&record) {
                report_invalid(&record);
                continue;
            }
            if !seen_ids.insert(record.id) {
                tracing::debug!("Founder id {} appears more than once, keeping both", record.id);
            }
            valid.push(record);
        }

        let skipped = total - valid.len();
        tracing::debug!("Directory holds {} founders ({} skipped)", valid.len(), skipped);

        Self {
            records: valid,
            skipped,
            groups: OnceLock::new(),
        }
    }

    pub fn records(&self) -> &[FounderRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 載入時被略過的筆數（座標不合法）
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn find(&self, id: u32) -> Option<&FounderRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Computed on first call, then reused.
    pub fn groups(&self) -> &CountryGroups {
        self.groups.get_or_init(|| group_by_country(&self.records))
    }
}

pub async fn load_directory<S: DirectorySource + ?Sized>(source: &S) -> Result<FounderDirectory> {
    tracing::info!("📥 Loading founders from {}", source.name());
    let records = source.load().await?;
    tracing::debug!("Source returned {} records", records.len());

    let directory = FounderDirectory::from_records(records);
    if directory.skipped() > 0 {
        tracing::warn!(
            "⚠️ {} founder(s) with invalid coordinates were skipped",
            directory.skipped()
        );
    }
    tracing::info!(
        "✅ Loaded {} founders from {} countries",
        directory.len(),
        directory.groups().len()
    );

    Ok(directory)
}

//! Calculation-method catalog with a fixed fallback

use crate::api::types::MethodRecord;
use crate::api::ApiClient;
use crate::error::Result;
use log::warn;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationMethod {
    pub id: i64,
    pub name: String,
}

/// Load the catalog; any failure is absorbed into the fallback set.
/// The result is always sorted ascending by id.
pub fn load_catalog(client: &ApiClient) -> Vec<CalculationMethod> {
    catalog_from_result(client.methods())
}

/// Build the sorted catalog from a raw fetch result
pub fn catalog_from_result(
    result: Result<HashMap<String, MethodRecord>>,
) -> Vec<CalculationMethod> {
    let mut catalog = match result {
        Ok(records) => from_records(records),
        Err(e) => {
            warn!("Method catalog fetch failed, using fallback: {}", e);
            fallback_catalog()
        }
    };

    if catalog.is_empty() {
        warn!("Method catalog was empty, using fallback");
        catalog = fallback_catalog();
    }

    catalog.sort_by_key(|method| method.id);
    catalog
}

/// Catalog entries without an id or a name (e.g. CUSTOM) are skipped
fn from_records(records: HashMap<String, MethodRecord>) -> Vec<CalculationMethod> {
    records
        .into_values()
        .filter_map(|record| match (record.id, record.name) {
            (Some(id), Some(name)) => Some(CalculationMethod { id, name }),
            _ => None,
        })
        .collect()
}

/// Well-known methods offered when the endpoint is unreachable
fn fallback_catalog() -> Vec<CalculationMethod> {
    vec![
        CalculationMethod {
            id: 3,
            name: "Muslim World League".to_string(),
        },
        CalculationMethod {
            id: 2,
            name: "Islamic Society of North America".to_string(),
        },
        CalculationMethod {
            id: 5,
            name: "Egyptian General Authority of Survey".to_string(),
        },
        CalculationMethod {
            id: 4,
            name: "Umm Al-Qura University, Makkah".to_string(),
        },
    ]
}

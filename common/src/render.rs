//! Render model of the mapping page.
//!
//! These functions turn backend data into a plain description of rows and
//! cells. The frontend maps the description onto Yew markup; keeping it here
//! lets the role gate, the empty state and timestamp handling be tested
//! without a browser.

use std::collections::HashSet;

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};

use crate::model::{Mapping, Market, Role, Store};

/// Number of columns of the mappings table, action column included.
pub const TABLE_COLUMNS: usize = 5;
pub const EMPTY_TABLE_TEXT: &str = "No active mappings found";
pub const MARKET_PROMPT: &str = "Select Market";
pub const STORE_PROMPT: &str = "Select Store";
pub const VIEW_ONLY_TEXT: &str = "View only";

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Progress of a network-backed region of the page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Loaded(T),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// The "create mapping" row: one select per reference list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRow {
    pub markets: Vec<SelectOption>,
    pub stores: Vec<SelectOption>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    Delete { store_name: String },
    ViewOnly,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingRow {
    pub store: String,
    pub market: String,
    pub updated_by: String,
    pub updated_at: String,
    pub action: RowAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRow {
    Mapping(MappingRow),
    /// Single cell spanning `colspan` columns (empty set).
    Placeholder { text: String, colspan: usize },
    /// Single cell spanning `colspan` columns (load failure).
    Error { text: String, colspan: usize },
}

/// Full body of the mappings table. Each render replaces the previous body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingsTable {
    pub rows: Vec<TableRow>,
}

pub fn selection_row(stores: &[Store], markets: &[Market]) -> SelectionRow {
    let prompt = |label: &str| SelectOption {
        value: String::new(),
        label: label.to_string(),
    };

    let markets = std::iter::once(prompt(MARKET_PROMPT))
        .chain(markets.iter().map(|m| SelectOption {
            value: m.market_id.to_string(),
            label: format!("{} (ID: {})", m.market_name, m.market_id),
        }))
        .collect();

    let stores = std::iter::once(prompt(STORE_PROMPT))
        .chain(stores.iter().map(|s| SelectOption {
            value: s.estation_name.clone(),
            label: s.estation_name.clone(),
        }))
        .collect();

    SelectionRow { markets, stores }
}

/// Builds the mappings table for `role`. `zone` gives the viewer's UTC
/// offset at a given instant, so rows on either side of a daylight saving
/// change each show their own local time.
///
/// Only the first mapping of each store is kept: a store has at most one
/// active mapping, and rows are keyed by store in the page.
pub fn mappings_table<Z>(mappings: &[Mapping], role: Role, zone: Z) -> MappingsTable
where
    Z: Fn(DateTime<Utc>) -> FixedOffset,
{
    if mappings.is_empty() {
        return MappingsTable {
            rows: vec![TableRow::Placeholder {
                text: EMPTY_TABLE_TEXT.to_string(),
                colspan: TABLE_COLUMNS,
            }],
        };
    }

    let mut seen = HashSet::new();
    let rows = mappings
        .iter()
        .filter(|m| {
            let first = seen.insert(m.estation_name.as_str());
            if !first {
                log::warn!("dropping duplicate mapping for store {}", m.estation_name);
            }
            first
        })
        .map(|m| {
            let action = if role.is_admin() {
                RowAction::Delete {
                    store_name: m.estation_name.clone(),
                }
            } else {
                RowAction::ViewOnly
            };
            TableRow::Mapping(MappingRow {
                store: m.estation_name.clone(),
                market: m.market_id.to_string(),
                updated_by: m.updated_by.clone(),
                updated_at: localize_timestamp(&m.updated_at, &zone),
                action,
            })
        })
        .collect();

    MappingsTable { rows }
}

pub fn error_table(message: &str) -> MappingsTable {
    MappingsTable {
        rows: vec![TableRow::Error {
            text: message.to_string(),
            colspan: TABLE_COLUMNS,
        }],
    }
}

/// Renders an absolute timestamp at the offset `zone` reports for it.
///
/// Accepts RFC 3339, RFC 2822 (HTTP dates included) and offset-less ISO
/// forms, which are taken as UTC. Anything else is returned unchanged.
pub fn localize_timestamp<Z>(raw: &str, zone: Z) -> String
where
    Z: Fn(DateTime<Utc>) -> FixedOffset,
{
    match parse_timestamp(raw) {
        Some(instant) => {
            let instant = instant.with_timezone(&Utc);
            instant
                .with_timezone(&zone(instant))
                .format(DISPLAY_FORMAT)
                .to_string()
        }
        None => raw.to_string(),
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant);
    }
    if let Ok(instant) = DateTime::parse_from_rfc2822(raw) {
        return Some(instant);
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc().fixed_offset())
}

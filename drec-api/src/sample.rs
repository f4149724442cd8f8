//! Built-in sample datasets served when the backing store is unreachable
//!
//! List read paths never fail hard: on a database error the handlers fall
//! back to these fixed rows with `mock: true` so callers can tell the data
//! is non-authoritative.

use chrono::Utc;
use drec_common::types::{NameList, NameRecord, ReleaseList, ReleaseRecord};

fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

/// Fixed two-release sample window
pub fn sample_releases(page: i64, limit: i64) -> ReleaseList {
    let items = vec![
        ReleaseRecord {
            id: 1,
            title: "Summer Vibes".to_string(),
            artist: "K. Mahto".to_string(),
            status: "Approved".to_string(),
            date: today(),
        },
        ReleaseRecord {
            id: 2,
            title: "City Lights".to_string(),
            artist: "R. Sharma".to_string(),
            status: "In Review".to_string(),
            date: today(),
        },
    ];
    let total = items.len() as i64;

    ReleaseList {
        items,
        page,
        limit,
        total,
        mock: true,
    }
}

pub fn sample_artists(page: i64, limit: i64) -> NameList {
    sample_names(&["Kuldeep Mahto", "Riya Sharma"], page, limit)
}

pub fn sample_labels(page: i64, limit: i64) -> NameList {
    sample_names(&["Swar Digital", "Independent"], page, limit)
}

fn sample_names(names: &[&str], page: i64, limit: i64) -> NameList {
    let items: Vec<NameRecord> = names
        .iter()
        .enumerate()
        .map(|(i, name)| NameRecord {
            id: (i + 1) as i64,
            name: name.to_string(),
        })
        .collect();
    let total = items.len() as i64;

    NameList {
        items,
        page,
        limit,
        total,
        mock: true,
    }
}

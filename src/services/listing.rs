// src/services/listing.rs
// DOCUMENTATION: Grouped listing and show-time bucketing
// PURPOSE: Pure helpers shared by the venue and artist services

use crate::models::{Artist, ListingEntry, Scheduled, ShowSlot, Venue};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Something that lives in a (city, state) area
pub trait Located {
    fn city(&self) -> &str;
    fn state(&self) -> &str;
}

impl Located for Venue {
    fn city(&self) -> &str {
        &self.city
    }

    fn state(&self) -> &str {
        &self.state
    }
}

impl Located for Artist {
    fn city(&self) -> &str {
        &self.city
    }

    fn state(&self) -> &str {
        &self.state
    }
}

/// One (city, state) group produced by `group_by_area`
#[derive(Debug, Clone, PartialEq)]
pub struct AreaGroup<T> {
    pub city: String,
    pub state: String,
    pub members: Vec<T>,
}

/// Group rows into areas in a single pass.
///
/// Input must already be sorted by (state, city): a new group starts whenever
/// the pair differs from the previous row, so unsorted input produces split
/// groups. Members keep their input order. Empty input yields no groups.
pub fn group_by_area<T: Located>(rows: Vec<T>) -> Vec<AreaGroup<T>> {
    let mut groups: Vec<AreaGroup<T>> = Vec::new();

    for row in rows {
        match groups.last_mut() {
            Some(current) if current.city == row.city() && current.state == row.state() => {
                current.members.push(row);
            }
            _ => groups.push(AreaGroup {
                city: row.city().to_string(),
                state: row.state().to_string(),
                members: vec![row],
            }),
        }
    }

    groups
}

/// A show is upcoming when it starts strictly after `now`.
/// Everything else, including a show starting exactly at `now`, is past.
pub fn is_upcoming(start_time: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    start_time > now
}

/// Split shows into (past, upcoming), preserving order within each half
pub fn partition_shows<S: Scheduled>(shows: Vec<S>, now: DateTime<Utc>) -> (Vec<S>, Vec<S>) {
    let (upcoming, past): (Vec<S>, Vec<S>) = shows
        .into_iter()
        .partition(|s| is_upcoming(s.start_time(), now));
    (past, upcoming)
}

/// Count upcoming shows per owner (venue or artist) id
pub fn count_upcoming(slots: &[ShowSlot], now: DateTime<Utc>) -> HashMap<i32, usize> {
    let mut counts = HashMap::new();
    for slot in slots {
        if is_upcoming(slot.start_time, now) {
            *counts.entry(slot.owner_id).or_insert(0) += 1;
        }
    }
    counts
}

/// Listing row for one venue or artist, annotated with its upcoming count
pub fn listing_entry(id: i32, name: &str, upcoming: &HashMap<i32, usize>) -> ListingEntry {
    ListingEntry {
        id,
        name: name.to_string(),
        num_upcoming_shows: upcoming.get(&id).copied().unwrap_or(0),
    }
}

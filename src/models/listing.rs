// src/models/listing.rs
// DOCUMENTATION: Shared DTOs for grouped listings and name search
// PURPOSE: Response shapes common to venues and artists

use serde::{Deserialize, Serialize};

/// One venue or artist inside a listing or search result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingEntry {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: usize,
}

/// Query string for GET /venues/search and GET /artists/search
#[derive(Debug, Deserialize)]
pub struct NameSearchQuery {
    /// Case-insensitive substring of the name
    #[serde(default)]
    pub search_term: String,

    /// Page number (1-based)
    pub page: Option<i64>,
}

/// Paginated name search response
/// DOCUMENTATION: `count` is the full match count, `data` the current page
#[derive(Debug, Serialize)]
pub struct NameSearchResponse {
    pub success: bool,
    pub count: usize,
    pub page: i64,
    pub search_term: String,
    pub data: Vec<ListingEntry>,
}

/// A (city, state) group of venues
#[derive(Debug, Serialize)]
pub struct VenueArea {
    pub city: String,
    pub state: String,
    pub venues: Vec<ListingEntry>,
}

/// A (city, state) group of artists
#[derive(Debug, Serialize)]
pub struct ArtistArea {
    pub city: String,
    pub state: String,
    pub artists: Vec<ListingEntry>,
}

// src/services/artist_service.rs
// DOCUMENTATION: Business logic for artists
// PURPOSE: Same listing/search/detail shape as venues, keyed on artist_id

use crate::db::{ArtistRepository, ShowRepository};
use crate::errors::ListingsError;
use crate::models::{
    paginate, ArtistArea, ArtistDetailResponse, ArtistResponse, CreateArtistRequest,
    NameSearchResponse, UpdateArtistRequest,
};
use crate::services::listing::{count_upcoming, group_by_area, listing_entry, partition_shows};
use chrono::Utc;
use sqlx::PgPool;

pub struct ArtistService;

impl ArtistService {
    /// Artists grouped by (state, city) with upcoming show counts
    pub async fn list_areas(pool: &PgPool) -> Result<Vec<ArtistArea>, ListingsError> {
        let now = Utc::now();
        let artists = ArtistRepository::list_by_area(pool).await?;
        let slots = ShowRepository::artist_slots(pool, None).await?;
        let upcoming = count_upcoming(&slots, now);

        let areas = group_by_area(artists)
            .into_iter()
            .map(|group| ArtistArea {
                city: group.city,
                state: group.state,
                artists: group
                    .members
                    .iter()
                    .map(|a| listing_entry(a.id, &a.name, &upcoming))
                    .collect(),
            })
            .collect();

        Ok(areas)
    }

    pub async fn search(
        pool: &PgPool,
        term: &str,
        page: i64,
    ) -> Result<NameSearchResponse, ListingsError> {
        let now = Utc::now();
        let matches = ArtistRepository::search_by_name(pool, term).await?;
        let count = matches.len();
        let current = paginate(matches, page);

        let ids: Vec<i32> = current.iter().map(|a| a.id).collect();
        let slots = if ids.is_empty() {
            Vec::new()
        } else {
            ShowRepository::artist_slots(pool, Some(&ids)).await?
        };
        let upcoming = count_upcoming(&slots, now);

        log::info!(
            "Artist search '{}': {} matches, {} on page {}",
            term,
            count,
            current.len(),
            page
        );

        Ok(NameSearchResponse {
            success: true,
            count,
            page,
            search_term: term.to_string(),
            data: current
                .iter()
                .map(|a| listing_entry(a.id, &a.name, &upcoming))
                .collect(),
        })
    }

    /// Artist page; shows carry venue details instead of artist details
    pub async fn get_artist(pool: &PgPool, id: i32) -> Result<ArtistDetailResponse, ListingsError> {
        let artist = ArtistRepository::get_by_id(pool, id).await?;
        let shows = ShowRepository::shows_by_artist(pool, id).await?;
        let (past_shows, upcoming_shows) = partition_shows(shows, Utc::now());

        Ok(ArtistDetailResponse {
            artist: artist.to_response(),
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        })
    }

    pub async fn create_artist(
        pool: &PgPool,
        req: CreateArtistRequest,
    ) -> Result<ArtistResponse, ListingsError> {
        let artist = ArtistRepository::create_artist(pool, &req).await?;
        Ok(artist.to_response())
    }

    pub async fn update_artist(
        pool: &PgPool,
        id: i32,
        req: UpdateArtistRequest,
    ) -> Result<ArtistResponse, ListingsError> {
        let artist = ArtistRepository::update_artist(pool, id, &req).await?;
        Ok(artist.to_response())
    }

    pub async fn delete_artist(pool: &PgPool, id: i32) -> Result<(), ListingsError> {
        ArtistRepository::delete_artist(pool, id).await
    }
}

// src/services/venue_service.rs
// DOCUMENTATION: Business logic for venues
// PURPOSE: Intermediary between handlers and repositories

use crate::db::{ShowRepository, VenueRepository};
use crate::errors::ListingsError;
use crate::models::{
    paginate, CreateVenueRequest, NameSearchResponse, UpdateVenueRequest, VenueArea,
    VenueDetailResponse, VenueResponse,
};
use crate::services::listing::{count_upcoming, group_by_area, listing_entry, partition_shows};
use chrono::Utc;
use sqlx::PgPool;

pub struct VenueService;

impl VenueService {
    /// Venues grouped by (state, city) with upcoming show counts
    pub async fn list_areas(pool: &PgPool) -> Result<Vec<VenueArea>, ListingsError> {
        let now = Utc::now();
        let venues = VenueRepository::list_by_area(pool).await?;
        let slots = ShowRepository::venue_slots(pool, None).await?;
        let upcoming = count_upcoming(&slots, now);

        let areas = group_by_area(venues)
            .into_iter()
            .map(|group| VenueArea {
                city: group.city,
                state: group.state,
                venues: group
                    .members
                    .iter()
                    .map(|v| listing_entry(v.id, &v.name, &upcoming))
                    .collect(),
            })
            .collect();

        Ok(areas)
    }

    /// Paginated case-insensitive name search
    pub async fn search(
        pool: &PgPool,
        term: &str,
        page: i64,
    ) -> Result<NameSearchResponse, ListingsError> {
        let now = Utc::now();
        let matches = VenueRepository::search_by_name(pool, term).await?;
        let count = matches.len();
        let current = paginate(matches, page);

        let ids: Vec<i32> = current.iter().map(|v| v.id).collect();
        let slots = if ids.is_empty() {
            Vec::new()
        } else {
            ShowRepository::venue_slots(pool, Some(&ids)).await?
        };
        let upcoming = count_upcoming(&slots, now);

        log::info!(
            "Venue search '{}': {} matches, {} on page {}",
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
                .map(|v| listing_entry(v.id, &v.name, &upcoming))
                .collect(),
        })
    }

    /// Venue page with past and upcoming shows
    pub async fn get_venue(pool: &PgPool, id: i32) -> Result<VenueDetailResponse, ListingsError> {
        let venue = VenueRepository::get_by_id(pool, id).await?;
        let shows = ShowRepository::shows_at_venue(pool, id).await?;
        let (past_shows, upcoming_shows) = partition_shows(shows, Utc::now());

        Ok(VenueDetailResponse {
            venue: venue.to_response(),
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        })
    }

    pub async fn create_venue(
        pool: &PgPool,
        req: CreateVenueRequest,
    ) -> Result<VenueResponse, ListingsError> {
        let venue = VenueRepository::create_venue(pool, &req).await?;
        Ok(venue.to_response())
    }

    pub async fn update_venue(
        pool: &PgPool,
        id: i32,
        req: UpdateVenueRequest,
    ) -> Result<VenueResponse, ListingsError> {
        let venue = VenueRepository::update_venue(pool, id, &req).await?;
        Ok(venue.to_response())
    }

    pub async fn delete_venue(pool: &PgPool, id: i32) -> Result<(), ListingsError> {
        VenueRepository::delete_venue(pool, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{database_pool, unique_tag};
    use crate::models::{CreateArtistRequest, CreateShowRequest};
    use crate::services::{ArtistService, ShowService};
    use chrono::Duration;
    use serde_json::json;

    fn venue_request(name: &str) -> CreateVenueRequest {
        serde_json::from_value(json!({
            "name": name,
            "city": "San Francisco",
            "state": "CA"
        }))
        .unwrap()
    }

    #[actix_web::test]
    #[ignore = "requires database"]
    async fn test_search_matches_substring_across_pages() {
        let pool = database_pool().await;
        let tag = unique_tag();

        let mut ids = Vec::new();
        for i in 1..=25 {
            let name = format!("Music Hall{} {}", tag, i);
            let venue = VenueService::create_venue(&pool, venue_request(&name))
                .await
                .unwrap();
            ids.push(venue.id);
        }

        let term = format!("hall{}", tag);
        let page = VenueService::search(&pool, &term, 3).await.unwrap();
        assert_eq!(page.count, 25);
        assert_eq!(page.data.len(), 5);
        assert_eq!(page.data[0].id, ids[20]);

        let past_end = VenueService::search(&pool, &term.to_uppercase(), 4)
            .await
            .unwrap();
        assert_eq!(past_end.count, 25);
        assert!(past_end.data.is_empty());

        for id in ids {
            VenueService::delete_venue(&pool, id).await.unwrap();
        }
    }

    #[actix_web::test]
    #[ignore = "requires database"]
    async fn test_delete_with_shows_is_conflict() {
        let pool = database_pool().await;
        let tag = unique_tag();

        let venue_req = venue_request(&format!("Park Square {}", tag));
        let venue = VenueService::create_venue(&pool, venue_req).await.unwrap();
        let artist_req: CreateArtistRequest = serde_json::from_value(json!({
            "name": format!("The Wild Sax Band {}", tag),
            "city": "San Francisco",
            "state": "CA"
        }))
        .unwrap();
        let artist = ArtistService::create_artist(&pool, artist_req).await.unwrap();

        ShowService::create_show(
            &pool,
            CreateShowRequest {
                artist_id: artist.id,
                venue_id: venue.id,
                start_time: Utc::now() + Duration::days(7),
            },
        )
        .await
        .unwrap();

        let detail = VenueService::get_venue(&pool, venue.id).await.unwrap();
        assert_eq!(detail.upcoming_shows_count, 1);
        assert_eq!(detail.past_shows_count, 0);

        let err = VenueService::delete_venue(&pool, venue.id).await.unwrap_err();
        assert!(matches!(err, ListingsError::Conflict(_)));
        let err = ArtistService::delete_artist(&pool, artist.id).await.unwrap_err();
        assert!(matches!(err, ListingsError::Conflict(_)));

        // still there after the refused deletes
        assert!(VenueService::get_venue(&pool, venue.id).await.is_ok());

        sqlx::query("DELETE FROM shows WHERE venue_id = $1")
            .bind(venue.id)
            .execute(&pool)
            .await
            .unwrap();
        VenueService::delete_venue(&pool, venue.id).await.unwrap();
        ArtistService::delete_artist(&pool, artist.id).await.unwrap();
    }
}

// src/services/show_service.rs
// DOCUMENTATION: Business logic for shows

use crate::db::ShowRepository;
use crate::errors::ListingsError;
use crate::models::{CreateShowRequest, Show, ShowListing};
use sqlx::PgPool;

pub struct ShowService;

impl ShowService {
    pub async fn list_shows(pool: &PgPool) -> Result<Vec<ShowListing>, ListingsError> {
        ShowRepository::list_all(pool).await
    }

    /// Book an artist at a venue
    pub async fn create_show(pool: &PgPool, req: CreateShowRequest) -> Result<Show, ListingsError> {
        if req.artist_id <= 0 || req.venue_id <= 0 {
            return Err(ListingsError::ValidationError(
                "artist_id and venue_id must be positive".to_string(),
            ));
        }
        ShowRepository::create_show(pool, &req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{database_pool, unique_tag};
    use crate::models::CreateVenueRequest;
    use crate::services::VenueService;
    use chrono::Utc;
    use serde_json::json;

    #[actix_web::test]
    #[ignore = "requires database"]
    async fn test_unknown_artist_is_conflict() {
        let pool = database_pool().await;
        let venue_req: CreateVenueRequest = serde_json::from_value(json!({
            "name": format!("The Dueling Pianos Bar {}", unique_tag()),
            "city": "New York",
            "state": "NY"
        }))
        .unwrap();
        let venue = VenueService::create_venue(&pool, venue_req).await.unwrap();

        let err = ShowService::create_show(
            &pool,
            CreateShowRequest {
                artist_id: i32::MAX,
                venue_id: venue.id,
                start_time: Utc::now(),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ListingsError::Conflict(_)));

        let (shows,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM shows WHERE venue_id = $1")
            .bind(venue.id)
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(shows, 0);

        VenueService::delete_venue(&pool, venue.id).await.unwrap();
    }

    #[actix_web::test]
    async fn test_non_positive_ids_rejected_before_insert() {
        let pool = crate::handlers::test_support::lazy_pool();
        let err = ShowService::create_show(
            &pool,
            CreateShowRequest {
                artist_id: 0,
                venue_id: 1,
                start_time: Utc::now(),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ListingsError::ValidationError(_)));
    }
}

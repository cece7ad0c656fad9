// src/db/show_repository.rs
// DOCUMENTATION: Show database operations
// PURPOSE: Shows table plus its joins with venues and artists

use crate::errors::ListingsError;
use crate::models::{ArtistShow, CreateShowRequest, Show, ShowListing, ShowSlot, VenueShow};
use sqlx::PgPool;

pub struct ShowRepository;

impl ShowRepository {
    /// Every show joined with its venue and artist, soonest first
    pub async fn list_all(pool: &PgPool) -> Result<Vec<ShowListing>, ListingsError> {
        sqlx::query_as::<_, ShowListing>(
            r#"
            SELECT
                v.id AS venue_id, v.name AS venue_name,
                a.id AS artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
                s.start_time
            FROM shows s
            JOIN venues v ON v.id = s.venue_id
            JOIN artists a ON a.id = s.artist_id
            ORDER BY s.start_time ASC, s.id ASC
            "#,
        )
        .fetch_all(pool)
        .await
        .map_err(|e| ListingsError::from_read("Fetch shows", e))
    }

    /// Start times of shows at the given venues (all venues when `None`)
    pub async fn venue_slots(
        pool: &PgPool,
        venue_ids: Option<&[i32]>,
    ) -> Result<Vec<ShowSlot>, ListingsError> {
        let query = match venue_ids {
            Some(ids) => sqlx::query_as::<_, ShowSlot>(
                "SELECT venue_id AS owner_id, start_time FROM shows WHERE venue_id = ANY($1)",
            )
            .bind(ids.to_vec()),
            None => sqlx::query_as::<_, ShowSlot>(
                "SELECT venue_id AS owner_id, start_time FROM shows",
            ),
        };

        query
            .fetch_all(pool)
            .await
            .map_err(|e| ListingsError::from_read("Fetch venue show times", e))
    }

    /// Start times of shows by the given artists (all artists when `None`)
    pub async fn artist_slots(
        pool: &PgPool,
        artist_ids: Option<&[i32]>,
    ) -> Result<Vec<ShowSlot>, ListingsError> {
        let query = match artist_ids {
            Some(ids) => sqlx::query_as::<_, ShowSlot>(
                "SELECT artist_id AS owner_id, start_time FROM shows WHERE artist_id = ANY($1)",
            )
            .bind(ids.to_vec()),
            None => sqlx::query_as::<_, ShowSlot>(
                "SELECT artist_id AS owner_id, start_time FROM shows",
            ),
        };

        query
            .fetch_all(pool)
            .await
            .map_err(|e| ListingsError::from_read("Fetch artist show times", e))
    }

    /// Shows at one venue, with artist details
    pub async fn shows_at_venue(
        pool: &PgPool,
        venue_id: i32,
    ) -> Result<Vec<VenueShow>, ListingsError> {
        sqlx::query_as::<_, VenueShow>(
            r#"
            SELECT
                a.id AS artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
                s.start_time
            FROM shows s
            JOIN artists a ON a.id = s.artist_id
            WHERE s.venue_id = $1
            ORDER BY s.start_time ASC
            "#,
        )
        .bind(venue_id)
        .fetch_all(pool)
        .await
        .map_err(|e| ListingsError::from_read("Fetch shows at venue", e))
    }

    /// Shows by one artist, with venue details
    pub async fn shows_by_artist(
        pool: &PgPool,
        artist_id: i32,
    ) -> Result<Vec<ArtistShow>, ListingsError> {
        sqlx::query_as::<_, ArtistShow>(
            r#"
            SELECT
                v.id AS venue_id, v.name AS venue_name, v.image_link AS venue_image_link,
                s.start_time
            FROM shows s
            JOIN venues v ON v.id = s.venue_id
            WHERE s.artist_id = $1
            ORDER BY s.start_time ASC
            "#,
        )
        .bind(artist_id)
        .fetch_all(pool)
        .await
        .map_err(|e| ListingsError::from_read("Fetch shows by artist", e))
    }

    /// Insert a show
    /// DOCUMENTATION: An unknown artist or venue violates the foreign keys and
    /// surfaces as Conflict; the transaction is dropped without commit
    pub async fn create_show(
        pool: &PgPool,
        req: &CreateShowRequest,
    ) -> Result<Show, ListingsError> {
        let mut tx = pool
            .begin()
            .await
            .map_err(|e| ListingsError::from_write("Begin show insert", e))?;

        let show = sqlx::query_as::<_, Show>(
            r#"
            INSERT INTO shows (artist_id, venue_id, start_time)
            VALUES ($1, $2, $3)
            RETURNING id, artist_id, venue_id, start_time
            "#,
        )
        .bind(req.artist_id)
        .bind(req.venue_id)
        .bind(req.start_time)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| ListingsError::from_write("Insert show", e))?;

        tx.commit()
            .await
            .map_err(|e| ListingsError::from_write("Commit show insert", e))?;

        log::info!(
            "Created show {} (artist {}, venue {})",
            show.id,
            show.artist_id,
            show.venue_id
        );
        Ok(show)
    }
}

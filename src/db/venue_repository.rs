// src/db/venue_repository.rs
// DOCUMENTATION: Venue database operations
// PURPOSE: All SQL touching the venues table

use crate::errors::ListingsError;
use crate::models::{contains_pattern, join_genres, CreateVenueRequest, UpdateVenueRequest, Venue};
use sqlx::PgPool;

const VENUE_COLUMNS: &str = r#"
    id, name, city, state, address, phone, genres,
    image_link, facebook_link, website, seeking_talent, seeking_description
"#;

pub struct VenueRepository;

impl VenueRepository {
    /// All venues ordered by (state, city, id)
    /// DOCUMENTATION: The ordering is what makes single-pass area grouping valid
    pub async fn list_by_area(pool: &PgPool) -> Result<Vec<Venue>, ListingsError> {
        let sql = format!(
            "SELECT {} FROM venues ORDER BY state ASC, city ASC, id ASC",
            VENUE_COLUMNS
        );

        sqlx::query_as::<_, Venue>(&sql)
            .fetch_all(pool)
            .await
            .map_err(|e| ListingsError::from_read("Fetch venues", e))
    }

    /// Retrieve venue by ID
    pub async fn get_by_id(pool: &PgPool, id: i32) -> Result<Venue, ListingsError> {
        let sql = format!("SELECT {} FROM venues WHERE id = $1", VENUE_COLUMNS);

        sqlx::query_as::<_, Venue>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| ListingsError::from_read("Fetch venue", e))?
            .ok_or_else(|| {
                log::warn!("Venue not found: {}", id);
                ListingsError::NotFound(format!("venue {}", id))
            })
    }

    /// Case-insensitive substring match on name, ordered by id
    /// DOCUMENTATION: Returns every match; the service slices the page so the
    /// count and the page come from the same snapshot
    pub async fn search_by_name(pool: &PgPool, term: &str) -> Result<Vec<Venue>, ListingsError> {
        let sql = format!(
            "SELECT {} FROM venues WHERE name ILIKE $1 ORDER BY id ASC",
            VENUE_COLUMNS
        );

        log::debug!("Searching venues for term: {}", term);

        sqlx::query_as::<_, Venue>(&sql)
            .bind(contains_pattern(term))
            .fetch_all(pool)
            .await
            .map_err(|e| ListingsError::from_read("Search venues", e))
    }

    /// Insert a venue
    pub async fn create_venue(
        pool: &PgPool,
        req: &CreateVenueRequest,
    ) -> Result<Venue, ListingsError> {
        let mut tx = pool
            .begin()
            .await
            .map_err(|e| ListingsError::from_write("Begin venue insert", e))?;

        let sql = format!(
            r#"
            INSERT INTO venues (
                name, city, state, address, phone, genres,
                image_link, facebook_link, website, seeking_talent, seeking_description
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {}
            "#,
            VENUE_COLUMNS
        );

        let venue = sqlx::query_as::<_, Venue>(&sql)
            .bind(req.name.trim())
            .bind(req.city.trim())
            .bind(req.state.trim())
            .bind(&req.address)
            .bind(&req.phone)
            .bind(join_genres(&req.genres))
            .bind(&req.image_link)
            .bind(&req.facebook_link)
            .bind(&req.website)
            .bind(req.seeking_talent)
            .bind(&req.seeking_description)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| ListingsError::from_write("Insert venue", e))?;

        tx.commit()
            .await
            .map_err(|e| ListingsError::from_write("Commit venue insert", e))?;

        log::info!("Created venue with id: {}", venue.id);
        Ok(venue)
    }

    /// Partial update - only provided fields are modified
    pub async fn update_venue(
        pool: &PgPool,
        id: i32,
        req: &UpdateVenueRequest,
    ) -> Result<Venue, ListingsError> {
        let mut tx = pool
            .begin()
            .await
            .map_err(|e| ListingsError::from_write("Begin venue update", e))?;

        let sql = format!(
            r#"
            UPDATE venues
            SET name = COALESCE($1, name),
                city = COALESCE($2, city),
                state = COALESCE($3, state),
                address = COALESCE($4, address),
                phone = COALESCE($5, phone),
                genres = COALESCE($6, genres),
                image_link = COALESCE($7, image_link),
                facebook_link = COALESCE($8, facebook_link),
                website = COALESCE($9, website),
                seeking_talent = COALESCE($10, seeking_talent),
                seeking_description = COALESCE($11, seeking_description)
            WHERE id = $12
            RETURNING {}
            "#,
            VENUE_COLUMNS
        );

        let venue = sqlx::query_as::<_, Venue>(&sql)
            .bind(req.name.as_deref().map(str::trim))
            .bind(req.city.as_deref().map(str::trim))
            .bind(req.state.as_deref().map(str::trim))
            .bind(&req.address)
            .bind(&req.phone)
            .bind(req.genres.as_deref().map(join_genres))
            .bind(&req.image_link)
            .bind(&req.facebook_link)
            .bind(&req.website)
            .bind(req.seeking_talent)
            .bind(&req.seeking_description)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| ListingsError::from_write("Update venue", e))?
            .ok_or_else(|| ListingsError::NotFound(format!("venue {}", id)))?;

        tx.commit()
            .await
            .map_err(|e| ListingsError::from_write("Commit venue update", e))?;

        log::info!("Updated venue: {}", id);
        Ok(venue)
    }

    /// Delete a venue
    /// DOCUMENTATION: Fails with Conflict while shows still reference it
    pub async fn delete_venue(pool: &PgPool, id: i32) -> Result<(), ListingsError> {
        let mut tx = pool
            .begin()
            .await
            .map_err(|e| ListingsError::from_write("Begin venue delete", e))?;

        let rows = sqlx::query("DELETE FROM venues WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| ListingsError::from_write("Delete venue", e))?
            .rows_affected();

        if rows == 0 {
            return Err(ListingsError::NotFound(format!("venue {}", id)));
        }

        tx.commit()
            .await
            .map_err(|e| ListingsError::from_write("Commit venue delete", e))?;

        log::info!("Deleted venue: {}", id);
        Ok(())
    }
}

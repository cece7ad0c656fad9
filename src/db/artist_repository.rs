// src/db/artist_repository.rs
// DOCUMENTATION: Artist database operations
// PURPOSE: All SQL touching the artists table

use crate::errors::ListingsError;
use crate::models::{
    contains_pattern, join_genres, Artist, CreateArtistRequest, UpdateArtistRequest,
};
use sqlx::PgPool;

const ARTIST_COLUMNS: &str = r#"
    id, name, city, state, phone, genres,
    website, image_link, facebook_link, seeking_venue, seeking_description
"#;

pub struct ArtistRepository;

impl ArtistRepository {
    /// All artists ordered by (state, city, id)
    pub async fn list_by_area(pool: &PgPool) -> Result<Vec<Artist>, ListingsError> {
        let sql = format!(
            "SELECT {} FROM artists ORDER BY state ASC, city ASC, id ASC",
            ARTIST_COLUMNS
        );

        sqlx::query_as::<_, Artist>(&sql)
            .fetch_all(pool)
            .await
            .map_err(|e| ListingsError::from_read("Fetch artists", e))
    }

    pub async fn get_by_id(pool: &PgPool, id: i32) -> Result<Artist, ListingsError> {
        let sql = format!("SELECT {} FROM artists WHERE id = $1", ARTIST_COLUMNS);

        sqlx::query_as::<_, Artist>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| ListingsError::from_read("Fetch artist", e))?
            .ok_or_else(|| {
                log::warn!("Artist not found: {}", id);
                ListingsError::NotFound(format!("artist {}", id))
            })
    }

    /// Case-insensitive substring match on name, ordered by id
    pub async fn search_by_name(pool: &PgPool, term: &str) -> Result<Vec<Artist>, ListingsError> {
        let sql = format!(
            "SELECT {} FROM artists WHERE name ILIKE $1 ORDER BY id ASC",
            ARTIST_COLUMNS
        );

        log::debug!("Searching artists for term: {}", term);

        sqlx::query_as::<_, Artist>(&sql)
            .bind(contains_pattern(term))
            .fetch_all(pool)
            .await
            .map_err(|e| ListingsError::from_read("Search artists", e))
    }

    pub async fn create_artist(
        pool: &PgPool,
        req: &CreateArtistRequest,
    ) -> Result<Artist, ListingsError> {
        let mut tx = pool
            .begin()
            .await
            .map_err(|e| ListingsError::from_write("Begin artist insert", e))?;

        let sql = format!(
            r#"
            INSERT INTO artists (
                name, city, state, phone, genres,
                website, image_link, facebook_link, seeking_venue, seeking_description
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {}
            "#,
            ARTIST_COLUMNS
        );

        let artist = sqlx::query_as::<_, Artist>(&sql)
            .bind(req.name.trim())
            .bind(req.city.trim())
            .bind(req.state.trim())
            .bind(&req.phone)
            .bind(join_genres(&req.genres))
            .bind(&req.website)
            .bind(&req.image_link)
            .bind(&req.facebook_link)
            .bind(req.seeking_venue)
            .bind(&req.seeking_description)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| ListingsError::from_write("Insert artist", e))?;

        tx.commit()
            .await
            .map_err(|e| ListingsError::from_write("Commit artist insert", e))?;

        log::info!("Created artist with id: {}", artist.id);
        Ok(artist)
    }

    /// Partial update - only provided fields are modified
    pub async fn update_artist(
        pool: &PgPool,
        id: i32,
        req: &UpdateArtistRequest,
    ) -> Result<Artist, ListingsError> {
        let mut tx = pool
            .begin()
            .await
            .map_err(|e| ListingsError::from_write("Begin artist update", e))?;

        let sql = format!(
            r#"
            UPDATE artists
            SET name = COALESCE($1, name),
                city = COALESCE($2, city),
                state = COALESCE($3, state),
                phone = COALESCE($4, phone),
                genres = COALESCE($5, genres),
                website = COALESCE($6, website),
                image_link = COALESCE($7, image_link),
                facebook_link = COALESCE($8, facebook_link),
                seeking_venue = COALESCE($9, seeking_venue),
                seeking_description = COALESCE($10, seeking_description)
            WHERE id = $11
            RETURNING {}
            "#,
            ARTIST_COLUMNS
        );

        let artist = sqlx::query_as::<_, Artist>(&sql)
            .bind(req.name.as_deref().map(str::trim))
            .bind(req.city.as_deref().map(str::trim))
            .bind(req.state.as_deref().map(str::trim))
            .bind(&req.phone)
            .bind(req.genres.as_deref().map(join_genres))
            .bind(&req.website)
            .bind(&req.image_link)
            .bind(&req.facebook_link)
            .bind(req.seeking_venue)
            .bind(&req.seeking_description)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| ListingsError::from_write("Update artist", e))?
            .ok_or_else(|| ListingsError::NotFound(format!("artist {}", id)))?;

        tx.commit()
            .await
            .map_err(|e| ListingsError::from_write("Commit artist update", e))?;

        log::info!("Updated artist: {}", id);
        Ok(artist)
    }

    /// Delete an artist; Conflict while shows still reference it
    pub async fn delete_artist(pool: &PgPool, id: i32) -> Result<(), ListingsError> {
        let mut tx = pool
            .begin()
            .await
            .map_err(|e| ListingsError::from_write("Begin artist delete", e))?;

        let rows = sqlx::query("DELETE FROM artists WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| ListingsError::from_write("Delete artist", e))?
            .rows_affected();

        if rows == 0 {
            return Err(ListingsError::NotFound(format!("artist {}", id)));
        }

        tx.commit()
            .await
            .map_err(|e| ListingsError::from_write("Commit artist delete", e))?;

        log::info!("Deleted artist: {}", id);
        Ok(())
    }
}

// src/db/drink_repository.rs
// DOCUMENTATION: Drink database operations
// PURPOSE: CRUD for the coffee-shop menu

use crate::errors::ListingsError;
use crate::models::{CreateDrinkRequest, Drink, UpdateDrinkRequest};
use sqlx::types::Json;
use sqlx::PgPool;

pub struct DrinkRepository;

impl DrinkRepository {
    pub async fn list_drinks(pool: &PgPool) -> Result<Vec<Drink>, ListingsError> {
        sqlx::query_as::<_, Drink>("SELECT id, title, recipe FROM drinks ORDER BY id ASC")
            .fetch_all(pool)
            .await
            .map_err(|e| ListingsError::from_read("Fetch drinks", e))
    }

    /// Insert a drink; a duplicate title is a Conflict
    pub async fn create_drink(
        pool: &PgPool,
        req: &CreateDrinkRequest,
    ) -> Result<Drink, ListingsError> {
        let drink = sqlx::query_as::<_, Drink>(
            r#"
            INSERT INTO drinks (title, recipe)
            VALUES ($1, $2)
            RETURNING id, title, recipe
            "#,
        )
        .bind(req.title.trim())
        .bind(Json(&req.recipe))
        .fetch_one(pool)
        .await
        .map_err(|e| ListingsError::from_write("Insert drink", e))?;

        log::info!("Created drink with id: {}", drink.id);
        Ok(drink)
    }

    /// Partial update of title and/or recipe
    pub async fn update_drink(
        pool: &PgPool,
        id: i32,
        req: &UpdateDrinkRequest,
    ) -> Result<Drink, ListingsError> {
        let drink = sqlx::query_as::<_, Drink>(
            r#"
            UPDATE drinks
            SET title = COALESCE($1, title),
                recipe = COALESCE($2, recipe)
            WHERE id = $3
            RETURNING id, title, recipe
            "#,
        )
        .bind(req.title.as_deref().map(str::trim))
        .bind(req.recipe.as_ref().map(Json))
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| ListingsError::from_write("Update drink", e))?
        .ok_or_else(|| {
            log::warn!("Drink not found: {}", id);
            ListingsError::NotFound(format!("drink {}", id))
        })?;

        log::info!("Updated drink: {}", id);
        Ok(drink)
    }

    pub async fn delete_drink(pool: &PgPool, id: i32) -> Result<(), ListingsError> {
        let rows = sqlx::query("DELETE FROM drinks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| ListingsError::from_write("Delete drink", e))?
            .rows_affected();

        if rows == 0 {
            log::warn!("Drink not found: {}", id);
            return Err(ListingsError::NotFound(format!("drink {}", id)));
        }

        log::info!("Deleted drink: {}", id);
        Ok(())
    }
}

// src/services/drink_service.rs
// DOCUMENTATION: Business logic for the drink menu

use crate::db::DrinkRepository;
use crate::errors::ListingsError;
use crate::models::{
    CreateDrinkRequest, DrinkDeletedResponse, DrinksLongResponse, DrinksShortResponse,
    UpdateDrinkRequest,
};
use sqlx::PgPool;

pub struct DrinkService;

impl DrinkService {
    /// Public menu
    pub async fn menu(pool: &PgPool) -> Result<DrinksShortResponse, ListingsError> {
        let drinks = DrinkRepository::list_drinks(pool).await?;
        Ok(DrinksShortResponse {
            success: true,
            drinks: drinks.iter().map(|d| d.short()).collect(),
        })
    }

    /// Menu with full recipes
    pub async fn menu_detail(pool: &PgPool) -> Result<DrinksLongResponse, ListingsError> {
        let drinks = DrinkRepository::list_drinks(pool).await?;
        Ok(DrinksLongResponse {
            success: true,
            drinks: drinks.iter().map(|d| d.long()).collect(),
        })
    }

    pub async fn create_drink(
        pool: &PgPool,
        req: CreateDrinkRequest,
    ) -> Result<DrinksLongResponse, ListingsError> {
        let drink = DrinkRepository::create_drink(pool, &req).await?;
        Ok(DrinksLongResponse {
            success: true,
            drinks: vec![drink.long()],
        })
    }

    pub async fn update_drink(
        pool: &PgPool,
        id: i32,
        req: UpdateDrinkRequest,
    ) -> Result<DrinksLongResponse, ListingsError> {
        let drink = DrinkRepository::update_drink(pool, id, &req).await?;
        Ok(DrinksLongResponse {
            success: true,
            drinks: vec![drink.long()],
        })
    }

    pub async fn delete_drink(
        pool: &PgPool,
        id: i32,
    ) -> Result<DrinkDeletedResponse, ListingsError> {
        DrinkRepository::delete_drink(pool, id).await?;
        Ok(DrinkDeletedResponse {
            success: true,
            delete: id,
        })
    }
}

// src/handlers/drinks.rs
// DOCUMENTATION: HTTP handlers for the drink menu

use crate::errors::ListingsError;
use crate::models::{CreateDrinkRequest, UpdateDrinkRequest};
use crate::services::DrinkService;
use actix_web::{web, HttpResponse, Responder};
use sqlx::PgPool;
use validator::Validate;

/// GET /drinks
pub async fn list_drinks(pool: web::Data<PgPool>) -> Result<impl Responder, ListingsError> {
    let result = DrinkService::menu(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// GET /drinks-detail
pub async fn list_drinks_detail(pool: web::Data<PgPool>) -> Result<impl Responder, ListingsError> {
    let result = DrinkService::menu_detail(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// POST /drinks
pub async fn create_drink(
    pool: web::Data<PgPool>,
    req: web::Json<CreateDrinkRequest>,
) -> Result<impl Responder, ListingsError> {
    req.validate()?;

    let result = DrinkService::create_drink(pool.get_ref(), req.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// PATCH /drinks/{id}
pub async fn update_drink(
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
    req: web::Json<UpdateDrinkRequest>,
) -> Result<impl Responder, ListingsError> {
    req.validate()?;

    let result =
        DrinkService::update_drink(pool.get_ref(), path.into_inner(), req.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// DELETE /drinks/{id}
pub async fn delete_drink(
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
) -> Result<impl Responder, ListingsError> {
    let result = DrinkService::delete_drink(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/drinks-detail", web::get().to(list_drinks_detail))
        .service(
            web::scope("/drinks")
                .route("", web::get().to(list_drinks))
                .route("", web::post().to(create_drink))
                .route("/{id}", web::patch().to(update_drink))
                .route("/{id}", web::delete().to(delete_drink)),
        );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::{json_config, test_support::lazy_pool};
    use actix_web::{http::StatusCode, test, App};

    #[actix_web::test]
    async fn test_create_drink_requires_recipe() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(lazy_pool()))
                .app_data(json_config())
                .configure(config),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/drinks")
            .set_json(serde_json::json!({ "title": "Matcha Shake", "recipe": [] }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[actix_web::test]
    async fn test_patch_drink_rejects_blank_title() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(lazy_pool()))
                .app_data(json_config())
                .configure(config),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri("/drinks/1")
            .set_json(serde_json::json!({ "title": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[actix_web::test]
    async fn test_create_drink_rejects_whitespace_title() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(lazy_pool()))
                .app_data(json_config())
                .configure(config),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/drinks")
            .set_json(serde_json::json!({
                "title": "   ",
                "recipe": [{ "name": "water", "color": "blue", "parts": 1 }]
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}

// src/handlers/shows.rs
// DOCUMENTATION: HTTP handlers for show operations

use crate::errors::ListingsError;
use crate::models::CreateShowRequest;
use crate::services::ShowService;
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use sqlx::PgPool;

/// GET /shows
pub async fn list_shows(pool: web::Data<PgPool>) -> Result<impl Responder, ListingsError> {
    let shows = ShowService::list_shows(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "shows": shows
    })))
}

/// POST /shows
/// Unknown artist or venue ids surface as 422 from the foreign keys
pub async fn create_show(
    pool: web::Data<PgPool>,
    req: web::Json<CreateShowRequest>,
) -> Result<impl Responder, ListingsError> {
    let show = ShowService::create_show(pool.get_ref(), req.into_inner()).await?;
    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "show": show
    })))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/shows")
            .route("", web::get().to(list_shows))
            .route("", web::post().to(create_show)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::{json_config, test_support::lazy_pool};
    use actix_web::{http::StatusCode, test, App};

    #[actix_web::test]
    async fn test_create_show_requires_start_time() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(lazy_pool()))
                .app_data(json_config())
                .configure(config),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/shows")
            .set_json(serde_json::json!({ "artist_id": 1, "venue_id": 1 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[actix_web::test]
    async fn test_create_show_rejects_non_positive_ids() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(lazy_pool()))
                .app_data(json_config())
                .configure(config),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/shows")
            .set_json(serde_json::json!({
                "artist_id": 0,
                "venue_id": 1,
                "start_time": "2035-04-01T20:00:00Z"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(lazy_pool()))
                .app_data(json_config())
                .configure(config),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/shows")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"artist_id\": 1,")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}

// src/handlers/venues.rs
// DOCUMENTATION: HTTP handlers for venue operations
// PURPOSE: Parse requests, call services, return responses

use crate::errors::ListingsError;
use crate::models::{CreateVenueRequest, NameSearchQuery, PageQuery, UpdateVenueRequest};
use crate::services::VenueService;
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use sqlx::PgPool;
use validator::Validate;

/// GET /venues
/// Venues grouped by city and state
pub async fn list_venues(pool: web::Data<PgPool>) -> Result<impl Responder, ListingsError> {
    let areas = VenueService::list_areas(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "areas": areas
    })))
}

/// GET /venues/search?search_term=&page=
pub async fn search_venues(
    pool: web::Data<PgPool>,
    query: web::Query<NameSearchQuery>,
) -> Result<impl Responder, ListingsError> {
    let query = query.into_inner();
    let page = PageQuery { page: query.page }.page();
    let result = VenueService::search(pool.get_ref(), &query.search_term, page).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// GET /venues/{id}
pub async fn get_venue(
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
) -> Result<impl Responder, ListingsError> {
    let venue = VenueService::get_venue(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(venue))
}

/// POST /venues
pub async fn create_venue(
    pool: web::Data<PgPool>,
    req: web::Json<CreateVenueRequest>,
) -> Result<impl Responder, ListingsError> {
    req.validate()?;

    let venue = VenueService::create_venue(pool.get_ref(), req.into_inner()).await?;
    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "venue": venue
    })))
}

/// PUT /venues/{id}
pub async fn update_venue(
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
    req: web::Json<UpdateVenueRequest>,
) -> Result<impl Responder, ListingsError> {
    req.validate()?;

    let venue =
        VenueService::update_venue(pool.get_ref(), path.into_inner(), req.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "venue": venue
    })))
}

/// DELETE /venues/{id}
pub async fn delete_venue(
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
) -> Result<impl Responder, ListingsError> {
    let id = path.into_inner();
    VenueService::delete_venue(pool.get_ref(), id).await?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "deleted": id
    })))
}

/// Configuration for venue routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/venues")
            .route("", web::get().to(list_venues))
            .route("", web::post().to(create_venue))
            .route("/search", web::get().to(search_venues))
            .route("/{id}", web::get().to(get_venue))
            .route("/{id}", web::put().to(update_venue))
            .route("/{id}", web::delete().to(delete_venue)),
    );
}

// src/handlers/artists.rs
// DOCUMENTATION: HTTP handlers for artist operations
// PURPOSE: Parse requests, call services, return responses

use crate::errors::ListingsError;
use crate::models::{CreateArtistRequest, NameSearchQuery, PageQuery, UpdateArtistRequest};
use crate::services::ArtistService;
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use sqlx::PgPool;
use validator::Validate;

/// GET /artists
/// Artists grouped by home city and state
pub async fn list_artists(pool: web::Data<PgPool>) -> Result<impl Responder, ListingsError> {
    let areas = ArtistService::list_areas(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "areas": areas
    })))
}

/// GET /artists/search?search_term=&page=
pub async fn search_artists(
    pool: web::Data<PgPool>,
    query: web::Query<NameSearchQuery>,
) -> Result<impl Responder, ListingsError> {
    let query = query.into_inner();
    let page = PageQuery { page: query.page }.page();
    let result = ArtistService::search(pool.get_ref(), &query.search_term, page).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// GET /artists/{id}
pub async fn get_artist(
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
) -> Result<impl Responder, ListingsError> {
    let artist = ArtistService::get_artist(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(artist))
}

/// POST /artists
pub async fn create_artist(
    pool: web::Data<PgPool>,
    req: web::Json<CreateArtistRequest>,
) -> Result<impl Responder, ListingsError> {
    req.validate()?;

    let artist = ArtistService::create_artist(pool.get_ref(), req.into_inner()).await?;
    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "artist": artist
    })))
}

/// PUT /artists/{id}
pub async fn update_artist(
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
    req: web::Json<UpdateArtistRequest>,
) -> Result<impl Responder, ListingsError> {
    req.validate()?;

    let artist =
        ArtistService::update_artist(pool.get_ref(), path.into_inner(), req.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "artist": artist
    })))
}

/// DELETE /artists/{id}
pub async fn delete_artist(
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
) -> Result<impl Responder, ListingsError> {
    let id = path.into_inner();
    ArtistService::delete_artist(pool.get_ref(), id).await?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "deleted": id
    })))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/artists")
            .route("", web::get().to(list_artists))
            .route("", web::post().to(create_artist))
            .route("/search", web::get().to(search_artists))
            .route("/{id}", web::get().to(get_artist))
            .route("/{id}", web::put().to(update_artist))
            .route("/{id}", web::delete().to(delete_artist)),
    );
}

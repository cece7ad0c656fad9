// src/handlers/trivia.rs
// DOCUMENTATION: HTTP handlers for the trivia API
// PURPOSE: Categories, paginated questions, search and quiz play

use crate::errors::ListingsError;
use crate::models::{CreateQuestionRequest, PageQuery, QuestionSearchRequest, QuizRequest};
use crate::services::TriviaService;
use actix_web::{web, HttpResponse, Responder};
use sqlx::PgPool;

/// GET /categories
pub async fn list_categories(pool: web::Data<PgPool>) -> Result<impl Responder, ListingsError> {
    let result = TriviaService::list_categories(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// GET /categories/{id}/questions?page=
pub async fn questions_by_category(
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
    query: web::Query<PageQuery>,
) -> Result<impl Responder, ListingsError> {
    let result =
        TriviaService::questions_by_category(pool.get_ref(), path.into_inner(), query.page())
            .await?;
    Ok(HttpResponse::Ok().json(result))
}

/// GET /questions?page=
pub async fn list_questions(
    pool: web::Data<PgPool>,
    query: web::Query<PageQuery>,
) -> Result<impl Responder, ListingsError> {
    let result = TriviaService::list_questions(pool.get_ref(), query.page()).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// POST /questions
/// Create a question; every field is required
pub async fn create_question(
    pool: web::Data<PgPool>,
    req: web::Json<CreateQuestionRequest>,
) -> Result<impl Responder, ListingsError> {
    let new = req
        .into_inner()
        .into_new_question()
        .map_err(ListingsError::ValidationError)?;

    let result = TriviaService::create_question(pool.get_ref(), new).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// POST /questions/search?page=
pub async fn search_questions(
    pool: web::Data<PgPool>,
    query: web::Query<PageQuery>,
    req: web::Json<QuestionSearchRequest>,
) -> Result<impl Responder, ListingsError> {
    let result =
        TriviaService::search_questions(pool.get_ref(), &req.search_term, query.page()).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// DELETE /questions/{id}
pub async fn delete_question(
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
) -> Result<impl Responder, ListingsError> {
    let result = TriviaService::delete_question(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// POST /quizzes
/// Next unseen question; `question: null` ends the round
pub async fn play_quiz(
    pool: web::Data<PgPool>,
    req: web::Json<QuizRequest>,
) -> Result<impl Responder, ListingsError> {
    let result = TriviaService::play_quiz(pool.get_ref(), req.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/categories")
            .route("", web::get().to(list_categories))
            .route("/{id}/questions", web::get().to(questions_by_category)),
    )
    .service(
        web::scope("/questions")
            .route("", web::get().to(list_questions))
            .route("", web::post().to(create_question))
            .route("/search", web::post().to(search_questions))
            .route("/{id}", web::delete().to(delete_question)),
    )
    .route("/quizzes", web::post().to(play_quiz));
}

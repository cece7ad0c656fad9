// src/services/trivia_service.rs
// DOCUMENTATION: Business logic for the trivia API
// PURPOSE: Paginated question listings, search, category views and quiz play

use crate::db::QuestionRepository;
use crate::errors::ListingsError;
use crate::models::{
    category_map, paginate, CategoriesResponse, NewQuestion, QuestionCreatedResponse,
    QuestionDeletedResponse, QuestionPageResponse, QuizRequest, QuizResponse,
};
use crate::services::quiz::pick_question;
use sqlx::PgPool;

pub struct TriviaService;

impl TriviaService {
    /// Every category as an id -> label map. An empty map is a valid answer.
    pub async fn list_categories(pool: &PgPool) -> Result<CategoriesResponse, ListingsError> {
        let categories = QuestionRepository::list_categories(pool).await?;

        Ok(CategoriesResponse {
            success: true,
            total_categories: categories.len(),
            categories: category_map(&categories),
        })
    }

    /// One page of all questions plus the category map for the client sidebar
    pub async fn list_questions(
        pool: &PgPool,
        page: i64,
    ) -> Result<QuestionPageResponse, ListingsError> {
        let questions = QuestionRepository::list_questions(pool, None).await?;
        let categories = QuestionRepository::list_categories(pool).await?;
        let total_questions = questions.len();

        Ok(QuestionPageResponse {
            success: true,
            questions: paginate(questions, page),
            total_questions,
            current_category: None,
            categories: Some(category_map(&categories)),
        })
    }

    /// Paginated search; zero matches is an empty page, not an error
    pub async fn search_questions(
        pool: &PgPool,
        term: &str,
        page: i64,
    ) -> Result<QuestionPageResponse, ListingsError> {
        let matches = QuestionRepository::search_questions(pool, term).await?;
        let total_questions = matches.len();

        log::info!(
            "Question search '{}': {} matches (page {})",
            term,
            total_questions,
            page
        );

        Ok(QuestionPageResponse {
            success: true,
            questions: paginate(matches, page),
            total_questions,
            current_category: None,
            categories: None,
        })
    }

    /// Questions of one category
    /// DOCUMENTATION: NotFound for an unknown category; an existing category
    /// with no questions yields an empty page with total 0
    pub async fn questions_by_category(
        pool: &PgPool,
        category_id: i32,
        page: i64,
    ) -> Result<QuestionPageResponse, ListingsError> {
        let category = QuestionRepository::find_category(pool, category_id)
            .await?
            .ok_or_else(|| {
                log::warn!("Category not found: {}", category_id);
                ListingsError::NotFound(format!("category {}", category_id))
            })?;

        let questions = QuestionRepository::list_questions(pool, Some(category.id)).await?;
        let total_questions = questions.len();

        Ok(QuestionPageResponse {
            success: true,
            questions: paginate(questions, page),
            total_questions,
            current_category: Some(category.type_field),
            categories: None,
        })
    }

    pub async fn create_question(
        pool: &PgPool,
        new: NewQuestion,
    ) -> Result<QuestionCreatedResponse, ListingsError> {
        let (question, total_questions) = QuestionRepository::create_question(pool, &new).await?;

        Ok(QuestionCreatedResponse {
            success: true,
            created: question.id,
            question_created: question.question,
            total_questions,
        })
    }

    pub async fn delete_question(
        pool: &PgPool,
        id: i32,
    ) -> Result<QuestionDeletedResponse, ListingsError> {
        let total_questions = QuestionRepository::delete_question(pool, id).await?;

        Ok(QuestionDeletedResponse {
            success: true,
            deleted: id,
            total_questions,
        })
    }

    /// Next quiz question, or `question: null` once the pool is exhausted
    pub async fn play_quiz(pool: &PgPool, req: QuizRequest) -> Result<QuizResponse, ListingsError> {
        let category = req.category_filter();

        if let Some(category_id) = category {
            if QuestionRepository::find_category(pool, category_id)
                .await?
                .is_none()
            {
                return Err(ListingsError::NotFound(format!("category {}", category_id)));
            }
        }

        let candidates = QuestionRepository::list_questions(pool, category).await?;
        let previous = req.previous_ids();
        let question = pick_question(candidates, &previous, &mut rand::thread_rng());

        match &question {
            Some(q) => log::debug!("Quiz picked question {}", q.id),
            None => log::info!(
                "Quiz round over after {} questions (category {})",
                previous.len(),
                req.category_label().unwrap_or("all")
            ),
        }

        Ok(QuizResponse {
            success: true,
            question,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{database_pool, unique_tag};
    use serde_json::json;

    async fn create_category(pool: &PgPool, label: &str) -> i32 {
        let (id,): (i32,) =
            sqlx::query_as("INSERT INTO categories (type) VALUES ($1) RETURNING id")
                .bind(label)
                .fetch_one(pool)
                .await
                .unwrap();
        id
    }

    async fn drop_category(pool: &PgPool, id: i32) {
        sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .unwrap();
    }

    fn quiz(category: i32, previous: &[i32]) -> QuizRequest {
        serde_json::from_value(json!({
            "previous_questions": previous,
            "quiz_category": { "id": category, "type": "Test" }
        }))
        .unwrap()
    }

    #[actix_web::test]
    #[ignore = "requires database"]
    async fn test_unknown_category_not_found() {
        let pool = database_pool().await;

        let err = TriviaService::questions_by_category(&pool, i32::MAX, 1)
            .await
            .unwrap_err();
        assert!(matches!(err, ListingsError::NotFound(_)));

        let err = TriviaService::play_quiz(&pool, quiz(i32::MAX, &[]))
            .await
            .unwrap_err();
        assert!(matches!(err, ListingsError::NotFound(_)));
    }

    #[actix_web::test]
    #[ignore = "requires database"]
    async fn test_empty_category_is_empty_page() {
        let pool = database_pool().await;
        let label = format!("Empty {}", unique_tag());
        let id = create_category(&pool, &label).await;

        let page = TriviaService::questions_by_category(&pool, id, 1).await.unwrap();
        assert!(page.questions.is_empty());
        assert_eq!(page.total_questions, 0);
        assert_eq!(page.current_category.as_deref(), Some(label.as_str()));

        let round = TriviaService::play_quiz(&pool, quiz(id, &[])).await.unwrap();
        assert!(round.question.is_none());

        drop_category(&pool, id).await;
    }

    #[actix_web::test]
    #[ignore = "requires database"]
    async fn test_question_lifecycle_in_category() {
        let pool = database_pool().await;
        let tag = unique_tag();
        let id = create_category(&pool, &format!("Geography {}", tag)).await;

        let created = TriviaService::create_question(
            &pool,
            NewQuestion {
                question: format!("What is the largest lake in Africa ({})?", tag),
                answer: "Lake Victoria".to_string(),
                difficulty: 2,
                category: id,
            },
        )
        .await
        .unwrap();

        let found = TriviaService::search_questions(&pool, &tag.to_uppercase(), 1)
            .await
            .unwrap();
        assert_eq!(found.total_questions, 1);
        assert_eq!(found.questions[0].id, created.created);

        let first = TriviaService::play_quiz(&pool, quiz(id, &[])).await.unwrap();
        assert_eq!(first.question.map(|q| q.id), Some(created.created));
        let over = TriviaService::play_quiz(&pool, quiz(id, &[created.created]))
            .await
            .unwrap();
        assert!(over.question.is_none());

        let deleted = TriviaService::delete_question(&pool, created.created)
            .await
            .unwrap();
        assert_eq!(deleted.total_questions, created.total_questions - 1);

        let err = TriviaService::delete_question(&pool, created.created)
            .await
            .unwrap_err();
        assert!(matches!(err, ListingsError::NotFound(_)));

        drop_category(&pool, id).await;
    }

    #[actix_web::test]
    #[ignore = "requires database"]
    async fn test_create_in_unknown_category_is_validation_error() {
        let pool = database_pool().await;
        let err = TriviaService::create_question(
            &pool,
            NewQuestion {
                question: "Who discovered penicillin?".to_string(),
                answer: "Alexander Fleming".to_string(),
                difficulty: 3,
                category: i32::MAX,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ListingsError::ValidationError(_)));
    }
}

// src/db/question_repository.rs
// DOCUMENTATION: Trivia database operations
// PURPOSE: Handle questions and categories

use crate::errors::ListingsError;
use crate::models::{contains_pattern, Category, NewQuestion, Question};
use sqlx::PgPool;

pub struct QuestionRepository;

impl QuestionRepository {
    /// All categories ordered by label
    pub async fn list_categories(pool: &PgPool) -> Result<Vec<Category>, ListingsError> {
        sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY type ASC, id ASC")
            .fetch_all(pool)
            .await
            .map_err(|e| ListingsError::from_read("Fetch categories", e))
    }

    /// Look up a category; `None` when it does not exist
    pub async fn find_category(pool: &PgPool, id: i32) -> Result<Option<Category>, ListingsError> {
        sqlx::query_as::<_, Category>("SELECT id, type FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| ListingsError::from_read("Fetch category", e))
    }

    /// Questions, optionally restricted to one category, ordered by id
    pub async fn list_questions(
        pool: &PgPool,
        category: Option<i32>,
    ) -> Result<Vec<Question>, ListingsError> {
        let query = match category {
            Some(category_id) => sqlx::query_as::<_, Question>(
                r#"
                    SELECT id, question, answer, category, difficulty
                    FROM questions
                    WHERE category = $1
                    ORDER BY id ASC
                    "#,
            )
            .bind(category_id),
            None => sqlx::query_as::<_, Question>(
                r#"
                    SELECT id, question, answer, category, difficulty
                    FROM questions
                    ORDER BY id ASC
                    "#,
            ),
        };

        query
            .fetch_all(pool)
            .await
            .map_err(|e| ListingsError::from_read("Fetch questions", e))
    }

    /// Case-insensitive substring match on question text, ordered by id
    pub async fn search_questions(
        pool: &PgPool,
        term: &str,
    ) -> Result<Vec<Question>, ListingsError> {
        log::debug!("Searching questions for term: {}", term);

        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE question ILIKE $1
            ORDER BY id ASC
            "#,
        )
        .bind(contains_pattern(term))
        .fetch_all(pool)
        .await
        .map_err(|e| ListingsError::from_read("Search questions", e))
    }

    /// Insert a question and return it with the new total
    /// DOCUMENTATION: The category check, insert and count share one transaction
    pub async fn create_question(
        pool: &PgPool,
        new: &NewQuestion,
    ) -> Result<(Question, i64), ListingsError> {
        let mut tx = pool
            .begin()
            .await
            .map_err(|e| ListingsError::from_write("Begin question insert", e))?;

        let (category_exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM categories WHERE id = $1)")
                .bind(new.category)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| ListingsError::from_read("Check category", e))?;

        if !category_exists {
            return Err(ListingsError::ValidationError(format!(
                "category {} does not exist",
                new.category
            )));
        }

        let question = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(&new.question)
        .bind(&new.answer)
        .bind(new.category)
        .bind(new.difficulty)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| ListingsError::from_write("Insert question", e))?;

        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| ListingsError::from_read("Count questions", e))?;

        tx.commit()
            .await
            .map_err(|e| ListingsError::from_write("Commit question insert", e))?;

        log::info!("Created question with id: {}", question.id);
        Ok((question, total))
    }

    /// Delete a question and return the remaining total
    pub async fn delete_question(pool: &PgPool, id: i32) -> Result<i64, ListingsError> {
        let mut tx = pool
            .begin()
            .await
            .map_err(|e| ListingsError::from_write("Begin question delete", e))?;

        let rows = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| ListingsError::from_write("Delete question", e))?
            .rows_affected();

        if rows == 0 {
            log::warn!("Question not found: {}", id);
            return Err(ListingsError::NotFound(format!("question {}", id)));
        }

        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| ListingsError::from_read("Count questions", e))?;

        tx.commit()
            .await
            .map_err(|e| ListingsError::from_write("Commit question delete", e))?;

        log::info!("Deleted question: {}", id);
        Ok(total)
    }
}

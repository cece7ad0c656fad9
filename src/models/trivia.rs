// src/models/trivia.rs
// DOCUMENTATION: Trivia questions, categories and quiz DTOs
// PURPOSE: Map the questions/categories tables and the trivia payloads

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use std::collections::{BTreeMap, HashSet};

/// Lowest and highest accepted difficulty
pub const MIN_DIFFICULTY: i32 = 1;
pub const MAX_DIFFICULTY: i32 = 5;

/// Category id meaning "all categories" in quiz requests
pub const ALL_CATEGORIES: i32 = 0;

/// Represents a category row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: i32,

    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub type_field: String,
}

/// Represents a question row
/// DOCUMENTATION: Serialized as-is in every trivia response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

/// Raw body of POST /questions
/// DOCUMENTATION: Every field is optional here so that a missing field is
/// reported as a validation failure rather than a parse failure
#[derive(Debug, Default, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub category: Option<i32>,
}

/// A question that passed boundary validation and may be inserted
#[derive(Debug, Clone, PartialEq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: i32,
}

impl CreateQuestionRequest {
    /// Check required fields once, before touching the store
    pub fn into_new_question(self) -> Result<NewQuestion, String> {
        let question = required_text(self.question, "question")?;
        let answer = required_text(self.answer, "answer")?;
        let difficulty = self.difficulty.ok_or("difficulty is required")?;
        let category = self.category.ok_or("category is required")?;

        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&difficulty) {
            return Err(format!(
                "difficulty must be between {} and {}",
                MIN_DIFFICULTY, MAX_DIFFICULTY
            ));
        }

        Ok(NewQuestion {
            question,
            answer,
            difficulty,
            category,
        })
    }
}

fn required_text(value: Option<String>, field: &str) -> Result<String, String> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(format!("{} is required", field)),
    }
}

/// Body of POST /questions/search
#[derive(Debug, Deserialize)]
pub struct QuestionSearchRequest {
    #[serde(rename = "searchTerm", alias = "search_term", default)]
    pub search_term: String,
}

/// Category selector sent by the quiz client
#[derive(Debug, Clone, Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i32,

    #[serde(rename = "type", default)]
    pub type_field: Option<String>,
}

/// Body of POST /quizzes
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(default, deserialize_with = "deserialize_ids")]
    pub previous_questions: Vec<i32>,
    pub quiz_category: Option<QuizCategory>,
}

impl QuizRequest {
    /// Category filter; `None` for the sentinel (absent or id 0)
    pub fn category_filter(&self) -> Option<i32> {
        self.quiz_category
            .as_ref()
            .map(|c| c.id)
            .filter(|id| *id != ALL_CATEGORIES)
    }

    /// Label of the requested category, as sent by the client
    pub fn category_label(&self) -> Option<&str> {
        self.quiz_category
            .as_ref()
            .and_then(|c| c.type_field.as_deref())
    }

    pub fn previous_ids(&self) -> HashSet<i32> {
        self.previous_questions.iter().copied().collect()
    }
}

/// Response for POST /quizzes; `question: null` ends the round
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}

/// GET /categories
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: BTreeMap<i32, String>,
    pub total_categories: usize,
}

/// Paginated question list used by GET /questions, search and category views
#[derive(Debug, Serialize)]
pub struct QuestionPageResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<BTreeMap<i32, String>>,
}

/// POST /questions result
#[derive(Debug, Serialize)]
pub struct QuestionCreatedResponse {
    pub success: bool,
    pub created: i32,
    pub question_created: String,
    pub total_questions: i64,
}

/// DELETE /questions/{id} result
#[derive(Debug, Serialize)]
pub struct QuestionDeletedResponse {
    pub success: bool,
    pub deleted: i32,
    pub total_questions: i64,
}

/// Map of category id to label as served by the trivia client
pub fn category_map(categories: &[Category]) -> BTreeMap<i32, String> {
    categories
        .iter()
        .map(|c| (c.id, c.type_field.clone()))
        .collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(i64),
    Text(String),
}

impl NumberOrString {
    fn into_id<E: serde::de::Error>(self) -> Result<i32, E> {
        let raw = match self {
            NumberOrString::Number(n) => n,
            NumberOrString::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| E::custom(format!("invalid id: {}", s)))?,
        };
        i32::try_from(raw).map_err(|_| E::custom(format!("id out of range: {}", raw)))
    }
}

/// Clients send category ids either as numbers or as numeric strings
fn deserialize_id<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    NumberOrString::deserialize(deserializer)?.into_id()
}

fn deserialize_ids<'de, D>(deserializer: D) -> Result<Vec<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<NumberOrString>::deserialize(deserializer)?
        .into_iter()
        .map(NumberOrString::into_id)
        .collect()
}

fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<NumberOrString>::deserialize(deserializer)?
        .map(NumberOrString::into_id)
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_requires_every_field() {
        let req: CreateQuestionRequest = serde_json::from_value(json!({
            "question": "What is the heaviest organ in the human body?",
            "answer": "The Liver",
            "difficulty": 4,
            "category": "1"
        }))
        .unwrap();

        let new = req.into_new_question().unwrap();
        assert_eq!(new.category, 1);
        assert_eq!(new.difficulty, 4);

        let missing: CreateQuestionRequest =
            serde_json::from_value(json!({ "question": "Q?", "answer": "A" })).unwrap();
        assert!(missing.into_new_question().is_err());

        let blank: CreateQuestionRequest = serde_json::from_value(json!({
            "question": "   ", "answer": "A", "difficulty": 1, "category": 1
        }))
        .unwrap();
        assert!(blank.into_new_question().is_err());
    }

    #[test]
    fn test_difficulty_range() {
        let req = CreateQuestionRequest {
            question: Some("Q?".into()),
            answer: Some("A".into()),
            difficulty: Some(6),
            category: Some(2),
        };
        assert!(req.into_new_question().is_err());
    }

    #[test]
    fn test_quiz_category_sentinel() {
        let all: QuizRequest = serde_json::from_value(json!({
            "previous_questions": [1, 2],
            "quiz_category": { "type": "click", "id": 0 }
        }))
        .unwrap();
        assert_eq!(all.category_filter(), None);
        assert_eq!(all.previous_ids().len(), 2);

        let absent: QuizRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(absent.category_filter(), None);
        assert!(absent.previous_ids().is_empty());

        let science: QuizRequest = serde_json::from_value(json!({
            "previous_questions": [],
            "quiz_category": { "type": "Science", "id": "1" }
        }))
        .unwrap();
        assert_eq!(science.category_filter(), Some(1));
        assert_eq!(science.category_label(), Some("Science"));
    }

    #[test]
    fn test_previous_questions_accept_string_ids() {
        let req: QuizRequest = serde_json::from_value(json!({
            "previous_questions": [4, "9", " 12 "],
            "quiz_category": { "id": 0 }
        }))
        .unwrap();
        let expected: HashSet<i32> = [4, 9, 12].into_iter().collect();
        assert_eq!(req.previous_ids(), expected);
        assert_eq!(req.category_label(), None);

        let bad = serde_json::from_value::<QuizRequest>(json!({ "previous_questions": ["four"] }));
        assert!(bad.is_err());
    }

    #[test]
    fn test_search_term_aliases() {
        let camel: QuestionSearchRequest =
            serde_json::from_value(json!({ "searchTerm": "title" })).unwrap();
        let snake: QuestionSearchRequest =
            serde_json::from_value(json!({ "search_term": "title" })).unwrap();
        assert_eq!(camel.search_term, snake.search_term);
    }
}

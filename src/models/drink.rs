// src/models/drink.rs
// DOCUMENTATION: Coffee-shop drinks and their recipes
// PURPOSE: Map the drinks table and the short/long menu representations

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::{Validate, ValidationError};

use super::validate_not_blank;

/// One recipe ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RecipeIngredient {
    #[validate(length(min = 1, max = 80))]
    pub name: String,

    #[validate(length(min = 1, max = 40))]
    pub color: String,

    #[validate(range(min = 1, max = 100))]
    pub parts: i32,
}

/// Ingredient as shown on the public menu (name hidden)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipePart {
    pub color: String,
    pub parts: i32,
}

/// Represents a drink row; the recipe is a JSONB column
#[derive(Debug, Clone, FromRow)]
pub struct Drink {
    pub id: i32,
    pub title: String,
    pub recipe: Json<Vec<RecipeIngredient>>,
}

/// Public menu representation
#[derive(Debug, Serialize)]
pub struct DrinkShort {
    pub id: i32,
    pub title: String,
    pub recipe: Vec<RecipePart>,
}

/// Barista representation with full ingredient names
#[derive(Debug, Serialize)]
pub struct DrinkLong {
    pub id: i32,
    pub title: String,
    pub recipe: Vec<RecipeIngredient>,
}

impl Drink {
    pub fn short(&self) -> DrinkShort {
        DrinkShort {
            id: self.id,
            title: self.title.clone(),
            recipe: self
                .recipe
                .iter()
                .map(|r| RecipePart {
                    color: r.color.clone(),
                    parts: r.parts,
                })
                .collect(),
        }
    }

    pub fn long(&self) -> DrinkLong {
        DrinkLong {
            id: self.id,
            title: self.title.clone(),
            recipe: self.recipe.0.clone(),
        }
    }
}

/// POST /drinks body
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDrinkRequest {
    #[validate(length(min = 1, max = 80), custom = "validate_not_blank")]
    pub title: String,

    #[validate(custom = "validate_recipe")]
    pub recipe: Vec<RecipeIngredient>,
}

/// PATCH /drinks/{id} body
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateDrinkRequest {
    #[validate(length(min = 1, max = 80), custom = "validate_not_blank")]
    pub title: Option<String>,

    #[validate(custom = "validate_recipe")]
    pub recipe: Option<Vec<RecipeIngredient>>,
}

/// Response for GET /drinks
#[derive(Debug, Serialize)]
pub struct DrinksShortResponse {
    pub success: bool,
    pub drinks: Vec<DrinkShort>,
}

/// Response for GET /drinks-detail, POST and PATCH
#[derive(Debug, Serialize)]
pub struct DrinksLongResponse {
    pub success: bool,
    pub drinks: Vec<DrinkLong>,
}

/// DELETE /drinks/{id} result
#[derive(Debug, Serialize)]
pub struct DrinkDeletedResponse {
    pub success: bool,
    pub delete: i32,
}

fn validate_recipe(recipe: &Vec<RecipeIngredient>) -> Result<(), ValidationError> {
    if recipe.is_empty() {
        return Err(ValidationError::new("empty_recipe"));
    }
    if recipe.iter().any(|r| r.validate().is_err()) {
        return Err(ValidationError::new("invalid_ingredient"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn latte() -> Drink {
        Drink {
            id: 1,
            title: "Latte".to_string(),
            recipe: Json(vec![
                RecipeIngredient {
                    name: "espresso".to_string(),
                    color: "brown".to_string(),
                    parts: 1,
                },
                RecipeIngredient {
                    name: "milk".to_string(),
                    color: "white".to_string(),
                    parts: 3,
                },
            ]),
        }
    }

    #[test]
    fn test_short_hides_ingredient_names() {
        let short = serde_json::to_value(latte().short()).unwrap();
        assert_eq!(
            short["recipe"],
            json!([{ "color": "brown", "parts": 1 }, { "color": "white", "parts": 3 }])
        );
    }

    #[test]
    fn test_long_keeps_ingredient_names() {
        let long = latte().long();
        assert_eq!(long.recipe[1].name, "milk");
    }

    #[test]
    fn test_create_validation() {
        let empty: CreateDrinkRequest =
            serde_json::from_value(json!({ "title": "Water", "recipe": [] })).unwrap();
        assert!(empty.validate().is_err());

        let ok: CreateDrinkRequest = serde_json::from_value(json!({
            "title": "Water",
            "recipe": [{ "name": "water", "color": "blue", "parts": 1 }]
        }))
        .unwrap();
        assert!(ok.validate().is_ok());

        let blank_title: CreateDrinkRequest = serde_json::from_value(json!({
            "title": "   ",
            "recipe": [{ "name": "water", "color": "blue", "parts": 1 }]
        }))
        .unwrap();
        assert!(blank_title.validate().is_err());

        let zero_parts: CreateDrinkRequest = serde_json::from_value(json!({
            "title": "Water",
            "recipe": [{ "name": "water", "color": "blue", "parts": 0 }]
        }))
        .unwrap();
        assert!(zero_parts.validate().is_err());
    }
}

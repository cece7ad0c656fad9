// src/models/venue.rs
// DOCUMENTATION: Venue records and request/response DTOs
// PURPOSE: Map the venues table and the /venues payloads

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::{split_genres, validate_genres, validate_not_blank, VenueShow};

/// Represents a venue row from the database
/// DOCUMENTATION: `genres` is the raw comma-joined column
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Venue {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub genres: String,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// Request DTO for creating a new venue
/// DOCUMENTATION: Data transfer object for POST /venues
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CreateVenueRequest {
    #[validate(length(min = 1, max = 255), custom = "validate_not_blank")]
    pub name: String,

    #[validate(length(min = 1, max = 120), custom = "validate_not_blank")]
    pub city: String,

    #[validate(length(min = 1, max = 120), custom = "validate_not_blank")]
    pub state: String,

    #[validate(length(max = 120))]
    pub address: Option<String>,

    #[validate(length(max = 120))]
    pub phone: Option<String>,

    #[serde(default)]
    #[validate(custom = "validate_genres")]
    pub genres: Vec<String>,

    #[validate(url, length(max = 500))]
    pub image_link: Option<String>,

    #[validate(url, length(max = 120))]
    pub facebook_link: Option<String>,

    #[validate(url, length(max = 120))]
    pub website: Option<String>,

    #[serde(default)]
    pub seeking_talent: bool,

    #[validate(length(max = 120))]
    pub seeking_description: Option<String>,
}

/// Request DTO for updating a venue
/// DOCUMENTATION: All fields optional - only provided fields are updated
#[derive(Debug, Serialize, Deserialize, Validate, Default)]
pub struct UpdateVenueRequest {
    #[validate(length(min = 1, max = 255), custom = "validate_not_blank")]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 120), custom = "validate_not_blank")]
    pub city: Option<String>,

    #[validate(length(min = 1, max = 120), custom = "validate_not_blank")]
    pub state: Option<String>,

    #[validate(length(max = 120))]
    pub address: Option<String>,

    #[validate(length(max = 120))]
    pub phone: Option<String>,

    #[validate(custom = "validate_genres")]
    pub genres: Option<Vec<String>>,

    #[validate(url, length(max = 500))]
    pub image_link: Option<String>,

    #[validate(url, length(max = 120))]
    pub facebook_link: Option<String>,

    #[validate(url, length(max = 120))]
    pub website: Option<String>,

    pub seeking_talent: Option<bool>,

    #[validate(length(max = 120))]
    pub seeking_description: Option<String>,
}

/// Venue DTO for API responses
#[derive(Debug, Serialize)]
pub struct VenueResponse {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// Venue page: venue fields plus its shows split by time
#[derive(Debug, Serialize)]
pub struct VenueDetailResponse {
    #[serde(flatten)]
    pub venue: VenueResponse,
    pub past_shows: Vec<VenueShow>,
    pub upcoming_shows: Vec<VenueShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl Venue {
    /// Convert database venue into API response DTO
    pub fn to_response(&self) -> VenueResponse {
        VenueResponse {
            id: self.id,
            name: self.name.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            address: self.address.clone(),
            phone: self.phone.clone(),
            genres: split_genres(&self.genres),
            image_link: self.image_link.clone(),
            facebook_link: self.facebook_link.clone(),
            website: self.website.clone(),
            seeking_talent: self.seeking_talent,
            seeking_description: self.seeking_description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(value: serde_json::Value) -> CreateVenueRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_create_request_validation() {
        let ok = request(json!({
            "name": "The Musical Hop",
            "city": "San Francisco",
            "state": "CA",
            "genres": ["Jazz", "Reggae"],
            "website": "https://www.themusicalhop.com"
        }));
        assert!(ok.validate().is_ok());
        assert!(!ok.seeking_talent);

        let blank_name = request(json!({ "name": "", "city": "SF", "state": "CA" }));
        assert!(blank_name.validate().is_err());

        let spaces_only = request(json!({ "name": "   ", "city": "  ", "state": " " }));
        assert!(spaces_only.validate().is_err());

        let bad_url = request(json!({
            "name": "Hop", "city": "SF", "state": "CA", "website": "not a url"
        }));
        assert!(bad_url.validate().is_err());

        let bad_genre = request(json!({
            "name": "Hop", "city": "SF", "state": "CA", "genres": ["Rock,Pop"]
        }));
        assert!(bad_genre.validate().is_err());
    }

    #[test]
    fn test_response_splits_genres() {
        let venue = Venue {
            id: 1,
            name: "The Dueling Pianos Bar".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            address: None,
            phone: None,
            genres: "Classical,R&B,Hip-Hop".to_string(),
            image_link: None,
            facebook_link: None,
            website: None,
            seeking_talent: false,
            seeking_description: None,
        };

        let response = venue.to_response();
        assert_eq!(response.genres, vec!["Classical", "R&B", "Hip-Hop"]);
    }
}

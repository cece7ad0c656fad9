// src/models/artist.rs
// DOCUMENTATION: Artist records and request/response DTOs
// PURPOSE: Map the artists table and the /artists payloads

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::{split_genres, validate_genres, validate_not_blank, ArtistShow};

/// Represents an artist row from the database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Artist {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: String,
    pub website: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

/// Request DTO for POST /artists
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CreateArtistRequest {
    #[validate(length(min = 1, max = 255), custom = "validate_not_blank")]
    pub name: String,

    #[validate(length(min = 1, max = 120), custom = "validate_not_blank")]
    pub city: String,

    #[validate(length(min = 1, max = 120), custom = "validate_not_blank")]
    pub state: String,

    #[validate(length(max = 120))]
    pub phone: Option<String>,

    #[serde(default)]
    #[validate(custom = "validate_genres")]
    pub genres: Vec<String>,

    #[validate(url, length(max = 120))]
    pub website: Option<String>,

    #[validate(url, length(max = 500))]
    pub image_link: Option<String>,

    #[validate(url, length(max = 120))]
    pub facebook_link: Option<String>,

    #[serde(default)]
    pub seeking_venue: bool,

    #[validate(length(max = 120))]
    pub seeking_description: Option<String>,
}

/// Request DTO for PUT /artists/{id}
#[derive(Debug, Serialize, Deserialize, Validate, Default)]
pub struct UpdateArtistRequest {
    #[validate(length(min = 1, max = 255), custom = "validate_not_blank")]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 120), custom = "validate_not_blank")]
    pub city: Option<String>,

    #[validate(length(min = 1, max = 120), custom = "validate_not_blank")]
    pub state: Option<String>,

    #[validate(length(max = 120))]
    pub phone: Option<String>,

    #[validate(custom = "validate_genres")]
    pub genres: Option<Vec<String>>,

    #[validate(url, length(max = 120))]
    pub website: Option<String>,

    #[validate(url, length(max = 500))]
    pub image_link: Option<String>,

    #[validate(url, length(max = 120))]
    pub facebook_link: Option<String>,

    pub seeking_venue: Option<bool>,

    #[validate(length(max = 120))]
    pub seeking_description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ArtistResponse {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub website: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ArtistDetailResponse {
    #[serde(flatten)]
    pub artist: ArtistResponse,
    pub past_shows: Vec<ArtistShow>,
    pub upcoming_shows: Vec<ArtistShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl Artist {
    pub fn to_response(&self) -> ArtistResponse {
        ArtistResponse {
            id: self.id,
            name: self.name.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            phone: self.phone.clone(),
            genres: split_genres(&self.genres),
            website: self.website.clone(),
            image_link: self.image_link.clone(),
            facebook_link: self.facebook_link.clone(),
            seeking_venue: self.seeking_venue,
            seeking_description: self.seeking_description.clone(),
        }
    }
}

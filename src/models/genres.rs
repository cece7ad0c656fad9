// src/models/genres.rs
// DOCUMENTATION: Genre list <-> comma-joined column conversion
// PURPOSE: Keep the stored text and the API list in lockstep

use validator::ValidationError;

/// Column width of `venues.genres` / `artists.genres`
pub const GENRES_MAX_LEN: usize = 120;

/// Split stored genre text into a list
/// An empty column yields an empty list, not `[""]`
pub fn split_genres(stored: &str) -> Vec<String> {
    if stored.is_empty() {
        return Vec::new();
    }
    stored.split(',').map(|g| g.to_string()).collect()
}

/// Join a genre list for storage
/// Tokens are trimmed; callers must run `validate_genres` first
pub fn join_genres(genres: &[String]) -> String {
    genres
        .iter()
        .map(|g| g.trim())
        .collect::<Vec<_>>()
        .join(",")
}

/// Validator hook for genre lists on create/update requests
/// Rejects tokens that would not survive a split/join round trip
pub fn validate_genres(genres: &Vec<String>) -> Result<(), ValidationError> {
    for genre in genres {
        let token = genre.trim();
        if token.is_empty() {
            return Err(ValidationError::new("empty_genre"));
        }
        if token.contains(',') {
            return Err(ValidationError::new("genre_contains_comma"));
        }
    }

    if join_genres(genres).len() > GENRES_MAX_LEN {
        return Err(ValidationError::new("genres_too_long"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let genres = vec!["Jazz".to_string(), "Reggae".to_string(), "Swing".to_string()];
        assert!(validate_genres(&genres).is_ok());

        let stored = join_genres(&genres);
        assert_eq!(stored, "Jazz,Reggae,Swing");
        assert_eq!(split_genres(&stored), genres);
    }

    #[test]
    fn test_empty_column_is_empty_list() {
        assert!(split_genres("").is_empty());
        assert_eq!(join_genres(&[]), "");
    }

    #[test]
    fn test_tokens_are_trimmed() {
        let genres = vec![" Folk ".to_string(), "Blues".to_string()];
        assert_eq!(join_genres(&genres), "Folk,Blues");
    }

    #[test]
    fn test_rejects_comma_and_blank_tokens() {
        assert!(validate_genres(&vec!["Rock, Pop".to_string()]).is_err());
        assert!(validate_genres(&vec!["  ".to_string()]).is_err());
    }

    #[test]
    fn test_rejects_overlong_list() {
        let genres: Vec<String> = (0..30).map(|i| format!("Genre{}", i)).collect();
        assert!(validate_genres(&genres).is_err());
    }
}

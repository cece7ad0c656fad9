// src/bin/seed.rs
// Populates a running stagebook-api with sample venues, artists, shows,
// trivia questions and drinks through its public HTTP API.
use anyhow::{anyhow, bail, Context, Result};
use chrono::{Duration as ChronoDuration, Utc};
use dotenv::dotenv;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::env;
use std::process;
use std::time::{Duration, Instant};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

#[derive(Deserialize)]
struct CreatedVenue {
    venue: IdOnly,
}

#[derive(Deserialize)]
struct CreatedArtist {
    artist: IdOnly,
}

#[derive(Deserialize)]
struct IdOnly {
    id: i32,
}

#[derive(Deserialize)]
struct CategoriesResponse {
    categories: HashMap<String, String>,
}

#[derive(Deserialize)]
struct AreasResponse {
    areas: Vec<Value>,
}

#[derive(Default)]
struct SeedStats {
    created: u32,
    failed: u32,
}

fn sample_venues() -> Vec<Value> {
    vec![
        json!({
            "name": "The Musical Hop",
            "city": "San Francisco",
            "state": "CA",
            "address": "1015 Folsom Street",
            "phone": "123-123-1234",
            "genres": ["Jazz", "Reggae", "Swing", "Classical", "Folk"],
            "website": "https://www.themusicalhop.com",
            "facebook_link": "https://www.facebook.com/TheMusicalHop",
            "seeking_talent": true,
            "seeking_description": "We are on the lookout for a local artist to play every two weeks."
        }),
        json!({
            "name": "The Dueling Pianos Bar",
            "city": "New York",
            "state": "NY",
            "address": "335 Delancey Street",
            "phone": "914-003-1132",
            "genres": ["Classical", "R&B", "Hip-Hop"],
            "website": "https://www.theduelingpianos.com",
            "facebook_link": "https://www.facebook.com/theduelingpianos"
        }),
        json!({
            "name": "Park Square Live Music & Coffee",
            "city": "San Francisco",
            "state": "CA",
            "address": "34 Whiskey Moore Ave",
            "phone": "415-000-1234",
            "genres": ["Rock n Roll", "Jazz", "Classical", "Folk"],
            "website": "https://www.parksquarelivemusicandcoffee.com"
        }),
    ]
}

fn sample_artists() -> Vec<Value> {
    vec![
        json!({
            "name": "Guns N Petals",
            "city": "San Francisco",
            "state": "CA",
            "phone": "326-123-5000",
            "genres": ["Rock n Roll"],
            "website": "https://www.gunsnpetalsband.com",
            "seeking_venue": true,
            "seeking_description": "Looking for shows to perform at in the San Francisco Bay Area!"
        }),
        json!({
            "name": "Matt Quevedo",
            "city": "New York",
            "state": "NY",
            "phone": "300-400-5000",
            "genres": ["Jazz"]
        }),
        json!({
            "name": "The Wild Sax Band",
            "city": "San Francisco",
            "state": "CA",
            "phone": "432-325-5432",
            "genres": ["Jazz", "Classical"]
        }),
    ]
}

fn sample_questions() -> Vec<(&'static str, &'static str, &'static str, i32)> {
    vec![
        ("Science", "What is the heaviest organ in the human body?", "The Liver", 4),
        ("Science", "Who discovered penicillin?", "Alexander Fleming", 3),
        ("Art", "Which Dutch graphic artist created optical illusions?", "Escher", 1),
        ("Art", "La Giaconda is better known as what?", "Mona Lisa", 3),
        ("Geography", "What is the largest lake in Africa?", "Lake Victoria", 2),
        ("Geography", "In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3),
        ("History", "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 2),
        ("History", "Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 4),
        ("Entertainment", "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 4),
        ("Sports", "Which is the only team to play in every soccer World Cup tournament?", "Brazil", 3),
    ]
}

fn sample_drinks() -> Vec<Value> {
    vec![
        json!({
            "title": "Latte",
            "recipe": [
                { "name": "espresso", "color": "brown", "parts": 1 },
                { "name": "steamed milk", "color": "white", "parts": 3 }
            ]
        }),
        json!({
            "title": "Water",
            "recipe": [{ "name": "water", "color": "blue", "parts": 1 }]
        }),
    ]
}

struct Seeder {
    base_url: String,
    client: Client,
    stats: SeedStats,
}

impl Seeder {
    fn new(base_url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            base_url,
            client,
            stats: SeedStats::default(),
        })
    }

    async fn check_service_health(&self) -> bool {
        match self.client.get(format!("{}/health", self.base_url)).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    async fn already_seeded(&self) -> Result<bool> {
        let resp: AreasResponse = self
            .client
            .get(format!("{}/venues", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(!resp.areas.is_empty())
    }

    async fn post<T: for<'de> Deserialize<'de>>(&self, path: &str, body: &Value) -> Result<T> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await
            .with_context(|| format!("POST {} failed", path))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            bail!("HTTP {} - {}", status, text);
        }

        Ok(response.json::<T>().await?)
    }

    fn record<T>(&mut self, label: &str, result: Result<T>) -> Option<T> {
        match result {
            Ok(value) => {
                self.stats.created += 1;
                println!("{}  ✅ {}{}", GREEN, label, RESET);
                Some(value)
            }
            Err(err) => {
                self.stats.failed += 1;
                println!("{}  ❌ {}: {}{}", RED, label, err, RESET);
                None
            }
        }
    }

    async fn seed_directory(&mut self) -> Result<()> {
        println!("\n{}🎸 Venues and artists{}", BOLD, RESET);

        let mut venue_ids = Vec::new();
        for venue in sample_venues() {
            let label = venue["name"].as_str().unwrap_or("venue").to_string();
            let result = self.post::<CreatedVenue>("/venues", &venue).await;
            if let Some(created) = self.record(&label, result) {
                venue_ids.push(created.venue.id);
            }
        }

        let mut artist_ids = Vec::new();
        for artist in sample_artists() {
            let label = artist["name"].as_str().unwrap_or("artist").to_string();
            let result = self.post::<CreatedArtist>("/artists", &artist).await;
            if let Some(created) = self.record(&label, result) {
                artist_ids.push(created.artist.id);
            }
        }

        println!("\n{}🎟️  Shows{}", BOLD, RESET);
        let now = Utc::now();
        let offsets = [-30, 14, 45];
        for (i, (artist_id, venue_id)) in artist_ids.iter().zip(venue_ids.iter()).enumerate() {
            let start_time = now + ChronoDuration::days(offsets[i % offsets.len()]);
            let body = json!({
                "artist_id": artist_id,
                "venue_id": venue_id,
                "start_time": start_time.to_rfc3339()
            });
            let result = self.post::<Value>("/shows", &body).await;
            self.record(&format!("Show artist {} @ venue {}", artist_id, venue_id), result);
        }

        Ok(())
    }

    async fn seed_trivia(&mut self) -> Result<()> {
        println!("\n{}❓ Trivia questions{}", BOLD, RESET);

        let resp: CategoriesResponse = self
            .client
            .get(format!("{}/categories", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let by_label: HashMap<String, i32> = resp
            .categories
            .into_iter()
            .filter_map(|(id, label)| id.parse().ok().map(|id| (label, id)))
            .collect();

        for (label, question, answer, difficulty) in sample_questions() {
            let category = *by_label
                .get(label)
                .ok_or_else(|| anyhow!("category '{}' missing - were migrations applied?", label))?;
            let body = json!({
                "question": question,
                "answer": answer,
                "difficulty": difficulty,
                "category": category
            });
            let result = self.post::<Value>("/questions", &body).await;
            self.record(question, result);
        }

        Ok(())
    }

    async fn seed_drinks(&mut self) {
        println!("\n{}☕ Drinks{}", BOLD, RESET);
        for drink in sample_drinks() {
            let label = drink["title"].as_str().unwrap_or("drink").to_string();
            let result = self.post::<Value>("/drinks", &drink).await;
            self.record(&label, result);
        }
    }

    async fn run(&mut self) -> Result<()> {
        println!("\n{}🔍 Checking service status...{}", CYAN, RESET);
        if !self.check_service_health().await {
            println!("{}❌ Service unavailable.{}", RED, RESET);
            println!("{}Please ensure stagebook-api is running (cargo run){}", YELLOW, RESET);
            process::exit(1);
        }
        println!("{}✅ Service available{}", GREEN, RESET);

        if self.already_seeded().await? {
            println!("{}⚠️  Venues already present, skipping seed.{}", YELLOW, RESET);
            return Ok(());
        }

        let started = Instant::now();
        self.seed_directory().await?;
        self.seed_trivia().await?;
        self.seed_drinks().await;

        println!("\n{}📋 Summary{}", BOLD, RESET);
        println!("  • Created: {}{}{}", GREEN, self.stats.created, RESET);
        println!("  • Failed: {}{}{}", RED, self.stats.failed, RESET);
        println!("  • Duration: {:.1}s", started.elapsed().as_secs_f64());

        if self.stats.failed > 0 {
            bail!("{} records failed to seed", self.stats.failed);
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let base_url =
        env::var("STAGEBOOK_API_URL").unwrap_or_else(|_| "http://localhost:5000".to_string());

    let mut seeder = Seeder::new(base_url)?;
    seeder.run().await
}

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::model::{Chapter, Comic, ComicStatus, ComicType, today};

pub const RECOMMENDATION_COUNT: usize = 6;
pub const HYDRATED_CHAPTERS: u32 = 20;

pub fn build_prompt(query: &str) -> String {
    format!(
        "List {count} fictional or real manhwa/comic titles matching this reader request: \"{query}\".\n\
         If the request is vague, suggest popular action or fantasy manhwa instead.\n\
         Answer with JSON that follows the provided schema.\n\
         Set coverUrl to \"https://picsum.photos/seed/{{slug}}/300/450\" where {{slug}} is the slugified title.\n\
         Write short, engaging descriptions in the tone of a scanlation site.\n\
         Do not include chapters.",
        count = RECOMMENDATION_COUNT,
        query = query,
    )
}

/// Array of comic objects, without chapters.
pub fn response_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "id": { "type": "STRING" },
                "title": { "type": "STRING" },
                "slug": { "type": "STRING" },
                "description": { "type": "STRING" },
                "coverUrl": { "type": "STRING" },
                "rating": { "type": "NUMBER" },
                "status": { "type": "STRING", "enum": ["Ongoing", "Completed", "Hiatus"] },
                "type": { "type": "STRING", "enum": ["Manhwa", "Manga", "Manhua"] },
                "author": { "type": "STRING" },
                "artist": { "type": "STRING" },
                "genres": { "type": "ARRAY", "items": { "type": "STRING" } }
            },
            "required": [
                "id", "title", "slug", "description", "coverUrl",
                "rating", "status", "type", "genres"
            ]
        }
    })
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    pub fn for_query(query: &str) -> Self {
        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(build_prompt(query)),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: response_schema(),
            },
        }
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: Value,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, `None` when absent or blank.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();

        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// One item of the model's answer, before hydration.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedComic {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub cover_url: String,
    pub rating: f64,
    pub status: ComicStatus,
    #[serde(rename = "type")]
    pub kind: ComicType,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    pub genres: Vec<String>,
}

impl RecommendedComic {
    /// Attaches twenty synthetic chapters, newest first, and flags the comic as new.
    pub fn hydrate(self) -> Comic {
        let release_date = today();
        let chapters = (1..=HYDRATED_CHAPTERS)
            .rev()
            .map(|n| Chapter {
                id: format!("ai-{}-{}", self.id, n),
                number: n.to_string(),
                title: format!("Chapter {}", n),
                release_date,
            })
            .collect();

        Comic {
            id: self.id,
            title: self.title,
            slug: self.slug,
            description: self.description,
            cover_url: self.cover_url,
            rating: self.rating,
            status: self.status,
            kind: self.kind,
            author: self.author.unwrap_or_default(),
            artist: self.artist.unwrap_or_default(),
            genres: self.genres,
            chapters,
            is_hot: None,
            is_new: Some(true),
        }
    }
}

/// Parses the model's JSON text. A single invalid item rejects the whole answer.
pub fn parse_recommendations(text: &str) -> Result<Vec<Comic>, serde_json::Error> {
    let items: Vec<RecommendedComic> = serde_json::from_str(text)?;

    Ok(items.into_iter().map(RecommendedComic::hydrate).collect())
}

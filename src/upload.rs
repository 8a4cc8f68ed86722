use std::cmp::Ordering;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::{Chapter, Comic, ComicStatus, ComicType};

pub const GENRES: [&str; 15] = [
    "Action",
    "Adventure",
    "Fantasy",
    "Romance",
    "Comedy",
    "Slice of Life",
    "Drama",
    "Thriller",
    "Horror",
    "Mystery",
    "Sci-Fi",
    "Isekai",
    "Martial Arts",
    "System",
    "Regression",
];

const DEFAULT_CHAPTERS: u32 = 3;

/// Upload/edit form state. Fields mirror [`Comic`] one to one.
#[derive(Deserialize, Serialize, Debug, Clone, Default, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UploadForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[serde(default)]
    pub author: String,

    #[serde(default)]
    pub artist: String,

    #[serde(default, rename = "type")]
    pub kind: ComicType,

    #[serde(default)]
    pub status: ComicStatus,

    #[serde(default)]
    #[validate(length(min = 1, message = "Cover image is required"))]
    pub cover_url: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Select at least one genre"))]
    pub genres: Vec<String>,

    #[serde(default)]
    pub rating: f64,

    /// `None` keeps the existing chapters on edit, or seeds defaults on create.
    #[serde(default)]
    pub chapters: Option<Vec<Chapter>>,
}

impl UploadForm {
    /// Form pre-filled from an existing comic, as shown on the edit page.
    pub fn from_comic(comic: &Comic) -> Self {
        UploadForm {
            title: comic.title.to_owned(),
            description: comic.description.to_owned(),
            author: comic.author.to_owned(),
            artist: comic.artist.to_owned(),
            kind: comic.kind,
            status: comic.status,
            cover_url: comic.cover_url.to_owned(),
            genres: comic.genres.clone(),
            rating: comic.rating,
            chapters: Some(comic.chapters.clone()),
        }
    }

    pub fn toggle_genre(&mut self, genre: &str) {
        match self.genres.iter().position(|g| g == genre) {
            Some(index) => {
                self.genres.remove(index);
            }
            None => self.genres.push(genre.to_string()),
        }
    }

    /// Adds a chapter by number and keeps the list sorted newest first.
    /// Blank numbers are ignored.
    pub fn add_chapter(&mut self, number: &str) {
        let number = number.trim();
        if number.is_empty() {
            return;
        }

        let chapters = self.chapters.get_or_insert_with(Vec::new);
        chapters.insert(
            0,
            Chapter::released_today(format!("ch-{}", uuid::Uuid::new_v4()), number),
        );
        sort_descending(chapters);
    }

    pub fn remove_chapter(&mut self, id: &str) {
        if let Some(chapters) = self.chapters.as_mut() {
            chapters.retain(|c| c.id != id);
        }
    }

    /// Builds the comic to store. `existing` is the record being edited.
    pub fn into_comic(self, existing: Option<&Comic>) -> Comic {
        let id = match existing {
            Some(comic) => comic.id.to_owned(),
            None => format!("upload-{}", Utc::now().timestamp_millis()),
        };
        let slug = match existing {
            Some(comic) => comic.slug.to_owned(),
            None => slugify(&self.title),
        };
        let chapters = match (self.chapters, existing) {
            (Some(chapters), _) => chapters,
            (None, Some(comic)) => comic.chapters.clone(),
            (None, None) => default_chapters(),
        };

        Comic {
            id,
            title: self.title,
            slug,
            description: self.description,
            cover_url: self.cover_url,
            rating: self.rating,
            status: self.status,
            kind: self.kind,
            author: or_unknown(self.author),
            artist: or_unknown(self.artist),
            genres: self.genres,
            chapters,
            is_new: match existing {
                Some(comic) => comic.is_new,
                None => Some(true),
            },
            is_hot: Some(existing.is_some_and(Comic::is_hot)),
        }
    }
}

pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());

    for c in title.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            slug.push(c);
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }

    slug.trim_matches('-').to_string()
}

fn or_unknown(value: String) -> String {
    if value.is_empty() {
        "Unknown".to_string()
    } else {
        value
    }
}

fn default_chapters() -> Vec<Chapter> {
    let millis = Utc::now().timestamp_millis();

    (1..=DEFAULT_CHAPTERS)
        .rev()
        .map(|n| Chapter::released_today(format!("new-{}-{}", millis, n), n.to_string()))
        .collect()
}

/// Non-numeric chapter numbers sort after every numeric one.
fn sort_descending(chapters: &mut [Chapter]) {
    chapters.sort_by(|a, b| {
        match (a.number.parse::<f64>().ok(), b.number.parse::<f64>().ok()) {
            (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
}

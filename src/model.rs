use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComicStatus {
    #[default]
    Ongoing,
    Completed,
    Hiatus,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComicType {
    #[default]
    Manhwa,
    Manga,
    Manhua,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comic {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub cover_url: String,
    pub rating: f64,
    pub status: ComicStatus,
    #[serde(rename = "type")]
    pub kind: ComicType,
    pub author: String,
    pub artist: String,
    pub genres: Vec<String>,
    pub chapters: Vec<Chapter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_hot: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_new: Option<bool>,
}

impl Comic {
    pub fn is_hot(&self) -> bool {
        self.is_hot.unwrap_or(false)
    }

    pub fn is_new(&self) -> bool {
        self.is_new.unwrap_or(false)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub id: String,
    pub number: String,
    pub title: String,
    pub release_date: NaiveDate,
}

impl Chapter {
    /// A chapter titled after its number and released today.
    pub fn released_today(id: String, number: impl Into<String>) -> Self {
        let number = number.into();

        Chapter {
            id,
            title: format!("Chapter {}", number),
            number,
            release_date: today(),
        }
    }
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Compact projection rendered by the catalog grid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComicCard {
    pub id: String,
    pub title: String,
    pub cover_url: String,
    pub rating: f64,
    pub status: ComicStatus,
    #[serde(rename = "type")]
    pub kind: ComicType,
    pub is_hot: bool,
    pub is_new: bool,
    pub latest_chapters: Vec<Chapter>,
}

impl From<&Comic> for ComicCard {
    fn from(comic: &Comic) -> Self {
        ComicCard {
            id: comic.id.to_owned(),
            title: comic.title.to_owned(),
            cover_url: comic.cover_url.to_owned(),
            rating: comic.rating,
            status: comic.status,
            kind: comic.kind,
            is_hot: comic.is_hot(),
            is_new: comic.is_new(),
            latest_chapters: comic.chapters.iter().take(3).cloned().collect(),
        }
    }
}

/// One row of the admin table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdminRow {
    pub id: String,
    pub title: String,
    pub cover_url: String,
    #[serde(rename = "type")]
    pub kind: ComicType,
    pub status: ComicStatus,
    pub chapter_count: usize,
    pub rating: f64,
}

impl From<&Comic> for AdminRow {
    fn from(comic: &Comic) -> Self {
        AdminRow {
            id: comic.id.to_owned(),
            title: comic.title.to_owned(),
            cover_url: comic.cover_url.to_owned(),
            kind: comic.kind,
            status: comic.status,
            chapter_count: comic.chapters.len(),
            rating: comic.rating,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HomeView {
    pub ai_mode: bool,
    pub popular: Vec<ComicCard>,
    pub latest: Vec<ComicCard>,
}

/// Upper bound of the popular strip on the home view.
pub const POPULAR_LIMIT: usize = 8;

impl HomeView {
    pub fn build(catalog: &[Comic], ai_results: Option<&[Comic]>) -> Self {
        match ai_results {
            Some(results) => HomeView {
                ai_mode: true,
                popular: Vec::new(),
                latest: results.iter().map(ComicCard::from).collect(),
            },
            None => HomeView {
                ai_mode: false,
                popular: catalog
                    .iter()
                    .filter(|c| c.is_hot() || c.is_new())
                    .take(POPULAR_LIMIT)
                    .map(ComicCard::from)
                    .collect(),
                latest: catalog.iter().map(ComicCard::from).collect(),
            },
        }
    }
}

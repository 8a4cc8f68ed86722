//! Chapter navigation for the reader.
//!
//! Neighbours are resolved purely by position in the comic's chapter
//! sequence. Index `i + 1` is the older ("previous") chapter and `i - 1` the
//! newer ("next") one, whatever order the numbers themselves are in.

use serde::{Deserialize, Serialize};

use crate::{
    catalog::error::CatalogError,
    model::{Chapter, Comic},
};

/// Simulated page images served for every chapter.
pub const PAGES_PER_CHAPTER: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterNavigation<'a> {
    pub index: usize,
    pub current: &'a Chapter,
    pub previous: Option<&'a Chapter>,
    pub next: Option<&'a Chapter>,
}

pub fn navigate<'a>(chapters: &'a [Chapter], number: &str) -> Option<ChapterNavigation<'a>> {
    let index = chapters.iter().position(|c| c.number == number)?;

    Some(ChapterNavigation {
        index,
        current: &chapters[index],
        previous: chapters.get(index + 1),
        next: index.checked_sub(1).and_then(|i| chapters.get(i)),
    })
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChapterOption {
    pub id: String,
    pub number: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReaderView {
    pub comic_id: String,
    pub comic_title: String,
    pub chapter_number: String,
    pub chapter_title: String,
    pub previous: Option<String>,
    pub next: Option<String>,
    pub pages: Vec<String>,
    pub chapters: Vec<ChapterOption>,
}

impl ReaderView {
    pub fn build(comic: &Comic, number: &str) -> Result<Self, CatalogError> {
        let navigation = navigate(&comic.chapters, number).ok_or(CatalogError::ChapterNotFound)?;

        let chapter_title = if navigation.current.title.is_empty() {
            format!("Chapter {}", number)
        } else {
            navigation.current.title.to_owned()
        };

        Ok(ReaderView {
            comic_id: comic.id.to_owned(),
            comic_title: comic.title.to_owned(),
            chapter_number: navigation.current.number.to_owned(),
            chapter_title,
            previous: navigation.previous.map(|c| c.number.to_owned()),
            next: navigation.next.map(|c| c.number.to_owned()),
            pages: page_urls(&comic.id, number),
            chapters: comic
                .chapters
                .iter()
                .map(|c| ChapterOption {
                    id: c.id.to_owned(),
                    number: c.number.to_owned(),
                })
                .collect(),
        })
    }
}

pub fn page_urls(comic_id: &str, number: &str) -> Vec<String> {
    (0..PAGES_PER_CHAPTER)
        .map(|page| {
            format!(
                "https://picsum.photos/seed/{}-{}-{}/800/1200",
                comic_id, number, page
            )
        })
        .collect()
}

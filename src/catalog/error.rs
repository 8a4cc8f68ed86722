#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("Comic not found")]
    NotFound,
    #[error("Chapter not found")]
    ChapterNotFound,
    #[error("Deletion must be confirmed")]
    ConfirmationRequired,
}

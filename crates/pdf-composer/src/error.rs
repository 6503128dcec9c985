use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComposerError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("Page index {index} is out of range for a {page_count}-page document")]
    PageOutOfRange { index: usize, page_count: usize },

    #[error("{0}")]
    Other(String),
}

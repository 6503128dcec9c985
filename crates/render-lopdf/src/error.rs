use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    /// The asset exists but could not be decoded.
    #[error("Corrupt page asset '{path}': {message}")]
    CorruptAsset { path: String, message: String },

    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

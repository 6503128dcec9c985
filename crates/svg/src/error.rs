use thiserror::Error;

#[derive(Error, Debug)]
pub enum SvgError {
    #[error("Failed to read SVG: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid SVG markup: {0}")]
    Xml(#[from] roxmltree::Error),
}

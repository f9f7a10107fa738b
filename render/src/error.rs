//! Render error types.

use plotters::drawing::DrawingAreaErrorKind;

//---------------------------------------------------------------------------------------------------- RenderError
/// Errors that occur while writing an image.
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    /// The output directory could not be created.
    #[error("failed to create output directory: {0}")]
    Io(#[from] std::io::Error),

    /// The drawing backend failed, e.g. a font was missing
    /// or the image could not be encoded/written.
    #[error("failed to draw: {0}")]
    Drawing(String),
}

impl<E> From<DrawingAreaErrorKind<E>> for RenderError
where
    E: std::error::Error + Send + Sync,
{
    fn from(e: DrawingAreaErrorKind<E>) -> Self {
        Self::Drawing(e.to_string())
    }
}

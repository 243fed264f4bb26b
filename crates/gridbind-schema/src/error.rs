use thiserror::Error;

/// Errors from rendering sample fixtures.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The detail-cell template failed to render.
    #[error("failed to render detail cell: {0}")]
    Render(#[from] minijinja::Error),

    #[error("no sample row with id {0}")]
    UnknownRow(u64),
}

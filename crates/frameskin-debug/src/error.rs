/// Errors reported by the debug command.
#[derive(thiserror::Error, Debug)]
pub enum DebugError {
    #[error(transparent)]
    Style(#[from] frameskin_style::Error),

    /// An operation that needs `--tree` was requested without one.
    #[error("{0} a tree")]
    MissingTree(&'static str),

    #[error("invalid tree index \"{0}\"")]
    InvalidTreeIndex(String),
}

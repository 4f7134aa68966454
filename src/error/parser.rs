use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParserError {
    /// The car string was empty or only whitespace, there is no token to fall back on.
    #[error("Car string is empty, nothing to parse")]
    EmptyInput,
}

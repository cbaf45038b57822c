use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HuffmanError {
    #[error("empty frequency table")]
    InvalidInput,
    #[error("malformed tree, symbol bound to more than one leaf")]
    StructuralError,
}

use crate::encoder::EncodingError;
use crate::normalizer::NormalizationError;

#[derive(Clone, thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Normalization(#[from] NormalizationError),

    #[error(transparent)]
    Encoding(#[from] EncodingError),
}

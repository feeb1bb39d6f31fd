use thiserror::Error;

/// Contract violations of the carousel navigation API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("image index {index} is out of range for a carousel of {len} images")]
    IndexOutOfRange { index: usize, len: usize },
}

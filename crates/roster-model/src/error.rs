use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("invalid room range {start}-{end}: start must not exceed end")]
    InvalidRoomRange { start: u32, end: u32 },
}

pub type Result<T> = std::result::Result<T, ModelError>;

use crate::error::StegabitError;

pub type Result<T> = std::result::Result<T, StegabitError>;

use crate::{
    gallery::SearchError,
    session::LoadError,
};

/// Messages that are shown to the user
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Notice {
    LoadFailed,
    InputTooShort { min: usize },
    NoMatches,
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LoadFailed => f.write_str("Failed to load videos. Please try again later."),
            Self::InputTooShort { min } => {
                write!(f, "Please enter at least {} characters for search.", min)
            }
            Self::NoMatches => f.write_str("No matches found."),
        }
    }
}

// fetch and render failures look the same to the user
impl From<&LoadError> for Notice {
    fn from(_: &LoadError) -> Self {
        Self::LoadFailed
    }
}

impl From<&SearchError> for Notice {
    fn from(err: &SearchError) -> Self {
        match *err {
            SearchError::InputTooShort { min } => Self::InputTooShort { min },
            SearchError::NoMatches => Self::NoMatches,
        }
    }
}

//! City registry error types.

/// Errors loading or querying the city registry.
#[derive(Debug, thiserror::Error)]
pub enum CityError {
    /// Failed to read the registry file.
    #[error("failed to read cities file: {0}")]
    Io(#[from] std::io::Error),

    /// The registry is not valid JSON of the expected shape.
    #[error("invalid cities JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A registry entry that does not hold exactly one city.
    #[error("cities entry {index} must contain exactly one city, found {found}")]
    MalformedEntry { index: usize, found: usize },

    /// The same name appears twice.
    #[error("city {name:?} is listed more than once")]
    Duplicate { name: String },

    /// Lookup of a name that is not registered.
    #[error("the destination {name:?} does not exist")]
    UnknownCity { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CityError::UnknownCity {
            name: "Atlantis".into(),
        };
        assert_eq!(err.to_string(), "the destination \"Atlantis\" does not exist");

        let err = CityError::MalformedEntry { index: 3, found: 2 };
        assert_eq!(
            err.to_string(),
            "cities entry 3 must contain exactly one city, found 2"
        );
    }
}

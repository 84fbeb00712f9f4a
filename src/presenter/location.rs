const LOCATION_SEPARATOR: &str = "of";

/// Shown in place of an offset when the location has none.
pub const NEAR_THE: &str = "Near the";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationParts {
    pub offset: String,
    pub primary: String,
}

/// Split "10km SE of Example" into the offset ("10km SE of") and the primary
/// location ("Example"). Splits on the first literal "of", wherever it is.
pub fn split_location(location: &str) -> LocationParts {
    match location.split_once(LOCATION_SEPARATOR) {
        Some((prefix, rest)) => LocationParts {
            offset: format!("{}{}", prefix, LOCATION_SEPARATOR),
            primary: rest.trim().to_string(),
        },
        None => LocationParts {
            offset: NEAR_THE.to_string(),
            primary: location.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_with_offset() {
        let parts = split_location("10km SE of Example");
        assert_eq!(parts.offset, "10km SE of");
        assert_eq!(parts.primary, "Example");
    }

    #[test]
    fn test_split_without_offset() {
        let parts = split_location("California");
        assert_eq!(parts.offset, NEAR_THE);
        assert_eq!(parts.primary, "California");
    }

    #[test]
    fn test_split_on_first_occurrence_only() {
        let parts = split_location("88 km N of Gulf of Alaska");
        assert_eq!(parts.offset, "88 km N of");
        assert_eq!(parts.primary, "Gulf of Alaska");
    }

    #[test]
    fn test_split_matches_inside_words() {
        let parts = split_location("South of Fiji Islands");
        assert_eq!(parts.offset, "South of");
        assert_eq!(parts.primary, "Fiji Islands");

        let parts = split_location("Kuril Islands offshore");
        assert_eq!(parts.offset, "Kuril Islands of");
        assert_eq!(parts.primary, "fshore");
    }
}

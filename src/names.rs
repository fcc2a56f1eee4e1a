//! Player name normalization and validation
//!
//! Names typed during setup are trimmed, checked for length and content, and
//! have their first letter capitalized before they reach the roster. The
//! roster then rejects names that collide with an existing one regardless of
//! case.

use rustrict::CensorStr;
use serde::Serialize;
use thiserror::Error;

use crate::constants::roster::MAX_NAME_LENGTH;

/// Errors that can occur during name validation and assignment
#[derive(Error, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The requested name is already in use by another player
    #[error("name already in-use")]
    Used,
    /// The name is empty or contains only whitespace
    #[error("name cannot be empty")]
    Empty,
    /// The name contains inappropriate content
    #[error("name is inappropriate")]
    Sinful,
    /// The name exceeds the maximum allowed length
    #[error("name is too long")]
    TooLong,
    /// The roster has no room for another player
    #[error("no room for more players")]
    Full,
}

/// Cleans up a typed name
///
/// Surrounding whitespace is removed and the first character is upper-cased;
/// the rest of the name is kept as typed.
///
/// # Errors
///
/// * `Error::Empty` - Name is empty after trimming whitespace
/// * `Error::TooLong` - Name exceeds the maximum length
/// * `Error::Sinful` - Name contains inappropriate content
///
/// # Examples
///
/// ```rust
/// use suspect::names::normalize;
///
/// assert_eq!(normalize("  bob ").unwrap(), "Bob");
/// ```
pub fn normalize(name: &str) -> Result<String, Error> {
    let name = rustrict::trim_whitespace(name);
    if name.is_empty() {
        return Err(Error::Empty);
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(Error::TooLong);
    }
    if name.is_inappropriate() {
        return Err(Error::Sinful);
    }
    Ok(capitalize(name))
}

/// Upper-cases the first character of `name`
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Whether two normalized names would read as the same player
pub fn same_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_capitalizes() {
        assert_eq!(normalize(" bob "), Ok("Bob".to_string()));
        assert_eq!(normalize("\tanna lee\n"), Ok("Anna lee".to_string()));
        assert_eq!(normalize("Zoe"), Ok("Zoe".to_string()));
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), Err(Error::Empty));
        assert_eq!(normalize("   "), Err(Error::Empty));
        assert_eq!(normalize("\t\n"), Err(Error::Empty));
    }

    #[test]
    fn test_normalize_length_limit() {
        let max_name = "a".repeat(MAX_NAME_LENGTH);
        assert!(normalize(&max_name).is_ok());

        let long_name = "a".repeat(MAX_NAME_LENGTH + 1);
        assert_eq!(normalize(&long_name), Err(Error::TooLong));

        // Surrounding whitespace does not count towards the limit
        let padded = format!("  {max_name}  ");
        assert!(normalize(&padded).is_ok());
    }

    #[test]
    fn test_normalize_inappropriate_content() {
        for name in ["fuck", "shit"] {
            assert_eq!(
                normalize(name),
                Err(Error::Sinful),
                "Expected '{name}' to be flagged as inappropriate"
            );
        }
    }

    #[test]
    fn test_normalize_unicode() {
        assert_eq!(normalize("élodie"), Ok("Élodie".to_string()));
    }

    #[test]
    fn test_same_name_ignores_case() {
        assert!(same_name("Bob", "BOB"));
        assert!(same_name("Bob", "bob"));
        assert!(!same_name("Bob", "Rob"));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(Error::Used.to_string(), "name already in-use");
        assert_eq!(Error::Empty.to_string(), "name cannot be empty");
        assert_eq!(Error::Sinful.to_string(), "name is inappropriate");
        assert_eq!(Error::TooLong.to_string(), "name is too long");
        assert_eq!(Error::Full.to_string(), "no room for more players");
    }
}

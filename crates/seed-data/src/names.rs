//! Splitting full names into first/last pairs.

use customers::NewCustomer;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("Name has no last name: {0:?}")]
    MissingLastName(String),
}

/// Splits a full name on its first whitespace character.
///
/// Everything after that character becomes the last name, so
/// `"Mary Ann Smith"` yields `("Mary", "Ann Smith")`. A name with no
/// internal whitespace, including one whose only whitespace is trailing,
/// is rejected rather than guessed at.
pub fn split_full_name(full_name: &str) -> Result<NewCustomer, NameError> {
    match full_name.split_once(char::is_whitespace) {
        Some((first, last)) if !last.trim().is_empty() => Ok(NewCustomer::new(first, last)),
        _ => Err(NameError::MissingLastName(full_name.to_string())),
    }
}

/// Splits every name, keeping input order. Fails on the first bad name.
pub fn split_names<S: AsRef<str>>(names: &[S]) -> Result<Vec<NewCustomer>, NameError> {
    names
        .iter()
        .map(|name| split_full_name(name.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_two_part_names() {
        assert_eq!(
            split_full_name("Josh Bloch").unwrap(),
            NewCustomer::new("Josh", "Bloch")
        );
        assert_eq!(
            split_full_name("Jeff Dean").unwrap(),
            NewCustomer::new("Jeff", "Dean")
        );
    }

    #[test]
    fn test_split_on_first_whitespace_only() {
        assert_eq!(
            split_full_name("Mary Ann Smith").unwrap(),
            NewCustomer::new("Mary", "Ann Smith")
        );
        assert_eq!(
            split_full_name("Grace\tHopper").unwrap(),
            NewCustomer::new("Grace", "Hopper")
        );
    }

    #[test]
    fn test_name_without_space_is_rejected() {
        assert_eq!(
            split_full_name("Cher"),
            Err(NameError::MissingLastName("Cher".to_string()))
        );
        assert_eq!(
            split_full_name("Cher "),
            Err(NameError::MissingLastName("Cher ".to_string()))
        );
        assert_eq!(
            split_full_name("Cher \t"),
            Err(NameError::MissingLastName("Cher \t".to_string()))
        );
    }

    #[test]
    fn test_leading_space_gives_empty_first_name() {
        assert_eq!(
            split_full_name(" Cher").unwrap(),
            NewCustomer::new("", "Cher")
        );
    }

    #[test]
    fn test_split_names_preserves_order() {
        let pairs = split_names(&["John Woo", "Jeff Dean", "Josh Bloch", "Josh Long"]).unwrap();

        let first_names: Vec<_> = pairs.iter().map(|c| c.first_name.as_str()).collect();
        let last_names: Vec<_> = pairs.iter().map(|c| c.last_name.as_str()).collect();
        assert_eq!(first_names, ["John", "Jeff", "Josh", "Josh"]);
        assert_eq!(last_names, ["Woo", "Dean", "Bloch", "Long"]);
    }

    #[test]
    fn test_split_names_stops_at_bad_name() {
        let result = split_names(&["John Woo", "Prince", "Josh Long"]);
        assert_eq!(result, Err(NameError::MissingLastName("Prince".to_string())));
    }
}

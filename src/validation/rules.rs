//! Field checks for catalog and roster input.

use crate::core::Genre;
use crate::error::{LibraryError, Violation};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of a single field check.
pub type Check = Validation<(), NonEmptyVec<Violation>>;

/// Turn a parsed field into a check, keeping the parsed value with the caller.
pub fn check<T>(field: &Result<T, Violation>) -> Check {
    match field {
        Ok(_) => Validation::success(()),
        Err(violation) => Validation::fail(violation.clone()),
    }
}

/// Trim an identifier and reject it if nothing is left.
pub fn key(raw: &str) -> Result<String, Violation> {
    let key = raw.trim();
    if key.is_empty() {
        Err(Violation::BlankKey)
    } else {
        Ok(key.to_string())
    }
}

/// Parse a genre name against the closed set.
pub fn genre(name: &str) -> Result<Genre, Violation> {
    name.parse::<Genre>().map_err(|err| Violation::UnknownGenre(err.0))
}

/// Copy count of a newly catalogued title.
pub fn new_copies(total: u32) -> Check {
    if total >= 1 {
        Validation::success(())
    } else {
        Validation::fail(Violation::NoCopies)
    }
}

/// Copy count of an existing title; cannot drop below what is on loan.
pub fn resized_copies(requested: u32, outstanding: u32) -> Check {
    if requested >= outstanding {
        Validation::success(())
    } else {
        Validation::fail(Violation::BelowOutstanding {
            requested,
            outstanding,
        })
    }
}

/// Run every check, reporting ALL violations at once.
pub fn enforce(checks: Vec<Check>) -> Result<(), LibraryError> {
    if checks.is_empty() {
        return Ok(());
    }
    match Validation::all_vec(checks) {
        Validation::Success(_) => Ok(()),
        Validation::Failure(errors) => Err(LibraryError::Invalid(errors.iter().cloned().collect())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_trimmed() {
        assert_eq!(key("  B1 "), Ok("B1".to_string()));
    }

    #[test]
    fn blank_key_is_rejected() {
        assert_eq!(key(""), Err(Violation::BlankKey));
        assert_eq!(key(" \t "), Err(Violation::BlankKey));
    }

    #[test]
    fn genre_must_be_in_closed_set() {
        assert_eq!(genre("Romance"), Ok(Genre::Romance));
        assert_eq!(genre("romance"), Err(Violation::UnknownGenre("romance".to_string())));
    }

    #[test]
    fn new_copies_must_be_positive() {
        assert!(new_copies(1).is_success());
        assert!(new_copies(0).is_failure());
    }

    #[test]
    fn resize_cannot_drop_below_outstanding() {
        assert!(resized_copies(2, 2).is_success());
        assert!(resized_copies(0, 0).is_success());
        assert!(resized_copies(0, 1).is_failure());
    }

    #[test]
    fn enforce_accumulates_all_violations() {
        let result = enforce(vec![check(&key("")), check(&genre("Poetry")), new_copies(0)]);

        match result {
            Err(LibraryError::Invalid(violations)) => {
                assert_eq!(violations.len(), 3);
                assert!(violations.contains(&Violation::BlankKey));
                assert!(violations.contains(&Violation::UnknownGenre("Poetry".to_string())));
                assert!(violations.contains(&Violation::NoCopies));
            }
            other => panic!("Expected accumulated violations, got {other:?}"),
        }
    }

    #[test]
    fn enforce_succeeds_when_all_checks_pass() {
        let result = enforce(vec![check(&key("B1")), check(&genre("Fiction")), new_copies(3)]);
        assert!(result.is_ok());
    }

    #[test]
    fn enforce_with_no_checks_succeeds() {
        assert!(enforce(Vec::new()).is_ok());
    }
}

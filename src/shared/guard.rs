//! Precondition Guards
//!
//! Small checks used by entity and value-object constructors. Every guard
//! takes a closure producing the error, and the closure runs only when the
//! check fails, so rejection messages cost nothing on the happy path.

use regex::Regex;

/// Ensure `text` contains at least one non-whitespace character.
pub fn not_blank<E>(text: &str, err: impl FnOnce() -> E) -> Result<&str, E> {
    if text.trim().is_empty() {
        Err(err())
    } else {
        Ok(text)
    }
}

/// Ensure an arbitrary condition holds.
pub fn ensure<E>(condition: bool, err: impl FnOnce() -> E) -> Result<(), E> {
    if condition {
        Ok(())
    } else {
        Err(err())
    }
}

/// Ensure the character count of `text` lies within `min..=max`.
pub fn length_between<E>(
    text: &str,
    min: usize,
    max: usize,
    err: impl FnOnce() -> E,
) -> Result<&str, E> {
    let length = text.chars().count();
    if length < min || length > max {
        Err(err())
    } else {
        Ok(text)
    }
}

/// Ensure `text` matches `pattern`.
pub fn matches_pattern<'a, E>(
    text: &'a str,
    pattern: &Regex,
    err: impl FnOnce() -> E,
) -> Result<&'a str, E> {
    if pattern.is_match(text) {
        Ok(text)
    } else {
        Err(err())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_blank_accepts_text() {
        assert_eq!(not_blank("hello", || "boom"), Ok("hello"));
    }

    #[test]
    fn test_not_blank_rejects_empty_and_whitespace() {
        assert_eq!(not_blank("", || "boom"), Err("boom"));
        assert_eq!(not_blank("   ", || "boom"), Err("boom"));
        assert_eq!(not_blank("\t\n", || "boom"), Err("boom"));
    }

    #[test]
    fn test_error_closure_runs_only_on_failure() {
        let mut calls = 0;
        let ok = not_blank("hello", || {
            calls += 1;
            "boom"
        });
        assert!(ok.is_ok());
        assert_eq!(calls, 0);

        let err = not_blank("", || {
            calls += 1;
            "boom"
        });
        assert!(err.is_err());
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_ensure() {
        assert_eq!(ensure(true, || "boom"), Ok(()));
        assert_eq!(ensure(false, || "boom"), Err("boom"));
    }

    #[test]
    fn test_length_between_boundaries() {
        assert!(length_between("abcd", 4, 6, || "boom").is_ok());
        assert!(length_between("abcdef", 4, 6, || "boom").is_ok());
        assert_eq!(length_between("abc", 4, 6, || "boom"), Err("boom"));
        assert_eq!(length_between("abcdefg", 4, 6, || "boom"), Err("boom"));
    }

    #[test]
    fn test_length_between_counts_characters_not_bytes() {
        // Four characters, more than four bytes.
        assert!(length_between("한국어요", 4, 4, || "boom").is_ok());
    }

    #[test]
    fn test_matches_pattern() {
        let pattern = Regex::new("^[a-z0-9]{4,20}$").expect("valid pattern");
        assert!(matches_pattern("user01", &pattern, || "boom").is_ok());
        assert_eq!(matches_pattern("Invalid!", &pattern, || "boom"), Err("boom"));
    }
}

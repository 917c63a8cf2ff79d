//! Key namespacing for the flat record store.
//!
//! Every record lives under `"<kind>:<id>"`. Range bounds for a kind are
//! `"<kind>:"` and `"<kind>;"` — `;` is the character immediately after `:`
//! in byte order, so the half-open interval covers exactly the kind's keys
//! whatever the ids look like.

use thiserror::Error;

/// Separator between the kind tag and the identifier.
pub const KEY_SEPARATOR: char = ':';

/// Exclusive upper bound marker, one byte past [`KEY_SEPARATOR`].
pub const RANGE_TERMINATOR: char = ';';

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// Ids carrying the separator (or the terminator) would let one record
    /// alias another kind's namespace or escape its range.
    #[error("invalid identifier '{id}': must not contain '{KEY_SEPARATOR}' or '{RANGE_TERMINATOR}'")]
    ReservedCharacter { id: String },

    #[error("identifier cannot be empty")]
    Empty,
}

/// Validate a caller-supplied identifier before it is embedded in a key.
pub fn validate_id(id: &str) -> Result<(), KeyError> {
    if id.is_empty() {
        return Err(KeyError::Empty);
    }
    if id.contains(KEY_SEPARATOR) || id.contains(RANGE_TERMINATOR) {
        return Err(KeyError::ReservedCharacter { id: id.to_string() });
    }
    Ok(())
}

/// Build the store key for a `(kind, id)` pair.
pub fn record_key(kind: &str, id: &str) -> String {
    format!("{kind}{KEY_SEPARATOR}{id}")
}

/// Half-open `[start, end)` bounds covering every key of `kind`.
pub fn range_bounds(kind: &str) -> (String, String) {
    (
        format!("{kind}{KEY_SEPARATOR}"),
        format!("{kind}{RANGE_TERMINATOR}"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_key_joins_kind_and_id() {
        assert_eq!(record_key("bank", "bank1"), "bank:bank1");
    }

    #[test]
    fn range_bounds_bracket_every_id() {
        let (start, end) = range_bounds("bank");
        assert_eq!(start, "bank:");
        assert_eq!(end, "bank;");

        // Any id character sorts inside the interval.
        assert!(record_key("bank", "\u{1}").as_str() > start.as_str());
        assert!(record_key("bank", "\u{10FFFF}").as_str() < end.as_str());
        // Neighboring kinds stay outside.
        assert!(record_key("atm", "z").as_str() < start.as_str());
        assert!(record_key("bankz", "a").as_str() > end.as_str());
    }

    #[test]
    fn validate_id_rejects_reserved_characters() {
        assert!(validate_id("donor1").is_ok());
        assert_eq!(
            validate_id("a:b"),
            Err(KeyError::ReservedCharacter {
                id: "a:b".to_string()
            })
        );
        assert_eq!(
            validate_id("a;b"),
            Err(KeyError::ReservedCharacter {
                id: "a;b".to_string()
            })
        );
        assert_eq!(validate_id(""), Err(KeyError::Empty));
    }
}

//! Origin-tag grammar.
//!
//! A lore line of the form `Origin: <server-id>` asserts provenance. The
//! grammar is deliberately permissive: the prefix, at least one whitespace
//! character, then the server id (surrounding whitespace trimmed). Anything
//! else is an ordinary lore line.

use serde_json::Value;

/// Literal prefix of an origin lore line.
pub const ORIGIN_PREFIX: &str = "Origin:";

/// Parse one lore line as an origin tag, returning the named server.
pub fn parse_origin_line(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(ORIGIN_PREFIX)?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let server = rest.trim();
    if server.is_empty() {
        None
    } else {
        Some(server)
    }
}

/// Render the canonical origin line for `server`.
pub fn origin_line(server: &str) -> String {
    format!("{} {}", ORIGIN_PREFIX, server)
}

/// Extract the origin server from a *raw* slot value without requiring the
/// slot to parse as an [`crate::Item`].
///
/// Used by the stamping pass, which must inspect slots the typed codec
/// would reject. Non-string lore entries are skipped.
pub fn slot_origin(slot: &Value) -> Option<&str> {
    let lore = slot.get("lore")?.as_array()?;
    lore.iter()
        .filter_map(|line| line.as_str())
        .find_map(parse_origin_line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_simple_origin() {
        assert_eq!(parse_origin_line("Origin: srv1"), Some("srv1"));
        assert_eq!(parse_origin_line("Origin:   spaced-out  "), Some("spaced-out"));
    }

    #[test]
    fn rejects_non_origin_lines() {
        assert_eq!(parse_origin_line("A shiny rock"), None);
        assert_eq!(parse_origin_line("Origin:"), None);
        assert_eq!(parse_origin_line("Origin: "), None);
        // No whitespace after the colon: not an origin tag.
        assert_eq!(parse_origin_line("Origin:srv1"), None);
        assert_eq!(parse_origin_line("origin: srv1"), None);
    }

    #[test]
    fn round_trips_through_origin_line() {
        let line = origin_line("east-7");
        assert_eq!(parse_origin_line(&line), Some("east-7"));
    }

    #[test]
    fn slot_origin_skips_non_string_lore() {
        let slot = json!({
            "typeId": "minecraft:apple",
            "lore": [42, null, "Origin: srv9"]
        });
        assert_eq!(slot_origin(&slot), Some("srv9"));
        assert_eq!(slot_origin(&json!({"typeId": "x"})), None);
        assert_eq!(slot_origin(&json!(null)), None);
    }
}

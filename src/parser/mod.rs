//! Map-description text ingestion
//!
//! Each line is `CityName dir1=Neighbor1 dir2=Neighbor2 ...` with
//! case-insensitive direction names. Malformed tokens are skipped silently;
//! edge conflicts are collected so a caller sees every problem in one pass.

use std::fs;
use std::path::Path;

use crate::core::error::{InvasionError, Result};
use crate::map::{Direction, WorldMap};

/// Parse a map file. An unreadable file is the single fatal error; any
/// conflicts found inside a readable file come back alongside the map.
pub fn parse_file(path: impl AsRef<Path>) -> Result<(WorldMap, Vec<InvasionError>)> {
    let text = fs::read_to_string(path)?;
    Ok(parse_str(&text))
}

/// Parse a map description from memory. Always consumes the whole input;
/// the returned list holds one error per edge conflict encountered.
pub fn parse_str(input: &str) -> (WorldMap, Vec<InvasionError>) {
    let mut map = WorldMap::new();
    let mut errors = Vec::new();
    for line in input.lines() {
        parse_line(line, &mut map, &mut errors);
    }
    (map, errors)
}

fn parse_line(line: &str, map: &mut WorldMap, errors: &mut Vec<InvasionError>) {
    let mut tokens = line.split_whitespace();
    let Some(name) = tokens.next() else {
        return;
    };
    map.upsert_city(name);

    for token in tokens {
        if !token.contains('=') {
            continue;
        }
        let parts: Vec<&str> = token.split('=').collect();
        if parts.len() != 2 {
            tracing::debug!(token, "skipping malformed adjacency token");
            continue;
        }
        let Some(direction) = Direction::parse(parts[0]) else {
            tracing::debug!(token, "skipping unknown direction");
            continue;
        };
        if let Err(err) = map.declare_edge(name, direction, parts[1]) {
            errors.push(err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIVE_CITIES: &str = "\
Foo north=Bar west=Baz south=Qu-ux
Bar south=Foo west=Bee";

    #[test]
    fn test_parse_standard_map() {
        let (map, errors) = parse_str(FIVE_CITIES);
        assert!(errors.is_empty());
        assert_eq!(map.exist_city_count(), 5);

        let foo = map.city("Foo").unwrap();
        assert_eq!(foo.neighbor(Direction::North), Some("Bar"));
        assert_eq!(foo.neighbor(Direction::West), Some("Baz"));
        assert_eq!(foo.neighbor(Direction::South), Some("Qu-ux"));

        // Mirrored slots
        assert_eq!(map.city("Bar").unwrap().neighbor(Direction::South), Some("Foo"));
        assert_eq!(map.city("Qu-ux").unwrap().neighbor(Direction::North), Some("Foo"));
    }

    #[test]
    fn test_tokens_without_equals_are_ignored() {
        let (map, errors) = parse_str("Foo junk north=Bar");
        assert!(errors.is_empty());
        assert_eq!(map.exist_city_count(), 2);
        assert_eq!(map.city("Foo").unwrap().neighbor(Direction::North), Some("Bar"));
    }

    #[test]
    fn test_double_equals_token_is_ignored() {
        let (map, errors) = parse_str("Foo north=Bar=Baz");
        assert!(errors.is_empty());
        assert_eq!(map.exist_city_count(), 1);
    }

    #[test]
    fn test_unknown_direction_is_ignored() {
        let (map, errors) = parse_str("Foo upwards=Bar");
        assert!(errors.is_empty());
        assert_eq!(map.exist_city_count(), 1);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let (map, errors) = parse_str("Foo north=Bar\n\nBaz\n");
        assert!(errors.is_empty());
        assert_eq!(map.exist_city_count(), 3);
    }

    #[test]
    fn test_conflict_is_collected_and_parsing_continues() {
        // Bar's west is mirrored to Foo by the first line; Baz then claims it
        let input = "\
Foo east=Bar
Baz east=Bar
Qux north=Quux";
        let (map, errors) = parse_str(input);
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], InvasionError::EdgeConflict { .. }));
        // The rest of the file still parsed
        assert_eq!(map.exist_city_count(), 5);
        assert_eq!(map.city("Bar").unwrap().neighbor(Direction::West), Some("Foo"));
    }
}

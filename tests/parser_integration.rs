//! Parser tests against real files on disk

use std::io::Write;

use xeno_invasion::core::error::InvasionError;
use xeno_invasion::parser::parse_file;

fn write_map(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_parse_file_happy_path() {
    let file = write_map("Foo north=Bar west=Baz south=Qu-ux\nBar south=Foo west=Bee\n");
    let (map, errors) = parse_file(file.path()).unwrap();
    assert!(errors.is_empty());
    assert_eq!(map.exist_city_count(), 5);
}

#[test]
fn test_parse_file_missing_file_is_fatal() {
    let err = parse_file("test_resources/not_found.txt").unwrap_err();
    assert!(matches!(err, InvasionError::Io(_)));
}

#[test]
fn test_parse_file_collects_conflicts_but_finishes() {
    let file = write_map("Foo east=Bar\nBaz east=Bar\nQux north=Quux\n");
    let (map, errors) = parse_file(file.path()).unwrap();
    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0], InvasionError::EdgeConflict { .. }));
    assert_eq!(map.exist_city_count(), 5);
}

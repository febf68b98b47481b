use pretty_assertions::assert_eq;
use std::fs;

use web_scrapers::export::JsonExporter;
use web_scrapers::models::{MovieRecord, Quote};

#[test]
fn quotes_survive_write_and_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("quotes.json");
    let quotes = vec![
        Quote::new("“Try not to become a man of success.”", "Albert Einstein"),
        Quote::new("“Il n'y a qu'un bonheur dans la vie, c'est d'aimer.”", "George Sand"),
        Quote::new("“\"Quoted\" \\ backslash\ttab”", "Escaper"),
    ];

    JsonExporter::save(&quotes, &path).unwrap();
    let read_back: Vec<Quote> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

    assert_eq!(read_back, quotes);
}

#[test]
fn movies_survive_write_and_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("movies.json");
    let movies = vec![
        MovieRecord::new("16", "1. Um Sonho de Liberdade", "9,3"),
        MovieRecord::new("Livre", "250. Dança com Lobos", "8,0"),
    ];

    JsonExporter::save(&movies, &path).unwrap();
    let read_back: Vec<MovieRecord> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

    assert_eq!(read_back, movies);
}

#[test]
fn saving_twice_overwrites_with_identical_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quotes.json");
    let quotes = vec![Quote::new("“Não sei.”", "Sócrates")];

    JsonExporter::save(&quotes, &path).unwrap();
    let first = fs::read(&path).unwrap();
    JsonExporter::save(&quotes, &path).unwrap();
    let second = fs::read(&path).unwrap();

    assert_eq!(first, second);
    assert!(String::from_utf8(second).unwrap().contains("Sócrates"));
}

#[test]
fn unwritable_target_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let quotes = vec![Quote::new("x", "y")];

    // A directory cannot be replaced by a file.
    assert!(JsonExporter::save(&quotes, dir.path()).is_err());
}

use super::*;
use crate::net::types::{FileItem, FileSet};

fn file(name: &str) -> FileItem {
    FileItem { name: name.to_owned(), content: String::new(), language: "text".to_owned() }
}

fn row(name: &str, active: bool) -> FileRow {
    FileRow { name: name.to_owned(), active }
}

#[test]
fn file_rows_empty_without_files() {
    assert!(file_rows(&FilesState::default()).is_empty());
}

#[test]
fn file_rows_follow_response_order_and_mark_first_active() {
    let mut state = FilesState::default();
    let set: FileSet = ["style.css", "index.html"].into_iter().map(|n| (n, file(n))).collect();
    state.replace(set);

    assert_eq!(file_rows(&state), vec![row("style.css", true), row("index.html", false)]);
}

#[test]
fn file_rows_track_selection() {
    let mut state = FilesState::default();
    state.replace(["a.js", "b.js"].into_iter().map(|n| (n, file(n))).collect());
    state.select("b.js");

    assert_eq!(file_rows(&state), vec![row("a.js", false), row("b.js", true)]);
}

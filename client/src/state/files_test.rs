use super::*;

fn file(name: &str, content: &str) -> FileItem {
    FileItem { name: name.to_owned(), content: content.to_owned(), language: "text".to_owned() }
}

fn set(names: &[&str]) -> FileSet {
    names.iter().map(|n| (*n, file(n, ""))).collect()
}

#[test]
fn default_is_empty_without_active() {
    let state = FilesState::default();
    assert!(state.files().is_empty());
    assert_eq!(state.active(), None);
    assert!(state.active_file().is_none());
}

#[test]
fn replace_selects_first_in_response_order() {
    let mut state = FilesState::default();
    state.replace(set(&["style.css", "index.html"]));
    assert_eq!(state.active(), Some("style.css"));
}

#[test]
fn replace_discards_previous_files() {
    let mut state = FilesState::default();
    state.replace(set(&["a.js", "b.js"]));
    state.select("b.js");
    state.replace(set(&["c.js"]));

    assert_eq!(state.files().names().collect::<Vec<_>>(), vec!["c.js"]);
    assert_eq!(state.active(), Some("c.js"));
}

#[test]
fn select_known_file_updates_active() {
    let mut state = FilesState::default();
    state.replace(set(&["a.js", "b.js"]));
    assert!(state.select("b.js"));
    assert_eq!(state.active(), Some("b.js"));
}

#[test]
fn select_unknown_file_is_ignored() {
    let mut state = FilesState::default();
    state.replace(set(&["a.js"]));
    assert!(!state.select("missing.js"));
    assert_eq!(state.active(), Some("a.js"));
}

#[test]
fn clear_drops_files_and_active() {
    let mut state = FilesState::default();
    state.replace(set(&["a.js"]));
    state.clear();
    assert!(state.files().is_empty());
    assert_eq!(state.active(), None);
}

#[test]
fn preview_html_reads_index_html() {
    let mut state = FilesState::default();
    state.replace([("app.js", file("app.js", "")), ("index.html", file("index.html", "<p>hi</p>"))].into_iter().collect());
    assert_eq!(state.preview_html(), Some("<p>hi</p>"));
}

#[test]
fn preview_html_absent_without_index_html() {
    let mut state = FilesState::default();
    state.replace(set(&["main.py"]));
    assert_eq!(state.preview_html(), None);
}

#[test]
fn active_file_returns_selected_item() {
    let mut state = FilesState::default();
    state.replace([("a.js", file("a.js", "let a;")), ("b.js", file("b.js", "let b;"))].into_iter().collect());
    state.select("b.js");
    assert_eq!(state.active_file().map(|f| f.content.as_str()), Some("let b;"));
}

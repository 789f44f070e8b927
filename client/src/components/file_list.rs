//! Sidebar listing the generated files.

#[cfg(test)]
#[path = "file_list_test.rs"]
mod file_list_test;

use leptos::prelude::*;

use crate::state::files::FilesState;

/// One rendered entry: filename and whether it is the active file.
#[derive(Clone, Debug, PartialEq, Eq)]
struct FileRow {
    name: String,
    active: bool,
}

fn file_rows(state: &FilesState) -> Vec<FileRow> {
    state
        .files()
        .names()
        .map(|name| FileRow { name: name.to_owned(), active: state.active() == Some(name) })
        .collect()
}

/// File list; clicking an entry makes it the active file.
#[component]
pub fn FileList() -> impl IntoView {
    let files = expect_context::<RwSignal<FilesState>>();

    view! {
        <div class="file-list">
            <div class="file-list__header">
                <span class="file-list__title">"Files"</span>
            </div>
            <div class="file-list__items">
                {move || {
                    let rows = files.with(file_rows);
                    if rows.is_empty() {
                        return view! { <div class="file-list__empty">"No files yet"</div> }.into_any();
                    }

                    rows.into_iter()
                        .map(|FileRow { name, active }| {
                            let title = name.clone();
                            let target = name.clone();
                            view! {
                                <button
                                    class="file-list__item"
                                    class:file-list__item--active=active
                                    title=title
                                    on:click=move |_| {
                                        files.update(|f| {
                                            f.select(&target);
                                        });
                                    }
                                >
                                    <span class="file-list__name">{name}</span>
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>
        </div>
    }
}

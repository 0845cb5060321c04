//! Dashboard page component
//!
//! Owns a [`DocumentBoard`] for the lifetime of the page. The add form sits on
//! top and the documents are listed below it in insertion order. At most one
//! card is in edit mode at a time.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::core::{BoardError, DocumentBoard, DocumentDraft, DocumentId, DraftField};
use crate::ui::common::{ErrorMessage, FormField, TextAreaField, WarningMessage};
use crate::ui::icon::{Icon, icons};

/// Dashboard page component
#[component]
pub fn DashboardPage() -> impl IntoView {
    let board = RwSignal::new(DocumentBoard::new());
    let add_error = RwSignal::new(None::<String>);
    let edit_error = RwSignal::new(None::<String>);

    let new_draft = Signal::derive(move || board.with(|b| b.new_draft().clone()));
    let add_warning = Memo::new(move |_| board.with(|b| b.check_new_draft().warning_summary()));

    let on_new_change = Callback::new(move |(field, value): (DraftField, String)| {
        board.update(|b| b.set_new_field(field, value));
        add_error.set(None);
    });

    let on_add = move |_| match board.try_update(|b| b.add()) {
        Some(Ok(id)) => {
            leptos::logging::log!("added document {id}");
            add_error.set(None);
        }
        Some(Err(BoardError::Invalid(_))) => {
            add_error.set(board.with_untracked(|b| b.check_new_draft().error_summary()));
        }
        Some(Err(err)) => add_error.set(Some(err.to_string())),
        None => {}
    };

    view! {
        <Title text="Dashboard - DocBoard" />
        <main class="min-h-[calc(100vh-4rem)] bg-gradient-to-r from-indigo-100 via-purple-100 to-pink-100 py-10 px-6">
            <div class="max-w-6xl mx-auto bg-white p-8 rounded-xl shadow-lg">
                <div class="flex items-baseline justify-between mb-6">
                    <h1 class="text-3xl font-semibold text-indigo-600">"Dashboard"</h1>
                    <span class="text-sm text-gray-500">
                        {move || match board.with(DocumentBoard::len) {
                            1 => "1 document".to_string(),
                            n => format!("{n} documents"),
                        }}
                    </span>
                </div>

                // New document form
                <section class="mb-8 space-y-4">
                    <DraftFields draft=new_draft on_change=on_new_change editing=false />
                    <ErrorMessage error=add_error />
                    <WarningMessage message=add_warning />
                    <button type="button" class="btn-primary w-full flex items-center justify-center gap-2" on:click=on_add>
                        <Icon name=icons::PLUS class="w-5 h-5" />
                        "Add Document"
                    </button>
                </section>

                // Documents grid
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                    <Show when=move || board.with(DocumentBoard::is_empty)>
                        <p class="text-center text-gray-500 col-span-full">"No documents added yet."</p>
                    </Show>
                    <For
                        each=move || board.with(DocumentBoard::ids)
                        key=|id| *id
                        children=move |id: DocumentId| view! {
                            <DocumentCard id=id board=board edit_error=edit_error />
                        }
                    />
                </div>
            </div>
        </main>
    }
}

/// Title, description and image URL inputs for a draft
#[component]
fn DraftFields(
    #[prop(into)] draft: Signal<DocumentDraft>,
    on_change: Callback<(DraftField, String)>,
    /// Edit form fields get distinct element ids from the add form
    editing: bool,
) -> impl IntoView {
    let value = move |field: DraftField| {
        Signal::derive(move || draft.with(|d| d.field(field).to_string()))
    };
    let on_input = move |field: DraftField| Callback::new(move |text: String| on_change.run((field, text)));

    let (title_name, description_name, image_name) = if editing {
        ("edit-title", "edit-description", "edit-image-url")
    } else {
        ("title", "description", "image-url")
    };

    view! {
        <div class="space-y-4">
            <FormField
                label="Title"
                name=title_name
                required=true
                placeholder=DraftField::Title.placeholder()
                value=value(DraftField::Title)
                on_input=on_input(DraftField::Title)
            />
            <TextAreaField
                label="Description"
                name=description_name
                required=true
                placeholder=DraftField::Description.placeholder()
                value=value(DraftField::Description)
                on_input=on_input(DraftField::Description)
            />
            <FormField
                label="Image URL"
                name=image_name
                input_type="url"
                placeholder=DraftField::ImageUrl.placeholder()
                value=value(DraftField::ImageUrl)
                on_input=on_input(DraftField::ImageUrl)
            />
        </div>
    }
}

/// One document, shown read-only or as its edit form
#[component]
fn DocumentCard(
    id: DocumentId,
    board: RwSignal<DocumentBoard>,
    edit_error: RwSignal<Option<String>>,
) -> impl IntoView {
    let is_editing = Memo::new(move |_| board.with(|b| b.is_editing(id)));

    view! {
        <article class="document-card">
            <Show
                when=move || is_editing.get()
                fallback=move || view! { <DocumentView id=id board=board edit_error=edit_error /> }
            >
                <EditForm board=board edit_error=edit_error />
            </Show>
        </article>
    }
}

#[component]
fn DocumentView(
    id: DocumentId,
    board: RwSignal<DocumentBoard>,
    edit_error: RwSignal<Option<String>>,
) -> impl IntoView {
    let document = Memo::new(move |_| board.with(|b| b.get(id).cloned()));

    let on_edit = move |_| {
        if let Some(Err(err)) = board.try_update(|b| b.start_edit(id)) {
            leptos::logging::warn!("{err}");
        }
        edit_error.set(None);
    };

    let on_remove = move |_| {
        if let Some(Err(err)) = board.try_update(|b| b.remove(id).map(|_| ())) {
            leptos::logging::warn!("{err}");
        }
        if board.with_untracked(|b| b.editing_id().is_none()) {
            edit_error.set(None);
        }
    };

    view! {
        <div class="space-y-4">
            {move || document.get().map(|doc| view! {
                <h3 class="text-xl font-semibold text-indigo-600 break-words">{doc.title}</h3>
                <p class="text-gray-700 whitespace-pre-line break-words">{doc.description}</p>
                {doc.image_url.map(|url| view! {
                    <img src=url alt="Document" class="w-full h-48 object-cover rounded-md" />
                })}
            })}
            <div class="flex gap-4">
                <button type="button" class="btn-link text-blue-500 hover:text-blue-600" on:click=on_edit>
                    <Icon name=icons::EDIT class="w-4 h-4" />
                    "Edit"
                </button>
                <button type="button" class="btn-link text-red-500 hover:text-red-600" on:click=on_remove>
                    <Icon name=icons::TRASH class="w-4 h-4" />
                    "Remove"
                </button>
            </div>
        </div>
    }
}

/// Edit form for the document under the edit cursor
#[component]
fn EditForm(board: RwSignal<DocumentBoard>, edit_error: RwSignal<Option<String>>) -> impl IntoView {
    let draft = Signal::derive(move || board.with(|b| b.edit_draft().cloned().unwrap_or_default()));
    let warning = Memo::new(move |_| {
        board.with(|b| b.check_edit_draft().and_then(|result| result.warning_summary()))
    });

    let on_change = Callback::new(move |(field, value): (DraftField, String)| {
        if let Some(Err(err)) = board.try_update(|b| b.set_edit_field(field, value)) {
            leptos::logging::warn!("{err}");
        }
        edit_error.set(None);
    });

    let on_update = move |_| match board.try_update(|b| b.update()) {
        Some(Ok(id)) => {
            leptos::logging::log!("updated document {id}");
            edit_error.set(None);
        }
        Some(Err(BoardError::Invalid(_))) => {
            edit_error.set(board.with_untracked(|b| {
                b.check_edit_draft().and_then(|result| result.error_summary())
            }));
        }
        Some(Err(err)) => edit_error.set(Some(err.to_string())),
        None => {}
    };

    let on_cancel = move |_| {
        board.update(|b| {
            b.cancel_edit();
        });
        edit_error.set(None);
    };

    view! {
        <div class="flex flex-col space-y-4">
            <DraftFields draft=draft on_change=on_change editing=true />
            <ErrorMessage error=edit_error />
            <WarningMessage message=warning />
            <div class="flex gap-4">
                <button type="button" class="btn-primary flex items-center gap-2" on:click=on_update>
                    <Icon name=icons::CHECK class="w-4 h-4" />
                    "Update"
                </button>
                <button type="button" class="btn-danger-ghost flex items-center gap-2" on:click=on_cancel>
                    <Icon name=icons::X class="w-4 h-4" />
                    "Cancel"
                </button>
            </div>
        </div>
    }
}

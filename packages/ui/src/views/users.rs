use dioxus::prelude::*;

use store::User;

use crate::filter::{self, PAGE_SIZE};
use crate::user_form_dialog::{UserFormDialog, UserFormSubmit};
use crate::views::ModalOverlay;
use crate::{use_users, Pager, SearchBox, UserTable};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// The main screen: searchable, paginated user table with a modal
/// create/edit form. Owns all view state (search text, page, dialog mode,
/// edit target); record state lives in the shared [`use_users`] hook.
#[component]
pub fn UsersView() -> Element {
    let users = use_users();

    let mut search = use_signal(String::new);
    let mut page = use_signal(|| 1usize);
    let mut show_form = use_signal(|| false);
    let mut edit_target = use_signal(|| Option::<User>::None);

    let records = users.records.read().clone();
    let filtered = filter::filter(&records, &search());
    let filtered_len = filtered.len();
    let filtered_pages = filter::page_count(filtered_len, PAGE_SIZE);
    // TODO: decide whether the jump-to-last target should use the
    // filtered total instead of the unfiltered one.
    let last_page = filter::page_count(records.len(), PAGE_SIZE);
    let visible = filter::page_window(&filtered, page(), PAGE_SIZE);

    let set_page = move |requested: usize| {
        if filter::page_in_range(requested, filtered_len, PAGE_SIZE) {
            page.set(requested);
        }
    };

    let open_create = move |_| {
        edit_target.set(None);
        show_form.set(true);
    };
    let open_edit = move |user: User| {
        edit_target.set(Some(user));
        show_form.set(true);
    };
    let close_form = move |_| {
        show_form.set(false);
        edit_target.set(None);
    };

    let handle_delete = move |id: String| {
        spawn(async move {
            // Failure lands in the shared error slot; nothing else to do.
            let _ = users.remove(&id).await;
        });
    };

    let handle_submit = move |submit: UserFormSubmit| {
        spawn(async move {
            let outcome = match submit {
                UserFormSubmit::Create(draft) => users.create(draft).await.map(|_| ()),
                UserFormSubmit::Edit(id, patch) => users.update(&id, patch).await.map(|_| ()),
            };
            if outcome.is_ok() {
                show_form.set(false);
                edit_target.set(None);
            }
        });
    };

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        div {
            class: "view-page",

            div {
                class: "view-header",
                h1 { class: "view-title", "Users" }
                button { class: "primary", onclick: open_create, "Add user" }
            }

            div {
                class: "users-toolbar",
                SearchBox {
                    value: search(),
                    on_input: move |text: String| {
                        search.set(text);
                        page.set(1);
                    },
                }
                if (users.loading)() {
                    span { class: "users-loading", "Working..." }
                }
            }

            if let Some(message) = (users.error)() {
                div { class: "error-banner", "{message}" }
            }

            if records.is_empty() && (users.loading)() {
                div { class: "users-empty", "Loading users..." }
            } else if visible.is_empty() {
                div { class: "users-empty", "No users match." }
            } else {
                UserTable {
                    users: visible.clone(),
                    on_edit: open_edit,
                    on_delete: handle_delete,
                }
            }

            Pager {
                page: page(),
                page_count: filtered_pages,
                last_page: last_page,
                on_navigate: set_page,
            }

            if show_form() {
                ModalOverlay {
                    on_close: close_form,
                    UserFormDialog {
                        user: edit_target(),
                        on_submit: handle_submit,
                        on_cancel: close_form,
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;
use store::User;

/// One page of user records with per-row edit/delete actions.
#[component]
pub fn UserTable(
    users: Vec<User>,
    on_edit: EventHandler<User>,
    on_delete: EventHandler<String>,
) -> Element {
    rsx! {
        table {
            class: "user-table",
            thead {
                tr {
                    th { class: "user-avatar-col", "" }
                    th { "Name" }
                    th { "Email" }
                    th { "Birthday" }
                    th { class: "user-actions-col", "" }
                }
            }
            tbody {
                for user in users {
                    UserRow {
                        key: "{user.id}",
                        user: user.clone(),
                        on_edit: on_edit,
                        on_delete: on_delete,
                    }
                }
            }
        }
    }
}

#[component]
fn UserRow(user: User, on_edit: EventHandler<User>, on_delete: EventHandler<String>) -> Element {
    let initials = format!(
        "{}{}",
        user.first_name.chars().next().unwrap_or('?'),
        user.last_name.chars().next().unwrap_or('?'),
    );
    let edit_target = user.clone();
    let delete_id = user.id.clone();

    rsx! {
        tr {
            td {
                class: "user-avatar-cell",
                if let Some(ref url) = user.avatar_url {
                    img { class: "user-avatar", src: "{url}", alt: "" }
                } else {
                    span { class: "user-avatar user-avatar-fallback", "{initials}" }
                }
            }
            td { "{user.full_name()}" }
            td { class: "user-email", "{user.email}" }
            td { "{user.birthday}" }
            td {
                class: "user-actions",
                button {
                    class: "secondary",
                    onclick: move |_| on_edit.call(edit_target.clone()),
                    "Edit"
                }
                button {
                    class: "danger",
                    onclick: move |_| on_delete.call(delete_id.clone()),
                    "Delete"
                }
            }
        }
    }
}

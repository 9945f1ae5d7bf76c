use chrono::NaiveDate;
use dioxus::prelude::*;
use store::{NewUser, User, UserPatch};

/// What the form hands back on submit. Edits carry the immutable id
/// alongside the patch.
#[derive(Clone, Debug, PartialEq)]
pub enum UserFormSubmit {
    Create(NewUser),
    Edit(String, UserPatch),
}

/// Modal form for creating a user or editing an existing one.
///
/// `user: None` is create mode. The form does not validate; the store
/// does, so both backends apply identical rules and a rejected submit
/// leaves the dialog open with the message in the shared error slot. A
/// blank password on edit means "leave it unchanged".
#[component]
pub fn UserFormDialog(
    user: Option<User>,
    on_submit: EventHandler<UserFormSubmit>,
    on_cancel: EventHandler<()>,
) -> Element {
    let edit_id = user.as_ref().map(|u| u.id.clone());
    let title = if edit_id.is_some() { "Edit user" } else { "New user" };

    let init_first = user.as_ref().map(|u| u.first_name.clone()).unwrap_or_default();
    let init_last = user.as_ref().map(|u| u.last_name.clone()).unwrap_or_default();
    let init_email = user.as_ref().map(|u| u.email.clone()).unwrap_or_default();
    let init_birthday = user
        .as_ref()
        .map(|u| u.birthday.to_string())
        .unwrap_or_default();
    let init_avatar = user
        .as_ref()
        .and_then(|u| u.avatar_url.clone())
        .unwrap_or_default();

    let mut first_name = use_signal(move || init_first);
    let mut last_name = use_signal(move || init_last);
    let mut email = use_signal(move || init_email);
    let mut password = use_signal(String::new);
    let mut birthday = use_signal(move || init_birthday);
    let mut avatar_url = use_signal(move || init_avatar);

    let submit_id = edit_id.clone();
    let handle_submit = move |_| {
        let parsed_birthday = NaiveDate::parse_from_str(birthday().trim(), "%Y-%m-%d").ok();
        let avatar = {
            let a = avatar_url().trim().to_string();
            (!a.is_empty()).then_some(a)
        };
        let pw = {
            let p = password();
            (!p.is_empty()).then_some(p)
        };

        match submit_id.clone() {
            Some(id) => on_submit.call(UserFormSubmit::Edit(
                id,
                UserPatch {
                    first_name: Some(first_name()),
                    last_name: Some(last_name()),
                    email: Some(email()),
                    password: pw,
                    birthday: parsed_birthday,
                    avatar_url: avatar,
                },
            )),
            None => on_submit.call(UserFormSubmit::Create(NewUser {
                first_name: first_name(),
                last_name: last_name(),
                email: email(),
                password: pw,
                birthday: parsed_birthday,
                avatar_url: avatar,
            })),
        }
    };

    rsx! {
        div {
            class: "user-form",
            h2 { class: "user-form-title", "{title}" }

            div {
                class: "form-row",
                div {
                    class: "form-field",
                    label { r#for: "user-first-name", "First name" }
                    input {
                        id: "user-first-name",
                        r#type: "text",
                        value: first_name(),
                        oninput: move |evt: FormEvent| first_name.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "user-last-name", "Last name" }
                    input {
                        id: "user-last-name",
                        r#type: "text",
                        value: last_name(),
                        oninput: move |evt: FormEvent| last_name.set(evt.value()),
                    }
                }
            }

            div {
                class: "form-field",
                label { r#for: "user-email", "Email" }
                input {
                    id: "user-email",
                    r#type: "email",
                    placeholder: "name@example.com",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                label { r#for: "user-password", "Password" }
                input {
                    id: "user-password",
                    r#type: "password",
                    placeholder: if edit_id.is_some() { "Leave blank to keep" } else { "" },
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                label { r#for: "user-birthday", "Birthday" }
                input {
                    id: "user-birthday",
                    r#type: "date",
                    value: birthday(),
                    oninput: move |evt: FormEvent| birthday.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                label { r#for: "user-avatar", "Avatar URL" }
                input {
                    id: "user-avatar",
                    r#type: "url",
                    placeholder: "https://",
                    value: avatar_url(),
                    oninput: move |evt: FormEvent| avatar_url.set(evt.value()),
                }
            }

            div {
                class: "form-actions",
                button { class: "primary", onclick: handle_submit, "Save" }
                button {
                    class: "secondary",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}

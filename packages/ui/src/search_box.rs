use dioxus::prelude::*;

/// Search input driving the name/email filter.
#[component]
pub fn SearchBox(value: String, on_input: EventHandler<String>) -> Element {
    rsx! {
        input {
            class: "search-box",
            r#type: "search",
            placeholder: "Search by name or email",
            value: value,
            oninput: move |evt: FormEvent| on_input.call(evt.value()),
        }
    }
}

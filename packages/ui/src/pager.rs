use dioxus::prelude::*;

/// First/prev/next/last pagination controls with a page indicator.
///
/// `page_count` is derived from the filtered record total and bounds the
/// prev/next controls; `last_page` is the target of the jump-to-last
/// control, which the view derives from the unfiltered total. The view
/// rejects out-of-range requests, so a stale jump target is a no-op.
#[component]
pub fn Pager(
    page: usize,
    page_count: usize,
    last_page: usize,
    on_navigate: EventHandler<usize>,
) -> Element {
    rsx! {
        div {
            class: "pager",
            button {
                class: "secondary",
                disabled: page <= 1,
                onclick: move |_| on_navigate.call(1),
                "First"
            }
            button {
                class: "secondary",
                disabled: page <= 1,
                onclick: move |_| on_navigate.call(page.saturating_sub(1)),
                "Prev"
            }
            span { class: "pager-status", "Page {page} of {page_count}" }
            button {
                class: "secondary",
                disabled: page >= page_count,
                onclick: move |_| on_navigate.call(page + 1),
                "Next"
            }
            button {
                class: "secondary",
                disabled: page >= page_count,
                onclick: move |_| on_navigate.call(last_page),
                "Last"
            }
        }
    }
}

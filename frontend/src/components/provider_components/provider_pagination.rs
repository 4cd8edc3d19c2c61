use dioxus::prelude::*;

#[component]
pub fn ProviderPagination(
    pages: ReadSignal<Vec<u64>>,
    current_page: u64,
    on_previous: Callback<()>,
    on_next: Callback<()>,
    on_page: Callback<u64>,
) -> Element {
    let last_page = pages.read().last().copied().unwrap_or(0);
    rsx! {
        div {
            style: "display: flex; flex-direction: row; gap: 6px; align-items: center; padding: 10px 0;",
            button {
                disabled: current_page <= 1,
                onclick: move |_| on_previous.call(()),
                "Previous"
            }
            for page in pages.read().iter().copied() {
                button {
                    key: "{page}",
                    class: if page == current_page { "x-page-number-current" } else { "" },
                    style: "min-width: 32px; height: 32px; border-radius: 6px; border: 1px solid rgba(0,0,0,0.2); cursor: pointer;",
                    onclick: move |_| on_page.call(page),
                    "{page}"
                }
            }
            button {
                disabled: current_page >= last_page,
                onclick: move |_| on_next.call(()),
                "Next"
            }
        }
    }
}

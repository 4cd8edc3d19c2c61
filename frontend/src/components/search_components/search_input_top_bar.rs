use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};
use gloo_timers::future::TimeoutFuture;

use common::{debounce::Debouncer, search_const::SEARCH_DEBOUNCE_MS};

use crate::pages::datasource_search_page::DatasourceSearchContext;

#[component]
pub fn SearchInputTopBar() -> Element {
    let ctx = use_context::<DatasourceSearchContext>();
    let mut search_text = use_signal(String::new);
    let mut debouncer = use_signal(Debouncer::<String>::new);

    // the box follows the url after every navigation, pending keystrokes included
    use_effect(move || {
        let query = ctx.state.read().search_query.clone().unwrap_or_default();
        if !debouncer.peek().is_pending() {
            debouncer.write().sync_emitted(query.clone());
            search_text.set(query);
        }
    });

    let search_oninput = move |event: Event<FormData>| {
        let text = event.value();
        search_text.set(text.clone());
        let ticket = debouncer.write().push(text);
        spawn(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            let settled = debouncer.write().settle(ticket);
            if let Some(text) = settled {
                ctx.commit(move |state| state.set_search_text(text));
            }
        });
    };
    let mut search_now = move || {
        let text = search_text.peek().clone();
        let ticket = debouncer.write().push(text);
        let settled = debouncer.write().settle(ticket);
        if let Some(text) = settled {
            ctx.commit(move |state| state.set_search_text(text));
        }
    };

    rsx! {
        div {
            id: "x-search-input-search-box",
            style: "
                display:flex;
                align-items:center;
                gap: 16px;
                background-color: white;
                border-radius: 9999px;
                padding: 10px 14px;
                height: 44px;
                color: #111827;
                border: 1px solid rgba(101, 101, 101, 0.8);
                width: 500px;
                margin-left: 16px;
            ",
            button {
                style: "
                    border: none;
                    background: none;
                    cursor: pointer;
                ",
                onclick: move |_| search_now(),
                Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:#6B7280;" }
            }
            input {
                r#type: "text",
                placeholder: "Search datasources",
                style: "
                    flex:1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 20px;
                    font-weight: 400;
                    font-family: Roboto, sans-serif;
                ",
                value: "{search_text}",
                oninput: search_oninput,
                onkeydown: move |event: Event<KeyboardData>| {
                    if event.key() == Key::Enter {
                        search_now();
                    }
                },
            }
        }
    }
}

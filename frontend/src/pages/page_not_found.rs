use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        Title { "EOSC Portal - Not found" }
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 16px;
                padding: 36px 40px;
            ",
            h1 { style: "font-size: 40px; font-weight: 500; margin: 0;", "Page not found" }
            p { style: "font-size: 20px;", "Nothing is registered at /{path}." }
            Link { to: Route::HomePage {}, "Return to the home page" }
        }
    }
}

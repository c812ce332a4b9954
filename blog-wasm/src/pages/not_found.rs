use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    rsx! {
        div { class: "max-w-2xl mx-auto px-6 py-24 text-center",
            h1 { class: "text-5xl font-bold text-gray-900 mb-4", "404" }
            p { class: "text-gray-600 mb-8", "Nothing lives at {path}." }
            Link {
                to: Route::Home {},
                class: "inline-block px-8 py-3 bg-indigo-600 text-white rounded-xl hover:bg-indigo-700 transition",
                "Back to posts"
            }
        }
    }
}

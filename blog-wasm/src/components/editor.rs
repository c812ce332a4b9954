use dioxus::prelude::*;

/// HTML body editor. Stands in for a WYSIWYG widget: the value is the raw
/// markup stored as the post content.
#[component]
pub fn Editor(value: String, oninput: EventHandler<String>) -> Element {
    rsx! {
        textarea {
            class: "w-full px-5 py-4 h-96 border border-gray-300 rounded-xl shadow-sm resize-y focus:outline-none focus:ring-2 focus:ring-indigo-500 font-mono text-sm text-black",
            placeholder: "<p>Write your story...</p>",
            value: "{value}",
            oninput: move |evt| oninput.call(evt.value()),
        }
    }
}

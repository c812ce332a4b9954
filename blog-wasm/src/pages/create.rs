use crate::Route;
use crate::components::Editor;
use crate::context::{api_client, use_notifier, use_session};
use dioxus::prelude::*;
use inkwell_client::pages::PostForm;
use inkwell_client::{BlogApi, Cover, CoverFile, Notice};

#[component]
pub fn Create() -> Element {
    let session = use_session();
    let notifier = use_notifier();
    let navigator = use_navigator();
    let mut form = use_signal(PostForm::new);

    let on_cover = move |evt: FormEvent| async move {
        let Some(file) = evt.files().into_iter().next() else {
            return;
        };
        match file.read_bytes().await {
            Ok(bytes) => {
                form.write().draft.cover = Cover::Upload(CoverFile::new(file.name(), bytes.to_vec()));
            }
            Err(err) => notifier.show(Notice::error("Error", format!("Could not read file: {err}"))),
        }
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let payload = match form.write().begin_create() {
            Ok(payload) => payload,
            Err(err) => {
                notifier.show(err.notice("Error"));
                return;
            }
        };
        let client = api_client(&session.read());
        spawn(async move {
            let result = client.create_post(payload).await;
            let outcome = form.write().finish_create(result);
            notifier.outcome(outcome);
        });
    };

    let draft = form.read().draft.clone();
    let saving = form.read().is_submitting();
    let cover_label = match &draft.cover {
        Cover::Upload(file) => format!("{} ({} KB)", file.name, file.bytes.len().div_ceil(1024)),
        _ => "Upload a cover image".to_string(),
    };

    rsx! {
        div { class: "max-w-4xl mx-auto px-6 py-12",
            div { class: "flex items-center justify-between mb-8",
                h1 { class: "text-4xl font-bold text-gray-900", "Create New Post" }
                button {
                    r#type: "button",
                    class: "px-6 py-2 border border-gray-300 text-gray-700 rounded-xl hover:bg-gray-50 transition",
                    onclick: move |_| navigator.go_back(),
                    "Back"
                }
            }

            form {
                onsubmit: on_submit,
                class: "bg-white rounded-2xl shadow-xl p-8 md:p-12 space-y-6",

                div {
                    label { class: "block text-sm font-medium text-gray-700 mb-2", "Cover Image" }
                    input {
                        r#type: "file",
                        accept: "image/*",
                        onchange: on_cover,
                        class: "block w-full text-sm text-gray-600",
                    }
                    p { class: "mt-2 text-sm text-gray-500", "{cover_label}" }
                }

                div {
                    label { class: "block text-sm font-medium text-gray-700 mb-2", "Title" }
                    input {
                        r#type: "text",
                        placeholder: "Enter post title",
                        value: "{draft.title}",
                        oninput: move |evt| form.write().draft.title = evt.value(),
                        class: "w-full px-5 py-4 border border-gray-300 rounded-xl shadow-sm focus:outline-none focus:ring-2 focus:ring-indigo-500 text-lg text-black",
                    }
                }

                div {
                    label { class: "block text-sm font-medium text-gray-700 mb-2", "Summary" }
                    textarea {
                        rows: 3,
                        placeholder: "Brief summary of your post...",
                        value: "{draft.summary}",
                        oninput: move |evt| form.write().draft.summary = evt.value(),
                        class: "w-full px-5 py-4 border border-gray-300 rounded-xl shadow-sm focus:outline-none focus:ring-2 focus:ring-indigo-500 text-black",
                    }
                }

                div {
                    label { class: "block text-sm font-medium text-gray-700 mb-2", "Content" }
                    Editor {
                        value: draft.content.clone(),
                        oninput: move |value| form.write().draft.content = value,
                    }
                }

                div { class: "flex justify-end gap-4 pt-6",
                    button {
                        r#type: "button",
                        class: "px-8 py-3.5 border border-gray-300 text-gray-700 rounded-xl hover:bg-gray-50 transition font-medium",
                        disabled: saving,
                        onclick: move |_| form.write().reset(),
                        "Reset"
                    }
                    button {
                        r#type: "submit",
                        class: "px-10 py-3.5 bg-indigo-600 text-white rounded-xl hover:bg-indigo-700 transition shadow-md font-medium text-lg disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: saving,
                        if saving { "Publishing..." } else { "Publish Post" }
                    }
                }
            }

            div { class: "mt-6 text-center",
                Link { to: Route::Home {}, class: "text-indigo-600 font-medium", "Cancel" }
            }
        }
    }
}

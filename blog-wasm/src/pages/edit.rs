use crate::Route;
use crate::client::{BlogClientWeb, api_config};
use crate::components::Editor;
use crate::context::{api_client, use_notifier, use_session};
use dioxus::prelude::*;
use inkwell_client::pages::{Load, PostForm, open_for_edit};
use inkwell_client::{BlogApi, Cover, Notice};

/// Edit form for a post the session owns. The fetched post is checked
/// against the session before any field is shown; a foreign post only ever
/// yields a notice and a trip back home.
#[component]
pub fn Edit(id: String) -> Element {
    let session = use_session();
    let notifier = use_notifier();
    let navigator = use_navigator();
    let mut form = use_signal(|| None::<PostForm>);
    let mut rejected = use_signal(|| false);
    let mut saved = use_signal(|| false);

    let update_id = id.clone();
    let post = use_resource(use_reactive!(|(id,)| async move {
        BlogClientWeb::new(api_config()).get_post(&id).await
    }));

    use_effect(move || match Load::from_pending(post.read().as_ref()) {
        Load::Ready(post) => match open_for_edit(&post, session.read().user_info()) {
            Ok(editable) => form.set(Some(editable)),
            Err(outcome) => {
                form.set(None);
                rejected.set(true);
                notifier.outcome(outcome);
            }
        },
        Load::Failed(message) => notifier.show(Notice::error("Error", message)),
        Load::Loading => {}
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let payload = {
            let mut guard = form.write();
            let Some(editing) = guard.as_mut() else {
                return;
            };
            match editing.begin_update() {
                Ok(payload) => payload,
                Err(err) => {
                    notifier.show(err.notice("Error"));
                    return;
                }
            }
        };
        let client = api_client(&session.read());
        let id = update_id.clone();
        spawn(async move {
            let result = client.update_post(&id, payload).await;
            let outcome = match form.write().as_mut() {
                Some(editing) => editing.finish_update(&id, result),
                None => return,
            };
            // The saved draft is gone; keep the cleared form off screen.
            if outcome.leaves_page() {
                form.set(None);
                saved.set(true);
            }
            notifier.outcome(outcome);
        });
    };

    if rejected() {
        return rsx! {
            p { class: "text-center text-gray-500 py-12", "You are not allowed to edit this post." }
        };
    }

    if saved() {
        return rsx! {
            p { class: "text-center text-gray-500 py-12", "Changes saved." }
        };
    }

    if let Load::Failed(message) = Load::from_pending(post.read().as_ref()) {
        return rsx! {
            div { class: "max-w-4xl mx-auto px-6 py-12 text-center",
                p { class: "text-red-600 text-xl mb-6", "{message}" }
                Link {
                    to: Route::Home {},
                    class: "inline-block px-8 py-3 bg-indigo-600 text-white rounded-xl hover:bg-indigo-700 transition",
                    "Back to Posts"
                }
            }
        };
    }

    let current = form.read().clone();
    let Some(current) = current else {
        return rsx! {
            div { class: "flex justify-center items-center min-h-[60vh]",
                div { class: "animate-spin rounded-full h-16 w-16 border-4 border-indigo-600 border-t-transparent" }
            }
        };
    };

    let saving = current.is_submitting();
    let draft = current.draft;
    let cover_url = match &draft.cover {
        Cover::Url(url) => url.clone(),
        _ => String::new(),
    };

    rsx! {
        div { class: "max-w-4xl mx-auto px-6 py-12",
            h1 { class: "text-4xl font-bold text-gray-900 mb-8 text-center", "Edit Post" }

            form {
                onsubmit: on_submit,
                class: "bg-white rounded-2xl shadow-xl p-8 md:p-12 space-y-6",

                if !cover_url.trim().is_empty() {
                    img { class: "w-full h-64 object-cover rounded-xl", src: "{cover_url}", alt: "Cover preview" }
                }

                div {
                    label { class: "block text-sm font-medium text-gray-700 mb-2", "Cover Image URL" }
                    input {
                        r#type: "text",
                        placeholder: "Enter image URL",
                        value: "{cover_url}",
                        oninput: move |evt| {
                            if let Some(editing) = form.write().as_mut() {
                                editing.draft.cover = Cover::Url(evt.value());
                            }
                        },
                        class: "w-full px-5 py-4 border border-gray-300 rounded-xl shadow-sm focus:outline-none focus:ring-2 focus:ring-indigo-500 text-black",
                    }
                }

                div {
                    label { class: "block text-sm font-medium text-gray-700 mb-2", "Title" }
                    input {
                        r#type: "text",
                        placeholder: "Post title",
                        value: "{draft.title}",
                        oninput: move |evt| {
                            if let Some(editing) = form.write().as_mut() {
                                editing.draft.title = evt.value();
                            }
                        },
                        class: "w-full px-5 py-4 border border-gray-300 rounded-xl shadow-sm focus:outline-none focus:ring-2 focus:ring-indigo-500 text-lg text-black",
                    }
                }

                div {
                    label { class: "block text-sm font-medium text-gray-700 mb-2", "Summary" }
                    textarea {
                        rows: 3,
                        placeholder: "Brief summary of your post...",
                        value: "{draft.summary}",
                        oninput: move |evt| {
                            if let Some(editing) = form.write().as_mut() {
                                editing.draft.summary = evt.value();
                            }
                        },
                        class: "w-full px-5 py-4 border border-gray-300 rounded-xl shadow-sm focus:outline-none focus:ring-2 focus:ring-indigo-500 text-black",
                    }
                }

                div {
                    label { class: "block text-sm font-medium text-gray-700 mb-2", "Content" }
                    Editor {
                        value: draft.content.clone(),
                        oninput: move |value| {
                            if let Some(editing) = form.write().as_mut() {
                                editing.draft.content = value;
                            }
                        },
                    }
                }

                div { class: "flex justify-end gap-4 pt-6",
                    button {
                        r#type: "button",
                        class: "px-8 py-3.5 border border-gray-300 text-gray-700 rounded-xl hover:bg-gray-50 transition font-medium",
                        onclick: move |_| navigator.go_back(),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "px-10 py-3.5 bg-indigo-600 text-white rounded-xl hover:bg-indigo-700 transition shadow-md font-medium text-lg disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: saving,
                        if saving { "Saving..." } else { "Save Changes" }
                    }
                }
            }
        }
    }
}

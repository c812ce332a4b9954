use crate::Route;
use crate::client::{BlogClientWeb, api_config};
use crate::components::ConfirmModal;
use crate::context::{api_client, use_notifier, use_session};
use dioxus::prelude::*;
use inkwell_client::pages::{DeleteFlow, Load, can_manage};
use inkwell_client::{BlogApi, Notice};

const NO_COVER: &str = "https://via.placeholder.com/1200x600?text=No+Image";

#[component]
pub fn PostDetail(id: String) -> Element {
    let session = use_session();
    let notifier = use_notifier();
    let mut flow = use_signal(DeleteFlow::default);

    let delete_id = id.clone();
    let post = use_resource(use_reactive!(|(id,)| async move {
        BlogClientWeb::new(api_config()).get_post(&id).await
    }));

    use_effect(move || {
        if let Load::Failed(message) = Load::from_pending(post.read().as_ref()) {
            notifier.show(Notice::error("Post Detail", message));
        }
    });

    let on_confirm = move |_| {
        if !flow.write().confirm() {
            return;
        }
        let client = api_client(&session.read());
        let id = delete_id.clone();
        spawn(async move {
            let result = client.delete_post(&id).await;
            let outcome = flow.write().finish(result);
            notifier.outcome(outcome);
        });
    };

    let state = Load::from_pending(post.read().as_ref());

    rsx! {
        match state {
            Load::Loading => rsx! {
                div { class: "flex justify-center items-center min-h-[60vh]",
                    div { class: "animate-spin rounded-full h-16 w-16 border-4 border-indigo-600 border-t-transparent" }
                }
            },
            Load::Failed(message) => rsx! {
                div { class: "max-w-4xl mx-auto px-6 py-12 text-center",
                    p { class: "text-red-600 text-xl mb-6", "{message}" }
                    Link {
                        to: Route::Home {},
                        class: "inline-block px-8 py-3 bg-indigo-600 text-white rounded-xl hover:bg-indigo-700 transition",
                        "Back to Posts"
                    }
                }
            },
            Load::Ready(post) => {
                let cover = post.cover_url().unwrap_or(NO_COVER).to_string();
                let created = post.created_label().unwrap_or_default();
                let manageable = can_manage(&post, session.read().user_info());
                let deleting = *flow.read() == DeleteFlow::Deleting;
                rsx! {
                    div { class: "relative h-80 overflow-hidden",
                        img { class: "w-full h-full object-cover", src: "{cover}", alt: "{post.title}" }
                        div { class: "absolute bottom-4 left-6 text-sm text-white",
                            Link { to: Route::Home {}, "Home" }
                            span { " / " }
                            span { "{post.title}" }
                        }
                    }
                    article { class: "max-w-4xl mx-auto px-6 -mt-16 relative",
                        div { class: "bg-white rounded-2xl shadow-xl p-10 md:p-14",
                            h1 { class: "text-4xl md:text-5xl font-bold text-gray-900 mb-8", "{post.title}" }

                            div { class: "flex flex-wrap items-center justify-between gap-4 mb-8",
                                if let Some(author) = &post.author {
                                    div { class: "flex items-center gap-3",
                                        span { class: "inline-flex w-10 h-10 items-center justify-center rounded-full bg-indigo-600 text-white", "{author.initial()}" }
                                        div {
                                            Link {
                                                to: Route::AuthorPosts { id: author.id.clone() },
                                                class: "font-medium text-indigo-600",
                                                "@{author.username}"
                                            }
                                            div { class: "text-sm text-gray-500", "{created}" }
                                        }
                                    }
                                }
                                if manageable {
                                    div { class: "flex gap-4",
                                        Link {
                                            to: Route::Edit { id: post.id.clone() },
                                            class: "px-6 py-3 bg-indigo-600 text-white rounded-xl hover:bg-indigo-700 transition shadow-md",
                                            "Edit"
                                        }
                                        button {
                                            class: "px-6 py-3 bg-red-600 text-white rounded-xl hover:bg-red-700 transition shadow-md disabled:opacity-50",
                                            disabled: deleting,
                                            onclick: move |_| flow.write().request(),
                                            if deleting { "Deleting..." } else { "Delete" }
                                        }
                                    }
                                }
                            }

                            if !post.summary.is_empty() {
                                blockquote { class: "border-l-4 border-indigo-600 pl-4 italic text-gray-600 mb-8", "{post.summary}" }
                            }

                            div { class: "post-content text-gray-800", dangerous_inner_html: "{post.content}" }

                            div { class: "mt-12",
                                Link { to: Route::Home {}, class: "text-indigo-600 font-medium", "← Back to Posts" }
                            }
                        }
                    }
                }
            }
        }

        if flow.read().is_confirming() {
            ConfirmModal {
                notice: DeleteFlow::prompt(),
                confirm_label: "Yes, delete it!",
                on_confirm: on_confirm,
                on_cancel: move |_| flow.write().decline(),
            }
        }
    }
}

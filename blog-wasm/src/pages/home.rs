use crate::Route;
use crate::client::{BlogClientWeb, api_config};
use crate::components::PostCard;
use crate::context::{use_notifier, use_session};
use dioxus::prelude::*;
use inkwell_client::pages::{HomeView, Load};
use inkwell_client::{BlogApi, Notice};

#[component]
pub fn Home() -> Element {
    let session = use_session();
    let notifier = use_notifier();

    let posts = use_resource(move || async move {
        BlogClientWeb::new(api_config())
            .list_posts()
            .await
            .map(HomeView::new)
    });

    use_effect(move || {
        if let Load::Failed(message) = Load::from_pending(posts.read().as_ref()) {
            notifier.show(Notice::error("Home", message));
        }
    });

    let state = Load::from_pending(posts.read().as_ref());

    let write_target = if session.read().is_authenticated() {
        Route::Create {}
    } else {
        Route::Login {}
    };

    let (post_count, author_count) = match state.ready() {
        Some(view) => (view.count(), view.distinct_authors()),
        None => (0, 0),
    };

    rsx! {
        section { class: "bg-gradient-to-br from-indigo-600 to-purple-600 text-white",
            div { class: "max-w-5xl mx-auto px-6 py-20 text-center",
                h1 { class: "text-5xl font-bold mb-6", "Welcome to Inkwell" }
                p { class: "text-xl text-indigo-100 mb-10",
                    "Discover stories, insights, and knowledge shared by our community. Explore the latest posts and join the conversation."
                }
                div { class: "flex justify-center gap-4",
                    a { href: "#posts", class: "px-8 py-3 bg-white text-indigo-700 rounded-xl font-semibold shadow-md", "Explore Posts" }
                    Link { to: write_target.clone(), class: "px-8 py-3 border border-white rounded-xl font-semibold", "Write a Post" }
                }
            }
        }

        section { class: "max-w-5xl mx-auto px-6 -mt-10",
            div { class: "grid grid-cols-2 gap-6",
                div { class: "bg-white rounded-2xl shadow-lg p-6 text-center",
                    div { class: "text-sm text-gray-500", "Total Posts" }
                    div { class: "text-4xl font-bold text-indigo-600", "{post_count}" }
                }
                div { class: "bg-white rounded-2xl shadow-lg p-6 text-center",
                    div { class: "text-sm text-gray-500", "Authors" }
                    div { class: "text-4xl font-bold text-purple-600", "{author_count}" }
                }
            }
        }

        section { id: "posts", class: "max-w-5xl mx-auto px-6 py-16",
            h2 { class: "text-3xl font-bold text-gray-900 mb-10", "Latest Posts" }

            match state {
                Load::Loading => rsx! {
                    div { class: "space-y-6",
                        for i in 0..3 {
                            div { key: "{i}", class: "h-48 bg-gray-200 rounded-2xl animate-pulse" }
                        }
                    }
                },
                Load::Ready(view) if !view.is_empty() => rsx! {
                    div { class: "space-y-8",
                        for (index, post) in view.posts().iter().enumerate() {
                            PostCard { key: "{post.id}", post: post.clone(), index }
                        }
                    }
                },
                Load::Ready(_) => rsx! {
                    div { class: "text-center py-16",
                        p { class: "text-xl text-gray-500 mb-6", "Be the first to share your thoughts with the community!" }
                        Link {
                            to: write_target,
                            class: "px-8 py-3 bg-indigo-600 text-white rounded-xl hover:bg-indigo-700 transition",
                            "Create First Post"
                        }
                    }
                },
                Load::Failed(message) => rsx! {
                    p { class: "text-center text-red-600", "{message}" }
                },
            }
        }
    }
}

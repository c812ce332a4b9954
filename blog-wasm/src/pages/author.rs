use crate::Route;
use crate::client::{BlogClientWeb, api_config};
use crate::components::PostCard;
use crate::context::use_notifier;
use dioxus::prelude::*;
use inkwell_client::pages::{Load, posts_by_author};
use inkwell_client::{BlogApi, Notice};

/// Posts written by one author, filtered from the full list.
#[component]
pub fn AuthorPosts(id: String) -> Element {
    let notifier = use_notifier();

    let posts = use_resource(use_reactive!(|(id,)| async move {
        BlogClientWeb::new(api_config())
            .list_posts()
            .await
            .map(|all| posts_by_author(&all, &id))
    }));

    use_effect(move || {
        if let Load::Failed(message) = Load::from_pending(posts.read().as_ref()) {
            notifier.show(Notice::error("Author", message));
        }
    });

    let state = Load::from_pending(posts.read().as_ref());

    rsx! {
        section { class: "max-w-5xl mx-auto px-6 py-16",
            match state {
                Load::Loading => rsx! { p { class: "text-center text-gray-500", "Loading posts..." } },
                Load::Ready(posts) if !posts.is_empty() => {
                    let name = posts[0].author_name().unwrap_or_default().to_string();
                    rsx! {
                        h1 { class: "text-4xl font-bold text-gray-900 mb-2", "@{name}" }
                        p { class: "text-gray-500 mb-10", "{posts.len()} posts" }
                        div { class: "space-y-8",
                            for (index, post) in posts.iter().enumerate() {
                                PostCard { key: "{post.id}", post: post.clone(), index }
                            }
                        }
                    }
                },
                Load::Ready(_) => rsx! {
                    p { class: "text-center text-gray-500 text-xl", "This author has not published anything yet." }
                },
                Load::Failed(message) => rsx! {
                    p { class: "text-center text-red-600", "{message}" }
                },
            }
            div { class: "mt-12 text-center",
                Link { to: Route::Home {}, class: "text-indigo-600 font-medium", "← Back to Posts" }
            }
        }
    }
}

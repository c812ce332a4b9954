use crate::Route;
use dioxus::prelude::*;
use inkwell_client::Post;

const NO_COVER: &str = "https://via.placeholder.com/400x300?text=No+Image";

/// List entry for a post. Cards alternate the side the cover sits on.
#[component]
pub fn PostCard(post: Post, index: usize) -> Element {
    let direction = if index % 2 == 0 { "md:flex-row" } else { "md:flex-row-reverse" };
    let cover = post.cover_url().unwrap_or(NO_COVER).to_string();
    let created = post.created_label().unwrap_or_default();

    rsx! {
        article { class: "flex flex-col {direction} bg-white rounded-2xl shadow-lg hover:shadow-2xl transition overflow-hidden",
            figure { class: "md:w-1/3 min-h-[200px] overflow-hidden",
                img { class: "w-full h-full object-cover", src: "{cover}", alt: "{post.title}" }
            }
            div { class: "md:w-2/3 p-6 flex flex-col gap-3",
                Link { to: Route::PostDetail { id: post.id.clone() },
                    h2 { class: "text-2xl font-bold text-gray-900 line-clamp-2 hover:text-indigo-600", "{post.title}" }
                }
                if let Some(author) = &post.author {
                    div { class: "flex items-center gap-2 text-sm text-gray-500",
                        span { class: "inline-flex w-6 h-6 items-center justify-center rounded-full bg-indigo-600 text-white text-xs", "{author.initial()}" }
                        Link {
                            to: Route::AuthorPosts { id: author.id.clone() },
                            class: "font-medium text-indigo-600",
                            "@{author.username}"
                        }
                        span { "•" }
                        span { "{created}" }
                    }
                }
                p { class: "text-gray-600 line-clamp-3", "{post.summary}" }
                Link {
                    to: Route::PostDetail { id: post.id.clone() },
                    class: "mt-auto text-sm text-indigo-600 font-medium",
                    "Read more →"
                }
            }
        }
    }
}

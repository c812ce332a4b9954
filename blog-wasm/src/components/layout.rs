use crate::Route;
use crate::components::NoticeModal;
use crate::context::{use_notifier, use_session};
use dioxus::prelude::*;

#[component]
pub fn MainLayout() -> Element {
    rsx! {
        div { class: "min-h-screen flex flex-col bg-gray-50",
            Header {}
            main { class: "flex-1",
                Outlet::<Route> {}
            }
            Footer {}
            NoticeModal {}
        }
    }
}

#[component]
fn Header() -> Element {
    let mut session = use_session();
    let notifier = use_notifier();
    let navigator = use_navigator();

    let username = session.read().user_info().map(|s| s.username.clone());

    let on_logout = move |_| {
        if let Err(err) = session.write().log_out() {
            notifier.show(err.notice("Logout"));
        }
        navigator.push(Route::Home {});
    };

    rsx! {
        nav { class: "bg-white/80 backdrop-blur-md border-b border-gray-200 sticky top-0 z-50 shadow-sm",
            div { class: "max-w-7xl mx-auto px-6 py-4 flex justify-between items-center",
                div { class: "flex items-center space-x-8",
                    Link { to: Route::Home {}, class: "text-2xl font-bold text-indigo-600 hover:text-indigo-700 transition", "Inkwell" }
                    Link { to: Route::Home {}, class: "text-gray-700 hover:text-indigo-600 font-medium transition", "🏠 Home" }
                }

                div { class: "flex items-center space-x-4",
                    if let Some(name) = username {
                        Link {
                            to: Route::Create {},
                            class: "px-5 py-2.5 bg-indigo-600 text-white rounded-xl hover:bg-indigo-700 transition shadow-md",
                            "✏️ Create Post"
                        }
                        span { class: "text-gray-700 font-medium", "@{name}" }
                        button {
                            onclick: on_logout,
                            class: "px-5 py-2.5 bg-red-500 text-white rounded-xl hover:bg-red-600 transition shadow-md",
                            "🚪 Logout"
                        }
                    } else {
                        Link {
                            to: Route::Login {},
                            class: "px-5 py-2.5 bg-indigo-600 text-white rounded-xl hover:bg-indigo-700 transition shadow-md",
                            "Login"
                        }
                        Link {
                            to: Route::Register {},
                            class: "px-5 py-2.5 border border-indigo-600 text-indigo-600 rounded-xl hover:bg-indigo-50 transition",
                            "Register"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    rsx! {
        footer { class: "border-t border-gray-200 py-6 text-center text-sm text-gray-500",
            "Inkwell · stories from our community"
        }
    }
}

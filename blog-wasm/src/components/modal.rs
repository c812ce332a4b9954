use crate::context::use_notifier;
use dioxus::prelude::*;
use inkwell_client::{Notice, NoticeKind};

fn accent(kind: NoticeKind) -> (&'static str, &'static str) {
    match kind {
        NoticeKind::Success => ("✅", "bg-green-600 hover:bg-green-700"),
        NoticeKind::Error => ("⛔", "bg-red-600 hover:bg-red-700"),
        NoticeKind::Warning => ("⚠️", "bg-amber-500 hover:bg-amber-600"),
    }
}

/// Full-screen backdrop centering its children in a card.
#[component]
fn Overlay(children: Element) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 flex items-center justify-center bg-black/40",
            style: "z-index: 2000",
            div {
                class: "bg-white rounded-2xl shadow-xl max-w-md w-full mx-4 p-8 text-center",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Blocking notification. Dismissing it follows the route attached to the
/// notice, if there is one.
#[component]
pub fn NoticeModal() -> Element {
    let notifier = use_notifier();
    let navigator = use_navigator();

    let Some(pending) = notifier.pending() else {
        return rsx! {};
    };
    let (icon, button) = accent(pending.notice.kind);

    let on_ok = move |_| {
        if let Some(route) = notifier.dismiss() {
            navigator.push(route);
        }
    };

    rsx! {
        Overlay {
            div { class: "text-5xl mb-4", "{icon}" }
            h2 { class: "text-2xl font-bold text-gray-900 mb-2", "{pending.notice.title}" }
            p { class: "text-gray-600 mb-8", "{pending.notice.text}" }
            button {
                class: "px-8 py-3 text-white rounded-xl transition shadow-md {button}",
                autofocus: true,
                onclick: on_ok,
                "OK"
            }
        }
    }
}

/// Interstitial asking the user to confirm a destructive action.
#[component]
pub fn ConfirmModal(
    notice: Notice,
    #[props(into)]
    confirm_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let (icon, _) = accent(notice.kind);

    rsx! {
        Overlay {
            div { class: "text-5xl mb-4", "{icon}" }
            h2 { class: "text-2xl font-bold text-gray-900 mb-2", "{notice.title}" }
            p { class: "text-gray-600 mb-8", "{notice.text}" }
            div { class: "flex justify-center gap-4",
                button {
                    class: "px-6 py-3 bg-gray-500 text-white rounded-xl hover:bg-gray-600 transition",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                button {
                    class: "px-6 py-3 bg-red-500 text-white rounded-xl hover:bg-red-600 transition shadow-md",
                    onclick: move |_| on_confirm.call(()),
                    "{confirm_label}"
                }
            }
        }
    }
}

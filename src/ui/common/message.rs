//! Inline banners for validation errors and warnings.

use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
enum BannerKind {
    Error,
    Warning,
}

impl BannerKind {
    fn icon(self) -> &'static str {
        match self {
            BannerKind::Error => icons::ALERT_CIRCLE,
            BannerKind::Warning => icons::WARNING,
        }
    }

    fn class(self) -> &'static str {
        match self {
            BannerKind::Error => "error-message",
            BannerKind::Warning => "warning-message",
        }
    }

    /// Errors interrupt screen readers, warnings wait their turn
    fn role(self) -> &'static str {
        match self {
            BannerKind::Error => "alert",
            BannerKind::Warning => "status",
        }
    }
}

/// Blocking problem, e.g. a rejected add or update. Hidden while `None`.
#[component]
pub fn ErrorMessage(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! { <Banner kind=BannerKind::Error text=error /> }
}

/// Non-blocking hint shown next to a form. Hidden while `None`.
#[component]
pub fn WarningMessage(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! { <Banner kind=BannerKind::Warning text=message /> }
}

#[component]
fn Banner(kind: BannerKind, text: Signal<Option<String>>) -> impl IntoView {
    move || {
        text.get().map(|text| view! {
            <div class=kind.class() role=kind.role()>
                <Icon name=kind.icon() class="w-4 h-4 shrink-0" />
                <span>{text}</span>
            </div>
        })
    }
}

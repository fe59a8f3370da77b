//! Leptos components for the card capability.

use leptos::prelude::*;

use crate::card::{CardAction, CardSections};
use crate::theme::Theme;

/// A complete card: header, optional content, optional footer.
#[component]
pub fn CardView(
    sections: CardSections,
    theme: Theme,
    /// Extra class appended to `card` (e.g. `card-placeholder`).
    #[prop(optional, into)]
    variant: Option<String>,
) -> impl IntoView {
    let CardSections {
        header,
        content,
        footer,
    } = sections;

    let class = match variant {
        Some(extra) => format!("card card-{} {}", theme.appearance.as_str(), extra),
        None => format!("card card-{}", theme.appearance.as_str()),
    };

    view! {
        <div class=class style=theme.css_vars() data-slot="card">
            <div class="card-header" data-slot="card-header">
                <h3 class="card-title">{header.title}</h3>
                {match header.description {
                    Some(description) => view! {
                        <p class="card-description">{description}</p>
                    }.into_any(),
                    None => view! { "" }.into_any(),
                }}
                {match header.action {
                    Some(action) => view! { <CardActionView action=action /> }.into_any(),
                    None => view! { "" }.into_any(),
                }}
            </div>
            {match content {
                Some(content) => view! {
                    <div class="card-content" data-slot="card-content">{content}</div>
                }.into_any(),
                None => view! { "" }.into_any(),
            }}
            {match footer {
                Some(footer) => view! {
                    <div class="card-footer" data-slot="card-footer">{footer}</div>
                }.into_any(),
                None => view! { "" }.into_any(),
            }}
        </div>
    }
}

/// Header action: a link when navigable, a disabled button when not.
#[component]
pub fn CardActionView(action: CardAction) -> impl IntoView {
    let target = action.target().map(str::to_string);
    let CardAction {
        label,
        enabled,
        hint,
        ..
    } = action;

    match (enabled, target) {
        (true, Some(href)) => view! {
            <a class="card-action" data-slot="card-action" href=href>{label}</a>
        }
        .into_any(),
        (true, None) => view! {
            <span class="card-action" data-slot="card-action">{label}</span>
        }
        .into_any(),
        (false, _) => {
            let title = hint.unwrap_or_default();
            view! {
                <button
                    class="card-action"
                    data-slot="card-action"
                    type="button"
                    disabled="disabled"
                    aria-disabled="true"
                    title=title
                >
                    {label}
                </button>
            }
            .into_any()
        }
    }
}

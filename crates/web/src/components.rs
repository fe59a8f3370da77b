//! Page-level Leptos components.

use leptos::prelude::*;
use storefront_ui::styles::CARD_CSS;
use storefront_ui::{Card, CardView, Theme};

use crate::landing::{
    LandingPage, NavLink, PageImage, GENERIC_SECTION_TITLE, PRODUCT_SECTION_TITLE,
};
use crate::slots::CardSlot;

const PAGE_CSS: &str = r#"
.landing { display: flex; flex-direction: column; gap: 2rem; max-width: 48rem; margin: 0 auto; padding: 4rem 2rem; }
.theme-dark .invert-on-dark { filter: invert(1); }
.card-section h2 { margin: 0 0 1rem; font-size: 1.5rem; font-weight: 700; }
.landing-links { display: flex; flex-wrap: wrap; gap: 1rem; }
.landing-link { display: inline-flex; align-items: center; gap: 0.5rem; height: 3rem; padding: 0 1.25rem; border-radius: 9999px; border: 1px solid var(--border); color: var(--fg); text-decoration: none; }
"#;

/// The whole landing page document.
#[component]
pub fn LandingDocument(page: LandingPage, slots: Vec<CardSlot>, theme: Theme) -> impl IntoView {
    let root_class = format!("theme-{}", theme.appearance.as_str());
    let css = format!("{CARD_CSS}{PAGE_CSS}");

    view! {
        <html lang="en" class=root_class>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{page.title}</title>
                <style>{css}</style>
            </head>
            <body>
                <main class="landing">
                    <Image image=page.logo class="landing-logo" />

                    <section class="card-section" data-section="generic">
                        <h2>{GENERIC_SECTION_TITLE}</h2>
                        <div class="card-grid">
                            {page.generic_cards.into_iter().map(|card| {
                                view! { <CardView sections=card.sections() theme=theme.clone() /> }
                            }).collect::<Vec<_>>()}
                        </div>
                    </section>

                    <section class="card-section" data-section="products">
                        <h2>{PRODUCT_SECTION_TITLE}</h2>
                        <div class="card-grid">
                            {slots.into_iter().map(|slot| {
                                if slot.is_placeholder() {
                                    view! {
                                        <CardView
                                            sections=slot.sections()
                                            theme=theme.clone()
                                            variant="card-placeholder"
                                        />
                                    }.into_any()
                                } else {
                                    view! { <CardView sections=slot.sections() theme=theme.clone() /> }.into_any()
                                }
                            }).collect::<Vec<_>>()}
                        </div>
                    </section>

                    <nav class="landing-links">
                        {page.links.into_iter().map(|link| view! { <LinkButton link=link /> }).collect::<Vec<_>>()}
                    </nav>
                </main>
            </body>
        </html>
    }
}

#[component]
fn LinkButton(link: NavLink) -> impl IntoView {
    let NavLink {
        label,
        href,
        external,
        icon,
    } = link;

    let icon = match icon {
        Some(icon) => view! { <Image image=icon class="landing-link-icon" /> }.into_any(),
        None => view! { "" }.into_any(),
    };

    if external {
        view! {
            <a class="landing-link" href=href target="_blank" rel="noopener noreferrer">
                {icon}
                {label}
            </a>
        }
        .into_any()
    } else {
        view! { <a class="landing-link" href=href>{icon}{label}</a> }.into_any()
    }
}

#[component]
fn Image(image: PageImage, class: &'static str) -> impl IntoView {
    let class = if image.invert_on_dark {
        format!("{class} invert-on-dark")
    } else {
        class.to_string()
    };

    view! {
        <img
            class=class
            src=image.src
            alt=image.alt
            width=image.width.to_string()
            height=image.height.to_string()
        />
    }
}

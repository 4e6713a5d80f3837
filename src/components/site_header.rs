use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::NAV_ITEMS;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct SiteHeaderProps {
    /// Receives the section id of the nav item that was picked.
    pub on_section: Callback<&'static str>,
}

#[function_component(SiteHeader)]
pub fn site_header(props: &SiteHeaderProps) -> Html {
    let menu_open = use_state(|| false);
    let navigator = use_navigator();

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let select_section = |id: &'static str| {
        let menu_open = menu_open.clone();
        let on_section = props.on_section.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            on_section.emit(id);
        })
    };

    let book_pilot = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            if let Some(navigator) = &navigator {
                navigator.push(&Route::BookPilot);
            }
        })
    };

    html! {
        <header class="site-header">
            <img class="header-logo" alt="Jataka" src="/jatakalogo.svg" />

            <nav class="desktop-nav">
                { for NAV_ITEMS.iter().enumerate().map(|(i, item)| html! {
                    <button
                        class={classes!("nav-item", (i == 0).then(|| "active"))}
                        onclick={select_section(item.id)}
                    >
                        { item.label }
                    </button>
                }) }
                <button class="nav-cta" onclick={book_pilot.clone()}>{"Book a Pilot"}</button>
            </nav>

            <button class="burger-menu" onclick={toggle_menu}>
                {
                    if *menu_open {
                        html! { <span class="burger-close">{"✕"}</span> }
                    } else {
                        html! {
                            <>
                                <span></span>
                                <span></span>
                                <span></span>
                            </>
                        }
                    }
                }
            </button>

            if *menu_open {
                <div class="mobile-menu">
                    { for NAV_ITEMS.iter().map(|item| html! {
                        <button class="mobile-nav-item" onclick={select_section(item.id)}>
                            { item.label }
                        </button>
                    }) }
                    <button class="mobile-nav-cta" onclick={book_pilot}>{"Book a Pilot"}</button>
                </div>
            }
        </header>
    }
}

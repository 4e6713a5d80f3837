use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod carousel;
mod config;
mod content;
mod navigation;
mod persistence;
mod components {
    pub mod gradient_border;
    pub mod section_header;
    pub mod site_footer;
    pub mod site_header;
}
mod pages {
    pub mod book_pilot;
    pub mod landing;
}

use navigation::SectionSlot;
use pages::{book_pilot::PilotBookingView, landing::LandingView};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Landing,
    #[at("/book-pilot")]
    BookPilot,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Landing => {
            info!("Rendering Landing page");
            html! { <LandingView /> }
        }
        Route::BookPilot => {
            info!("Rendering Book a Pilot page");
            html! { <PilotBookingView /> }
        }
        Route::NotFound => {
            info!("Unknown route, redirecting to landing");
            html! { <Redirect<Route> to={Route::Landing} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    // One slot for the lifetime of the app; pages reach it through context.
    let section_slot = use_state(SectionSlot::new);

    html! {
        <ContextProvider<SectionSlot> context={(*section_slot).clone()}>
            <style>
                {r#"
                body {
                    margin: 0;
                    background: #0b132b;
                    color: white;
                    font-family: Inter, -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
                    overflow-x: hidden;
                }
                ::selection { background: rgba(86, 111, 233, 0.3); }
                .site {
                    position: relative;
                    min-height: 100vh;
                    width: 100%;
                    overflow-x: hidden;
                }
                .glow {
                    position: fixed;
                    border-radius: 50%;
                    pointer-events: none;
                    filter: blur(150px);
                }
                .glow.top-right { top: 0; right: 0; width: 500px; height: 500px; background: white; opacity: 0.05; }
                .glow.bottom-left { bottom: 0; left: 0; width: 600px; height: 600px; background: #566fe9; opacity: 0.1; }
                .gradient-text {
                    background: linear-gradient(180deg, rgba(255, 255, 255, 1) 0%, rgba(255, 255, 255, 0.4) 100%);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                    margin: 0;
                }
                .eyebrow {
                    font-weight: 700;
                    color: #566fe9;
                    font-size: 0.875rem;
                    letter-spacing: 2.8px;
                    text-transform: uppercase;
                }
                .section-header {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    align-items: center;
                    text-align: center;
                }
                .section-header h2 { font-size: 64px; font-weight: 600; line-height: 1.1; }
                .section-header.align-left { align-items: flex-start; text-align: left; }
                .gradient-border {
                    position: relative;
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(255, 255, 255, 0.04);
                    border-radius: 20px;
                    box-sizing: border-box;
                }
                .gradient-border-inner { position: relative; z-index: 10; height: 100%; }
                .primary-button, .secondary-button, .nav-cta, .mobile-nav-cta {
                    height: 54px;
                    padding: 0 1.5rem;
                    border-radius: 6px;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    color: white;
                    font-size: 0.875rem;
                    font-weight: 500;
                    cursor: pointer;
                }
                .primary-button { background: rgba(255, 255, 255, 0.1); box-shadow: 0 0 30px rgba(255, 255, 255, 0.1); }
                .primary-button:hover { background: rgba(255, 255, 255, 0.15); }
                .secondary-button { background: transparent; }
                .secondary-button:hover { background: rgba(255, 255, 255, 0.05); }
                .site-header {
                    position: fixed;
                    top: 1.5rem;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 0 100px;
                    max-width: 1920px;
                    margin: 0 auto;
                }
                .header-logo { height: 36px; width: auto; }
                .desktop-nav {
                    position: absolute;
                    left: 50%;
                    transform: translateX(-50%);
                    display: inline-flex;
                    align-items: center;
                    gap: 52px;
                    height: 54px;
                    padding: 6px 2px 6px 36px;
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    border-radius: 12px;
                    backdrop-filter: blur(12px);
                }
                .nav-item {
                    background: none;
                    border: none;
                    color: white;
                    font-size: 0.875rem;
                    font-weight: 500;
                    opacity: 0.6;
                    cursor: pointer;
                }
                .nav-item:hover, .nav-item.active { opacity: 1; }
                .nav-cta { height: 42px; background: transparent; border-color: rgba(255, 255, 255, 0.4); }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    padding: 0.5rem;
                    cursor: pointer;
                }
                .burger-menu span { display: block; width: 22px; height: 2px; background: white; }
                .burger-menu .burger-close { width: auto; height: auto; background: none; color: white; font-size: 1.25rem; }
                .mobile-menu {
                    position: absolute;
                    top: 100%;
                    left: 0;
                    width: 100%;
                    box-sizing: border-box;
                    background: #0b132b;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    padding: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                }
                .mobile-nav-item {
                    text-align: left;
                    background: none;
                    border: none;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                    color: white;
                    font-size: 1.125rem;
                    font-weight: 500;
                    opacity: 0.8;
                    padding: 0.5rem 0;
                }
                .mobile-nav-cta { width: 100%; background: rgba(255, 255, 255, 0.05); }
                .site-footer {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 2rem;
                    padding: 2.5rem 0;
                    margin: 0 auto;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    width: 100%;
                    max-width: 400px;
                }
                .footer-logos { display: flex; flex-direction: column; align-items: center; gap: 0.5rem; }
                .footer-logo { height: 48px; width: auto; }
                .footer-logo.small { height: 32px; }
                .footer-by { opacity: 0.5; font-size: 0.875rem; }
                .footer-links { display: flex; flex-wrap: wrap; justify-content: center; gap: 2rem; }
                .footer-links a { color: white; text-decoration: none; font-size: 0.875rem; opacity: 0.6; white-space: nowrap; }
                .footer-links a:hover { opacity: 1; }
                @media (max-width: 768px) {
                    .site-header {
                        top: 0;
                        padding: 1rem 1.5rem;
                        background: rgba(11, 19, 43, 0.8);
                        backdrop-filter: blur(12px);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .header-logo { height: 28px; }
                    .desktop-nav { display: none; }
                    .burger-menu { display: flex; }
                    .section-header h2 { font-size: 1.875rem; }
                    .section-header.align-left { align-items: center; text-align: center; }
                    .glow { filter: blur(80px); }
                    .glow.top-right, .glow.bottom-left { width: 300px; height: 300px; }
                    .footer-links { gap: 1rem; }
                }
                "#}
            </style>
            <div class="site">
                <div class="glow top-right"></div>
                <div class="glow bottom-left"></div>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </div>
        </ContextProvider<SectionSlot>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

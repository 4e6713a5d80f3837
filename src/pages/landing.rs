use web_sys::Event;
use yew::prelude::*;
use yew_hooks::prelude::use_event_with_window;
use yew_router::prelude::*;

use crate::carousel::{display_sequence, CarouselAction, CarouselState, Direction};
use crate::components::gradient_border::GradientBorder;
use crate::components::section_header::SectionHeader;
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::content::{
    Cell, COMPARISON_HEADERS, COMPARISON_ROWS, FEATURE_CARDS, PROBLEM_CARDS, STEPS,
};
use crate::navigation::{scroll_to_section, use_pending_section_scroll};
use crate::Route;

fn viewport_width() -> Option<f64> {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
}

#[function_component(LandingView)]
pub fn landing_view() -> Html {
    let carousel = use_reducer(|| CarouselState::new(PROBLEM_CARDS.len(), viewport_width()));
    let navigator = use_navigator();

    use_pending_section_scroll();

    {
        let carousel = carousel.clone();
        use_event_with_window("resize", move |_: Event| {
            if let Some(width) = viewport_width() {
                carousel.dispatch(CarouselAction::Resize(width));
            }
        });
    }

    let on_prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Advance(Direction::Previous)))
    };
    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Advance(Direction::Next)))
    };

    let on_section = Callback::from(|id: &'static str| scroll_to_section(id));

    let book_pilot = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::BookPilot);
        }
    });

    let cards = display_sequence(&PROBLEM_CARDS);
    let card_width = carousel.card_width();
    let strip_style = format!(
        "transform: translateX({}px); width: {}px;",
        carousel.offset(),
        carousel.strip_width(cards.len())
    );
    let card_style = format!("width: {}px;", card_width);

    html! {
        <div class="landing-page">
            <style>
                {r#"
                .landing-main {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    width: 100%;
                    padding: 12rem 0 5rem;
                    gap: 10rem;
                }
                .landing-section {
                    width: 100%;
                    max-width: 1240px;
                    padding: 0 1rem;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 4rem;
                }
                .hero {
                    align-items: center;
                    text-align: center;
                    max-width: 56rem;
                    gap: 3rem;
                }
                .hero h1 {
                    font-size: 60px;
                    line-height: 1.1;
                    font-weight: 600;
                }
                .hero h1 span { display: block; }
                .hero-copy {
                    max-width: 643px;
                    opacity: 0.6;
                    font-weight: 500;
                    line-height: 1.6;
                }
                .hero-actions {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem;
                }
                .video-placeholder {
                    position: relative;
                    width: 100%;
                    max-width: 1240px;
                    aspect-ratio: 16 / 9;
                    border-radius: 16px;
                    overflow: hidden;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                }
                .video-placeholder img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0.5;
                }
                .play-button {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(0, 0, 0, 0.4);
                    font-size: 2rem;
                }
                .problem-head {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-end;
                    gap: 2rem;
                }
                .carousel-controls { display: flex; gap: 1rem; }
                .carousel-button {
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    color: white;
                    cursor: pointer;
                }
                .carousel-button:hover { background: rgba(255, 255, 255, 0.1); }
                .carousel-viewport { position: relative; overflow: hidden; width: 100%; }
                .carousel-strip {
                    display: flex;
                    gap: 10px;
                    transition: transform 0.3s ease-in-out;
                }
                .problem-card { flex-shrink: 0; height: 335px; }
                .problem-card .gradient-border { height: 100%; padding: 36px; }
                .problem-card-body { display: flex; flex-direction: column; gap: 2rem; height: 100%; }
                .problem-card img { width: 48px; height: 48px; }
                .problem-card h3 { font-size: 28px; line-height: 1.2; font-weight: 600; }
                .problem-card p { opacity: 0.6; line-height: 1.6; }
                .badges { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-top: auto; }
                .badge {
                    padding: 0.5rem 1rem;
                    background: rgba(255, 255, 255, 0.1);
                    border-radius: 999px;
                    font-size: 0.875rem;
                }
                .steps-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 3rem;
                }
                .step { display: flex; flex-direction: column; align-items: center; gap: 1.5rem; text-align: center; }
                .step-icon {
                    width: 100px;
                    height: 100px;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    overflow: hidden;
                }
                .step-icon img { width: 60px; height: 60px; object-fit: cover; }
                .step p { opacity: 0.6; max-width: 300px; }
                .comparison-scroll { width: 100%; overflow-x: auto; padding-bottom: 1rem; }
                .comparison-table { min-width: 900px; width: 100%; }
                .comparison-row { display: grid; grid-template-columns: repeat(5, 1fr); }
                .comparison-cell {
                    min-height: 100px;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    background: rgba(255, 255, 255, 0.01);
                    text-align: center;
                    padding: 0 0.5rem;
                }
                .comparison-cell.head { min-height: 80px; font-size: 1.25rem; font-weight: 600; }
                .comparison-cell.feature { align-items: flex-start; padding-left: 2rem; font-weight: 500; }
                .comparison-cell.ours { background: rgba(255, 255, 255, 0.05); }
                .comparison-cell img { width: 24px; height: 24px; }
                .cell-caption { color: rgba(255, 255, 255, 0.5); font-size: 0.875rem; }
                .feature-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1.5rem; }
                .feature-card { position: relative; min-height: 378px; padding: 36px; overflow: hidden; }
                .feature-card img { position: absolute; top: 24px; left: 24px; height: 150px; opacity: 0.8; }
                .feature-card-text { position: relative; margin-top: 180px; display: flex; flex-direction: column; gap: 1.5rem; }
                .feature-card p, .guardrail p { opacity: 0.6; line-height: 1.6; max-width: 500px; }
                .guardrail { display: flex; align-items: center; gap: 3rem; padding: 36px; }
                .guardrail img { width: 100%; max-width: 480px; margin-left: auto; }
                .join-us { display: flex; flex-direction: column; align-items: center; text-align: center; gap: 2.5rem; }
                .join-us h2 { max-width: 900px; font-size: 2.25rem; font-weight: 600; line-height: 1.25; }
                .join-us h2 span { display: block; }
                @media (max-width: 768px) {
                    .landing-main { padding-top: 7rem; gap: 6rem; }
                    .hero h1 { font-size: 2.25rem; }
                    .problem-head { flex-direction: column; align-items: center; }
                    .problem-card .gradient-border { padding: 1.5rem; }
                    .problem-card h3 { font-size: 1.5rem; }
                    .steps-grid, .feature-grid { grid-template-columns: 1fr; }
                    .guardrail { flex-direction: column; padding: 1.5rem; }
                    .join-us h2 { font-size: 1.5rem; }
                }
                "#}
            </style>

            <SiteHeader on_section={on_section} />

            <main id="home" class="landing-main">
                <section class="landing-section hero">
                    <div class="eyebrow">{"WELCOME TO JATAKA"}</div>
                    <h1 class="gradient-text">
                        <span>{"Clone Your Senior Engineers"}</span>
                        <span>{"Automate Your Onboarding"}</span>
                    </h1>
                    <p class="hero-copy">
                        {"Stop pulling your Lead Architects off billable work to train new hires. \
                          Jataka captures their expertise once - debugging, deployment, and decision-making - \
                          and turns it into an interactive simulation for every new joiner."}
                    </p>
                    <div class="hero-actions">
                        <button class="primary-button" onclick={book_pilot.clone()}>{"Book a Pilot"}</button>
                        <button class="secondary-button">{"See Simulation"}</button>
                    </div>
                    <div class="video-placeholder">
                        <div class="play-button">{"▶"}</div>
                        <img src="https://c.animaapp.com/mik17n6qd0VDsr/img/image-container.png" alt="Video Placeholder" />
                    </div>
                </section>

                <section class="landing-section problems">
                    <div class="problem-head">
                        <SectionHeader subtitle="THE INDUSTRY PROBLEM" align_left={true}>
                            {"The Knowledge Gap Is Costly"}
                        </SectionHeader>
                        <div class="carousel-controls">
                            <button class="carousel-button" aria-label="Previous" onclick={on_prev}>{"‹"}</button>
                            <button class="carousel-button" aria-label="Next" onclick={on_next}>{"›"}</button>
                        </div>
                    </div>
                    <div class="carousel-viewport">
                        <div class="carousel-strip" style={strip_style}>
                            { for cards.iter().enumerate().map(|(i, card)| html! {
                                <div key={format!("{}-{}", i, card.title)} class="problem-card" style={card_style.clone()}>
                                    <GradientBorder>
                                        <div class="problem-card-body">
                                            <img alt="Icon" src={card.icon} />
                                            <div>
                                                <h3 class="gradient-text">{ card.title }</h3>
                                                <p>{ card.description }</p>
                                            </div>
                                            <div class="badges">
                                                { for card.badges.iter().map(|badge| html! {
                                                    <span class="badge">{ *badge }</span>
                                                }) }
                                            </div>
                                        </div>
                                    </GradientBorder>
                                </div>
                            }) }
                        </div>
                    </div>
                </section>

                <section id="how-it-works" class="landing-section">
                    <SectionHeader subtitle="HOW IT WORKS">
                        {"We Don't Just Record Video,"}<br />{"We Capture Thinking"}
                    </SectionHeader>
                    <div class="steps-grid">
                        { for STEPS.iter().map(|step| html! {
                            <div class="step">
                                <div class="step-icon">
                                    <img alt="icon" src={step.icon} />
                                </div>
                                <h3 class="gradient-text">{ step.title }</h3>
                                <p>{ step.description }</p>
                            </div>
                        }) }
                    </div>
                </section>

                <section id="services" class="landing-section">
                    <SectionHeader subtitle="WHY CHOOSE US">
                        {"Why Video & Git Are Failing You"}
                    </SectionHeader>
                    <p class="hero-copy" style="margin: 0 auto; text-align: center;">
                        {"Videos make learning passive, Git hides the entire problem-solving journey, \
                          and docs rarely stay updated. Our system captures the actual workflow and reasoning."}
                    </p>
                    <div class="comparison-scroll">
                        <div class="comparison-table">
                            <div class="comparison-row">
                                { for COMPARISON_HEADERS.iter().enumerate().map(|(i, head)| html! {
                                    <div class={classes!("comparison-cell", "head", (i == COMPARISON_HEADERS.len() - 1).then(|| "ours"))}>
                                        <span class="gradient-text">{ *head }</span>
                                    </div>
                                }) }
                            </div>
                            { for COMPARISON_ROWS.iter().map(|row| html! {
                                <div class="comparison-row">
                                    <div class="comparison-cell feature">
                                        <span class="gradient-text">{ row.feature }</span>
                                    </div>
                                    { for row.cells.iter().enumerate().map(|(i, cell)| html! {
                                        <div class={classes!("comparison-cell", (i == row.cells.len() - 1).then(|| "ours"))}>
                                            { comparison_cell(cell) }
                                        </div>
                                    }) }
                                </div>
                            }) }
                        </div>
                    </div>
                </section>

                <section class="landing-section">
                    <SectionHeader subtitle="THE AI ADVANTAGE" align_left={true}>
                        {"Built for the Agentic Future"}
                    </SectionHeader>
                    <div class="feature-grid">
                        { for FEATURE_CARDS.iter().map(|card| html! {
                            <GradientBorder class={classes!("feature-card")}>
                                <img src={card.image} alt={card.title} />
                                <div class="feature-card-text">
                                    <h3 class="gradient-text">{ card.title }</h3>
                                    <p>{ card.description }</p>
                                </div>
                            </GradientBorder>
                        }) }
                    </div>
                    <GradientBorder>
                        <div class="guardrail">
                            <div>
                                <h3 class="gradient-text">{"The \"Standards\" Guardrail"}</h3>
                                <p>
                                    {"Automatically enforces your organization's coding style, architectural rules, \
                                      naming conventions, and best practices. Whether it's API structure, logging \
                                      format, or how services communicate."}
                                </p>
                            </div>
                            <img alt="Guardrail" src="https://c.animaapp.com/mik17n6qd0VDsr/img/image-container.png" />
                        </div>
                    </GradientBorder>
                </section>

                <footer class="landing-section">
                    <div class="join-us">
                        <div class="eyebrow">{"JOIN US"}</div>
                        <h2 class="gradient-text">
                            <span>{"Turn your Junior Engineers into Seniors,"}</span>
                            <span>{"faster than you thought possible"}</span>
                        </h2>
                        <button class="primary-button" onclick={book_pilot}>{"Book a Pilot"}</button>
                    </div>
                    <SiteFooter />
                </footer>
            </main>
        </div>
    }
}

fn comparison_cell(cell: &Cell) -> Html {
    let (icon, alt, caption) = match cell {
        Cell::Text(text) => return html! { <span>{ *text }</span> },
        Cell::Tick(caption) => ("/tick.svg", "Tick", *caption),
        Cell::Cross(caption) => ("/cross.svg", "Cross", *caption),
    };
    html! {
        <>
            <img src={icon} alt={alt} />
            if !caption.is_empty() {
                <span class="cell-caption">{ caption }</span>
            }
        </>
    }
}

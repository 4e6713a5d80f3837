pub mod model;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::gradient_border::GradientBorder;
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::navigation::{request_section, scroll_to_section, SectionRequest, SectionSlot};
use crate::persistence::insert_pilot_booking;
use crate::Route;
use self::model::{BookingField, BookingPhase, BookingState, Role, TeamSize, FAILURE_NOTICE};

fn field_value(e: &Event) -> Option<String> {
    let target = e.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        return Some(select.value());
    }
    target.dyn_ref::<HtmlTextAreaElement>().map(|area| area.value())
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[function_component(PilotBookingView)]
pub fn pilot_booking_view() -> Html {
    // RefCell so the in-flight flag flips synchronously on the first click
    let booking = use_mut_ref(BookingState::default);
    let redraw = use_force_update();
    let navigator = use_navigator();
    let slot = use_context::<SectionSlot>().unwrap_or_default();

    let on_section = Callback::from(move |id: &'static str| match request_section(&slot, id) {
        SectionRequest::NavigateToLanding(_) => {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Landing);
            }
        }
        SectionRequest::ScrollInPage(id) => scroll_to_section(&id),
    });

    let bind = |field: BookingField| {
        let booking = booking.clone();
        let redraw = redraw.clone();
        Callback::from(move |e: Event| {
            if let Some(value) = field_value(&e) {
                booking.borrow_mut().update(field, value);
                redraw.force_update();
            }
        })
    };
    let bind_input = |field: BookingField| bind(field).reform(|e: InputEvent| Event::from(e));

    let onsubmit = {
        let booking = booking.clone();
        let redraw = redraw.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(record) = booking.borrow_mut().begin_submit() else {
                log::warn!("Ignoring submit while a booking is already in flight");
                return;
            };
            redraw.force_update();

            let booking = booking.clone();
            let redraw = redraw.clone();
            spawn_local(async move {
                log::info!("Submitting pilot booking for {}", record.company);
                let outcome = insert_pilot_booking(&record).await;
                let failed = match &outcome {
                    Ok(()) => {
                        log::info!("Pilot booking stored");
                        false
                    }
                    Err(err) => {
                        log::error!("Error submitting form: {}", err);
                        true
                    }
                };
                booking.borrow_mut().finish(outcome);
                redraw.force_update();
                if failed {
                    alert(FAILURE_NOTICE);
                }
            });
        })
    };

    let state = booking.borrow().clone();
    let submitted = state.phase == BookingPhase::Submitted;

    html! {
        <div class="book-pilot-page">
            <style>
                {r#"
                .book-pilot-main {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    width: 100%;
                    padding: 10rem 1rem 5rem;
                }
                .book-pilot-content { max-width: 48rem; width: 100%; margin: 0 auto; }
                .book-pilot-heading { text-align: center; margin-bottom: 3rem; }
                .book-pilot-heading .eyebrow { margin-bottom: 1.5rem; }
                .book-pilot-heading h1 {
                    font-size: 48px;
                    font-weight: 600;
                    line-height: 1.3;
                }
                .booking-form-panel { padding: 2.5rem; }
                .booking-form { display: flex; flex-direction: column; gap: 1.5rem; }
                .form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; }
                .form-field label {
                    display: block;
                    font-size: 0.875rem;
                    color: #D1D5DB;
                    margin-bottom: 0.5rem;
                }
                .form-field input, .form-field select, .form-field textarea {
                    width: 100%;
                    padding: 0.75rem 1rem;
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 6px;
                    color: white;
                    font-size: 0.875rem;
                    box-sizing: border-box;
                }
                .form-field input:focus, .form-field select:focus, .form-field textarea:focus {
                    outline: none;
                    border-color: #566fe9;
                }
                .form-field select { appearance: none; cursor: pointer; }
                .form-field option { background: #0b132b; }
                .form-field textarea { resize: none; height: 120px; }
                .submit-button {
                    width: 100%;
                    height: 54px;
                    background: rgba(255, 255, 255, 0.1);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 6px;
                    color: white;
                    font-weight: 500;
                    cursor: pointer;
                }
                .submit-button:hover { background: rgba(255, 255, 255, 0.15); }
                .submit-button:disabled { opacity: 0.5; cursor: not-allowed; }
                .spinner {
                    display: inline-block;
                    width: 14px;
                    height: 14px;
                    margin-right: 0.5rem;
                    border: 2px solid rgba(255, 255, 255, 0.3);
                    border-top-color: #fff;
                    border-radius: 50%;
                    animation: spin 1s linear infinite;
                    vertical-align: middle;
                }
                @keyframes spin { to { transform: rotate(360deg); } }
                .form-notice { color: #f87171; font-size: 0.875rem; text-align: center; }
                .booking-success { display: flex; justify-content: center; width: 100%; }
                .booking-success .gradient-border { width: 100%; max-width: 533px; padding: 60px; }
                .success-body { display: flex; flex-direction: column; align-items: center; text-align: center; gap: 60px; }
                .success-body img { width: 84px; height: 84px; }
                .success-body h2 { font-size: 40px; font-weight: 600; letter-spacing: 0.04em; }
                .success-body p { color: rgba(255, 255, 255, 0.7); }
                @media (max-width: 768px) {
                    .book-pilot-main { padding-top: 8rem; }
                    .book-pilot-heading h1 { font-size: 1.875rem; }
                    .booking-form-panel { padding: 1.5rem; }
                    .form-row { grid-template-columns: 1fr; }
                    .form-field input, .form-field select, .form-field textarea { font-size: 1rem; }
                    .booking-success .gradient-border { padding: 2rem; }
                    .success-body { gap: 2rem; }
                    .success-body h2 { font-size: 1.5rem; }
                }
                "#}
            </style>

            <SiteHeader on_section={on_section} />

            <main class="book-pilot-main">
                <div class="book-pilot-content">
                    if !submitted {
                        <div class="book-pilot-heading">
                            <div class="eyebrow">{"BOOK A PILOT"}</div>
                            <h1 class="gradient-text">
                                {"Get a 20-minute demo tailored to your engineering workflow"}
                            </h1>
                        </div>
                    }

                    if submitted {
                        <div class="booking-success">
                            <GradientBorder>
                                <div class="success-body">
                                    <img src="/tick.svg" alt="Tick" />
                                    <div>
                                        <h2 class="gradient-text">{"Pilot Scheduled!"}</h2>
                                        <p>{"You'll hear from our team shortly with your pilot details."}</p>
                                    </div>
                                </div>
                            </GradientBorder>
                        </div>
                    } else {
                        <GradientBorder class={classes!("booking-form-panel")}>
                            <form class="booking-form" onsubmit={onsubmit}>
                                <div class="form-row">
                                    <div class="form-field">
                                        <label for="name">{"Name"}</label>
                                        <input type="text" id="name" name={BookingField::Name.input_name()} required={BookingField::Name.is_required()}
                                            value={state.form.get(BookingField::Name).to_string()} oninput={bind_input(BookingField::Name)}
                                            placeholder="Arastu Sharma" />
                                    </div>
                                    <div class="form-field">
                                        <label for="email">{"Work Email Address"}</label>
                                        <input type="email" id="email" name={BookingField::Email.input_name()} required={BookingField::Email.is_required()}
                                            value={state.form.get(BookingField::Email).to_string()} oninput={bind_input(BookingField::Email)}
                                            placeholder="arastusharma@gmail.com" />
                                    </div>
                                </div>

                                <div class="form-row">
                                    <div class="form-field">
                                        <label for="company">{"Company Name"}</label>
                                        <input type="text" id="company" name={BookingField::Company.input_name()} required={BookingField::Company.is_required()}
                                            value={state.form.get(BookingField::Company).to_string()} oninput={bind_input(BookingField::Company)}
                                            placeholder="Shodh AI" />
                                    </div>
                                    <div class="form-field">
                                        <label for="contactNumber">{"Contact Number"}</label>
                                        <input type="tel" id="contactNumber" name={BookingField::ContactNumber.input_name()} required={BookingField::ContactNumber.is_required()}
                                            value={state.form.get(BookingField::ContactNumber).to_string()} oninput={bind_input(BookingField::ContactNumber)}
                                            placeholder="+91-912345678" />
                                    </div>
                                </div>

                                <div class="form-row">
                                    <div class="form-field">
                                        <label for="teamSize">{"Team Size"}</label>
                                        <select id="teamSize" name={BookingField::TeamSize.input_name()} required={BookingField::TeamSize.is_required()}
                                            onchange={bind(BookingField::TeamSize)}>
                                            <option value="" selected={state.form.team_size().is_none()}>{"Select Size"}</option>
                                            { for TeamSize::ALL.iter().map(|size| html! {
                                                <option value={size.as_str()} selected={state.form.team_size() == Some(*size)}>
                                                    { size.as_str() }
                                                </option>
                                            }) }
                                        </select>
                                    </div>
                                    <div class="form-field">
                                        <label for="role">{"Role/Position"}</label>
                                        <select id="role" name={BookingField::Role.input_name()} required={BookingField::Role.is_required()}
                                            onchange={bind(BookingField::Role)}>
                                            <option value="" selected={state.form.role().is_none()}>{"Select Role"}</option>
                                            { for Role::ALL.iter().map(|role| html! {
                                                <option value={role.as_str()} selected={state.form.role() == Some(*role)}>
                                                    { role.as_str() }
                                                </option>
                                            }) }
                                        </select>
                                    </div>
                                </div>

                                <div class="form-field">
                                    <label for="problem">{"What Problem Are You Looking to Solve?"}</label>
                                    <textarea id="problem" name={BookingField::Problem.input_name()} rows="4"
                                        value={state.form.get(BookingField::Problem).to_string()} oninput={bind_input(BookingField::Problem)}
                                        placeholder="For example: Reducing Ramp-Up Time" />
                                </div>

                                if let Some(notice) = state.notice {
                                    <p class="form-notice">{ notice }</p>
                                }

                                <button type="submit" class="submit-button" disabled={state.is_submitting()}>
                                    if state.is_submitting() {
                                        <><span class="spinner"></span>{"Submitting..."}</>
                                    } else {
                                        {"Book a Pilot"}
                                    }
                                </button>
                            </form>
                        </GradientBorder>
                    }
                </div>
            </main>

            <footer class="book-pilot-footer">
                <SiteFooter />
            </footer>
        </div>
    }
}

use crate::clock;
use promobar_core::{CountdownFormat, TimeWindow, should_display, tick};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use yew::prelude::*;

const TICK_INTERVAL_MS: i32 = 1_000;

/// Host-facing inputs for the countdown widget. Dates are `YYYY-MM-DD`,
/// times `HH:MM`, both naive local.
#[derive(Properties, PartialEq, Clone)]
pub struct CountdownProps {
    #[prop_or_default]
    pub start_date: Option<AttrValue>,
    #[prop_or_default]
    pub start_time: Option<AttrValue>,
    #[prop_or_default]
    pub end_date: Option<AttrValue>,
    #[prop_or_default]
    pub end_time: Option<AttrValue>,
    #[prop_or_default]
    pub format: CountdownFormat,
    #[prop_or(true)]
    pub show: bool,
    #[prop_or_default]
    pub heading: Option<AttrValue>,
}

fn parse_window(props: &CountdownProps) -> TimeWindow {
    TimeWindow::from_parts(
        props.start_date.as_deref(),
        props.start_time.as_deref(),
        props.end_date.as_deref(),
        props.end_time.as_deref(),
    )
    .unwrap_or_else(|err| {
        log::warn!("discarding countdown window: {err}");
        TimeWindow::default()
    })
}

#[function_component(Countdown)]
pub fn countdown(props: &CountdownProps) -> Html {
    let window = parse_window(props);
    let state = use_state_eq(|| tick(clock::now_local(), &window));
    {
        let state = state.clone();
        use_effect_with(window, move |window| {
            let window = *window;
            let mut interval_id: Option<i32> = None;
            let mut stored_closure: Option<Closure<dyn FnMut()>> = None;
            if window.end.is_some() {
                state.set(tick(clock::now_local(), &window));
                if let Some(browser) = web_sys::window() {
                    let handle = state.clone();
                    let closure = Closure::wrap(Box::new(move || {
                        handle.set(tick(clock::now_local(), &window));
                    }) as Box<dyn FnMut()>);
                    if let Ok(id) = browser.set_interval_with_callback_and_timeout_and_arguments_0(
                        closure.as_ref().unchecked_ref(),
                        TICK_INTERVAL_MS,
                    ) {
                        interval_id = Some(id);
                        stored_closure = Some(closure);
                    }
                }
            } else {
                state.set(None);
            }
            move || {
                if let Some(id) = interval_id
                    && let Some(browser) = web_sys::window()
                {
                    browser.clear_interval_with_handle(id);
                }
                if let Some(closure) = stored_closure {
                    drop(closure);
                }
            }
        });
    }

    if !should_display(clock::now_local(), &window, (*state).as_ref(), props.show) {
        return Html::default();
    }
    let Some(current) = *state else {
        return Html::default();
    };

    let heading = props
        .heading
        .clone()
        .unwrap_or_else(|| AttrValue::Static("Hurry! Offer ends in"));
    let mut units: Vec<Html> = Vec::new();
    for (index, segment) in current.segments(props.format).iter().enumerate() {
        if index > 0 {
            units.push(html! { <span class="promo-countdown__separator">{ ":" }</span> });
        }
        units.push(html! {
            <div class="promo-countdown__unit">
                <span class="promo-countdown__value">{ segment.display_value() }</span>
                <span class="promo-countdown__label">{ segment.unit.label() }</span>
            </div>
        });
    }

    html! {
        <div class="promo-countdown" role="timer" aria-live="polite">
            <p class="promo-countdown__heading">{ heading }</p>
            <div class="promo-countdown__units">{ for units }</div>
        </div>
    }
}

use web_sys::HtmlInputElement;
use yew::html::TargetCast;
use yew::prelude::*;

/// Preview slider standing in for the live cart total.
#[derive(Properties, PartialEq, Clone)]
pub struct SpendSliderProps {
    pub value: f64,
    pub max: f64,
    #[prop_or(0.01)]
    pub step: f64,
    #[prop_or_default]
    pub on_input: Callback<f64>,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
}

#[function_component(SpendSlider)]
pub fn spend_slider(props: &SpendSliderProps) -> Html {
    let on_input = {
        let cb = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>()
                && let Ok(value) = input.value().parse::<f64>()
            {
                cb.emit(value);
            }
        })
    };
    html! {
        <input
            class="promo-slider"
            type="range"
            min="0"
            max={props.max.to_string()}
            step={props.step.to_string()}
            value={props.value.to_string()}
            aria-label={props.aria_label.clone()}
            oninput={on_input}
        />
    }
}

use crate::components::countdown::{Countdown, CountdownProps};
use crate::components::spend_slider::SpendSlider;
use promobar_core::{MilestoneCatalog, MilestoneEntry, ProgressState, SelectionState, evaluate};
use std::rc::Rc;
use yew::prelude::*;

/// Copy nudging the shopper towards the next unreached milestone.
fn next_milestone_hint(progress: &ProgressState, spend: f64, currency: &str) -> Option<String> {
    let next = progress.next_milestone.as_ref()?;
    let remaining = (next.spend_threshold - spend.max(0.0)).max(0.0);
    Some(format!(
        "Spend {remaining:.2} {currency} more to unlock a {}",
        next.reward_kind.summary_label()
    ))
}

#[derive(Properties, PartialEq, Clone)]
pub struct MilestoneBarProps {
    pub catalog: Rc<MilestoneCatalog>,
    #[prop_or(AttrValue::Static("EUR"))]
    pub currency: AttrValue,
    /// Starting cart total for the preview slider.
    #[prop_or_default]
    pub initial_spend: f64,
    /// When set, a countdown is shown above the bar as a sub-widget.
    #[prop_or_default]
    pub countdown: Option<CountdownProps>,
    /// Fired once per milestone, on the transition into the selected state.
    #[prop_or_default]
    pub on_reward_selected: Callback<MilestoneEntry>,
}

#[function_component(MilestoneBar)]
pub fn milestone_bar(props: &MilestoneBarProps) -> Html {
    let spend = use_state_eq(|| props.initial_spend);
    let selection = use_state(SelectionState::new);

    let progress = evaluate(*spend, &props.catalog);
    let slider_max = props.catalog.max_threshold().unwrap_or_default();

    let on_slide = {
        let spend = spend.clone();
        Callback::from(move |value: f64| spend.set(value))
    };
    let on_select = {
        let selection = selection.clone();
        let notify = props.on_reward_selected.clone();
        Callback::from(move |entry: MilestoneEntry| {
            let mut next = (*selection).clone();
            if next.select(&entry.id) {
                notify.emit(entry);
                selection.set(next);
            }
        })
    };

    let markers = props.catalog.milestones.iter().map(|entry| {
        let reached = progress.reached.iter().any(|m| m.id == entry.id);
        let left = progress.marker_fraction(entry) * 100.0;
        html! {
            <div
                key={entry.id.clone()}
                class={classes!(
                    "promo-milestones__marker",
                    reached.then_some("promo-milestones__marker--reached"),
                )}
                style={format!("left: {left:.4}%")}
                title={entry.reward_kind.title()}
            />
        }
    });

    let rewards = progress.reached.iter().map(|entry| {
        let selected = selection.is_selected(&entry.id);
        let onclick = {
            let on_select = on_select.clone();
            let entry = entry.clone();
            Callback::from(move |_: MouseEvent| on_select.emit(entry.clone()))
        };
        html! {
            <li key={entry.id.clone()} class="promo-reward">
                <span class="promo-reward__title">{ entry.reward_kind.title() }</span>
                <button
                    class={classes!(
                        "promo-reward__action",
                        selected.then_some("promo-reward__action--selected"),
                    )}
                    {onclick}
                >
                    { entry.reward_kind.action_label(selected) }
                </button>
            </li>
        }
    });

    html! {
        <div class="promo-milestones">
            { props.countdown.clone().map(|cfg| html! { <Countdown ..cfg /> }).unwrap_or_default() }
            <div class="promo-milestones__track">
                <div
                    class="promo-milestones__fill"
                    style={format!("width: {:.4}%", progress.progress_percent())}
                />
                { for markers }
            </div>
            {
                match next_milestone_hint(&progress, *spend, &props.currency) {
                    Some(hint) => html! { <p class="promo-milestones__hint">{ hint }</p> },
                    None if progress.all_reached() => html! {
                        <p class="promo-milestones__hint">{ "All rewards unlocked" }</p>
                    },
                    None => Html::default(),
                }
            }
            <ul class="promo-milestones__rewards">{ for rewards }</ul>
            <div class="promo-milestones__preview">
                <label>{ "Cart total" }</label>
                <div class="promo-milestones__controls">
                    <SpendSlider
                        value={*spend}
                        max={slider_max}
                        on_input={on_slide}
                        aria_label="Cart total"
                    />
                    <span class="promo-milestones__amount">
                        { format!("{:.2}{}", *spend, props.currency) }
                    </span>
                </div>
                <p class="promo-milestones__note">{ "Slide this to see changes in preview" }</p>
            </div>
        </div>
    }
}

use crate::clock;
use crate::components::countdown::CountdownProps;
use crate::components::milestone::MilestoneBar;
use promobar_core::{CountdownFormat, MilestoneCatalog, MilestoneEntry};
use yew::prelude::*;

/// Preview page hosting the widgets with the embedded demo catalog and a
/// promotion ending a few days out.
#[function_component(App)]
pub fn app() -> Html {
    let catalog = use_memo((), |()| MilestoneCatalog::load_from_static());
    let on_reward_selected = Callback::from(|entry: MilestoneEntry| {
        log::info!(
            "reward selected: milestone {} ({})",
            entry.id,
            entry.reward_kind.title()
        );
    });

    let demo_end = clock::now_local() + chrono::Duration::days(3);
    let countdown = CountdownProps {
        start_date: None,
        start_time: None,
        end_date: Some(demo_end.format("%Y-%m-%d").to_string().into()),
        end_time: Some(demo_end.format("%H:%M").to_string().into()),
        format: CountdownFormat::DdHhMmSs,
        show: true,
        heading: None,
    };

    html! {
        <main class="promobar-preview">
            <h1>{ "Promobar preview" }</h1>
            <MilestoneBar
                catalog={catalog}
                currency="EUR"
                countdown={Some(countdown)}
                on_reward_selected={on_reward_selected}
            />
        </main>
    }
}

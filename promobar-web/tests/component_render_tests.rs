use futures::executor::block_on;
use promobar_core::{CountdownFormat, MilestoneCatalog, MilestoneEntry, RewardKind};
use promobar_web::app::App;
use promobar_web::components::countdown::{Countdown, CountdownProps};
use promobar_web::components::milestone::{MilestoneBar, MilestoneBarProps};
use std::rc::Rc;
use yew::{AttrValue, Callback, LocalServerRenderer};

fn countdown_props(end_date: &str, end_time: &str) -> CountdownProps {
    CountdownProps {
        start_date: None,
        start_time: None,
        end_date: Some(AttrValue::from(end_date.to_string())),
        end_time: Some(AttrValue::from(end_time.to_string())),
        format: CountdownFormat::DdHhMmSs,
        show: true,
        heading: None,
    }
}

fn render_countdown(props: CountdownProps) -> String {
    block_on(LocalServerRenderer::<Countdown>::with_props(props).render())
}

fn render_milestones(props: MilestoneBarProps) -> String {
    block_on(LocalServerRenderer::<MilestoneBar>::with_props(props).render())
}

fn demo_catalog() -> Rc<MilestoneCatalog> {
    Rc::new(MilestoneCatalog {
        milestones: vec![
            entry("1", 6.0, RewardKind::Gift),
            entry("2", 180.0, RewardKind::DiscountTag),
            entry("3", 360.0, RewardKind::ShippingDiscount),
            entry("4", 3600.0, RewardKind::ShippingDiscount),
        ],
    })
}

fn entry(id: &str, spend_threshold: f64, reward_kind: RewardKind) -> MilestoneEntry {
    MilestoneEntry {
        id: id.to_string(),
        spend_threshold,
        reward_kind,
    }
}

#[test]
fn countdown_renders_units_for_a_future_end() {
    let html = render_countdown(countdown_props("2099-01-01", "12:00"));
    assert!(html.contains("promo-countdown"));
    assert!(html.contains("Hurry! Offer ends in"));
    assert!(html.contains("DAYS"));
    assert!(html.contains("HRS"));
    assert!(html.contains("MINS"));
    assert!(html.contains("SECS"));
}

#[test]
fn countdown_folds_days_away_for_coarser_formats() {
    let mut props = countdown_props("2099-01-01", "12:00");
    props.format = CountdownFormat::HhMmSs;
    let html = render_countdown(props);
    assert!(!html.contains("DAYS"));
    assert!(html.contains("HRS"));
    assert!(html.contains("SECS"));

    let mut props = countdown_props("2099-01-01", "12:00");
    props.format = CountdownFormat::HhMm;
    let html = render_countdown(props);
    assert!(!html.contains("SECS"));
    assert!(html.contains("MINS"));
}

#[test]
fn countdown_is_suppressed_after_expiry() {
    let html = render_countdown(countdown_props("2000-01-01", "00:00"));
    assert!(!html.contains("promo-countdown"));
}

#[test]
fn countdown_is_suppressed_without_an_end_bound() {
    let props = CountdownProps {
        start_date: None,
        start_time: None,
        end_date: None,
        end_time: None,
        format: CountdownFormat::DdHhMmSs,
        show: true,
        heading: None,
    };
    assert!(!render_countdown(props).contains("promo-countdown"));

    // Malformed dates fall back to "nothing to display" as well.
    let html = render_countdown(countdown_props("soon", "later"));
    assert!(!html.contains("promo-countdown"));
}

#[test]
fn countdown_is_suppressed_when_the_flag_is_down() {
    let mut props = countdown_props("2099-01-01", "12:00");
    props.show = false;
    assert!(!render_countdown(props).contains("promo-countdown"));
}

#[test]
fn countdown_waits_for_the_promotion_to_start() {
    let mut props = countdown_props("2099-01-02", "12:00");
    props.start_date = Some(AttrValue::from("2099-01-01"));
    props.start_time = Some(AttrValue::from("12:00"));
    assert!(!render_countdown(props).contains("promo-countdown"));
}

#[test]
fn milestone_bar_renders_markers_fill_and_rewards() {
    let html = render_milestones(MilestoneBarProps {
        catalog: demo_catalog(),
        currency: AttrValue::Static("EUR"),
        initial_spend: 200.0,
        countdown: None,
        on_reward_selected: Callback::noop(),
    });

    // 200 / 3600 of the bar is filled and two of four markers are reached.
    assert!(html.contains("width: 5.5556%"));
    assert_eq!(html.matches("promo-milestones__marker--reached").count(), 2);
    assert_eq!(html.matches("title=").count(), 4);

    assert!(html.contains("Free gift"));
    assert!(html.contains("Select gifts"));
    assert!(html.contains("Cart discount"));
    assert!(html.contains("Apply code"));
    // Only the two reached rewards get rows; markers alone carry the rest.
    assert_eq!(html.matches("promo-reward__title").count(), 2);

    assert!(html.contains("Spend 160.00 EUR more to unlock a shipping discount"));
    assert!(html.contains("200.00EUR"));
    assert!(html.contains("Cart total"));
    assert!(html.contains("Slide this to see changes in preview"));
}

#[test]
fn milestone_bar_with_everything_reached_drops_the_hint() {
    let html = render_milestones(MilestoneBarProps {
        catalog: demo_catalog(),
        currency: AttrValue::Static("EUR"),
        initial_spend: 3600.0,
        countdown: None,
        on_reward_selected: Callback::noop(),
    });
    assert!(html.contains("All rewards unlocked"));
    assert!(!html.contains("more to unlock"));
    assert_eq!(html.matches("promo-milestones__marker--reached").count(), 4);
    assert!(html.contains("width: 100.0000%"));
}

#[test]
fn milestone_bar_handles_an_empty_catalog() {
    let html = render_milestones(MilestoneBarProps {
        catalog: Rc::new(MilestoneCatalog::default()),
        currency: AttrValue::Static("EUR"),
        initial_spend: 50.0,
        countdown: None,
        on_reward_selected: Callback::noop(),
    });
    assert!(html.contains("width: 0.0000%"));
    assert!(!html.contains("promo-milestones__marker"));
    assert!(!html.contains("promo-reward"));
    assert!(!html.contains("more to unlock"));
}

#[test]
fn milestone_bar_embeds_a_countdown_sub_widget() {
    let html = render_milestones(MilestoneBarProps {
        catalog: demo_catalog(),
        currency: AttrValue::Static("EUR"),
        initial_spend: 0.0,
        countdown: Some(countdown_props("2099-01-01", "12:00")),
        on_reward_selected: Callback::noop(),
    });
    assert!(html.contains("promo-countdown"));
    assert!(html.contains("promo-milestones__track"));
}

#[test]
fn app_renders_the_preview_page() {
    let html = block_on(LocalServerRenderer::<App>::new().render());
    assert!(html.contains("Promobar preview"));
    // The demo promotion ends a few days out, so the countdown is live.
    assert!(html.contains("promo-countdown"));
    assert!(html.contains("promo-milestones__track"));
}

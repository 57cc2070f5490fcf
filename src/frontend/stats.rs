use super::{dom::Interval, reveal::use_reveal, use_config};
use crate::effects::counter::{parse_target, CountUp};
use crate::effects::reveal::VisibilityOptions;
use crate::logging::{log_event, LogLevel};
use serde_json::json;
use std::ops::ControlFlow;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub value: AttrValue,
    pub label: AttrValue,
}

#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let config = use_config();
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), VisibilityOptions::one_shot(&config.reveal));
    let shown = use_state_eq(|| props.value.to_string());

    {
        let shown = shown.clone();
        let value = props.value.clone();
        let counter_config = config.counter.clone();
        use_effect_with(visible, move |visible| {
            let interval = visible
                .then(|| parse_target(&value))
                .flatten()
                .map(|target| {
                    let mut counter = CountUp::new(target, &counter_config);
                    Interval::new(counter_config.tick_ms, move || match counter.tick() {
                        Some(label) => {
                            shown.set(label);
                            if counter.is_finished() {
                                log_event(
                                    LogLevel::Debug,
                                    "stat_counted",
                                    json!({ "target": counter.target() }),
                                );
                                ControlFlow::Break(())
                            } else {
                                ControlFlow::Continue(())
                            }
                        }
                        None => ControlFlow::Break(()),
                    })
                });
            move || drop(interval)
        });
    }

    html! {
        <div class="stat-item">
            <span ref={node} class="stat-number">{(*shown).clone()}</span>
            <span class="stat-label">{props.label.clone()}</span>
        </div>
    }
}

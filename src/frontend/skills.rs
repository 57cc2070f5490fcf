use super::{dom::Timeout, reveal::use_reveal, use_config};
use crate::effects::reveal::{VisibilityOptions, FADE_IN_CLASS, VISIBLE_CLASS};
use crate::effects::skill_bar::{SkillBar, ANIMATE_CLASS};
use crate::logging::{log_event, LogLevel};
use serde_json::json;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SkillCategoryProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(SkillCategory)]
pub fn skill_category(props: &SkillCategoryProps) -> Html {
    let config = use_config();
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), VisibilityOptions::reveal(&config.reveal));

    html! {
        <div ref={node} class={classes!("skill-category", FADE_IN_CLASS, revealed.then_some(VISIBLE_CLASS))}>
            <h3>{props.title.clone()}</h3>
            {props.children.clone()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SkillMeterProps {
    pub name: AttrValue,
    pub width: AttrValue,
}

#[function_component(SkillMeter)]
pub fn skill_meter(props: &SkillMeterProps) -> Html {
    let config = use_config();
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), VisibilityOptions::one_shot(&config.reveal));
    let bar = use_mut_ref(|| SkillBar::new(&props.width));
    let fill = use_state_eq(|| None::<String>);

    {
        let fill = fill.clone();
        let name = props.name.clone();
        let delay_ms = config.skills.delay_ms;
        use_effect_with(visible, move |visible| {
            let pending = bar.borrow_mut().on_visibility(*visible).map(|width| {
                Timeout::new(delay_ms, move || {
                    log_event(
                        LogLevel::Debug,
                        "skill_bar_revealed",
                        json!({ "skill": name.as_str(), "width": width }),
                    );
                    fill.set(Some(width));
                })
            });
            move || drop(pending)
        });
    }

    html! {
        <div class="skill-item">
            <div class="skill-header">
                <span class="skill-name">{props.name.clone()}</span>
                <span class="skill-value">{format!("{}%", props.width)}</span>
            </div>
            <div class="skill-bar">
                <div
                    ref={node}
                    class={classes!("skill-progress", fill.is_some().then_some(ANIMATE_CLASS))}
                    data-width={props.width.clone()}
                    style={(*fill).as_ref().map(|width| format!("width: {width};"))}
                ></div>
            </div>
        </div>
    }
}

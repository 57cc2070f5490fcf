use super::{dom::Timeout, reveal::use_reveal, use_config};
use crate::effects::decorations::{card_hover_style, Rect, RippleGeometry};
use crate::effects::reveal::{VisibilityOptions, FADE_IN_CLASS, VISIBLE_CLASS};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Default, PartialEq)]
struct RippleSet {
    next_id: u64,
    entries: Vec<(u64, RippleGeometry)>,
}

enum RippleAction {
    Spawn(RippleGeometry),
    Expire(u64),
}

impl Reducible for RippleSet {
    type Action = RippleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            RippleAction::Spawn(geometry) => {
                next.entries.push((next.next_id, geometry));
                next.next_id += 1;
            }
            RippleAction::Expire(id) => next.entries.retain(|(entry_id, _)| *entry_id != id),
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct RippleButtonProps {
    #[prop_or(AttrValue::Static("button"))]
    pub button_type: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub style: Option<AttrValue>,
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(RippleButton)]
pub fn ripple_button(props: &RippleButtonProps) -> Html {
    let button = use_node_ref();
    let ripples = use_reducer(RippleSet::default);

    let onclick = {
        let button = button.clone();
        let ripples = ripples.dispatcher();
        let forward = props.onclick.clone();
        Callback::from(move |event: MouseEvent| {
            if let Some(element) = button.cast::<web_sys::Element>() {
                let bounds = element.get_bounding_client_rect();
                let rect = Rect {
                    left: bounds.left(),
                    top: bounds.top(),
                    width: bounds.width(),
                    height: bounds.height(),
                };
                ripples.dispatch(RippleAction::Spawn(RippleGeometry::from_click(
                    rect,
                    f64::from(event.client_x()),
                    f64::from(event.client_y()),
                )));
            }
            forward.emit(event);
        })
    };

    let on_expire = {
        let ripples = ripples.dispatcher();
        Callback::from(move |id: u64| ripples.dispatch(RippleAction::Expire(id)))
    };

    let ripple_nodes: Html = ripples
        .entries
        .iter()
        .map(|(id, geometry)| {
            html! {
                <Ripple key={*id} id={*id} geometry={*geometry} on_expire={on_expire.clone()} />
            }
        })
        .collect();
    let class = classes!("btn", props.class.clone());

    match &props.href {
        Some(href) => html! {
            <a
                ref={button}
                class={class}
                href={href.clone()}
                style={props.style.clone()}
                onclick={onclick}
            >
                {props.children.clone()}
                {ripple_nodes}
            </a>
        },
        None => html! {
            <button
                ref={button}
                type={props.button_type.clone()}
                class={class}
                disabled={props.disabled}
                style={props.style.clone()}
                onclick={onclick}
            >
                {props.children.clone()}
                {ripple_nodes}
            </button>
        },
    }
}

#[derive(Properties, PartialEq)]
struct RippleProps {
    id: u64,
    geometry: RippleGeometry,
    on_expire: Callback<u64>,
}

#[function_component(Ripple)]
fn ripple(props: &RippleProps) -> Html {
    let config = use_config();

    {
        let on_expire = props.on_expire.clone();
        let id = props.id;
        let duration_ms = config.ripple.duration_ms;
        use_effect_with(id, move |_| {
            let timeout = Timeout::new(duration_ms, move || on_expire.emit(id));
            move || drop(timeout)
        });
    }

    html! {
        <span class="ripple" style={props.geometry.style(config.ripple.duration_ms)}></span>
    }
}

#[derive(Properties, PartialEq)]
pub struct CardProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(GlassCard)]
pub fn glass_card(props: &CardProps) -> Html {
    let config = use_config();
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), VisibilityOptions::reveal(&config.reveal));

    html! {
        <div
            ref={node}
            class={classes!("glass-card", FADE_IN_CLASS, revealed.then_some(VISIBLE_CLASS), props.class.clone())}
        >
            {props.children.clone()}
        </div>
    }
}

#[function_component(ProjectCard)]
pub fn project_card(props: &CardProps) -> Html {
    let config = use_config();
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), VisibilityOptions::reveal(&config.reveal));
    // `None` until the pointer first enters, so the card's stylesheet owns the resting look.
    let hovered = use_state_eq(|| None::<bool>);

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(Some(true)))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(Some(false)))
    };

    html! {
        <article
            ref={node}
            class={classes!("project-card", FADE_IN_CLASS, revealed.then_some(VISIBLE_CLASS), props.class.clone())}
            style={(*hovered).map(|hovered| card_hover_style(hovered).inline())}
            onmouseenter={onmouseenter}
            onmouseleave={onmouseleave}
        >
            {props.children.clone()}
        </article>
    }
}

use super::{
    dom::{scroll_y, ThrottledScroll},
    use_config,
};
use crate::config::ParallaxConfig;
use crate::effects::parallax::{
    background_offset, shape_offset, translate_y, BACKGROUND_SELECTOR, SHAPE_SELECTOR,
};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

fn elements(root: &Element, selector: &str) -> Vec<HtmlElement> {
    let Ok(nodes) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

fn apply(root: &Element, scrolled: f64, config: &ParallaxConfig) {
    for (index, shape) in elements(root, SHAPE_SELECTOR).iter().enumerate() {
        let offset = shape_offset(scrolled, index, config);
        let _ = shape.style().set_property("transform", &translate_y(offset));
    }
    for background in elements(root, BACKGROUND_SELECTOR) {
        let offset = background_offset(scrolled, config);
        let _ = background.style().set_property("transform", &translate_y(offset));
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroBackdropProps {
    #[prop_or(4)]
    pub shapes: usize,
}

#[function_component(HeroBackdrop)]
pub fn hero_backdrop(props: &HeroBackdropProps) -> Html {
    let config = use_config();
    let root = use_node_ref();

    {
        let root = root.clone();
        use_effect_with(config, move |config| {
            let subscription = config
                .parallax
                .enabled
                .then(|| {
                    let parallax = config.parallax.clone();
                    ThrottledScroll::new(config.scroll_throttle_ms, move || {
                        if let Some(root) = root.cast::<Element>() {
                            apply(&root, scroll_y(), &parallax);
                        }
                    })
                })
                .flatten();
            move || drop(subscription)
        });
    }

    html! {
        <div ref={root} class="hero-backdrop" aria-hidden="true">
            <div class="hero-background"></div>
            <div class="hero-shapes">
                { for (0..props.shapes).map(|index| html! {
                    <div class={classes!("shape", format!("shape--{}", index + 1))}></div>
                }) }
            </div>
        </div>
    }
}

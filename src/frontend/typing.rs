use super::{dom::TimeoutChain, use_config};
use crate::effects::typing::TypingAnimation;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TypingTextProps {
    pub fallback: AttrValue,
}

#[function_component(TypingText)]
pub fn typing_text(props: &TypingTextProps) -> Html {
    let config = use_config();
    let text = use_state_eq(|| None::<String>);

    {
        let text = text.clone();
        use_effect_with(config, move |config| {
            let chain = config
                .typing
                .enabled
                .then(|| TypingAnimation::new(&config.typing))
                .flatten()
                .map(|mut animation| {
                    TimeoutChain::start(0, move || {
                        let frame = animation.step();
                        text.set(Some(frame.text));
                        Some(frame.delay_ms)
                    })
                });
            move || drop(chain)
        });
    }

    let shown = match &*text {
        Some(text) => AttrValue::from(text.clone()),
        None => props.fallback.clone(),
    };

    html! {
        <p class="hero-subtitle">{shown}</p>
    }
}

use super::dom::VisibilityObserver;
use crate::effects::reveal::{Observation, RevealLatch, VisibilityOptions};
use yew::prelude::*;

/// Returns `true` from the first time `node` is seen in the viewport on.
#[hook]
pub fn use_reveal(node: NodeRef, options: VisibilityOptions) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with(options, move |options| {
            let mut latch = RevealLatch::default();
            let observer = node.cast::<web_sys::Element>().and_then(|element| {
                VisibilityObserver::watch(&element, options, move |intersecting| {
                    if latch.observe(intersecting) == Observation::Revealed {
                        revealed.set(true);
                    }
                })
            });
            move || drop(observer)
        });
    }

    *revealed
}

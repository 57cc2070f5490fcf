use super::{dom::Timeout, use_config};
use crate::effects::toast::{toast_style, ToastKind, ToastPhase, ToastSchedule};
use crate::logging::{log_event, LogLevel};
use serde_json::json;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct Notice {
    pub message: AttrValue,
    pub kind: ToastKind,
}

pub type Notifier = Callback<Notice>;

#[hook]
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().unwrap_or_default()
}

#[derive(Clone, Default, PartialEq)]
struct ToastStack {
    next_id: u64,
    entries: Vec<(u64, Notice)>,
}

enum ToastAction {
    Push(Notice),
    Dismiss(u64),
}

impl Reducible for ToastStack {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(notice) => {
                next.entries.push((next.next_id, notice));
                next.next_id += 1;
            }
            ToastAction::Dismiss(id) => next.entries.retain(|(entry_id, _)| *entry_id != id),
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastHostProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> Html {
    let stack = use_reducer(ToastStack::default);

    let notifier: Notifier = {
        let stack = stack.dispatcher();
        Callback::from(move |notice: Notice| {
            log_event(
                LogLevel::Info,
                "toast_shown",
                json!({ "kind": notice.kind.as_str() }),
            );
            stack.dispatch(ToastAction::Push(notice));
        })
    };

    let on_done = {
        let stack = stack.dispatcher();
        Callback::from(move |id: u64| stack.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<Notifier> context={notifier}>
            {props.children.clone()}
            { for stack.entries.iter().map(|(id, notice)| html! {
                <Toast key={*id} id={*id} notice={notice.clone()} on_done={on_done.clone()} />
            }) }
        </ContextProvider<Notifier>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastProps {
    id: u64,
    notice: Notice,
    on_done: Callback<u64>,
}

#[function_component(Toast)]
fn toast(props: &ToastProps) -> Html {
    let config = use_config();
    let phase = use_state_eq(|| ToastPhase::Entering);

    {
        let phase = phase.clone();
        let on_done = props.on_done.clone();
        let id = props.id;
        use_effect_with(config, move |config| {
            let schedule = ToastSchedule::new(&config.toast);
            let timers = [
                {
                    let phase = phase.clone();
                    Timeout::new(schedule.show_at, move || phase.set(ToastPhase::Shown))
                },
                Timeout::new(schedule.hide_at, move || phase.set(ToastPhase::Leaving)),
                Timeout::new(schedule.remove_at, move || on_done.emit(id)),
            ];
            move || drop(timers)
        });
    }

    html! {
        <div
            class={props.notice.kind.class_name()}
            style={toast_style(props.notice.kind, *phase)}
            role="status"
        >
            {props.notice.message.clone()}
        </div>
    }
}

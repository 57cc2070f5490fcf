use super::{
    decorations::RippleButton,
    dom::{sleep, Timeout},
    toast::{use_notifier, Notice},
    use_config,
};
use crate::effects::contact::{
    keeps_focus_class_after_blur, ContactMessage, SubmitPhase, SubmitSchedule, FOCUSED_CLASS,
    SUCCESS_MESSAGE,
};
use crate::effects::toast::ToastKind;
use crate::logging::{log_event, LogLevel};
use serde_json::json;
use std::{cell::Cell, rc::Rc};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

async fn simulate_delivery(message: &ContactMessage, latency_ms: u32) {
    log_event(LogLevel::Info, "contact_submitted", message.log_fields());
    sleep(latency_ms).await;
}

#[derive(Clone, Copy, PartialEq)]
pub enum FieldKind {
    Text,
    Email,
    TextArea,
}

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub name: AttrValue,
    pub label: AttrValue,
    pub kind: FieldKind,
    pub value: AttrValue,
    pub on_input: Callback<String>,
}

#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    let focused = use_state_eq(|| false);

    let onfocus = {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(true))
    };
    let onblur = {
        let focused = focused.clone();
        let value = props.value.clone();
        Callback::from(move |_: FocusEvent| focused.set(keeps_focus_class_after_blur(&value)))
    };

    let control_id = format!("contact-{}", props.name);
    let control = match props.kind {
        FieldKind::TextArea => {
            let on_input = props.on_input.clone();
            let oninput = Callback::from(move |event: InputEvent| {
                on_input.emit(event.target_unchecked_into::<HtmlTextAreaElement>().value());
            });
            html! {
                <textarea
                    id={control_id.clone()}
                    class="form-control"
                    name={props.name.clone()}
                    rows="5"
                    required={true}
                    value={props.value.clone()}
                    {oninput}
                    {onfocus}
                    {onblur}
                ></textarea>
            }
        }
        FieldKind::Text | FieldKind::Email => {
            let on_input = props.on_input.clone();
            let oninput = Callback::from(move |event: InputEvent| {
                on_input.emit(event.target_unchecked_into::<HtmlInputElement>().value());
            });
            let input_type = if props.kind == FieldKind::Email { "email" } else { "text" };
            html! {
                <input
                    id={control_id.clone()}
                    class="form-control"
                    type={input_type}
                    name={props.name.clone()}
                    required={true}
                    value={props.value.clone()}
                    {oninput}
                    {onfocus}
                    {onblur}
                />
            }
        }
    };

    html! {
        <div class={classes!("form-group", focused.then_some(FOCUSED_CLASS))}>
            <label class="form-label" for={control_id}>{props.label.clone()}</label>
            {control}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    #[prop_or(AttrValue::Static("Send Message"))]
    pub submit_label: AttrValue,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let config = use_config();
    let notify = use_notifier();
    let phase = use_state_eq(SubmitPhase::default);
    let message = use_state_eq(ContactMessage::default);
    let mounted = use_memo((), |_| Cell::new(true));
    let restore = use_mut_ref(|| None::<Timeout>);

    {
        let mounted = Rc::clone(&mounted);
        let restore = restore.clone();
        use_effect_with((), move |_| {
            move || {
                mounted.set(false);
                restore.borrow_mut().take();
            }
        });
    }

    let field_setter = |apply: fn(&mut ContactMessage, String)| {
        let message = message.clone();
        Callback::from(move |value: String| {
            let mut next = (*message).clone();
            apply(&mut next, value);
            message.set(next);
        })
    };

    let onsubmit = {
        let phase = phase.clone();
        let message = message.clone();
        let mounted = Rc::clone(&mounted);
        let restore = restore.clone();
        let notify = notify.clone();
        let schedule = SubmitSchedule::new(&config.contact);
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(sending) = (*phase).begin() else {
                return;
            };
            phase.set(sending);

            let submitted = (*message).clone();
            let phase = phase.clone();
            let message = message.clone();
            let mounted = Rc::clone(&mounted);
            let restore = restore.clone();
            let notify = notify.clone();
            spawn_local(async move {
                simulate_delivery(&submitted, schedule.sent_at).await;
                if !mounted.get() {
                    return;
                }

                let sent = sending.delivered();
                phase.set(sent);
                log_event(LogLevel::Info, "contact_sent", json!({}));
                notify.emit(Notice {
                    message: AttrValue::Static(SUCCESS_MESSAGE),
                    kind: ToastKind::Success,
                });
                message.set(ContactMessage::default());

                let timeout = Timeout::new(schedule.reset_delay(), move || phase.set(sent.restored()));
                *restore.borrow_mut() = Some(timeout);
            });
        })
    };

    let current = *phase;

    html! {
        <form class="form" onsubmit={onsubmit}>
            <div class="form-row">
                <FormField
                    name="name"
                    label="Name"
                    kind={FieldKind::Text}
                    value={AttrValue::from(message.name.clone())}
                    on_input={field_setter(|message, value| message.name = value)}
                />
                <FormField
                    name="email"
                    label="Email"
                    kind={FieldKind::Email}
                    value={AttrValue::from(message.email.clone())}
                    on_input={field_setter(|message, value| message.email = value)}
                />
            </div>
            <FormField
                name="subject"
                label="Subject"
                kind={FieldKind::Text}
                value={AttrValue::from(message.subject.clone())}
                on_input={field_setter(|message, value| message.subject = value)}
            />
            <FormField
                name="message"
                label="Message"
                kind={FieldKind::TextArea}
                value={AttrValue::from(message.message.clone())}
                on_input={field_setter(|message, value| message.message = value)}
            />
            <RippleButton
                button_type="submit"
                class={classes!("btn--primary", "btn--full-width")}
                disabled={current.disabled()}
                style={current.background().map(|background| AttrValue::from(format!("background: {background};")))}
            >
                {current.label(&props.submit_label).to_string()}
            </RippleButton>
        </form>
    }
}

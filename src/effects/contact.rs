use crate::config::ContactConfig;
use serde_json::json;

pub const SENDING_LABEL: &str = "Sending...";
pub const SENT_LABEL: &str = "Message Sent!";
pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent successfully.";
pub const FOCUSED_CLASS: &str = "focused";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn log_fields(&self) -> serde_json::Value {
        json!({
            "name_len": self.name.chars().count(),
            "email_len": self.email.chars().count(),
            "subject_len": self.subject.chars().count(),
            "message_len": self.message.chars().count(),
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Sending,
    Sent,
}

impl SubmitPhase {
    /// Starts a submission. A form that is already sending ignores the submit.
    pub fn begin(self) -> Option<Self> {
        match self {
            Self::Idle => Some(Self::Sending),
            Self::Sending | Self::Sent => None,
        }
    }

    pub fn delivered(self) -> Self {
        match self {
            Self::Sending => Self::Sent,
            other => other,
        }
    }

    pub fn restored(self) -> Self {
        match self {
            Self::Sent => Self::Idle,
            other => other,
        }
    }

    pub fn label<'a>(self, original: &'a str) -> &'a str {
        match self {
            Self::Idle => original,
            Self::Sending => SENDING_LABEL,
            Self::Sent => SENT_LABEL,
        }
    }

    pub fn disabled(self) -> bool {
        !matches!(self, Self::Idle)
    }

    pub fn background(self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Sending => Some("var(--color-text-secondary)"),
            Self::Sent => Some("var(--color-success)"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitSchedule {
    pub sent_at: u32,
    pub restored_at: u32,
}

impl SubmitSchedule {
    pub fn new(config: &ContactConfig) -> Self {
        Self {
            sent_at: config.send_ms,
            restored_at: config.send_ms.saturating_add(config.reset_ms),
        }
    }

    pub fn reset_delay(&self) -> u32 {
        self.restored_at - self.sent_at
    }
}

pub fn keeps_focus_class_after_blur(value: &str) -> bool {
    !value.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_sequence_round_trips_to_original() {
        let original = "Send Message";
        let mut phase = SubmitPhase::default();
        let mut labels = vec![phase.label(original).to_string()];

        phase = phase.begin().expect("idle form accepts a submit");
        labels.push(phase.label(original).to_string());
        phase = phase.delivered();
        labels.push(phase.label(original).to_string());
        phase = phase.restored();
        labels.push(phase.label(original).to_string());

        assert_eq!(labels, vec!["Send Message", "Sending...", "Message Sent!", "Send Message"]);
    }

    #[test]
    fn button_stays_disabled_until_restored() {
        assert!(!SubmitPhase::Idle.disabled());
        assert!(SubmitPhase::Sending.disabled());
        assert!(SubmitPhase::Sent.disabled());
        assert_eq!(SubmitPhase::Idle.background(), None);
        assert_eq!(SubmitPhase::Sent.background(), Some("var(--color-success)"));
    }

    #[test]
    fn button_is_disabled_from_submit_until_restored_at() {
        let schedule = SubmitSchedule::new(&ContactConfig::default());
        assert_eq!(schedule.sent_at, 2_000);
        assert_eq!(schedule.restored_at, 5_000);
        assert_eq!(schedule.sent_at + schedule.reset_delay(), schedule.restored_at);
        assert!(schedule.restored_at >= 2_000);

        let mut phase = SubmitPhase::Idle.begin().expect("idle form accepts a submit");
        for elapsed in 0..schedule.restored_at {
            if elapsed == schedule.sent_at {
                phase = phase.delivered();
            }
            assert!(phase.disabled(), "enabled too early at {elapsed} ms");
        }

        phase = phase.restored();
        assert!(!phase.disabled());
    }

    #[test]
    fn schedule_saturates_on_huge_delays() {
        let config = ContactConfig {
            send_ms: u32::MAX,
            reset_ms: 10,
        };
        let schedule = SubmitSchedule::new(&config);
        assert_eq!(schedule.restored_at, u32::MAX);
        assert_eq!(schedule.reset_delay(), 0);
    }

    #[test]
    fn submit_while_in_flight_is_ignored() {
        assert_eq!(SubmitPhase::Sending.begin(), None);
        assert_eq!(SubmitPhase::Sent.begin(), None);
        assert_eq!(SubmitPhase::Idle.delivered(), SubmitPhase::Idle);
        assert_eq!(SubmitPhase::Sending.restored(), SubmitPhase::Sending);
    }

    #[test]
    fn focus_class_survives_blur_only_with_content() {
        assert!(!keeps_focus_class_after_blur(""));
        assert!(keeps_focus_class_after_blur("a"));
        assert!(keeps_focus_class_after_blur(" "));
    }

    #[test]
    fn log_fields_report_lengths_not_values() {
        let message = ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: String::new(),
            message: "héllo".to_string(),
        };
        let fields = message.log_fields();

        assert_eq!(fields["name_len"], 3);
        assert_eq!(fields["message_len"], 5);
        assert!(!fields.to_string().contains("ada@example.com"));
    }
}

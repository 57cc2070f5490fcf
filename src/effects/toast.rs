use crate::config::ToastConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
}

impl ToastKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
        }
    }

    pub fn class_name(self) -> String {
        format!("notification notification--{}", self.as_str())
    }

    fn background(self) -> &'static str {
        match self {
            Self::Success => "var(--color-success)",
            Self::Info => "var(--color-info)",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    Entering,
    Shown,
    Leaving,
}

impl ToastPhase {
    fn transform(self) -> &'static str {
        match self {
            Self::Shown => "translateX(0)",
            Self::Entering | Self::Leaving => "translateX(100%)",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastSchedule {
    pub show_at: u32,
    pub hide_at: u32,
    pub remove_at: u32,
}

impl ToastSchedule {
    pub fn new(config: &ToastConfig) -> Self {
        Self {
            show_at: config.enter_ms,
            hide_at: config.visible_ms,
            remove_at: config.visible_ms.saturating_add(config.exit_ms),
        }
    }
}

pub fn toast_style(kind: ToastKind, phase: ToastPhase) -> String {
    format!(
        "position: fixed; top: 20px; right: 20px; padding: 16px 24px; background: {}; \
         color: white; border-radius: var(--radius-base); box-shadow: var(--shadow-luxury); \
         z-index: 10000; transform: {}; transition: transform 0.3s var(--ease-luxury);",
        kind.background(),
        phase.transform()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_schedule_slides_in_holds_and_leaves() {
        let schedule = ToastSchedule::new(&ToastConfig::default());

        assert_eq!(
            schedule,
            ToastSchedule {
                show_at: 100,
                hide_at: 4_000,
                remove_at: 4_300,
            }
        );
        assert!(schedule.show_at < schedule.hide_at && schedule.hide_at < schedule.remove_at);
    }

    #[test]
    fn removal_waits_out_the_exit_transition_even_at_the_limit() {
        let config = ToastConfig {
            enter_ms: 0,
            visible_ms: u32::MAX,
            exit_ms: 300,
        };
        let schedule = ToastSchedule::new(&config);
        assert_eq!(schedule.hide_at, u32::MAX);
        assert_eq!(schedule.remove_at, u32::MAX);
    }

    #[test]
    fn style_reflects_kind_and_phase() {
        let entering = toast_style(ToastKind::Success, ToastPhase::Entering);
        assert!(entering.contains("background: var(--color-success)"));
        assert!(entering.contains("transform: translateX(100%)"));

        let shown = toast_style(ToastKind::Info, ToastPhase::Shown);
        assert!(shown.contains("background: var(--color-info)"));
        assert!(shown.contains("transform: translateX(0)"));
    }

    #[test]
    fn class_name_carries_variant_modifier() {
        assert_eq!(ToastKind::Success.class_name(), "notification notification--success");
        assert_eq!(ToastKind::Info.class_name(), "notification notification--info");
    }
}

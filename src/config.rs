use crate::logging::{log_event, set_min_level, LogLevel};
use serde::Deserialize;
use serde_json::json;

pub const CONFIG_ELEMENT_ID: &str = "interaction-config";

const DEFAULT_EASING_FACTOR: f64 = 0.1;
const DEFAULT_MOBILE_BREAKPOINT_PX: u32 = 768;
const DEFAULT_MARKER_OFFSET_PX: f64 = 10.0;
const DEFAULT_HOVER_SCALE: f64 = 1.5;
const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;
const DEFAULT_REVEAL_BOTTOM_MARGIN_PX: u32 = 50;
const DEFAULT_ONE_SHOT_THRESHOLD: f64 = 0.5;
const DEFAULT_SKILL_BAR_DELAY_MS: u32 = 200;
const DEFAULT_NAV_SOLID_AFTER_PX: f64 = 100.0;
const DEFAULT_NAV_LOOKAHEAD_PX: f64 = 150.0;
const DEFAULT_NAV_HEADER_OFFSET_PX: f64 = 80.0;
const DEFAULT_CONTACT_SEND_MS: u32 = 2_000;
const DEFAULT_CONTACT_RESET_MS: u32 = 3_000;
const DEFAULT_TOAST_ENTER_MS: u32 = 100;
const DEFAULT_TOAST_VISIBLE_MS: u32 = 4_000;
const DEFAULT_TOAST_EXIT_MS: u32 = 300;
const DEFAULT_RIPPLE_MS: u32 = 600;
const DEFAULT_COUNTER_TICK_MS: u32 = 40;
const DEFAULT_COUNTER_STEPS: u32 = 50;
const DEFAULT_TYPE_MS: u32 = 100;
const DEFAULT_DELETE_MS: u32 = 50;
const DEFAULT_HOLD_MS: u32 = 2_000;
const DEFAULT_NEXT_WORD_MS: u32 = 500;
const DEFAULT_TYPING_WORDS: [&str; 4] = [
    "Backend Developer",
    "Systems Architect",
    "Data Analyst",
    "Golang Expert",
];
const DEFAULT_SHAPE_BASE_SPEED: f64 = 0.2;
const DEFAULT_SHAPE_SPEED_STEP: f64 = 0.1;
const DEFAULT_BACKGROUND_SPEED: f64 = 0.5;
const DEFAULT_SCROLL_THROTTLE_MS: u32 = 16;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const EASING_FACTOR_BOUNDS: (f64, f64) = (0.01, 1.0);
const BREAKPOINT_PX_BOUNDS: (u32, u32) = (0, 4_096);
const MARKER_OFFSET_PX_BOUNDS: (f64, f64) = (0.0, 200.0);
const HOVER_SCALE_BOUNDS: (f64, f64) = (1.0, 4.0);
const THRESHOLD_BOUNDS: (f64, f64) = (0.0, 1.0);
const MARGIN_PX_BOUNDS: (u32, u32) = (0, 1_000);
const OFFSET_PX_BOUNDS: (f64, f64) = (0.0, 2_000.0);
const DELAY_MS_BOUNDS: (u32, u32) = (0, 60_000);
const TICK_MS_BOUNDS: (u32, u32) = (1, 60_000);
const COUNTER_STEPS_BOUNDS: (u32, u32) = (1, 1_000);
const SPEED_BOUNDS: (f64, f64) = (-4.0, 4.0);

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CursorConfig {
    pub easing_factor: f64,
    pub mobile_breakpoint_px: u32,
    pub marker_offset_px: f64,
    pub hover_scale: f64,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            easing_factor: DEFAULT_EASING_FACTOR,
            mobile_breakpoint_px: DEFAULT_MOBILE_BREAKPOINT_PX,
            marker_offset_px: DEFAULT_MARKER_OFFSET_PX,
            hover_scale: DEFAULT_HOVER_SCALE,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
    pub bottom_margin_px: u32,
    pub one_shot_threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_REVEAL_THRESHOLD,
            bottom_margin_px: DEFAULT_REVEAL_BOTTOM_MARGIN_PX,
            one_shot_threshold: DEFAULT_ONE_SHOT_THRESHOLD,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SkillsConfig {
    pub delay_ms: u32,
}

impl Default for SkillsConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_SKILL_BAR_DELAY_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub solid_after_px: f64,
    pub lookahead_px: f64,
    pub header_offset_px: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            solid_after_px: DEFAULT_NAV_SOLID_AFTER_PX,
            lookahead_px: DEFAULT_NAV_LOOKAHEAD_PX,
            header_offset_px: DEFAULT_NAV_HEADER_OFFSET_PX,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub send_ms: u32,
    pub reset_ms: u32,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            send_ms: DEFAULT_CONTACT_SEND_MS,
            reset_ms: DEFAULT_CONTACT_RESET_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    pub enter_ms: u32,
    pub visible_ms: u32,
    pub exit_ms: u32,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            enter_ms: DEFAULT_TOAST_ENTER_MS,
            visible_ms: DEFAULT_TOAST_VISIBLE_MS,
            exit_ms: DEFAULT_TOAST_EXIT_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RippleConfig {
    pub duration_ms: u32,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_RIPPLE_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub tick_ms: u32,
    pub steps: u32,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_COUNTER_TICK_MS,
            steps: DEFAULT_COUNTER_STEPS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    pub enabled: bool,
    pub type_ms: u32,
    pub delete_ms: u32,
    pub hold_ms: u32,
    pub next_word_ms: u32,
    pub words: Vec<String>,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            type_ms: DEFAULT_TYPE_MS,
            delete_ms: DEFAULT_DELETE_MS,
            hold_ms: DEFAULT_HOLD_MS,
            next_word_ms: DEFAULT_NEXT_WORD_MS,
            words: DEFAULT_TYPING_WORDS.iter().map(|word| word.to_string()).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    pub enabled: bool,
    pub shape_base_speed: f64,
    pub shape_speed_step: f64,
    pub background_speed: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            shape_base_speed: DEFAULT_SHAPE_BASE_SPEED,
            shape_speed_step: DEFAULT_SHAPE_SPEED_STEP,
            background_speed: DEFAULT_BACKGROUND_SPEED,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    pub cursor: CursorConfig,
    pub reveal: RevealConfig,
    pub skills: SkillsConfig,
    pub nav: NavConfig,
    pub contact: ContactConfig,
    pub toast: ToastConfig,
    pub ripple: RippleConfig,
    pub counter: CounterConfig,
    pub typing: TypingConfig,
    pub parallax: ParallaxConfig,
    pub scroll_throttle_ms: u32,
    pub log_level: LogLevel,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            cursor: CursorConfig::default(),
            reveal: RevealConfig::default(),
            skills: SkillsConfig::default(),
            nav: NavConfig::default(),
            contact: ContactConfig::default(),
            toast: ToastConfig::default(),
            ripple: RippleConfig::default(),
            counter: CounterConfig::default(),
            typing: TypingConfig::default(),
            parallax: ParallaxConfig::default(),
            scroll_throttle_ms: DEFAULT_SCROLL_THROTTLE_MS,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ConfigSource {
    Defaults,
    Element,
    Invalid(String),
}

impl InteractionConfig {
    pub fn load(raw: Option<&str>) -> (Self, ConfigSource) {
        let Some(raw) = raw.filter(|raw| !raw.trim().is_empty()) else {
            return (Self::default(), ConfigSource::Defaults);
        };

        match Self::from_json(raw) {
            Ok(config) => (config, ConfigSource::Element),
            Err(error) => (Self::default(), ConfigSource::Invalid(error.to_string())),
        }
    }

    pub fn install_logging(&self, source: &ConfigSource) {
        set_min_level(self.log_level);

        match source {
            ConfigSource::Defaults => {}
            ConfigSource::Element => log_event(
                LogLevel::Debug,
                "config_loaded",
                json!({ "source": CONFIG_ELEMENT_ID }),
            ),
            ConfigSource::Invalid(error) => {
                log_event(LogLevel::Warn, "config_invalid", json!({ "error": error }))
            }
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let parsed: Self = serde_json::from_str(raw)?;
        Ok(parsed.sanitized())
    }

    fn sanitized(mut self) -> Self {
        let cursor = &mut self.cursor;
        cursor.easing_factor =
            f64_with_bounds(cursor.easing_factor, DEFAULT_EASING_FACTOR, EASING_FACTOR_BOUNDS);
        cursor.mobile_breakpoint_px = u32_with_bounds(
            cursor.mobile_breakpoint_px,
            DEFAULT_MOBILE_BREAKPOINT_PX,
            BREAKPOINT_PX_BOUNDS,
        );
        cursor.marker_offset_px = f64_with_bounds(
            cursor.marker_offset_px,
            DEFAULT_MARKER_OFFSET_PX,
            MARKER_OFFSET_PX_BOUNDS,
        );
        cursor.hover_scale =
            f64_with_bounds(cursor.hover_scale, DEFAULT_HOVER_SCALE, HOVER_SCALE_BOUNDS);

        let reveal = &mut self.reveal;
        reveal.threshold =
            f64_with_bounds(reveal.threshold, DEFAULT_REVEAL_THRESHOLD, THRESHOLD_BOUNDS);
        reveal.bottom_margin_px = u32_with_bounds(
            reveal.bottom_margin_px,
            DEFAULT_REVEAL_BOTTOM_MARGIN_PX,
            MARGIN_PX_BOUNDS,
        );
        reveal.one_shot_threshold = f64_with_bounds(
            reveal.one_shot_threshold,
            DEFAULT_ONE_SHOT_THRESHOLD,
            THRESHOLD_BOUNDS,
        );

        self.skills.delay_ms =
            u32_with_bounds(self.skills.delay_ms, DEFAULT_SKILL_BAR_DELAY_MS, DELAY_MS_BOUNDS);

        let nav = &mut self.nav;
        nav.solid_after_px =
            f64_with_bounds(nav.solid_after_px, DEFAULT_NAV_SOLID_AFTER_PX, OFFSET_PX_BOUNDS);
        nav.lookahead_px =
            f64_with_bounds(nav.lookahead_px, DEFAULT_NAV_LOOKAHEAD_PX, OFFSET_PX_BOUNDS);
        nav.header_offset_px = f64_with_bounds(
            nav.header_offset_px,
            DEFAULT_NAV_HEADER_OFFSET_PX,
            OFFSET_PX_BOUNDS,
        );

        let contact = &mut self.contact;
        contact.send_ms = u32_with_bounds(contact.send_ms, DEFAULT_CONTACT_SEND_MS, DELAY_MS_BOUNDS);
        contact.reset_ms =
            u32_with_bounds(contact.reset_ms, DEFAULT_CONTACT_RESET_MS, DELAY_MS_BOUNDS);

        let toast = &mut self.toast;
        toast.enter_ms = u32_with_bounds(toast.enter_ms, DEFAULT_TOAST_ENTER_MS, DELAY_MS_BOUNDS);
        toast.visible_ms =
            u32_with_bounds(toast.visible_ms, DEFAULT_TOAST_VISIBLE_MS, DELAY_MS_BOUNDS);
        toast.exit_ms = u32_with_bounds(toast.exit_ms, DEFAULT_TOAST_EXIT_MS, DELAY_MS_BOUNDS);

        self.ripple.duration_ms =
            u32_with_bounds(self.ripple.duration_ms, DEFAULT_RIPPLE_MS, DELAY_MS_BOUNDS);

        let counter = &mut self.counter;
        counter.tick_ms = u32_with_bounds(counter.tick_ms, DEFAULT_COUNTER_TICK_MS, TICK_MS_BOUNDS);
        counter.steps = u32_with_bounds(counter.steps, DEFAULT_COUNTER_STEPS, COUNTER_STEPS_BOUNDS);

        let typing = &mut self.typing;
        typing.type_ms = u32_with_bounds(typing.type_ms, DEFAULT_TYPE_MS, TICK_MS_BOUNDS);
        typing.delete_ms = u32_with_bounds(typing.delete_ms, DEFAULT_DELETE_MS, TICK_MS_BOUNDS);
        typing.hold_ms = u32_with_bounds(typing.hold_ms, DEFAULT_HOLD_MS, DELAY_MS_BOUNDS);
        typing.next_word_ms =
            u32_with_bounds(typing.next_word_ms, DEFAULT_NEXT_WORD_MS, DELAY_MS_BOUNDS);
        typing.words.retain(|word| !word.trim().is_empty());

        let parallax = &mut self.parallax;
        parallax.shape_base_speed =
            f64_with_bounds(parallax.shape_base_speed, DEFAULT_SHAPE_BASE_SPEED, SPEED_BOUNDS);
        parallax.shape_speed_step =
            f64_with_bounds(parallax.shape_speed_step, DEFAULT_SHAPE_SPEED_STEP, SPEED_BOUNDS);
        parallax.background_speed =
            f64_with_bounds(parallax.background_speed, DEFAULT_BACKGROUND_SPEED, SPEED_BOUNDS);

        self.scroll_throttle_ms =
            u32_with_bounds(self.scroll_throttle_ms, DEFAULT_SCROLL_THROTTLE_MS, DELAY_MS_BOUNDS);

        self
    }
}

fn f64_with_bounds(value: f64, default: f64, bounds: (f64, f64)) -> f64 {
    if value.is_finite() && (bounds.0..=bounds.1).contains(&value) {
        value
    } else {
        default
    }
}

fn u32_with_bounds(value: u32, default: u32, bounds: (u32, u32)) -> u32 {
    if (bounds.0..=bounds.1).contains(&value) {
        value
    } else {
        default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = InteractionConfig::from_json("{}").expect("empty object parses");
        assert_eq!(config, InteractionConfig::default());
        assert_eq!(config.cursor.mobile_breakpoint_px, 768);
        assert_eq!(config.contact.send_ms, 2_000);
        assert!(!config.typing.enabled);
        assert!(config.parallax.enabled);
    }

    #[test]
    fn partial_sections_keep_unspecified_defaults() {
        let config = InteractionConfig::from_json(
            r#"{ "toast": { "visible_ms": 6000 }, "typing": { "enabled": true } }"#,
        )
        .expect("partial config parses");

        assert_eq!(config.toast.visible_ms, 6_000);
        assert_eq!(config.toast.enter_ms, 100);
        assert_eq!(config.toast.exit_ms, 300);
        assert!(config.typing.enabled);
        assert_eq!(config.typing.words.len(), 4);
    }

    #[test]
    fn out_of_bounds_values_fall_back_to_defaults() {
        let config = InteractionConfig::from_json(
            r#"{
                "cursor": { "easing_factor": 3.5, "mobile_breakpoint_px": 100000 },
                "reveal": { "threshold": -0.2, "one_shot_threshold": 0.75 },
                "counter": { "tick_ms": 0, "steps": 5000 }
            }"#,
        )
        .expect("config parses");

        assert_eq!(config.cursor.easing_factor, 0.1);
        assert_eq!(config.cursor.mobile_breakpoint_px, 768);
        assert_eq!(config.reveal.threshold, 0.1);
        assert_eq!(config.reveal.one_shot_threshold, 0.75);
        assert_eq!(config.counter.tick_ms, 40);
        assert_eq!(config.counter.steps, 50);
    }

    #[test]
    fn blank_typing_words_are_dropped() {
        let config = InteractionConfig::from_json(r#"{ "typing": { "words": ["Alpha", "  ", ""] } }"#)
            .expect("config parses");
        assert_eq!(config.typing.words, vec!["Alpha".to_string()]);
    }

    #[test]
    fn load_reports_source_and_falls_back_on_bad_input() {
        let (config, source) = InteractionConfig::load(None);
        assert_eq!(config, InteractionConfig::default());
        assert_eq!(source, ConfigSource::Defaults);

        let (_, source) = InteractionConfig::load(Some("   \n"));
        assert_eq!(source, ConfigSource::Defaults);

        let (config, source) = InteractionConfig::load(Some(r#"{ "log_level": "debug" }"#));
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(source, ConfigSource::Element);

        let (config, source) = InteractionConfig::load(Some("{ nope"));
        assert_eq!(config, InteractionConfig::default());
        assert!(matches!(source, ConfigSource::Invalid(_)));
    }

    #[test]
    fn debug_level_from_config_is_active_before_the_load_is_reported() {
        let (config, source) = InteractionConfig::load(Some(r#"{ "log_level": "debug" }"#));
        config.install_logging(&source);
        assert!(crate::logging::enabled(LogLevel::Debug));

        InteractionConfig::default().install_logging(&ConfigSource::Defaults);
        assert!(!crate::logging::enabled(LogLevel::Debug));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(InteractionConfig::from_json("{ not json").is_err());
        assert!(InteractionConfig::from_json(r#"{ "log_level": "trace" }"#).is_err());
    }
}

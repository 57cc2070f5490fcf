use crate::effects::reveal::{Observation, RevealLatch};

pub const ANIMATE_CLASS: &str = "animate";

pub fn parse_percentage(raw: &str) -> Option<f64> {
    let value = raw.trim().trim_end_matches('%').trim();
    let parsed = value.parse::<f64>().ok().filter(|value| value.is_finite())?;
    Some(parsed.clamp(0.0, 100.0))
}

pub fn width_style(percentage: f64) -> String {
    format!("{percentage}%")
}

#[derive(Clone, Debug, PartialEq)]
pub struct SkillBar {
    target: Option<f64>,
    latch: RevealLatch,
}

impl SkillBar {
    pub fn new(data_width: &str) -> Self {
        Self {
            target: parse_percentage(data_width),
            latch: RevealLatch::default(),
        }
    }

    pub fn on_visibility(&mut self, is_intersecting: bool) -> Option<String> {
        match self.latch.observe(is_intersecting) {
            Observation::Revealed => self.target.map(width_style),
            Observation::Unchanged => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentages_are_parsed_and_clamped() {
        assert_eq!(parse_percentage("85"), Some(85.0));
        assert_eq!(parse_percentage(" 92.5% "), Some(92.5));
        assert_eq!(parse_percentage("140"), Some(100.0));
        assert_eq!(parse_percentage("-3"), Some(0.0));
        assert_eq!(parse_percentage(""), None);
        assert_eq!(parse_percentage("wide"), None);
        assert_eq!(parse_percentage("NaN"), None);
    }

    #[test]
    fn width_fires_at_most_once_across_repeated_visibility() {
        let mut bar = SkillBar::new("90");

        assert_eq!(bar.on_visibility(false), None);
        assert_eq!(bar.on_visibility(true).as_deref(), Some("90%"));

        for intersecting in [false, true, false, true] {
            assert_eq!(bar.on_visibility(intersecting), None);
        }
    }

    #[test]
    fn missing_percentage_never_animates() {
        let mut bar = SkillBar::new("");
        assert_eq!(bar.on_visibility(true), None);
        assert_eq!(bar.on_visibility(true), None);
    }
}

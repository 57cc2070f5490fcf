use crate::config::RevealConfig;

pub const FADE_IN_CLASS: &str = "fade-in";
pub const VISIBLE_CLASS: &str = "visible";

#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityOptions {
    pub threshold: f64,
    pub root_margin: String,
    pub once: bool,
}

impl VisibilityOptions {
    pub fn reveal(config: &RevealConfig) -> Self {
        Self {
            threshold: config.threshold,
            root_margin: bottom_margin(config.bottom_margin_px),
            once: false,
        }
    }

    pub fn one_shot(config: &RevealConfig) -> Self {
        Self {
            threshold: config.one_shot_threshold,
            root_margin: "0px".to_string(),
            once: true,
        }
    }
}

pub fn bottom_margin(px: u32) -> String {
    if px == 0 {
        "0px".to_string()
    } else {
        format!("0px 0px -{px}px 0px")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Observation {
    Revealed,
    Unchanged,
}

/// One-way visibility flag. Leaving the viewport never clears it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn observe(&mut self, is_intersecting: bool) -> Observation {
        if is_intersecting && !self.revealed {
            self.revealed = true;
            Observation::Revealed
        } else {
            Observation::Unchanged
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_options_use_bottom_margin() {
        let options = VisibilityOptions::reveal(&RevealConfig::default());
        assert_eq!(options.threshold, 0.1);
        assert_eq!(options.root_margin, "0px 0px -50px 0px");
        assert!(!options.once);

        let one_shot = VisibilityOptions::one_shot(&RevealConfig::default());
        assert_eq!(one_shot.threshold, 0.5);
        assert!(one_shot.once);
    }

    #[test]
    fn latch_reveals_once_and_never_hides() {
        let mut latch = RevealLatch::default();

        assert_eq!(latch.observe(false), Observation::Unchanged);

        assert_eq!(latch.observe(true), Observation::Revealed);

        for intersecting in [false, true, false, false, true] {
            assert_eq!(latch.observe(intersecting), Observation::Unchanged);
        }
    }
}

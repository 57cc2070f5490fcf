use crate::config::CursorConfig;

pub const MARKER_ID: &str = "cursor-follower";
pub const INTERACTIVE_SELECTOR: &str = "a, button, .project-card, .glass-card";
pub const IDLE_BACKGROUND: &str = "var(--color-luxury-red)";
pub const HOVER_BACKGROUND: &str = "var(--color-luxury-clay)";

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

pub fn cursor_enabled(viewport_width: f64, config: &CursorConfig) -> bool {
    viewport_width > f64::from(config.mobile_breakpoint_px)
}

pub fn marker_display(enabled: bool) -> &'static str {
    if enabled {
        "block"
    } else {
        "none"
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackingChange {
    Attach,
    Detach,
    Keep,
}

pub fn tracking_change(viewport_width: f64, attached: bool, config: &CursorConfig) -> TrackingChange {
    match (cursor_enabled(viewport_width, config), attached) {
        (true, false) => TrackingChange::Attach,
        (false, true) => TrackingChange::Detach,
        _ => TrackingChange::Keep,
    }
}

#[derive(Clone, Debug)]
pub struct CursorEaser {
    target: Point,
    current: Point,
    factor: f64,
    offset: f64,
    hover_scale: f64,
    hovering: bool,
}

impl CursorEaser {
    pub fn new(config: &CursorConfig) -> Self {
        Self {
            target: Point::default(),
            current: Point::default(),
            factor: config.easing_factor,
            offset: config.marker_offset_px,
            hover_scale: config.hover_scale,
            hovering: false,
        }
    }

    pub fn point_at(&mut self, x: f64, y: f64) {
        self.target = Point { x, y };
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    pub fn hovering(&self) -> bool {
        self.hovering
    }

    pub fn step(&mut self) -> Point {
        self.current.x += (self.target.x - self.current.x) * self.factor;
        self.current.y += (self.target.y - self.current.y) * self.factor;
        self.current
    }

    pub fn transform(&self) -> String {
        let translate = format!(
            "translate({:.2}px, {:.2}px)",
            self.current.x - self.offset,
            self.current.y - self.offset
        );

        if self.hovering {
            format!("{translate} scale({})", self.hover_scale)
        } else {
            translate
        }
    }

    pub fn background(&self) -> &'static str {
        if self.hovering {
            HOVER_BACKGROUND
        } else {
            IDLE_BACKGROUND
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_viewports_disable_the_follower() {
        let config = CursorConfig::default();

        assert!(!cursor_enabled(320.0, &config));
        assert!(!cursor_enabled(768.0, &config));
        assert!(cursor_enabled(769.0, &config));
        assert!(cursor_enabled(1440.0, &config));
    }

    #[test]
    fn narrow_load_hides_marker_and_widening_attaches_tracking() {
        let config = CursorConfig::default();

        assert_eq!(marker_display(cursor_enabled(600.0, &config)), "none");
        assert_eq!(tracking_change(600.0, false, &config), TrackingChange::Keep);

        assert_eq!(tracking_change(1200.0, false, &config), TrackingChange::Attach);
        assert_eq!(marker_display(cursor_enabled(1200.0, &config)), "block");

        assert_eq!(tracking_change(1300.0, true, &config), TrackingChange::Keep);
        assert_eq!(tracking_change(700.0, true, &config), TrackingChange::Detach);
        assert_eq!(marker_display(cursor_enabled(700.0, &config)), "none");
    }

    #[test]
    fn each_step_covers_a_tenth_of_the_remaining_distance() {
        let mut easer = CursorEaser::new(&CursorConfig::default());
        easer.point_at(100.0, 200.0);

        let first = easer.step();
        assert!((first.x - 10.0).abs() < 1e-9);
        assert!((first.y - 20.0).abs() < 1e-9);

        let second = easer.step();
        assert!((second.x - 19.0).abs() < 1e-9);
        assert!((second.y - 38.0).abs() < 1e-9);
    }

    #[test]
    fn position_converges_without_overshooting() {
        let mut easer = CursorEaser::new(&CursorConfig::default());
        easer.point_at(500.0, 300.0);

        let mut previous = Point { x: 0.0, y: 0.0 };
        for _ in 0..200 {
            let next = easer.step();
            assert!(next.x >= previous.x && next.x <= 500.0);
            assert!(next.y >= previous.y && next.y <= 300.0);
            previous = next;
        }

        assert!((previous.x - 500.0).abs() < 0.01);
        assert!((previous.y - 300.0).abs() < 0.01);
    }

    #[test]
    fn transform_is_centered_on_the_marker_and_scales_on_hover() {
        let mut easer = CursorEaser::new(&CursorConfig::default());
        easer.point_at(50.0, 50.0);
        easer.step();

        assert_eq!(easer.transform(), "translate(-5.00px, -5.00px)");
        assert_eq!(easer.background(), IDLE_BACKGROUND);

        easer.set_hovering(true);
        assert_eq!(easer.transform(), "translate(-5.00px, -5.00px) scale(1.5)");
        assert_eq!(easer.background(), HOVER_BACKGROUND);

        easer.set_hovering(false);
        assert_eq!(easer.transform(), "translate(-5.00px, -5.00px)");
    }
}

pub const RIPPLE_STYLE_ID: &str = "ripple-styles";
pub const RIPPLE_CSS: &str = "
@keyframes ripple {
    to {
        transform: scale(4);
        opacity: 0;
    }
}
.btn {
    overflow: hidden;
    position: relative;
}
";

pub const HOVER_HINTS_STYLE_ID: &str = "hover-hints";
pub const HOVER_HINTS_CSS: &str = "
* {
    will-change: auto;
}
.glass-card:hover,
.project-card:hover,
.btn:hover {
    will-change: transform, box-shadow;
}
";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardHoverStyle {
    pub transform: &'static str,
    pub box_shadow: Option<&'static str>,
}

pub fn card_hover_style(hovered: bool) -> CardHoverStyle {
    if hovered {
        CardHoverStyle {
            transform: "scale(1.02) translateY(-10px)",
            box_shadow: Some("var(--shadow-luxury-hover)"),
        }
    } else {
        CardHoverStyle {
            transform: "scale(1) translateY(0)",
            box_shadow: None,
        }
    }
}

impl CardHoverStyle {
    pub fn inline(&self) -> String {
        match self.box_shadow {
            Some(shadow) => format!("transform: {}; box-shadow: {shadow};", self.transform),
            None => format!("transform: {};", self.transform),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleGeometry {
    pub size: f64,
    pub x: f64,
    pub y: f64,
}

impl RippleGeometry {
    pub fn from_click(rect: Rect, client_x: f64, client_y: f64) -> Self {
        let size = rect.width.max(rect.height);
        Self {
            size,
            x: client_x - rect.left - size / 2.0,
            y: client_y - rect.top - size / 2.0,
        }
    }

    pub fn style(&self, duration_ms: u32) -> String {
        let seconds = f64::from(duration_ms) / 1_000.0;
        format!(
            "width: {size}px; height: {size}px; left: {x}px; top: {y}px; position: absolute; \
             border-radius: 50%; background: rgba(255, 255, 255, 0.3); transform: scale(0); \
             animation: ripple {seconds}s linear; pointer-events: none;",
            size = self.size,
            x = self.x,
            y = self.y,
        )
    }
}

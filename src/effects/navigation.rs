use crate::config::NavConfig;

pub const ACTIVE_CLASS: &str = "active";

#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavbarStyle {
    pub background: &'static str,
    pub backdrop_filter: &'static str,
}

const NAVBAR_RESTING: NavbarStyle = NavbarStyle {
    background: "rgba(255, 255, 255, 0.1)",
    backdrop_filter: "blur(20px)",
};

const NAVBAR_SCROLLED: NavbarStyle = NavbarStyle {
    background: "rgba(255, 255, 255, 0.15)",
    backdrop_filter: "blur(25px)",
};

pub fn navbar_style(scroll_y: f64, config: &NavConfig) -> NavbarStyle {
    if scroll_y > config.solid_after_px {
        NAVBAR_SCROLLED
    } else {
        NAVBAR_RESTING
    }
}

/// Last section (in document order) whose looked-ahead span contains `scroll_y`.
pub fn current_section<'a>(
    sections: &'a [SectionBounds],
    scroll_y: f64,
    config: &NavConfig,
) -> Option<&'a str> {
    sections
        .iter()
        .rev()
        .find(|section| {
            let top = section.top - config.lookahead_px;
            scroll_y >= top && scroll_y < top + section.height
        })
        .map(|section| section.id.as_str())
}

pub fn section_id_from_href(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn link_is_active(href: &str, current: Option<&str>) -> bool {
    match (section_id_from_href(href), current) {
        (Some(id), Some(current)) => id == current,
        _ => false,
    }
}

pub fn scroll_target(section_top: f64, config: &NavConfig) -> f64 {
    section_top - config.header_offset_px
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_sections() -> Vec<SectionBounds> {
        [("home", 0.0, 800.0), ("about", 800.0, 600.0), ("projects", 1400.0, 900.0), ("contact", 2300.0, 700.0)]
            .into_iter()
            .map(|(id, top, height)| SectionBounds {
                id: id.to_string(),
                top,
                height,
            })
            .collect()
    }

    const HREFS: [&str; 4] = ["#home", "#about", "#projects", "#contact"];

    #[test]
    fn navbar_turns_solid_past_threshold() {
        let config = NavConfig::default();
        assert_eq!(navbar_style(0.0, &config), NAVBAR_RESTING);
        assert_eq!(navbar_style(100.0, &config), NAVBAR_RESTING);
        assert_eq!(navbar_style(100.5, &config), NAVBAR_SCROLLED);
        assert_eq!(NAVBAR_SCROLLED.backdrop_filter, "blur(25px)");
    }

    #[test]
    fn current_section_applies_lookahead() {
        let config = NavConfig::default();
        let sections = page_sections();

        assert_eq!(current_section(&sections, 0.0, &config), Some("home"));
        assert_eq!(current_section(&sections, 649.0, &config), Some("home"));
        assert_eq!(current_section(&sections, 650.0, &config), Some("about"));
        assert_eq!(current_section(&sections, 2150.0, &config), Some("contact"));
    }

    #[test]
    fn exactly_one_link_is_active_inside_the_page() {
        let config = NavConfig::default();
        let sections = page_sections();

        let mut scroll_y = 0.0;
        while scroll_y < 2850.0 {
            let current = current_section(&sections, scroll_y, &config);
            let active = HREFS
                .iter()
                .filter(|href| link_is_active(href, current))
                .count();
            assert_eq!(active, 1, "scroll offset {scroll_y}");
            scroll_y += 25.0;
        }
    }

    #[test]
    fn no_link_is_active_above_all_sections() {
        let config = NavConfig::default();
        let sections = vec![SectionBounds {
            id: "about".to_string(),
            top: 900.0,
            height: 400.0,
        }];

        let current = current_section(&sections, 100.0, &config);
        assert_eq!(current, None);
        assert!(HREFS.iter().all(|href| !link_is_active(href, current)));
    }

    #[test]
    fn overlapping_sections_resolve_to_the_later_one() {
        let config = NavConfig {
            lookahead_px: 0.0,
            ..NavConfig::default()
        };
        let sections = vec![
            SectionBounds { id: "outer".to_string(), top: 0.0, height: 1000.0 },
            SectionBounds { id: "inner".to_string(), top: 200.0, height: 100.0 },
        ];

        assert_eq!(current_section(&sections, 250.0, &config), Some("inner"));
        assert_eq!(current_section(&sections, 350.0, &config), Some("outer"));
    }

    #[test]
    fn hrefs_map_to_section_ids() {
        assert_eq!(section_id_from_href("#about"), Some("about"));
        assert_eq!(section_id_from_href("#"), None);
        assert_eq!(section_id_from_href("/resume.pdf"), None);
        assert!(!link_is_active("#", Some("")));
    }

    #[test]
    fn scroll_target_leaves_header_allowance() {
        assert_eq!(scroll_target(1400.0, &NavConfig::default()), 1320.0);
    }
}

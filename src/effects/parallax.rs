use crate::config::ParallaxConfig;

pub const SHAPE_SELECTOR: &str = ".shape";
pub const BACKGROUND_SELECTOR: &str = ".hero-background";

pub fn shape_offset(scrolled: f64, index: usize, config: &ParallaxConfig) -> f64 {
    scrolled * (config.shape_base_speed + index as f64 * config.shape_speed_step)
}

pub fn background_offset(scrolled: f64, config: &ParallaxConfig) -> f64 {
    scrolled * config.background_speed
}

pub fn translate_y(offset: f64) -> String {
    format!("translateY({offset:.2}px)")
}

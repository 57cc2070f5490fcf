pub mod contact;
pub mod counter;
pub mod cursor;
pub mod decorations;
pub mod navigation;
pub mod parallax;
pub mod reveal;
pub mod skill_bar;
pub mod throttle;
pub mod toast;
pub mod typing;

use crate::config::CounterConfig;

/// Lenient integer read of a stat label: leading digits only, so `"250+"` is 250.
pub fn parse_target(text: &str) -> Option<u64> {
    let digits: String = text
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

#[derive(Clone, Debug, PartialEq)]
pub struct CountUp {
    target: u64,
    increment: f64,
    current: f64,
    finished: bool,
}

impl CountUp {
    pub fn new(target: u64, config: &CounterConfig) -> Self {
        Self {
            target,
            increment: target as f64 / f64::from(config.steps.max(1)),
            current: 0.0,
            finished: false,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn tick(&mut self) -> Option<String> {
        if self.finished {
            return None;
        }

        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.finished = true;
            Some(format!("{}+", self.target))
        } else {
            Some(format!("{}+", self.current.floor() as u64))
        }
    }
}

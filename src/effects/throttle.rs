#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThrottleDecision {
    Run,
    Defer { wait_ms: u32 },
    Skip,
}

#[derive(Clone, Debug)]
pub struct Throttle {
    window_ms: f64,
    last_run: Option<f64>,
    trailing_pending: bool,
}

impl Throttle {
    pub fn new(window_ms: u32) -> Self {
        Self {
            window_ms: f64::from(window_ms),
            last_run: None,
            trailing_pending: false,
        }
    }

    pub fn poll(&mut self, now_ms: f64) -> ThrottleDecision {
        let elapsed = self.last_run.map(|last| now_ms - last);

        match elapsed {
            Some(elapsed) if elapsed < self.window_ms => {
                if self.trailing_pending {
                    ThrottleDecision::Skip
                } else {
                    self.trailing_pending = true;
                    ThrottleDecision::Defer {
                        wait_ms: (self.window_ms - elapsed).ceil().max(0.0) as u32,
                    }
                }
            }
            _ => {
                self.last_run = Some(now_ms);
                ThrottleDecision::Run
            }
        }
    }

    pub fn trailing_fired(&mut self, now_ms: f64) {
        self.trailing_pending = false;
        self.last_run = Some(now_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_call_runs_immediately() {
        let mut throttle = Throttle::new(16);
        assert_eq!(throttle.poll(1_000.0), ThrottleDecision::Run);
    }

    #[test]
    fn calls_inside_window_defer_once_then_skip() {
        let mut throttle = Throttle::new(16);
        throttle.poll(1_000.0);

        assert_eq!(throttle.poll(1_005.0), ThrottleDecision::Defer { wait_ms: 11 });
        assert_eq!(throttle.poll(1_010.0), ThrottleDecision::Skip);

        throttle.trailing_fired(1_016.0);
        assert_eq!(throttle.poll(1_020.0), ThrottleDecision::Defer { wait_ms: 12 });
    }

    #[test]
    fn calls_after_window_run_again() {
        let mut throttle = Throttle::new(16);
        throttle.poll(0.0);
        assert_eq!(throttle.poll(16.0), ThrottleDecision::Run);
        assert_eq!(throttle.poll(40.0), ThrottleDecision::Run);
    }

    #[test]
    fn zero_window_never_throttles() {
        let mut throttle = Throttle::new(0);
        assert_eq!(throttle.poll(5.0), ThrottleDecision::Run);
        assert_eq!(throttle.poll(5.0), ThrottleDecision::Run);
    }
}

use crate::timing::{Timing, TimingDomain};

impl TimingDomain {
    pub fn start_day(&mut self) -> Vec<Timing> {
        self.days_elapsed = self.days_elapsed.saturating_add(1);
        vec![Timing::DayStarted {
            day: self.days_elapsed,
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_stops_at_last_day() {
        let mut timing = TimingDomain {
            days_elapsed: u32::MAX,
        };
        assert_eq!(timing.start_day(), vec![Timing::DayStarted { day: u32::MAX }]);
        assert_eq!(timing.days_elapsed, u32::MAX);
    }
}

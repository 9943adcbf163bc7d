use serde::{Deserialize, Serialize};

#[derive(Default)]
pub struct TimingDomain {
    pub days_elapsed: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timing {
    DayStarted { day: u32 },
}

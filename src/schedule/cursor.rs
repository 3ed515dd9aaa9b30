//! Step-by-step access to a precomputed schedule

use super::sequence::Schedule;

/// Learning rate scheduler trait
pub trait LRScheduler {
    /// Get the current learning rate
    fn get_lr(&self) -> f32;

    /// Step the scheduler (typically called after each batch)
    fn step(&mut self);
}

/// Walks a [`Schedule`] one training step at a time
///
/// Once the schedule is exhausted the cursor holds the final rate. An empty
/// schedule yields `0.0`.
#[derive(Debug, Clone)]
pub struct ScheduleCursor {
    schedule: Schedule,
    current_step: usize,
}

impl ScheduleCursor {
    /// Start at step 0 of `schedule`
    pub fn new(schedule: Schedule) -> Self {
        Self::resume(schedule, 0)
    }

    /// Start at `global_step` of a full schedule
    pub fn resume(schedule: Schedule, global_step: usize) -> Self {
        Self {
            schedule,
            current_step: global_step,
        }
    }

    /// Index of the step whose rate `get_lr` returns
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Whether every scheduled step has been consumed
    pub fn is_finished(&self) -> bool {
        self.current_step >= self.schedule.len()
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }
}

impl LRScheduler for ScheduleCursor {
    fn get_lr(&self) -> f32 {
        self.schedule
            .get(self.current_step)
            .or_else(|| self.schedule.last().copied())
            .unwrap_or(0.0)
    }

    fn step(&mut self) {
        self.current_step += 1;
    }
}

impl Iterator for ScheduleCursor {
    type Item = f32;

    /// Yield the current rate and advance; `None` once exhausted
    fn next(&mut self) -> Option<f32> {
        let lr = self.schedule.get(self.current_step)?;
        self.current_step += 1;
        Some(lr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn schedule() -> Schedule {
        Schedule::from_rates(vec![0.1, 0.2, 0.3])
    }

    #[test]
    fn test_cursor_steps_through_schedule() {
        let mut cursor = ScheduleCursor::new(schedule());
        assert_abs_diff_eq!(cursor.get_lr(), 0.1);
        cursor.step();
        assert_abs_diff_eq!(cursor.get_lr(), 0.2);
        assert_eq!(cursor.current_step(), 1);
    }

    #[test]
    fn test_cursor_holds_final_rate() {
        let mut cursor = ScheduleCursor::new(schedule());
        for _ in 0..10 {
            cursor.step();
        }
        assert!(cursor.is_finished());
        assert_abs_diff_eq!(cursor.get_lr(), 0.3);
    }

    #[test]
    fn test_cursor_resume() {
        let cursor = ScheduleCursor::resume(schedule(), 2);
        assert_abs_diff_eq!(cursor.get_lr(), 0.3);
        assert!(!cursor.is_finished());
    }

    #[test]
    fn test_cursor_empty_schedule() {
        let cursor = ScheduleCursor::new(Schedule::default());
        assert_abs_diff_eq!(cursor.get_lr(), 0.0);
        assert!(cursor.is_finished());
    }

    #[test]
    fn test_cursor_iterates_remaining_rates() {
        let rates: Vec<f32> = ScheduleCursor::resume(schedule(), 1).collect();
        assert_eq!(rates, vec![0.2_f32, 0.3_f32]);
    }
}

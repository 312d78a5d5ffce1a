//! Simulated upload progress state machine.

use std::collections::VecDeque;

use platform_host::random_unit;

/// Smallest increment a tick applies, so every tick makes progress.
pub const MIN_PROGRESS_STEP: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
/// Upload state of one file.
pub enum UploadProgress {
    /// Percent in `[0, 100)`.
    Uploading(f64),
    /// Reached 100 percent.
    Complete,
}

impl UploadProgress {
    /// Initial state for a freshly added file.
    pub const START: Self = Self::Uploading(0.0);

    /// Percent in `[0, 100]`.
    pub fn percent(self) -> f64 {
        match self {
            Self::Uploading(percent) => percent,
            Self::Complete => 100.0,
        }
    }

    /// Returns `true` once the upload finished.
    pub fn is_complete(self) -> bool {
        matches!(self, Self::Complete)
    }

    /// Whole percent for overlays and progress bars.
    pub fn display_percent(self) -> u16 {
        self.percent().clamp(0.0, 100.0).round() as u16
    }

    /// Applies one increment. Reaching 100 yields [`UploadProgress::Complete`].
    pub fn advanced(self, step: f64) -> Self {
        match self {
            Self::Complete => Self::Complete,
            Self::Uploading(percent) => {
                let next = percent + step;
                if next >= 100.0 {
                    Self::Complete
                } else {
                    Self::Uploading(next)
                }
            }
        }
    }
}

/// Source of per-tick progress increments.
pub trait ProgressStepSource {
    /// Returns the next increment in `(0, max_step]`.
    fn next_step(&mut self, max_step: f64) -> f64;
}

#[derive(Debug, Clone, Copy, Default)]
/// Uniform random increments from the host random source.
pub struct RandomSteps;

impl ProgressStepSource for RandomSteps {
    fn next_step(&mut self, max_step: f64) -> f64 {
        // random_unit is in [0, 1), so 1 - r is in (0, 1].
        max_step * (1.0 - random_unit())
    }
}

#[derive(Debug, Clone, Default)]
/// Replays a fixed list of increments, cycling when exhausted.
pub struct ScriptedSteps {
    steps: VecDeque<f64>,
}

impl ScriptedSteps {
    /// Cycles through `steps` forever. An empty list yields `max_step` every time.
    pub fn cycle(steps: Vec<f64>) -> Self {
        Self {
            steps: steps.into(),
        }
    }
}

impl ProgressStepSource for ScriptedSteps {
    fn next_step(&mut self, max_step: f64) -> f64 {
        let Some(step) = self.steps.pop_front() else {
            return max_step;
        };
        self.steps.push_back(step);
        step
    }
}

/// Clamps a raw increment into `[MIN_PROGRESS_STEP, max_step]`.
pub(crate) fn sanitize_step(step: f64, max_step: f64) -> f64 {
    let max_step = if max_step.is_finite() && max_step >= MIN_PROGRESS_STEP {
        max_step
    } else {
        MIN_PROGRESS_STEP
    };
    if step.is_nan() {
        return MIN_PROGRESS_STEP;
    }
    step.clamp(MIN_PROGRESS_STEP, max_step)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn advancing_clamps_to_complete() {
        let progress = UploadProgress::START.advanced(60.0);
        assert_eq!(progress, UploadProgress::Uploading(60.0));
        assert_eq!(progress.advanced(40.0), UploadProgress::Complete);
        assert_eq!(
            UploadProgress::Uploading(95.0).advanced(20.0),
            UploadProgress::Complete
        );
        assert_eq!(UploadProgress::Complete.advanced(5.0), UploadProgress::Complete);
    }

    #[test]
    fn display_percent_rounds_and_complete_reads_as_hundred() {
        assert_eq!(UploadProgress::Uploading(39.6).display_percent(), 40);
        assert_eq!(UploadProgress::START.display_percent(), 0);
        assert_eq!(UploadProgress::Complete.display_percent(), 100);
        assert!(UploadProgress::Complete.is_complete());
        assert!(!UploadProgress::Uploading(99.9).is_complete());
    }

    #[test]
    fn random_steps_stay_within_bounds() {
        let mut steps = RandomSteps;
        for _ in 0..256 {
            let step = steps.next_step(20.0);
            assert!(step > 0.0 && step <= 20.0, "{step} out of range");
        }
    }

    #[test]
    fn scripted_steps_cycle() {
        let mut steps = ScriptedSteps::cycle(vec![5.0, 10.0]);
        assert_eq!(steps.next_step(20.0), 5.0);
        assert_eq!(steps.next_step(20.0), 10.0);
        assert_eq!(steps.next_step(20.0), 5.0);
        assert_eq!(ScriptedSteps::default().next_step(20.0), 20.0);
    }

    #[test]
    fn sanitize_step_keeps_increments_positive_and_bounded() {
        assert_eq!(sanitize_step(f64::NAN, 20.0), MIN_PROGRESS_STEP);
        assert_eq!(sanitize_step(-3.0, 20.0), MIN_PROGRESS_STEP);
        assert_eq!(sanitize_step(0.0, 20.0), MIN_PROGRESS_STEP);
        assert_eq!(sanitize_step(50.0, 20.0), 20.0);
        assert_eq!(sanitize_step(f64::INFINITY, 20.0), 20.0);
        assert_eq!(sanitize_step(7.5, 20.0), 7.5);
        assert_eq!(sanitize_step(7.5, f64::NAN), MIN_PROGRESS_STEP);
    }
}

use super::Config;

/// What the solver decided after comparing a full step with two half steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The step was already below `min_step`, so it was accepted as is.
    Underflow,

    /// Quality was above `upper_tol`, so the step was halved.
    ///
    /// When this is the decision of an accepted step, the attempt limit ran
    /// out and the last attempt was accepted anyway.
    Halve,

    /// Quality was below `lower_tol`, so the step was accepted and doubled.
    Double,

    /// Quality was within tolerance and the step was accepted unchanged.
    Accept,
}

impl Decision {
    /// Chooses how to proceed, checking the step floor first.
    pub(super) fn choose(step: f64, quality: f64, config: &Config) -> Self {
        if step < config.min_step() {
            Self::Underflow
        } else if quality > config.upper_tol() {
            Self::Halve
        } else if quality < config.lower_tol() {
            Self::Double
        } else {
            Self::Accept
        }
    }

    /// Returns true if the solver keeps retrying after this decision.
    pub(super) fn retries(self) -> bool {
        self == Self::Halve
    }

    /// Returns the step size to use after this decision.
    pub(super) fn next_step(self, step: f64, config: &Config) -> f64 {
        match self {
            Self::Halve => step / 2.0,
            Self::Double => match config.max_step() {
                Some(max) => (step * 2.0).min(max),
                None => step * 2.0,
            },
            Self::Underflow | Self::Accept => step,
        }
    }
}

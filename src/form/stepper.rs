/// The six input stages, in the order they are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Height,
    Weight,
    Age,
    Sex,
    WeightGoal,
    ActivityLevel,
}

impl Step {
    pub const ALL: [Step; 6] = [
        Step::Height,
        Step::Weight,
        Step::Age,
        Step::Sex,
        Step::WeightGoal,
        Step::ActivityLevel,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Step::Height => "height",
            Step::Weight => "weight",
            Step::Age => "age",
            Step::Sex => "sex",
            Step::WeightGoal => "weight goal",
            Step::ActivityLevel => "activity level",
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            Step::Height => "Height (inches)",
            Step::Weight => "Weight (pounds)",
            Step::Age => "Age (years)",
            Step::Sex => "Sex",
            Step::WeightGoal => "Weight goal",
            Step::ActivityLevel => "Activity level",
        }
    }

    /// Acceptance pattern; must match the whole value.
    pub fn pattern(self) -> &'static str {
        match self {
            Step::Height | Step::Weight => r"[0-9]+\.?[0-9]?",
            Step::Age => "[0-9]+",
            Step::Sex => "(Male|Female)",
            Step::WeightGoal => "(Gain|Lose|Maintain)",
            Step::ActivityLevel => {
                "(Sedentary|Lightly Active|Moderately Active|Very Active|Extremely Active)"
            }
        }
    }

    pub fn index(self) -> usize {
        match self {
            Step::Height => 0,
            Step::Weight => 1,
            Step::Age => 2,
            Step::Sex => 3,
            Step::WeightGoal => 4,
            Step::ActivityLevel => 5,
        }
    }
}

/// A multi-step flow that can be sent back to its first step.
pub trait Stepper {
    fn reset(&mut self);
}

/// Linear tracker over [`Step::ALL`].
#[derive(Debug, Clone, Default)]
pub struct StepTracker {
    current: usize,
}

impl StepTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Step {
        Step::ALL[self.current]
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == Step::ALL.len()
    }

    /// Move forward; stays on the last step.
    pub fn advance(&mut self) -> Step {
        if !self.is_last() {
            self.current += 1;
        }
        self.current()
    }

    /// Move back; stays on the first step.
    pub fn back(&mut self) -> Step {
        self.current = self.current.saturating_sub(1);
        self.current()
    }
}

impl Stepper for StepTracker {
    fn reset(&mut self) {
        self.current = 0;
    }
}

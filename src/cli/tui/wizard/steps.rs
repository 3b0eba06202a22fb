//! Step indicator shown across the top of the wizard

/// Status of a single step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepStatus {
    #[default]
    Pending,
    Current,
    Completed,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub name: &'static str,
    pub status: StepStatus,
}

/// Ordered steps with exactly one "current" position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepIndicator {
    steps: Vec<Step>,
    current: usize,
}

impl StepIndicator {
    pub fn new(names: &[&'static str]) -> Self {
        let mut steps: Vec<Step> = names
            .iter()
            .map(|&name| Step {
                name,
                status: StepStatus::Pending,
            })
            .collect();
        if let Some(first) = steps.first_mut() {
            first.status = StepStatus::Current;
        }
        Self { steps, current: 0 }
    }

    /// Steps of the full install flow
    pub fn full_install() -> Self {
        Self::new(&["Detect", "API Key", "Model", "Confirm", "Install", "Done"])
    }

    /// Steps of the switch-model flow
    pub fn switch_model() -> Self {
        Self::new(&["Select Model", "Done"])
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_step(&self) -> Option<&Step> {
        self.steps.get(self.current)
    }

    /// Everything before `index` is completed, `index` is current
    pub fn set_current(&mut self, index: usize) {
        if index >= self.steps.len() {
            return;
        }
        for (i, step) in self.steps.iter_mut().enumerate() {
            step.status = match i.cmp(&index) {
                std::cmp::Ordering::Less => StepStatus::Completed,
                std::cmp::Ordering::Equal => StepStatus::Current,
                std::cmp::Ordering::Greater => StepStatus::Pending,
            };
        }
        self.current = index;
    }

    /// Mark the current step completed and advance. The last step stays
    /// current once reached.
    pub fn complete(&mut self) {
        let last = self.steps.len().saturating_sub(1);
        if let Some(step) = self.steps.get_mut(self.current) {
            step.status = StepStatus::Completed;
            if self.current < last {
                self.current += 1;
                self.steps[self.current].status = StepStatus::Current;
            }
        }
    }

    /// Mark the current step failed
    pub fn fail(&mut self) {
        if let Some(step) = self.steps.get_mut(self.current) {
            step.status = StepStatus::Failed;
        }
    }

    pub fn is_failed(&self) -> bool {
        self.steps.iter().any(|s| s.status == StepStatus::Failed)
    }
}

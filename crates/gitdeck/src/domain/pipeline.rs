use std::fmt;

/// Status reported by one pipeline step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    Success,
    Failed,
    Pending,
    Running,
}

impl StepStatus {
    /// Returns the indicator shown next to a step with this status.
    ///
    /// Pending and running steps share the same indicator.
    pub fn indicator(self) -> StepIndicator {
        match self {
            StepStatus::Success => StepIndicator::Check,
            StepStatus::Failed => StepIndicator::Cross,
            StepStatus::Pending | StepStatus::Running => StepIndicator::Clock,
        }
    }
}

/// Aggregate status of a whole step sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverallStatus {
    Success,
    Failed,
    Running,
}

impl fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OverallStatus::Success => "Success",
            OverallStatus::Failed => "Failed",
            OverallStatus::Running => "Running",
        };

        f.write_str(label)
    }
}

/// Per-step glyph category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepIndicator {
    Check,
    Cross,
    Clock,
}

/// One named unit of a pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    /// Display-only duration text such as `2m 30s`.
    pub duration: Option<String>,
    pub name: String,
    pub status: StepStatus,
}

impl Step {
    pub fn new(name: impl Into<String>, status: StepStatus) -> Self {
        Self {
            duration: None,
            name: name.into(),
            status,
        }
    }

    #[must_use]
    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());

        self
    }
}

/// Render data for one step row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepView<'a> {
    pub duration: Option<&'a str>,
    pub indicator: StepIndicator,
    pub name: &'a str,
}

/// Derived, read-only view over a step sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PipelineSummary {
    pub completed: usize,
    pub overall: OverallStatus,
    pub total: usize,
}

impl PipelineSummary {
    /// Summarizes `steps` without mutating them.
    pub fn from_steps(steps: &[Step]) -> Self {
        Self {
            completed: steps
                .iter()
                .filter(|step| step.status == StepStatus::Success)
                .count(),
            overall: overall_status(steps),
            total: steps.len(),
        }
    }

    /// Returns the share of successful steps in `0.0..=1.0`.
    ///
    /// An empty sequence reports `0.0`.
    #[allow(clippy::cast_precision_loss)]
    pub fn completion_ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }

        self.completed as f64 / self.total as f64
    }

    /// Returns the completion ratio as a rounded percentage.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn completion_percent(&self) -> u16 {
        (self.completion_ratio() * 100.0).round() as u16
    }

    /// Returns the header label, for example `3 of 4 completed`.
    pub fn completed_label(&self) -> String {
        format!("{} of {} completed", self.completed, self.total)
    }
}

/// Derives the overall status of `steps`.
///
/// Any failure wins over unfinished steps, and unfinished steps win over
/// success. An empty sequence counts as successful.
pub fn overall_status(steps: &[Step]) -> OverallStatus {
    if steps.iter().any(|step| step.status == StepStatus::Failed) {
        return OverallStatus::Failed;
    }

    if steps
        .iter()
        .any(|step| matches!(step.status, StepStatus::Pending | StepStatus::Running))
    {
        return OverallStatus::Running;
    }

    OverallStatus::Success
}

/// Maps each step to its render data, keeping sequence order.
pub fn step_views(steps: &[Step]) -> Vec<StepView<'_>> {
    steps
        .iter()
        .map(|step| StepView {
            duration: step.duration.as_deref(),
            indicator: step.status.indicator(),
            name: step.name.as_str(),
        })
        .collect()
}

/// Identity of one pipeline run and the commit that triggered it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelineRun {
    pub id: String,
    pub triggered_at: String,
    pub triggered_by: String,
}

impl PipelineRun {
    pub fn new(
        id: impl Into<String>,
        triggered_by: impl Into<String>,
        triggered_at: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            triggered_at: triggered_at.into(),
            triggered_by: triggered_by.into(),
        }
    }

    /// Returns the run heading, for example `Pipeline #repo-1-123`.
    pub fn title(&self) -> String {
        format!("Pipeline #{}", self.id)
    }

    pub fn trigger_label(&self) -> String {
        format!("Triggered by {} · {}", self.triggered_by, self.triggered_at)
    }
}

use ratatui::style::Color;

use super::icon::Icon;
use crate::domain::pipeline::{OverallStatus, StepIndicator};

/// Returns the terminal color used for the overall pipeline status dot.
pub fn overall_status_color(status: OverallStatus) -> Color {
    match status {
        OverallStatus::Success => Color::Green,
        OverallStatus::Running => Color::Yellow,
        OverallStatus::Failed => Color::Red,
    }
}

/// Returns the icon used for one step indicator.
pub fn indicator_icon(indicator: StepIndicator) -> Icon {
    match indicator {
        StepIndicator::Check => Icon::Check,
        StepIndicator::Cross => Icon::Cross,
        StepIndicator::Clock => Icon::Clock,
    }
}

/// Returns the terminal color used for one step indicator.
pub fn indicator_color(indicator: StepIndicator) -> Color {
    match indicator {
        StepIndicator::Check => Color::Green,
        StepIndicator::Cross => Color::Red,
        StepIndicator::Clock => Color::Yellow,
    }
}

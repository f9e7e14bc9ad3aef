use crate::models::{Exam, UrgencyColor};

/// Presentation band an exam countdown is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrgencyBand {
    /// Today or tomorrow.
    Critical,
    Near,
    Medium,
    Past,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrgencyBadge {
    pub band: UrgencyBand,
    pub text: String,
}

pub fn classify(days_remaining: i64, color: &UrgencyColor) -> UrgencyBadge {
    let days_left = || format!("{} days left", days_remaining);
    let (band, text) = match color {
        UrgencyColor::Red if days_remaining == 0 => (UrgencyBand::Critical, "TODAY!".to_string()),
        UrgencyColor::Red => (UrgencyBand::Critical, "TOMORROW!".to_string()),
        UrgencyColor::Orange => (UrgencyBand::Near, days_left()),
        UrgencyColor::Yellow => (UrgencyBand::Medium, days_left()),
        UrgencyColor::Gray => (UrgencyBand::Past, "Past date".to_string()),
        UrgencyColor::Unspecified | UrgencyColor::Other(_) => (UrgencyBand::Neutral, days_left()),
    };
    UrgencyBadge { band, text }
}

pub fn badge_for(exam: &Exam) -> UrgencyBadge {
    classify(exam.days_remaining, &exam.urgency_color)
}

/// Exams that have not happened yet, soonest first.
///
/// Exams sharing a countdown keep the order the backend returned them in.
pub fn upcoming_exams(exams: &[Exam]) -> Vec<&Exam> {
    let mut upcoming: Vec<&Exam> = exams.iter().filter(|exam| exam.days_remaining >= 0).collect();
    upcoming.sort_by_key(|exam| exam.days_remaining);
    upcoming
}

//! Plain-text rendering of dashboard state for the terminal.
//!
//! Management hints (edit/delete/add commands) are only ever rendered for
//! sessions whose [`Capabilities`] allow managing class content.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::models::timetable::group_by_day;
use crate::models::{Exam, Homework, HomeworkStatus, Notice, Progress, Student, TimetableEntry};
use crate::services::reminders;
use crate::services::urgency::{self, UrgencyBand};
use crate::services::{AdminOverview, Capabilities, DashboardState};
use crate::session::UserInfo;

/// Formats backend dates as e.g. `Oct 20, 2026`, falling back to the raw text.
pub fn format_date(raw: &str) -> String {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        });
    match date {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// Pending reminders; renders nothing when there are none.
pub struct Reminders<'a>(pub &'a [&'a Homework]);

impl fmt::Display for Reminders<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return Ok(());
        }
        writeln!(f, "Homework Reminders")?;
        for hw in self.0 {
            writeln!(f, "  ! {}: {} (class tomorrow)", hw.subject, hw.description)?;
        }
        Ok(())
    }
}

pub struct ProgressView<'a>(pub &'a Progress);

impl fmt::Display for ProgressView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let progress = self.0;
        writeln!(f, "Overall Progress: {}%", progress.overall_progress.round())?;
        writeln!(
            f,
            "  {} of {} homework completed",
            progress.completed_homework, progress.total_homework
        )?;
        if progress.subject_progress.is_empty() {
            return Ok(());
        }
        writeln!(f, "  Subject-wise Progress")?;
        for subject in &progress.subject_progress {
            writeln!(
                f,
                "    {}: {}/{} ({}%)",
                subject.subject,
                subject.completed,
                subject.total,
                subject.progress.round()
            )?;
        }
        Ok(())
    }
}

pub struct HomeworkList<'a> {
    pub homework: &'a [Homework],
    pub capabilities: Capabilities,
}

impl fmt::Display for HomeworkList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let manage = self.capabilities.can_manage_content();
        writeln!(f, "Homework")?;
        if manage {
            writeln!(f, "  (add with: student add-homework)")?;
        }
        if self.homework.is_empty() {
            return writeln!(f, "  No homework assigned yet");
        }

        for hw in self.homework {
            let completed = hw.status == HomeworkStatus::Completed;
            let mut markers = Vec::new();
            if completed {
                markers.push("Completed");
            }
            if hw.is_active_reminder() {
                markers.push("Class Tomorrow");
            }

            let check = if completed { "[x]" } else { "[ ]" };
            write!(f, "  {} {} [{}]", check, hw.subject, hw.id)?;
            if !markers.is_empty() {
                write!(f, " <{}>", markers.join(", "))?;
            }
            writeln!(f)?;
            writeln!(f, "      {}", hw.description)?;
            writeln!(f, "      Due: {}", format_date(&hw.due_date))?;
            writeln!(f, "      toggle: student toggle {}", hw.id)?;
            if manage {
                writeln!(
                    f,
                    "      manage: student edit-homework {id} | student delete-homework {id}",
                    id = hw.id
                )?;
            }
        }
        Ok(())
    }
}

fn band_label(band: UrgencyBand) -> &'static str {
    match band {
        UrgencyBand::Critical => "!!",
        UrgencyBand::Near => "! ",
        UrgencyBand::Medium => "~ ",
        UrgencyBand::Past => "x ",
        UrgencyBand::Neutral => "  ",
    }
}

/// Upcoming exams only, soonest first.
pub struct ExamList<'a> {
    pub exams: &'a [Exam],
    pub capabilities: Capabilities,
}

impl fmt::Display for ExamList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let manage = self.capabilities.can_manage_content();
        writeln!(f, "Upcoming Exams")?;
        if manage {
            writeln!(f, "  (add with: student add-exam)")?;
        }

        let upcoming = urgency::upcoming_exams(self.exams);
        if upcoming.is_empty() {
            return writeln!(f, "  No upcoming exams");
        }

        for exam in upcoming {
            let badge = urgency::badge_for(exam);
            writeln!(
                f,
                "  {} {} ({}) [{}] {}",
                band_label(badge.band),
                exam.subject,
                exam.exam_type,
                exam.id,
                badge.text
            )?;
            writeln!(f, "      Date: {}", format_date(&exam.date))?;
            if !exam.syllabus.is_empty() {
                writeln!(f, "      Syllabus: {}", exam.syllabus)?;
            }
            if manage {
                writeln!(
                    f,
                    "      manage: student edit-exam {id} | student delete-exam {id}",
                    id = exam.id
                )?;
            }
        }
        Ok(())
    }
}

pub struct NoticeList<'a> {
    pub notices: &'a [Notice],
    pub capabilities: Capabilities,
}

impl fmt::Display for NoticeList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let manage = self.capabilities.can_manage_content();
        writeln!(f, "Class Notices")?;
        if manage {
            writeln!(f, "  (post with: student post-notice)")?;
        }
        if self.notices.is_empty() {
            return writeln!(f, "  No notices yet");
        }

        for notice in self.notices {
            writeln!(f, "  {} [{}]", notice.title, notice.id)?;
            writeln!(f, "      {}", notice.message)?;
            writeln!(f, "      Posted: {}", format_date(&notice.date_posted))?;
            if manage {
                writeln!(f, "      manage: student delete-notice {}", notice.id)?;
            }
        }
        Ok(())
    }
}

/// Weekly timetable grouped by day; ids are shown where entries can be removed.
pub struct TimetableView<'a> {
    pub entries: &'a [TimetableEntry],
    pub show_ids: bool,
}

impl fmt::Display for TimetableView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Timetable")?;
        if self.entries.is_empty() {
            return writeln!(f, "  No timetable available yet");
        }

        for (day, slots) in group_by_day(self.entries) {
            writeln!(f, "  {}", day)?;
            for entry in slots {
                write!(f, "    Period {}: {}", entry.period, entry.subject)?;
                if self.show_ids {
                    write!(f, " (class {}) [{}]", entry.class_name, entry.id)?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

pub struct StudentDashboardView<'a> {
    pub user: &'a UserInfo,
    pub state: &'a DashboardState,
    pub capabilities: Capabilities,
}

impl fmt::Display for StudentDashboardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state;
        let capabilities = self.capabilities;

        writeln!(f, "{}", self.user.name)?;
        if let Some(class_name) = &self.user.class_name {
            writeln!(f, "Class {}", class_name)?;
        }
        if capabilities.can_manage_content() {
            writeln!(f, "Class Representative")?;
        }
        writeln!(f)?;

        let pending = reminders::pending_reminders(&state.homework);
        if !pending.is_empty() {
            writeln!(f, "{}", Reminders(&pending))?;
        }
        if let Some(progress) = &state.progress {
            writeln!(f, "{}", ProgressView(progress))?;
        }
        writeln!(f, "{}", HomeworkList { homework: &state.homework, capabilities })?;
        writeln!(f, "{}", ExamList { exams: &state.exams, capabilities })?;
        writeln!(f, "{}", NoticeList { notices: &state.notices, capabilities })?;
        write!(f, "{}", TimetableView { entries: &state.timetable, show_ids: false })
    }
}

pub struct StudentList<'a>(pub &'a [Student]);

impl fmt::Display for StudentList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "All Students ({})", self.0.len())?;
        if self.0.is_empty() {
            return writeln!(f, "  No students created yet");
        }
        for student in self.0 {
            writeln!(
                f,
                "  {} @{} - Class {} - {} [{}]",
                student.name,
                student.username,
                student.class_name,
                student.role.label(),
                student.id
            )?;
        }
        Ok(())
    }
}

pub struct OverviewView(pub AdminOverview);

impl fmt::Display for OverviewView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Students:        {}", self.0.total_students)?;
        writeln!(f, "Class Representatives: {}", self.0.class_reps)?;
        writeln!(f, "Timetable Entries:     {}", self.0.timetable_entries)
    }
}

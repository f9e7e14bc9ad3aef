pub mod exam;
pub mod homework;
pub mod notice;
pub mod progress;
pub mod student;
pub mod timetable;

use serde::{Deserialize, Deserializer};

pub use exam::{Exam, ExamEdit, ExamForm, ExamType, UrgencyColor};
pub use homework::{Homework, HomeworkEdit, HomeworkForm, HomeworkStatus};
pub use notice::{Notice, NoticeForm};
pub use progress::{Progress, SubjectProgress};
pub use student::{AccountType, NewStudentRequest, Role, Student};
pub use timetable::{NewTimetableEntryRequest, Period, TimetableEntry, Weekday};

/// Reads an explicit `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

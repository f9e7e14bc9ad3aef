use std::fmt;

use crate::error::AppError;
use crate::session::UserInfo;

/// Class content changes reserved for class representatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManageAction {
    CreateHomework,
    EditHomework,
    DeleteHomework,
    CreateExam,
    EditExam,
    DeleteExam,
    PostNotice,
    DeleteNotice,
}

impl fmt::Display for ManageAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ManageAction::CreateHomework => "create homework",
            ManageAction::EditHomework => "edit homework",
            ManageAction::DeleteHomework => "delete homework",
            ManageAction::CreateExam => "create exams",
            ManageAction::EditExam => "edit exams",
            ManageAction::DeleteExam => "delete exams",
            ManageAction::PostNotice => "post notices",
            ManageAction::DeleteNotice => "delete notices",
        };
        f.write_str(text)
    }
}

/// What the signed-in student may do, read from the cached session role.
/// The backend enforces the same rules; this only decides what the client offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    manage_content: bool,
}

impl Capabilities {
    pub fn for_user(user: &UserInfo) -> Self {
        Self {
            manage_content: user.is_class_rep(),
        }
    }

    pub fn can_manage_content(&self) -> bool {
        self.manage_content
    }

    pub fn ensure(&self, action: ManageAction) -> Result<(), AppError> {
        if self.manage_content {
            Ok(())
        } else {
            Err(AppError::Forbidden(format!(
                "only class representatives can {}",
                action
            )))
        }
    }
}

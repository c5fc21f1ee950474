//! Homework domain types and status-to-verdict translation

use serde::Deserialize;

/// One submitted piece of work as reported by the API
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Homework {
    pub homework_name: String,
    pub status: String,
}

/// The fixed set of review statuses the API may report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl ReviewStatus {
    /// Membership gate for untrusted status codes; unknown codes get `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "approved" => Some(ReviewStatus::Approved),
            "reviewing" => Some(ReviewStatus::Reviewing),
            "rejected" => Some(ReviewStatus::Rejected),
            _ => None,
        }
    }

    pub fn verdict(self) -> &'static str {
        match self {
            ReviewStatus::Approved => "Work checked: the reviewer liked everything. Hooray!",
            ReviewStatus::Reviewing => "The work was taken for review.",
            ReviewStatus::Rejected => "Work checked: the reviewer has remarks.",
        }
    }
}

/// Build the notification text for a homework's current status.
///
/// The status code is validated before any verdict is produced; an
/// unvalidated code never reaches the verdict table.
pub fn verdict(homework: &Homework) -> crate::Result<String> {
    let status = ReviewStatus::from_code(&homework.status).ok_or_else(|| {
        crate::WatchError::UnknownStatus {
            name: homework.homework_name.clone(),
            status: homework.status.clone(),
        }
    })?;

    Ok(format!(
        "Review status changed for \"{}\". {}",
        homework.homework_name,
        status.verdict()
    ))
}

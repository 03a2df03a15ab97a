use serde::Deserialize;

use super::error::PollError;

/// Wire record from the review API. Both fields are optional at this level;
/// `StatusChange::from_record` enforces their presence. Unknown wire fields
/// are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Homework {
    pub homework_name: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// Any value outside the three known verdicts is rejected: an
    /// unrecognized status likely signals an API contract change.
    fn from_wire(status: &str) -> Option<Self> {
        match status {
            "approved" => Some(Self::Approved),
            "reviewing" => Some(Self::Reviewing),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    pub fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

/// A validated status change. Doubles as the dedup key: two changes are the
/// same notification iff name and status both match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StatusChange {
    pub homework_name: String,
    pub status: HomeworkStatus,
}

impl StatusChange {
    pub fn from_record(record: &Homework) -> Result<Self, PollError> {
        let name = record
            .homework_name
            .as_deref()
            .ok_or(PollError::MissingField("homework_name"))?;
        let status = record
            .status
            .as_deref()
            .ok_or(PollError::MissingField("status"))?;
        let status = HomeworkStatus::from_wire(status)
            .ok_or_else(|| PollError::UnknownStatus(status.to_string()))?;
        Ok(Self {
            homework_name: name.to_string(),
            status,
        })
    }

    pub fn message(&self) -> String {
        format!(
            "Изменился статус проверки работы \"{}\". {}",
            self.homework_name,
            self.status.verdict()
        )
    }
}

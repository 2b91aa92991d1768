//! Visit scheduling. Requests are validated and answered with a confirmation
//! message; nothing is written to the catalog database.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::info;

/// Largest group a single booking may cover.
pub const MAX_VISITORS: u32 = 20;
/// Upper bound for the free-text notes field.
pub const MAX_NOTES_CHARS: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisitPurpose {
    GeneralBrowsing,
    BookBorrowing,
    ResearchAssistance,
    StudyGroup,
    StorytellingSession,
    LibraryOrientation,
    /// Anything else; the patron has to say what.
    Other(String),
}

impl VisitPurpose {
    const FIXED: [VisitPurpose; 6] = [
        VisitPurpose::GeneralBrowsing,
        VisitPurpose::BookBorrowing,
        VisitPurpose::ResearchAssistance,
        VisitPurpose::StudyGroup,
        VisitPurpose::StorytellingSession,
        VisitPurpose::LibraryOrientation,
    ];

    pub fn label(&self) -> &str {
        match self {
            VisitPurpose::GeneralBrowsing => "General browsing",
            VisitPurpose::BookBorrowing => "Book borrowing",
            VisitPurpose::ResearchAssistance => "Research assistance",
            VisitPurpose::StudyGroup => "Study group",
            VisitPurpose::StorytellingSession => "Children's storytelling session",
            VisitPurpose::LibraryOrientation => "Library orientation",
            VisitPurpose::Other(detail) => detail,
        }
    }
}

impl fmt::Display for VisitPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VisitPurpose {
    type Err = VisitError;

    /// Accepts the fixed labels case-insensitively. `other` yields
    /// [`VisitPurpose::Other`] with an empty detail for the caller to fill in.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("other") {
            return Ok(VisitPurpose::Other(String::new()));
        }
        VisitPurpose::FIXED
            .into_iter()
            .find(|purpose| purpose.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| VisitError::UnknownPurpose(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Two-hour booking windows offered at the desk.
pub enum TimeSlot {
    Morning,
    Midday,
    EarlyAfternoon,
    LateAfternoon,
    Evening,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 5] = [
        TimeSlot::Morning,
        TimeSlot::Midday,
        TimeSlot::EarlyAfternoon,
        TimeSlot::LateAfternoon,
        TimeSlot::Evening,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TimeSlot::Morning => "9:00 AM - 11:00 AM",
            TimeSlot::Midday => "11:00 AM - 1:00 PM",
            TimeSlot::EarlyAfternoon => "1:00 PM - 3:00 PM",
            TimeSlot::LateAfternoon => "3:00 PM - 5:00 PM",
            TimeSlot::Evening => "5:00 PM - 7:00 PM",
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeSlot {
    type Err = VisitError;

    /// Accepts either the full label or the 24-hour start hour (`9`, `11`,
    /// `13`, `15`, `17`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let by_hour = match trimmed {
            "9" => Some(TimeSlot::Morning),
            "11" => Some(TimeSlot::Midday),
            "13" => Some(TimeSlot::EarlyAfternoon),
            "15" => Some(TimeSlot::LateAfternoon),
            "17" => Some(TimeSlot::Evening),
            _ => None,
        };
        by_hour
            .or_else(|| {
                TimeSlot::ALL
                    .into_iter()
                    .find(|slot| slot.label().eq_ignore_ascii_case(trimmed))
            })
            .ok_or_else(|| VisitError::UnknownTimeSlot(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub purpose: VisitPurpose,
    pub visitors: u32,
    pub date: NaiveDate,
    pub slot: TimeSlot,
    pub notes: Option<String>,
}

/// Reasons a visit request is turned away. Messages are patron-facing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VisitError {
    #[error("Please fill in all required fields (name, email, and visit date).")]
    MissingRequired,
    #[error("Please specify the purpose of your visit.")]
    MissingPurposeDetail,
    #[error("Unknown visit purpose '{0}'.")]
    UnknownPurpose(String),
    #[error("Unknown time slot '{0}'.")]
    UnknownTimeSlot(String),
    #[error("Number of visitors must be between 1 and 20.")]
    VisitorCount,
    #[error("The preferred date {0} is in the past.")]
    DateInPast(NaiveDate),
    #[error("Additional information may be at most 500 characters long.")]
    NotesTooLong,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitConfirmation {
    pub name: String,
    pub email: String,
    pub purpose: VisitPurpose,
    pub visitors: u32,
    pub date: NaiveDate,
    pub slot: TimeSlot,
}

impl VisitConfirmation {
    /// Patron-facing confirmation text.
    pub fn message(&self) -> String {
        format!(
            "Thank you, {}! Your visit has been scheduled for {} at {}. \
             A confirmation email has been sent to {}.",
            self.name,
            self.date.format("%A, %B %d, %Y"),
            self.slot,
            self.email
        )
    }
}

/// Check a visit request against the booking rules. `today` is the earliest
/// date that can be booked.
pub fn schedule_visit(
    request: &VisitRequest,
    today: NaiveDate,
) -> Result<VisitConfirmation, VisitError> {
    let name = request.name.trim();
    let email = request.email.trim();
    if name.is_empty() || email.is_empty() {
        return Err(VisitError::MissingRequired);
    }

    let purpose = match &request.purpose {
        VisitPurpose::Other(detail) => {
            let detail = detail.trim();
            if detail.is_empty() {
                return Err(VisitError::MissingPurposeDetail);
            }
            VisitPurpose::Other(detail.to_string())
        }
        fixed => fixed.clone(),
    };

    if !(1..=MAX_VISITORS).contains(&request.visitors) {
        return Err(VisitError::VisitorCount);
    }
    if request.date < today {
        return Err(VisitError::DateInPast(request.date));
    }
    if request
        .notes
        .as_deref()
        .is_some_and(|notes| notes.chars().count() > MAX_NOTES_CHARS)
    {
        return Err(VisitError::NotesTooLong);
    }

    info!(
        date = %request.date,
        slot = %request.slot,
        visitors = request.visitors,
        purpose = %purpose,
        "visit scheduled"
    );

    Ok(VisitConfirmation {
        name: name.to_string(),
        email: email.to_string(),
        purpose,
        visitors: request.visitors,
        date: request.date,
        slot: request.slot,
    })
}

//! In-progress membership application.

use std::fmt;

/// Minimum motivation length, in characters, before submission is allowed.
pub const MIN_MOTIVATION_CHARS: usize = 50;

/// Editable fields of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    /// Applicant full name.
    FullName,
    /// Contact email address.
    Email,
    /// Contact phone number.
    Telephone,
    /// Academic year code.
    AcademicYear,
    /// Field-of-study code.
    FieldOfStudy,
    /// Free-text motivation statement.
    Motivation,
}

impl DraftField {
    /// Fields that must be filled before leaving the first step.
    pub const STEP_ONE: [Self; 5] = [
        Self::FullName,
        Self::Email,
        Self::Telephone,
        Self::AcademicYear,
        Self::FieldOfStudy,
    ];

    /// Every field, in submission order.
    pub const ALL: [Self; 6] = [
        Self::FullName,
        Self::Email,
        Self::Telephone,
        Self::AcademicYear,
        Self::FieldOfStudy,
        Self::Motivation,
    ];

    /// Returns the label shown next to the field.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullName => "Nom complet",
            Self::Email => "Adresse email",
            Self::Telephone => "Numéro de téléphone",
            Self::AcademicYear => "Année universitaire",
            Self::FieldOfStudy => "Filière d'études",
            Self::Motivation => "Motivation",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Application data held in memory until it is submitted.
///
/// Setters never validate; completeness is checked by the step predicates.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ApplicationDraft {
    full_name: String,
    email: String,
    telephone: String,
    academic_year: String,
    field_of_study: String,
    motivation: String,
}

impl ApplicationDraft {
    /// Creates an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current value of a field.
    #[must_use]
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::FullName => &self.full_name,
            DraftField::Email => &self.email,
            DraftField::Telephone => &self.telephone,
            DraftField::AcademicYear => &self.academic_year,
            DraftField::FieldOfStudy => &self.field_of_study,
            DraftField::Motivation => &self.motivation,
        }
    }

    /// Replaces the value of a field.
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let slot = match field {
            DraftField::FullName => &mut self.full_name,
            DraftField::Email => &mut self.email,
            DraftField::Telephone => &mut self.telephone,
            DraftField::AcademicYear => &mut self.academic_year,
            DraftField::FieldOfStudy => &mut self.field_of_study,
            DraftField::Motivation => &mut self.motivation,
        };
        *slot = value.into();
    }

    /// Returns the first step field that is still empty.
    #[must_use]
    pub fn first_missing(&self) -> Option<DraftField> {
        DraftField::STEP_ONE
            .into_iter()
            .find(|field| self.get(*field).is_empty())
    }

    /// Whether every first step field is filled.
    #[must_use]
    pub fn is_step_one_complete(&self) -> bool {
        self.first_missing().is_none()
    }

    /// Motivation length in characters.
    #[must_use]
    pub fn motivation_chars(&self) -> usize {
        self.motivation.chars().count()
    }

    /// Whether the motivation is long enough to be submitted.
    #[must_use]
    pub fn is_motivation_sufficient(&self) -> bool {
        !self.motivation.trim().is_empty() && self.motivation_chars() >= MIN_MOTIVATION_CHARS
    }

    /// Whether every field satisfies its submission rule.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.is_step_one_complete() && self.is_motivation_sufficient()
    }

    /// Whether no field holds any text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        DraftField::ALL
            .into_iter()
            .all(|field| self.get(field).is_empty())
    }

    /// Empties every field.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

// Applicant data stays out of logs.
impl fmt::Debug for ApplicationDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApplicationDraft")
            .field("academic_year", &self.academic_year)
            .field("field_of_study", &self.field_of_study)
            .field("step_one_complete", &self.is_step_one_complete())
            .field("motivation_chars", &self.motivation_chars())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn filled_step_one() -> ApplicationDraft {
        let mut draft = ApplicationDraft::new();
        draft.set(DraftField::FullName, "Salma Idrissi");
        draft.set(DraftField::Email, "salma@universite.ma");
        draft.set(DraftField::Telephone, "+212 600 000 000");
        draft.set(DraftField::AcademicYear, "premiere-annee");
        draft.set(DraftField::FieldOfStudy, "ID");
        draft
    }

    #[test]
    fn test_new_draft_is_empty() {
        let draft = ApplicationDraft::new();
        assert!(draft.is_empty());
        assert!(!draft.is_step_one_complete());
        assert_eq!(draft.first_missing(), Some(DraftField::FullName));
    }

    #[test]
    fn test_set_and_get() {
        let mut draft = ApplicationDraft::new();
        draft.set(DraftField::Telephone, "0600");
        assert_eq!(draft.get(DraftField::Telephone), "0600");
        assert_eq!(draft.get(DraftField::Email), "");
    }

    #[test_case(DraftField::FullName)]
    #[test_case(DraftField::Email)]
    #[test_case(DraftField::Telephone)]
    #[test_case(DraftField::AcademicYear)]
    #[test_case(DraftField::FieldOfStudy)]
    fn test_step_one_requires_field(field: DraftField) {
        let mut draft = filled_step_one();
        assert!(draft.is_step_one_complete());

        draft.set(field, "");
        assert!(!draft.is_step_one_complete());
        assert_eq!(draft.first_missing(), Some(field));
    }

    #[test]
    fn test_step_one_accepts_arbitrary_text() {
        let mut draft = ApplicationDraft::new();
        for field in DraftField::STEP_ONE {
            draft.set(field, "x");
        }
        assert!(draft.is_step_one_complete());
    }

    #[test_case(0, false)]
    #[test_case(49, false)]
    #[test_case(50, true)]
    #[test_case(120, true)]
    fn test_motivation_threshold(len: usize, expected: bool) {
        let mut draft = ApplicationDraft::new();
        draft.set(DraftField::Motivation, "m".repeat(len));
        assert_eq!(draft.is_motivation_sufficient(), expected);
    }

    #[test]
    fn test_motivation_counts_characters_not_bytes() {
        let mut draft = ApplicationDraft::new();
        draft.set(DraftField::Motivation, "é".repeat(49));
        assert!(!draft.is_motivation_sufficient());

        draft.set(DraftField::Motivation, "é".repeat(50));
        assert_eq!(draft.motivation_chars(), 50);
        assert!(draft.is_motivation_sufficient());
    }

    #[test]
    fn test_whitespace_motivation_is_insufficient() {
        let mut draft = ApplicationDraft::new();
        draft.set(DraftField::Motivation, " ".repeat(80));
        assert!(!draft.is_motivation_sufficient());
    }

    #[test]
    fn test_clear_resets_all_fields() {
        let mut draft = filled_step_one();
        draft.set(DraftField::Motivation, "m".repeat(60));
        assert!(draft.is_complete());

        draft.clear();
        assert!(draft.is_empty());
    }

    #[test]
    fn test_debug_hides_personal_data() {
        let draft = filled_step_one();
        let output = format!("{draft:?}");
        assert!(!output.contains("Salma"));
        assert!(!output.contains("salma@universite.ma"));
    }
}

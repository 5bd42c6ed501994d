//! Fixed option lists for the select fields.

/// Selectable option: stored code plus the label shown to the applicant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    /// Value written into the draft.
    pub code: &'static str,
    /// Human readable label.
    pub label: &'static str,
}

impl Choice {
    const fn new(code: &'static str, label: &'static str) -> Self {
        Self { code, label }
    }
}

/// Academic years accepted by the club.
pub const ACADEMIC_YEARS: &[Choice] = &[
    Choice::new("premiere-annee", "Première année"),
    Choice::new("deuxieme-annee", "Deuxième année"),
    Choice::new("licence-professionnelle", "Licence professionnelle"),
];

/// Fields of study offered by the school.
pub const FIELDS_OF_STUDY: &[Choice] = &[
    Choice::new("MGE", "MGE"),
    Choice::new("ID", "ID"),
    Choice::new("RCIA", "RCIA"),
    Choice::new("GAA", "GAA"),
    Choice::new("GPVA", "GPVA"),
    Choice::new("GE", "GE"),
];

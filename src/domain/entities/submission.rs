//! Submission payload and receipt value objects.

use super::application_draft::{ApplicationDraft, DraftField};

/// Returns the form-collector entry key for a field.
#[must_use]
pub const fn entry_key(field: DraftField) -> &'static str {
    match field {
        DraftField::FullName => "entry.865298508",
        DraftField::Email => "entry.1259447430",
        DraftField::Telephone => "entry.2006055601",
        DraftField::AcademicYear => "entry.1290918550",
        DraftField::FieldOfStudy => "entry.542203514",
        DraftField::Motivation => "entry.396193017",
    }
}

/// Ordered key/value pairs sent to the collector.
#[derive(Clone, PartialEq, Eq)]
pub struct SubmissionPayload {
    entries: Vec<(&'static str, String)>,
}

impl SubmissionPayload {
    /// Packages every draft field under its entry key.
    #[must_use]
    pub fn from_draft(draft: &ApplicationDraft) -> Self {
        let entries = DraftField::ALL
            .into_iter()
            .map(|field| (entry_key(field), draft.get(field).to_string()))
            .collect();
        Self { entries }
    }

    /// Returns the entries in submission order.
    #[must_use]
    pub fn entries(&self) -> &[(&'static str, String)] {
        &self.entries
    }

    /// Looks up a value by entry key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the payload carries no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for SubmissionPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keys: Vec<&str> = self.entries.iter().map(|(k, _)| *k).collect();
        f.debug_struct("SubmissionPayload")
            .field("keys", &keys)
            .finish_non_exhaustive()
    }
}

/// Outcome of a delivered submission.
///
/// Any HTTP response counts as delivered; the status is kept for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionReceipt {
    status: u16,
}

impl SubmissionReceipt {
    /// Creates receipt from an HTTP status code.
    #[must_use]
    pub const fn new(status: u16) -> Self {
        Self { status }
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Whether the collector answered with a 2xx status.
    #[must_use]
    pub const fn is_success_status(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_carries_six_keyed_fields() {
        let mut draft = ApplicationDraft::new();
        draft.set(DraftField::FullName, "Yassine");
        draft.set(DraftField::FieldOfStudy, "GAA");
        draft.set(DraftField::Motivation, "Je veux contribuer");

        let payload = SubmissionPayload::from_draft(&draft);

        assert_eq!(payload.len(), 6);
        assert_eq!(payload.get("entry.865298508"), Some("Yassine"));
        assert_eq!(payload.get("entry.542203514"), Some("GAA"));
        assert_eq!(payload.get("entry.396193017"), Some("Je veux contribuer"));
        assert_eq!(payload.get("entry.1259447430"), Some(""));
        assert_eq!(payload.entries()[0].0, "entry.865298508");
    }

    #[test]
    fn test_payload_debug_lists_keys_only() {
        let mut draft = ApplicationDraft::new();
        draft.set(DraftField::Email, "secret@example.com");
        let output = format!("{:?}", SubmissionPayload::from_draft(&draft));
        assert!(output.contains("entry.1259447430"));
        assert!(!output.contains("secret@example.com"));
    }

    #[test]
    fn test_receipt_status() {
        assert!(SubmissionReceipt::new(200).is_success_status());
        assert!(SubmissionReceipt::new(302).status() == 302);
        assert!(!SubmissionReceipt::new(500).is_success_status());
    }
}

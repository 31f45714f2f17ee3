//! Aggregate CSV reporting for the issuer dashboard.

use crate::record::DocumentRecord;

/// Render a system-wide document report as CSV.
///
/// One row per record: id, owner, document type, state, priority, and the
/// recorded decision (empty while undecided). Fields containing commas or
/// quotes are quoted.
pub fn csv_report(records: &[DocumentRecord]) -> String {
    let mut out = String::from("id,owner,email,document_type,state,priority,decision\n");
    for record in records {
        let decision = record
            .decision
            .map(|d| d.as_str().to_string())
            .unwrap_or_default();
        let row = [
            record.id.as_u64().to_string(),
            record.owner_name.clone(),
            record.owner_email.clone(),
            record.document_type.as_str().to_string(),
            record.state.as_str().to_string(),
            record.priority.as_str().to_string(),
            decision,
        ];
        let escaped: Vec<String> = row.iter().map(|field| escape(field)).collect();
        out.push_str(&escaped.join(","));
        out.push('\n');
    }
    out
}

fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trustnet_types::{
        DecisionKind, DocumentId, DocumentState, DocumentType, FileReference, Identity, Role,
        Timestamp, UserId,
    };

    fn record(id: u64, name: &str, state: DocumentState) -> DocumentRecord {
        let owner = Identity::new(UserId::new(101), name, "owner@example.com", Role::Submitter);
        let mut record = DocumentRecord::new(
            DocumentId::new(id),
            &owner,
            DocumentType::Passport,
            FileReference::new("scan.pdf"),
            Timestamp::new(100),
        );
        record.state = state;
        record
    }

    #[test]
    fn header_and_rows() {
        let mut approved = record(1, "Jane Doe", DocumentState::Approved);
        approved.decision = Some(DecisionKind::Approved);
        let pending = record(2, "John Smith", DocumentState::QueuedForReview);

        let csv = csv_report(&[approved, pending]);
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "id,owner,email,document_type,state,priority,decision");
        assert_eq!(lines[1], "1,Jane Doe,owner@example.com,Passport,Approved,Normal,Approved");
        assert!(lines[2].ends_with("Queued For Review,Normal,"));
    }

    #[test]
    fn fields_with_commas_are_quoted() {
        let tricky = record(1, "Doe, Jane", DocumentState::Submitted);
        let csv = csv_report(&[tricky]);
        assert!(csv.contains("\"Doe, Jane\""));
    }

    #[test]
    fn empty_report_is_just_the_header() {
        assert_eq!(csv_report(&[]).lines().count(), 1);
    }
}

use crate::domain::model::{Person, RawRecord};
use crate::utils::printer;

/// Rewrites raw records into validated persons.
///
/// A record that fails validation is dropped from the output and reported;
/// one bad row never aborts the batch. Relative order of the surviving
/// records is preserved. Every processed record is traced in both its
/// proposed (raw) and accepted (validated) form.
pub fn build_person_list(records: &[RawRecord]) -> Vec<Person> {
    let mut persons = Vec::with_capacity(records.len());

    for record in records {
        tracing::debug!("Proposal: {}", printer::format_raw_record(record));

        match Person::from_record(record) {
            Ok(person) => {
                tracing::debug!("   Entry: {}", printer::format_person(&person, true));
                persons.push(person);
            }
            Err(e) => {
                tracing::warn!("Rejected record: {}", e);
            }
        }
    }

    persons
}

pub mod json_file;
pub mod sample;
pub mod traits;

use std::collections::HashSet;

use crate::error::RecordError;
use crate::models::PropertyRecord;

pub use json_file::JsonFileListings;
pub use sample::SampleListings;
pub use traits::ListingSource;

/// Validate every record and reject duplicate ids.
pub fn validate_all(records: &[PropertyRecord]) -> Result<(), RecordError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        record.validate()?;
        if !seen.insert(record.id) {
            return Err(RecordError::DuplicateId(record.id));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::record;

    #[test]
    fn duplicate_ids_are_rejected() {
        let records = vec![record(1, "A", 1), record(2, "B", 2), record(1, "C", 3)];
        assert_eq!(validate_all(&records), Err(RecordError::DuplicateId(1)));
    }
}

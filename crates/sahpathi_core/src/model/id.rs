//! Record identifiers.
//!
//! Ids are UUID v7: time-ordered, monotonic within one process and carrying
//! random bits, which keeps them practically unique without a collision
//! check against the collection.

use uuid::Uuid;

/// Identifier shared by every user-mutable record.
pub type RecordId = Uuid;

/// Generates a new time-ordered record id.
pub fn new_record_id() -> RecordId {
    Uuid::now_v7()
}

#[cfg(test)]
mod tests {
    use super::new_record_id;

    #[test]
    fn ids_are_increasing_within_process() {
        let first = new_record_id();
        let second = new_record_id();
        assert_ne!(first, second);
        assert!(first < second);
    }
}

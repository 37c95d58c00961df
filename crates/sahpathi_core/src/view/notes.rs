//! Note search and subject filter.

use crate::model::note::{Note, Subject};

/// Subject chip selection; `All` disables the subject constraint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubjectFilter {
    #[default]
    All,
    Only(Subject),
}

impl SubjectFilter {
    /// Parses a chip label (`All`, `Math`, ...). Unknown labels yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "All" | "" => Some(Self::All),
            other => Subject::parse(other).map(Self::Only),
        }
    }

    fn accepts(self, subject: Subject) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == subject,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteQuery {
    /// Case-insensitive substring matched against title or content.
    pub search: String,
    pub subject: SubjectFilter,
}

/// Notes matching both the search text and the subject filter.
pub fn filter_notes<'a>(notes: &'a [Note], query: &NoteQuery) -> Vec<&'a Note> {
    let needle = query.search.to_lowercase();
    notes
        .iter()
        .filter(|note| query.subject.accepts(note.subject))
        .filter(|note| {
            needle.is_empty()
                || note.title.to_lowercase().contains(&needle)
                || note.content.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{filter_notes, NoteQuery, SubjectFilter};
    use crate::model::id::new_record_id;
    use crate::model::note::{Note, Subject};

    fn note(title: &str, subject: Subject, content: &str) -> Note {
        Note {
            id: new_record_id(),
            title: title.to_string(),
            subject,
            content: content.to_string(),
            date: "1/1/2025".to_string(),
        }
    }

    #[test]
    fn search_and_subject_filters_combine() {
        let notes = vec![
            note("Algebra", Subject::Math, "Quadratic equations and roots"),
            note("Cells", Subject::Science, "Mitochondria is the powerhouse"),
        ];

        let all = NoteQuery {
            search: "QUADRATIC".to_string(),
            subject: SubjectFilter::All,
        };
        let hits = filter_notes(&notes, &all);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].subject, Subject::Math);

        let science = NoteQuery {
            search: "quadratic".to_string(),
            subject: SubjectFilter::Only(Subject::Science),
        };
        assert!(filter_notes(&notes, &science).is_empty());
    }

    #[test]
    fn empty_search_returns_subject_matches_in_order() {
        let notes = vec![
            note("b", Subject::Math, "x"),
            note("a", Subject::History, "y"),
            note("c", Subject::Math, "z"),
        ];
        let query = NoteQuery {
            search: String::new(),
            subject: SubjectFilter::parse("Math").unwrap(),
        };
        let titles = filter_notes(&notes, &query)
            .into_iter()
            .map(|note| note.title.as_str())
            .collect::<Vec<_>>();
        assert_eq!(titles, vec!["b", "c"]);
    }

    #[test]
    fn parse_rejects_unknown_subject() {
        assert_eq!(SubjectFilter::parse("All"), Some(SubjectFilter::All));
        assert_eq!(SubjectFilter::parse("Biology"), None);
    }
}

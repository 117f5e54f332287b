use seed_core::Subject;

/// The closed set of seeded subjects, in insertion order.
pub const SUBJECT_NAMES: [&str; 5] = ["Math", "History", "Physics", "Chemistry", "Estonian"];

/// Build the subject rows. Called once per run; consumes no randomness.
pub fn build_subjects() -> Vec<Subject> {
    SUBJECT_NAMES
        .iter()
        .map(|name| Subject {
            name: (*name).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_list() {
        let names: Vec<String> = build_subjects().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Math", "History", "Physics", "Chemistry", "Estonian"]);
    }
}

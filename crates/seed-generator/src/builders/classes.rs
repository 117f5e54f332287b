use crate::batch::Batch;
use crate::generator::DataGenerator;
use seed_core::Class;
use std::num::NonZeroU64;

/// Highest school year.
pub const MAX_YEAR: u8 = 12;

/// Build the classes of one batch.
///
/// `school_id` is uniform over `1..=school_count`. The name is derived from
/// the school, the year and the global index, never from random text.
pub fn build_classes(
    generator: &mut DataGenerator,
    batch: &Batch,
    school_count: NonZeroU64,
) -> Vec<Class> {
    batch
        .indices()
        .map(|index| {
            let school_id = generator.int_in_range(1, school_count.get());
            let year = generator.int_in_range(1, u64::from(MAX_YEAR)) as u8;
            Class {
                school_id,
                name: format!("S{school_id}-Y{year}-C{index}"),
                year,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::BatchPlan;
    use crate::generator::default_anchor;
    use std::collections::HashSet;

    #[test]
    fn test_ranges_and_unique_names() {
        let mut generator = DataGenerator::new(123, default_anchor());
        let school_count = NonZeroU64::new(3).unwrap();
        let mut names = HashSet::new();

        for batch in BatchPlan::new(250, 100) {
            for class in build_classes(&mut generator, &batch, school_count) {
                assert!((1..=3).contains(&class.school_id));
                assert!((1..=MAX_YEAR).contains(&class.year));
                assert!(class
                    .name
                    .starts_with(&format!("S{}-Y{}-C", class.school_id, class.year)));
                assert!(names.insert(class.name));
            }
        }

        assert_eq!(names.len(), 250);
    }

    #[test]
    fn test_single_school() {
        let mut generator = DataGenerator::new(1, default_anchor());
        let batch = BatchPlan::new(20, 20).next().unwrap();

        let classes = build_classes(&mut generator, &batch, NonZeroU64::MIN);

        assert!(classes.iter().all(|c| c.school_id == 1));
    }
}

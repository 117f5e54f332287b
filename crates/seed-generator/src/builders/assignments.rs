use crate::batch::Batch;
use crate::generator::{DataGenerator, DUE_DATE_FORMAT};
use seed_core::Assignment;
use std::num::NonZeroU64;

/// Due dates fall within this many years after the anchor.
pub const DUE_WITHIN_YEARS: u32 = 1;

/// Upper bounds of the id ranges an assignment references.
///
/// These must be the finalized row counts of the referenced entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignmentBounds {
    pub users: NonZeroU64,
    pub classes: NonZeroU64,
    pub subjects: NonZeroU64,
}

/// Build the assignments of one batch.
pub fn build_assignments(
    generator: &mut DataGenerator,
    batch: &Batch,
    bounds: AssignmentBounds,
) -> Vec<Assignment> {
    batch
        .indices()
        .map(|index| {
            let sentence = generator.sentence();
            let title = format!("{} #{index}", sentence.trim_end_matches('.'));
            let description = generator.paragraph();
            let creator_id = generator.int_in_range(1, bounds.users.get());
            let class_id = generator.int_in_range(1, bounds.classes.get());
            let subject_id = generator.int_in_range(1, bounds.subjects.get());
            let due_date = generator
                .future_timestamp(DUE_WITHIN_YEARS)
                .format(DUE_DATE_FORMAT)
                .to_string();

            Assignment {
                title,
                description,
                creator_id,
                class_id,
                subject_id,
                due_date,
            }
        })
        .collect()
}

use crate::batch::Batch;
use crate::generator::DataGenerator;
use seed_core::School;

/// Build the school with global index `index`.
pub fn build_school(generator: &mut DataGenerator, index: u64) -> School {
    let company = generator.company_name();
    School {
        name: format!("{company} {index}"),
        address: generator.street_address(),
        city: generator.city(),
    }
}

/// Build every school of one batch.
pub fn build_schools(generator: &mut DataGenerator, batch: &Batch) -> Vec<School> {
    batch
        .indices()
        .map(|index| build_school(generator, index))
        .collect()
}

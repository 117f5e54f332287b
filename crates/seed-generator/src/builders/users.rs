use crate::batch::Batch;
use crate::generator::DataGenerator;
use crate::slug::slugify;
use seed_core::{Role, User};

/// Maximum length of each slugified name part.
pub const SLUG_MAX_LEN: usize = 24;

/// Build the users of one batch.
///
/// The global index is embedded in both username and email, which makes
/// both unique across the whole run regardless of the generated names.
pub fn build_users(generator: &mut DataGenerator, batch: &Batch) -> Vec<User> {
    batch
        .indices()
        .map(|index| {
            let first_name = generator.first_name();
            let last_name = generator.last_name();
            let password = generator.password();
            let role = generator
                .pick(&Role::ALL)
                .copied()
                .unwrap_or(Role::Student);

            let handle = slugify(&format!("{first_name} {last_name}"), '_', SLUG_MAX_LEN);
            let local_first = slugify(&first_name, '.', SLUG_MAX_LEN);
            let local_last = slugify(&last_name, '.', SLUG_MAX_LEN);

            User {
                username: format!("{handle}_{index}"),
                email: format!("{local_first}.{local_last}.{index}@example.org"),
                password,
                first_name,
                last_name,
                role,
            }
        })
        .collect()
}

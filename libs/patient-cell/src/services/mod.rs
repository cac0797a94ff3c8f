pub mod profile;

pub use profile::{calculate_age, ProfileService};

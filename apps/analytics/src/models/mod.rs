pub mod profile;

pub use profile::{EducationEntry, ExperienceEntry, ProjectEntry, StructuredProfile};

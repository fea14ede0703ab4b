pub mod resume;
pub mod template;

pub use resume::{EducationEntry, ExperienceEntry, PersonalInfo, ResumeData};
pub use template::Template;

pub mod document;
pub mod error;
pub mod section;
pub mod validate;

pub use document::{BasicInfo, CvDocument, DuplicateId, Education, Experience, Project, Skill, Summary};
pub use error::{ModelError, ValidationError};
pub use section::{SectionConfig, SectionKey, SectionKind, SectionTitles, SectionVisibility};
pub use validate::{validate, validate_report};

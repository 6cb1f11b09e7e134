pub mod record;
pub mod section;

pub use record::{
    Analysis, EducationEntry, Entry, ErrorRecord, Extraction, PersonalInfo, ResumeRecord,
    MOBILE_PLACEHOLDER, NOT_AVAILABLE,
};
pub use section::{Heading, SectionMap};

//! Heuristic parsers that turn resume text into structured fields.
//!
//! The segmenter splits the document into canonical sections; each field
//! parser then works on one section body and degrades to an empty value
//! when its section is absent.

pub mod education;
pub mod entries;
pub mod personal;
pub mod segmenter;
pub mod skills;

pub use education::parse_education;
pub use entries::parse_entries;
pub use personal::extract_personal_info;
pub use segmenter::segment;
pub use skills::extract_skills;

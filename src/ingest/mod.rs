pub mod extractor;
pub mod recognizer;

pub use extractor::{DocumentExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
pub use recognizer::{Entity, HeuristicRecognizer, PersonRecognizer, PERSON};

pub mod document;
pub mod terminal;

pub use document::AnalysisDocument;
pub use terminal::*;

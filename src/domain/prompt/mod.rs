pub mod assembler;
pub mod selection;

pub use assembler::{GUIDELINE_SEPARATOR, combine_guidelines, generate_prompt};
pub use selection::TopicSelection;

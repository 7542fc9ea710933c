//! Stem and inflectional-class inference for Modern Greek.

pub mod classes;
pub mod inferencer;
pub mod normalize;
pub mod stem;

// Re-export commonly used types
pub use classes::{ClassTable, MorphClasses, SuffixClass};
pub use inferencer::{STEMMABLE_POS, StemInferencer};
pub use normalize::strip_tonos;
pub use stem::compute_stem;

//! Scoring engine for the calm.profile assessment: binary A/B answers
//! reduce to four behavioral axis scores, which drive a composite overhead
//! index, an archetype classification, monetized time-loss metrics, and a
//! recommendation bundle. Stateless and free of I/O; the only
//! non-deterministic output is the generated assessment id.

pub mod archetype;
pub mod axes;
pub mod content;
pub mod engine;
pub mod metrics;
pub mod overhead;

pub use archetype::*;
pub use axes::*;
pub use content::*;
pub use engine::*;
pub use metrics::*;
pub use overhead::*;

/*!
 * Scheduler Module
 * Scheduling algorithms and their selection policies
 */

pub mod selectors;
pub mod traits;
pub mod types;

// Re-export public API
pub use traits::Selector;
pub use types::{Algorithm, Preemption};

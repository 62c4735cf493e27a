/*!
 * Monitoring
 * Run metrics, per-tick history, algorithm comparison, and tracing setup
 */

pub mod comparison;
mod history;
mod metrics;
mod tracer;

pub use comparison::{best_by_wait, compare, compare_detailed, ComparisonResult, RunDetail};
pub(crate) use history::MetricsHistory;
pub use history::TickSample;
pub use metrics::Metrics;
pub use tracer::init_tracing;

/*!
 * Scheduler Traits
 * The capability every scheduling policy provides
 */

use crate::core::types::Pid;
use crate::process::queue::ReadyQueue;
use crate::process::types::Process;

/// Picks the next process to run
///
/// `processes` is the process table indexed by pid. Implementations read the
/// queue in FIFO order and must not reorder it; when several members tie on the
/// ranking key, the one closest to the head wins.
pub trait Selector: Send + Sync {
    fn select(&self, ready: &ReadyQueue, processes: &[Process]) -> Option<Pid>;
}

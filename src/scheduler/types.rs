/*!
 * Scheduling Algorithm Types
 * The closed set of policies and how each one preempts
 */

use super::selectors::{Fcfs, Ljf, Lrtf, PriorityFirst, RoundRobin, Sjf, Srtf};
use super::traits::Selector;
use crate::core::errors::{SchedulerError, SchedulerResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Scheduling algorithm
///
/// Discriminants are the numeric ids exposed to drivers.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// First Come First Serve
    #[default]
    Fcfs = 0,
    /// Shortest Job First
    Sjf = 1,
    /// Shortest Remaining Time First
    Srtf = 2,
    /// Lowest priority value first
    Priority = 3,
    /// Round Robin with a fixed quantum
    RoundRobin = 4,
    /// Longest Job First
    Ljf = 5,
    /// Longest Remaining Time First
    Lrtf = 6,
}

/// When a running process may lose the CPU before finishing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preemption {
    /// Runs to completion once dispatched
    Never,
    /// Evicted when its quantum is used up
    Quantum,
    /// Evicted by a candidate with strictly less remaining time
    ShorterRemaining,
    /// Evicted by a candidate with strictly more remaining time
    LongerRemaining,
}

impl Preemption {
    /// Strict comparison between the selector's pick and the running process
    ///
    /// Ties never preempt.
    #[inline]
    pub fn favors(&self, candidate_remaining: u32, running_remaining: u32) -> bool {
        match self {
            Self::ShorterRemaining => candidate_remaining < running_remaining,
            Self::LongerRemaining => candidate_remaining > running_remaining,
            Self::Never | Self::Quantum => false,
        }
    }
}

impl Algorithm {
    /// Every algorithm, in id order
    pub const ALL: [Algorithm; 7] = [
        Self::Fcfs,
        Self::Sjf,
        Self::Srtf,
        Self::Priority,
        Self::RoundRobin,
        Self::Ljf,
        Self::Lrtf,
    ];

    /// Selection function for this algorithm
    pub fn selector(&self) -> &'static dyn Selector {
        match self {
            Self::Fcfs => &Fcfs,
            Self::Sjf => &Sjf,
            Self::Srtf => &Srtf,
            Self::Priority => &PriorityFirst,
            Self::RoundRobin => &RoundRobin,
            Self::Ljf => &Ljf,
            Self::Lrtf => &Lrtf,
        }
    }

    pub const fn preemption(&self) -> Preemption {
        match self {
            Self::RoundRobin => Preemption::Quantum,
            Self::Srtf => Preemption::ShorterRemaining,
            Self::Lrtf => Preemption::LongerRemaining,
            Self::Fcfs | Self::Sjf | Self::Priority | Self::Ljf => Preemption::Never,
        }
    }

    #[inline(always)]
    pub const fn is_preemptive(&self) -> bool {
        !matches!(self.preemption(), Preemption::Never)
    }

    #[inline(always)]
    pub const fn id(&self) -> u8 {
        *self as u8
    }

    pub fn from_id(id: u8) -> SchedulerResult<Self> {
        Self::ALL
            .get(usize::from(id))
            .copied()
            .ok_or_else(|| SchedulerError::UnknownAlgorithm(id.to_string()))
    }

    /// Machine name, as accepted by [`FromStr`]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::Srtf => "srtf",
            Self::Priority => "priority",
            Self::RoundRobin => "rr",
            Self::Ljf => "ljf",
            Self::Lrtf => "lrtf",
        }
    }

    /// Human-readable name
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::Srtf => "SRTF",
            Self::Priority => "Priority",
            Self::RoundRobin => "Round Robin",
            Self::Ljf => "LJF",
            Self::Lrtf => "LRTF",
        }
    }
}

impl FromStr for Algorithm {
    type Err = SchedulerError;

    /// Accepts names (case-insensitive) or numeric ids
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        if let Ok(id) = normalized.parse::<u8>() {
            return Self::from_id(id);
        }
        match normalized.as_str() {
            "fcfs" | "fifo" => Ok(Self::Fcfs),
            "sjf" => Ok(Self::Sjf),
            "srtf" => Ok(Self::Srtf),
            "priority" | "prio" => Ok(Self::Priority),
            "rr" | "round_robin" | "roundrobin" => Ok(Self::RoundRobin),
            "ljf" => Ok(Self::Ljf),
            "lrtf" => Ok(Self::Lrtf),
            _ => Err(SchedulerError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Algorithm {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Algorithm {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Id(u8),
            Name(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Id(id) => Self::from_id(id),
            Raw::Name(name) => name.parse(),
        }
        .map_err(serde::de::Error::custom)
    }
}

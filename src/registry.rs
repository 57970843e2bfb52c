//! The process-wide registry of in-flight animations.
//!
//! The registry owns every live tween together with its callbacks and is
//! the single source of truth for "is anything animating". The shared
//! frame loop is armed when the registry goes from empty to non-empty and
//! keeps re-arming itself only while it stays non-empty.

use fxhash::FxHashMap;
use instant::Instant;
use once_cell::sync::Lazy;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::tween::{Tween, Values};

/// Unique token identifying one animation for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationId(u64);

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

impl AnimationId {
    pub(crate) fn next() -> Self {
        AnimationId(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for AnimationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

pub(crate) type UpdateFn = dyn Fn(&Values) + Send + Sync;
pub(crate) type DoneFn = dyn Fn() + Send + Sync;

/// A live animation: its tween plus the caller's callbacks.
pub(crate) struct Entry {
    pub tween: Tween,
    pub on_update: Option<Arc<UpdateFn>>,
    pub on_complete: Option<Arc<DoneFn>>,
    pub on_stop: Option<Arc<DoneFn>>,
}

/// Callbacks collected during one frame, to be invoked after the registry
/// lock is released. Per-animation ordering holds (an entry's final update
/// precedes its completion callback); ordering across animations follows
/// map iteration order and is unspecified.
pub(crate) struct FrameEvents {
    pub updates: Vec<(Arc<UpdateFn>, Values)>,
    pub completed: Vec<Arc<DoneFn>>,
    pub rearm: bool,
}

pub(crate) struct Registry {
    entries: FxHashMap<AnimationId, Entry>,
    loop_running: bool,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
            loop_running: false,
        }
    }

    /// Register an entry and begin its tween at `now`.
    ///
    /// Returns true when the caller must arm the frame loop: the registry
    /// was idle and no frame callback is currently scheduled.
    pub fn insert(&mut self, id: AnimationId, mut entry: Entry, now: Instant) -> bool {
        entry.tween.begin(now);
        let previous = self.entries.insert(id, entry);
        debug_assert!(previous.is_none(), "animation id registered twice");
        log::debug!("animation {id} started ({} active)", self.entries.len());
        if self.loop_running {
            false
        } else {
            self.loop_running = true;
            true
        }
    }

    /// Advance every live tween to `now`.
    ///
    /// Finished entries are removed, so each completion callback is handed
    /// out exactly once. The loop-running flag is cleared when the registry
    /// drains, which lets the next insert arm a fresh loop.
    pub fn advance(&mut self, now: Instant) -> FrameEvents {
        let mut updates = Vec::new();
        let mut finished_ids = Vec::new();

        for (id, entry) in self.entries.iter() {
            if let Some(on_update) = &entry.on_update {
                updates.push((on_update.clone(), entry.tween.sample(now)));
            }
            if entry.tween.is_finished(now) {
                finished_ids.push(*id);
            }
        }

        let mut completed = Vec::new();
        for id in finished_ids {
            if let Some(entry) = self.entries.remove(&id) {
                log::debug!("animation {id} completed");
                if let Some(on_complete) = entry.on_complete {
                    completed.push(on_complete);
                }
            }
        }

        self.loop_running = !self.entries.is_empty();
        log::trace!("frame advanced, {} active", self.entries.len());
        FrameEvents {
            updates,
            completed,
            rearm: self.loop_running,
        }
    }

    /// Remove a live entry, yielding it so the caller can fire its
    /// interruption callback. No-op when the id is not live (never started,
    /// already completed or already interrupted).
    pub fn interrupt(&mut self, id: AnimationId) -> Option<Entry> {
        let entry = self.entries.remove(&id);
        if entry.is_some() {
            log::debug!("animation {id} interrupted");
        }
        entry
    }

    /// Remove every live entry, yielding them for interruption dispatch.
    pub fn drain(&mut self) -> Vec<Entry> {
        self.entries.drain().map(|(_, entry)| entry).collect()
    }

    pub fn contains(&self, id: AnimationId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn active_count(&self) -> usize {
        self.entries.len()
    }
}

static REGISTRY: Lazy<Mutex<Registry>> = Lazy::new(|| Mutex::new(Registry::new()));

pub(crate) fn registry() -> &'static Mutex<Registry> {
    &REGISTRY
}

/// Number of animations currently mid-flight.
pub fn active_count() -> usize {
    REGISTRY
        .lock()
        .map(|registry| registry.active_count())
        .unwrap_or(0)
}

/// Teardown: interrupt every in-flight animation and clear the registry.
///
/// Each interrupted animation gets its stop callback invoked exactly once,
/// after the registry lock is released.
pub fn cancel_all() {
    let entries = match REGISTRY.lock() {
        Ok(mut registry) => registry.drain(),
        Err(_) => return,
    };
    if !entries.is_empty() {
        log::debug!("cancelling {} in-flight animations", entries.len());
    }
    for entry in entries {
        if let Some(on_stop) = entry.on_stop {
            on_stop();
        }
    }
}

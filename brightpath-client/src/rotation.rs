use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::carousel::Carousel;

/// Sole owner of the carousel's rotation timer.
///
/// Every eligibility change (hover, list length) cancels the running task
/// and starts a fresh one only while rotation is eligible, so no stale
/// timer can fire against stale state. Dropping the rotator cancels the
/// task too.
pub struct Rotator {
    carousel: Arc<Mutex<Carousel>>,
    interval: Duration,
    task: Option<JoinHandle<()>>,
}

impl Rotator {
    /// Requires a tokio runtime; starts rotating immediately when eligible.
    pub fn new(carousel: Arc<Mutex<Carousel>>, interval: Duration) -> Self {
        let mut rotator = Self {
            carousel,
            interval,
            task: None,
        };
        rotator.resync();
        rotator
    }

    pub fn carousel(&self) -> Arc<Mutex<Carousel>> {
        self.carousel.clone()
    }

    pub fn is_rotating(&self) -> bool {
        self.task.is_some()
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.lock().set_hovered(hovered);
        self.resync();
    }

    pub fn set_len(&mut self, len: usize) {
        self.lock().set_len(len);
        self.resync();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Carousel> {
        self.carousel.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Cancel any running timer, then start one if rotation is eligible.
    fn resync(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        if !self.lock().can_rotate() {
            return;
        }

        let carousel = self.carousel.clone();
        let interval = self.interval;
        self.task = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick of a tokio interval fires immediately; the
            // rotation cadence starts one full interval out.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                carousel
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .advance();
            }
        }));
        tracing::debug!(interval_ms = interval.as_millis() as u64, "carousel rotation started");
    }
}

impl Drop for Rotator {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

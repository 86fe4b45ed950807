use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use brightpath_shared::clients::backend::BackendClient;
use brightpath_shared::errors::AppResult;
use brightpath_shared::types::review::Review;

use crate::carousel::Carousel;
use crate::rotation::Rotator;

/// Pending-review display: the fetched list plus its carousel and timer.
///
/// Approving or deleting a review is the embedding UI's job through its
/// own callbacks; this type only learns about the outcome when the list
/// is refetched, at which point the index re-clamps into range.
pub struct ReviewsCarousel {
    reviews: Vec<Review>,
    rotator: Rotator,
}

impl ReviewsCarousel {
    pub fn new(reviews: Vec<Review>, rotation_interval: Duration) -> Self {
        let carousel = Arc::new(Mutex::new(Carousel::new(reviews.len())));
        let rotator = Rotator::new(carousel, rotation_interval);
        Self { reviews, rotator }
    }

    /// Fetch the pending list from the backend and build the carousel.
    pub async fn load(backend: &BackendClient, rotation_interval: Duration) -> AppResult<Self> {
        let reviews = backend.fetch_pending_reviews().await?;
        tracing::debug!(count = reviews.len(), "pending reviews loaded");
        Ok(Self::new(reviews, rotation_interval))
    }

    /// Refetch after an approve/delete and adopt the (usually shorter) list.
    pub async fn refresh(&mut self, backend: &BackendClient) -> AppResult<()> {
        let reviews = backend.fetch_pending_reviews().await?;
        self.apply_reviews(reviews);
        Ok(())
    }

    /// Adopt a new list; the carousel re-clamps its index to the new length.
    pub fn apply_reviews(&mut self, reviews: Vec<Review>) {
        self.rotator.set_len(reviews.len());
        self.reviews = reviews;
    }

    pub fn current(&self) -> Option<&Review> {
        let index = self
            .rotator
            .carousel()
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .index();
        self.reviews.get(index)
    }

    pub fn next(&self) {
        self.rotator
            .carousel()
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .next();
    }

    pub fn previous(&self) {
        self.rotator
            .carousel()
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .previous();
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.rotator.set_hovered(hovered);
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }
}

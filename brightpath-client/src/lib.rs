pub mod carousel;
pub mod config;
pub mod forms;
pub mod reviews;
pub mod rotation;

pub use carousel::Carousel;
pub use config::AppConfig;
pub use reviews::ReviewsCarousel;
pub use rotation::Rotator;

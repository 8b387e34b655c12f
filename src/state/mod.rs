//! UI state for the landing screen.
//!
//! Plain data types with no framework dependencies. The sections own one
//! signal per controller and drive these from the slide timer and tap events;
//! the reactive layer handles re-rendering.

mod carousel;
mod faq;

pub use carousel::Carousel;
pub use faq::Accordion;

//! Reusable widgets shared by the components

pub mod clamped_text;
pub mod device_card;
pub mod input_box;
pub mod review_card;
pub mod stars;
pub mod stat_card;

pub mod popup;
pub mod surface;

pub mod countdown;
pub mod milestone;
pub mod spend_slider;

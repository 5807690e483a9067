pub mod badge;
pub mod popup;
pub mod text;

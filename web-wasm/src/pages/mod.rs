pub mod approved;
pub mod evaluation;
pub mod home;
pub mod under_review;

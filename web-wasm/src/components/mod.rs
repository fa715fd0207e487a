pub mod progress_bar;
pub mod resume_viewer;
pub mod score_breakdown;
pub mod sidebar;
pub mod toast;
pub mod upload_card;

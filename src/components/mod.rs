pub mod charts;
pub mod history_panel;
pub mod sidebar;
pub mod stat_card;
pub mod upload_button;

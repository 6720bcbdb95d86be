pub mod display;
pub mod pbm_panel;

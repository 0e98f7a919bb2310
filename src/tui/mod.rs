pub mod branch_display;

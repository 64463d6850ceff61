pub mod log_sheet;

pub mod daisy_ui;
pub mod print_button;

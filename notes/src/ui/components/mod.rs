pub mod form_error;
pub mod help_bar;
pub mod loading_indicator;
pub mod text_field;
pub mod toast_stack;

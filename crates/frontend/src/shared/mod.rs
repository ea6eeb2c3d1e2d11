pub mod api_error;
pub mod api_utils;
pub mod components;
pub mod dialogs;
pub mod form_utils;
pub mod status_message;

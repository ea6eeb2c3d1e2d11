pub mod api_reply;
pub mod loose_value;

pub mod add_item;
pub mod selector;
pub mod update_quantity;

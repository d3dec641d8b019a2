pub mod price;
pub mod slug;
pub mod text;

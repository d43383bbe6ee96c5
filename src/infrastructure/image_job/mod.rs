pub mod client;
pub mod tensor_art;

pub mod activation;
pub mod category;

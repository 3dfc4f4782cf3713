pub mod curves;
pub mod special;

pub mod companies;
pub mod header;
pub mod help;
pub mod status;
pub mod themes;

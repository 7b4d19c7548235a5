pub mod str;
pub mod zip;

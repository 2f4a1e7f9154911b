pub mod codic;
pub mod format;

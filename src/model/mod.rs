pub mod synonym;
pub mod translation;

pub mod ask;
pub mod pages;

//! The site's fixed page table.

pub mod catalog;

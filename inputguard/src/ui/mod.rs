// inputguard/src/ui/mod.rs
//! Terminal presentation: the color theme and the report printers.

pub mod output;
pub mod theme;

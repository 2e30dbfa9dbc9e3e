//src/model/mod.rs
pub mod attributes;
pub mod elements;
pub mod structure;

// Re-exports for cleaner imports
pub use attributes::{
  placeholder_color, resolve, AtomAttributes, AttributeTable, ResolvedAttributes, Rgb,
};
pub use elements::defaults_table;
pub use structure::{AtomSite, Coordinates, Structure, VibrationalMode};

pub mod atomic_database;
pub mod chemical_composition;
mod count;
mod element;
pub mod errors;
mod mass_number;

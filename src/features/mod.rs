pub mod categories;
pub mod points;
pub mod positioning;

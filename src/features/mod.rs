pub mod cicero;
pub mod congress;
pub mod representatives;

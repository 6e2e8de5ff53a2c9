pub mod constants;
pub mod spot;

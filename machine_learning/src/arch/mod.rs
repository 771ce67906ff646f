mod linear;
pub mod loss;
mod model;

pub use linear::Linear;
pub use model::Model;

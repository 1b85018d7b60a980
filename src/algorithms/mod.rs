pub mod a_star;
pub mod common;
pub mod node;
pub mod priority_queue;
pub mod reference;

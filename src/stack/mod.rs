mod vec_stack;

pub use vec_stack::{Drain, VecStack};

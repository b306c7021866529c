mod chain;
mod linked_list;

pub use chain::Chain;
pub use linked_list::{Iter, IterMut, IterOwned, LinkedList, Node};

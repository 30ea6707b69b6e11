//! Layout of each print node kind, as `Layouter` methods.

mod block;
mod cells;
mod leaf;
mod paragraph;
mod tags;

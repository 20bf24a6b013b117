pub mod deck;
pub mod picks;
pub mod prompt;
pub mod random;
pub mod reconcile;
pub mod selection;

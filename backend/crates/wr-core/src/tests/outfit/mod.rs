mod deck;
mod picks;
mod prompt;
mod properties;
mod random;
mod reconcile;

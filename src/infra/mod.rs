//! Инфраструктурный слой вокруг движка:
//! - RNG-реализации для движка (системный, детерминированный, без перемешивания).

pub mod rng;

pub use rng::*;

pub mod drag;
pub mod input;
pub mod palette;
pub mod properties;
pub mod session;
pub mod shortcuts;

pub use logo::*;

mod logo;

pub use db::*;
pub use settings::*;

mod db;
mod settings;

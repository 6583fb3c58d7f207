pub use course::*;
pub use feature::*;
pub use feedback::*;
pub use logo_display::*;
pub use logo_setting::*;
pub use social_link::*;
pub use upload_candidate::*;

mod course;
mod feature;
mod feedback;
mod logo_display;
mod logo_setting;
mod social_link;
mod upload_candidate;

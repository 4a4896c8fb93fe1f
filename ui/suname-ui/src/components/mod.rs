// Component library for the SUNAME site.

pub mod button;
pub mod card;
pub mod input;
pub mod textarea;
pub mod typography;

pub use button::*;
pub use card::*;
pub use input::*;
pub use textarea::*;
pub use typography::*;

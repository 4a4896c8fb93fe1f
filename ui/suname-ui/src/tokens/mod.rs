// Design tokens for the SUNAME site: one realm switch, two palettes.

pub mod animation;
pub mod color;
pub mod corner_radius;
pub mod realm;
pub mod shadow;
pub mod spacing;
pub mod typography;
pub use animation::*;
pub use color::*;
pub use corner_radius::*;
pub use realm::*;
pub use shadow::*;
pub use spacing::*;
pub use typography::*;

pub const CORNER_RADIUS_4: u32 = 4;
pub const CORNER_RADIUS_6: u32 = 6;
pub const CORNER_RADIUS_8: u32 = 8;
pub const CORNER_RADIUS_12: u32 = 12;
pub const CORNER_RADIUS_16: u32 = 16;
pub const CORNER_RADIUS_MAX: u32 = 9999; // pill / circle

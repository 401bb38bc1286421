/// Command rolled when the input is blank
pub const DEFAULT_COMMAND: &str = "d20";

/// Field values used when the notation does not mention them
pub const DEFAULT_TIMES: u64 = 1;
pub const DEFAULT_FACES: u64 = 20;
pub const DEFAULT_MULTIPLIER: u64 = 1;
pub const DEFAULT_MODIFIER: i64 = 0;
pub const DEFAULT_REPEAT: u64 = 1;

/// Upper bound applied to every throttled field unless configured otherwise
pub const DEFAULT_THROTTLE: u64 = 100;

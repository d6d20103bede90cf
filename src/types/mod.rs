mod rate;
#[cfg(test)]
mod tests;

pub use rate::Rate;

pub type Step = u32;
pub type Day = u32;
pub type Hour = u32;

pub const HOURS_PER_DAY: u32 = 24;

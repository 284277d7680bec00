pub mod delivery;
pub mod sign;

pub use delivery::DeliveryReport;
pub use sign::{UnknownSign, ZodiacSign};

pub mod nbp;
pub mod static_rates;

pub use nbp::NbpRateSource;
pub use static_rates::StaticRateSource;

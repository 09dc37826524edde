pub mod config;
pub mod integrand;
pub mod quadrature;
pub mod sweep;
pub mod report;
pub mod cli;

pub mod plot {
    pub mod scatter;
}

pub use config::{SweepConfig, REFERENCE_INTEGRAL};
pub use quadrature::{abs_error, integrate, timed_integrate, Timed};

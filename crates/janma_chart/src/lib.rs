//! Sidereal birth-chart pipeline.
//!
//! This crate provides:
//! - Validated birth input ([`BirthRequest`])
//! - The planetary-longitude seam ([`GrahaOracle`])
//! - Chart assembly ([`compute_birth_chart`])
//! - The serialized chart contract ([`KundliData`])
//! - A golden-value verification suite ([`run_golden_suite`])

pub mod chart;
pub mod error;
pub mod golden;
pub mod kundli;
pub mod oracle;
pub mod request;

pub use chart::{BirthChart, Placement, compute_birth_chart};
pub use error::ChartError;
pub use golden::{GOLDEN_CASES, GoldenCase, GoldenOutcome, GoldenReport, run_golden_suite};
pub use kundli::{KundliData, PlanetPosition};
pub use oracle::{FixedGrahaReadings, GrahaOracle, GrahaReading, OracleError};
pub use request::{BirthInput, BirthRequest};

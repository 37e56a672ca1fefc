//! One-rep-max calculator client.
//!
//! A Yew form that posts a weight/reps pair to the 1RM calculation service and
//! renders the returned estimate with its percentage table.

pub mod client;
pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod models;
pub mod state;
pub mod validation;

pub use client::{CalcClient, HttpTransport, RawResponse, Transport};
pub use error::CalcError;
pub use models::{ErrorData, PercentageWeight, SubmitData, SuccessData};
pub use state::{FormAction, FormState, Phase};

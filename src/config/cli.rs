use crate::domain::model::OrderDraft;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

/// Command line front end for submitting a shipment order.
///
/// Order fields are accepted as raw text and validated by the library, so
/// the CLI reports the same violations a web form would.
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "swifthaul-client")]
#[command(about = "Submit shipment orders to the SwiftHaul logistics API")]
pub struct CliConfig {
    #[arg(long, help = "Path to a TOML settings file")]
    pub config: Option<String>,

    #[arg(long, help = "API base URL, overriding the settings file")]
    pub base_url: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub password: Option<String>,

    #[arg(long, help = "Use a pre-issued bearer token instead of logging in")]
    pub token: Option<String>,

    #[arg(long)]
    pub pickup_lat: Option<String>,

    #[arg(long)]
    pub pickup_lng: Option<String>,

    #[arg(long)]
    pub drop_lat: Option<String>,

    #[arg(long)]
    pub drop_lng: Option<String>,

    #[arg(long)]
    pub pickup_address: Option<String>,

    #[arg(long)]
    pub drop_address: Option<String>,

    #[arg(long)]
    pub material_type: Option<String>,

    #[arg(long)]
    pub weight_kg: Option<String>,

    #[arg(long)]
    pub material_description: Option<String>,

    #[arg(
        long,
        help = "Validate the order and print a fare estimate without submitting"
    )]
    pub estimate_only: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// The raw order draft exactly as typed on the command line.
    pub fn order_draft(&self) -> OrderDraft {
        OrderDraft {
            pickup_lat: self.pickup_lat.clone(),
            pickup_lng: self.pickup_lng.clone(),
            drop_lat: self.drop_lat.clone(),
            drop_lng: self.drop_lng.clone(),
            pickup_address: self.pickup_address.clone(),
            drop_address: self.drop_address.clone(),
            material_type: self.material_type.clone(),
            weight_kg: self.weight_kg.clone(),
            material_description: self.material_description.clone(),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.base_url {
            validate_url("base_url", base_url)?;
        }
        Ok(())
    }
}

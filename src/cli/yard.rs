use clap::Parser;
use reqwest::Url;

use crate::{api::yard, prelude::*};

#[derive(Parser)]
pub struct YardArgs {
    /// Yard service API base URL. For example: `https://yard.example.com/api/`.
    #[clap(long = "yard-base-url", env = "YARD_BASE_URL")]
    pub base_url: Option<Url>,

    /// Yard service API key.
    #[clap(long = "yard-api-key", env = "YARD_API_KEY")]
    pub api_key: Option<String>,
}

impl YardArgs {
    pub fn connect(&self) -> Result<yard::Api> {
        let base_url = self.base_url.clone().context("the yard service base URL is not set")?;
        let api_key = self.api_key.clone().context("the yard service API key is not set")?;
        yard::Api::new(base_url, api_key)
    }
}

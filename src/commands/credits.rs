//! `credits` command: refresh and report the daily quota.

use crate::client::ApiFootball;
use crate::config::ClientConfig;
use crate::error::Result;

pub fn handle_credits(config: ClientConfig) -> Result<()> {
    let mut api = ApiFootball::new(config)?;
    api.update_credits()?;

    // update_credits guarantees both counters are set
    let available = api.available_credits().unwrap_or(0);
    let max = api.max_credits().unwrap_or(0);
    println!("{available} of {max} credit(s) available today");
    Ok(())
}

//! Open/closed badge.

use chrono::Timelike;

use crate::config::CliConfig;
use crate::render::render_hours;

/// Run the `hours` command for `hour`, or the local clock when `None`.
///
/// # Errors
///
/// Returns an error if `hour` is above 23.
pub fn run(hour: Option<u32>, config: &CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    let hour = hour.unwrap_or_else(|| chrono::Local::now().hour());
    if hour > 23 {
        return Err(format!("hour must be 0-23, got {hour}").into());
    }

    tracing::debug!(hour, open = config.hours.contains(hour), "Checked opening hours");
    println!("{}", render_hours(&config.hours, hour));
    Ok(())
}

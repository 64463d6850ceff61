use std::io::Write;

use anyhow::Result;
use eld_log_core::trip::validate_request;
use eld_log_protocol::TripRequest;

use crate::cli::RequestArgs;

pub fn run(args: RequestArgs) -> Result<()> {
    let request = TripRequest {
        current_location: args.current,
        pickup_location: args.pickup,
        dropoff_location: args.dropoff,
        cycle_used_hours: args.cycle_used,
        driver_name: args.driver,
    };
    validate_request(&request)?;

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &request)?;
    writeln!(stdout)?;
    Ok(())
}

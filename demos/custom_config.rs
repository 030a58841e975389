use chrono::{TimeZone, Utc};
use flakeid::{FlakeId, FlakeIdConfig};

fn main() -> Result<(), flakeid::FlakeIdError> {
    // Count timestamps from the Twitter epoch and never busy-spin
    let epoch = Utc.with_ymd_and_hms(2010, 11, 4, 1, 42, 54).unwrap();
    let config = FlakeIdConfig::builder()
        .epoch_datetime(epoch)
        .enable_spin(false)
        .build();

    let generator = FlakeId::with_config(17, 4, config)?;

    println!("Generator configuration:");
    println!("  Epoch: {:?}", generator.config.epoch_datetime());
    println!("  Max worker ID: {}", generator.config.max_worker_id());
    println!("  Max datacenter ID: {}", generator.config.max_datacenter_id());
    println!("  Max sequence per ms: {}", generator.config.max_sequence_id());

    // Generate and analyze an ID
    let id = generator.generate()?;
    let parts = generator.extract.decompose(id);

    println!("\nGenerated ID: {}", id);
    println!("Components:");
    println!("  Timestamp: {} ms since epoch", parts.timestamp);
    println!("  Datacenter ID: {}", parts.datacenter_id);
    println!("  Worker ID: {}", parts.worker_id);
    println!("  Sequence: {}", parts.sequence);

    // Out-of-range IDs are rejected at construction
    if let Err(err) = FlakeId::with_config(32, 0, config) {
        println!("\nRejected: {err}");
    }
    Ok(())
}

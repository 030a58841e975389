use chrono::{DateTime, Utc};
use flakeid::FlakeId;

fn main() -> Result<(), flakeid::FlakeIdError> {
    // Create a generator with worker ID 1 in datacenter 2
    let generator = flakeid::new_generator(1, 2)?;

    // Generate some IDs as decimal strings
    let id1 = generator.next_id()?;
    let id2 = generator.next_id()?;
    let id3 = generator.next_id()?;

    println!("Generated IDs (guaranteed to be monotonic):");
    for id in [&id1, &id2, &id3] {
        print_id(id, &generator);
    }

    // Or extract components individually from the raw value
    let raw = generator.generate()?;
    println!("\nComponents of {raw} (extracted individually):");
    println!("  Timestamp: {} ms since epoch", generator.extract.timestamp(raw));
    println!("  Datacenter ID: {}", generator.extract.datacenter_id(raw));
    println!("  Worker ID: {}", generator.extract.worker_id(raw));
    println!("  Sequence: {}", generator.extract.sequence(raw));

    // Records without a key get one, existing keys pass through
    println!("\nKey for new record: {}", generator.ensure_id(None)?);
    println!("Key for keyed record: {}", generator.ensure_id(Some("user-7"))?);

    // One-off IDs from the process-wide generator
    println!("\nDefault generator ID: {}", flakeid::generate_default_id()?);
    Ok(())
}

fn print_id(id: &str, generator: &FlakeId) {
    let Some(parts) = generator.extract.decompose_str(id) else {
        println!("  {id}: not a FlakeId");
        return;
    };
    let raw: u64 = id.parse().unwrap_or_default();
    let datetime: Option<DateTime<Utc>> = generator.extract.datetime(raw);

    println!(
        "  ID: {id}, Human date: {}, Datacenter: {}, Worker: {}, Sequence: {}",
        datetime.map(|d| d.to_rfc3339()).unwrap_or_default(),
        parts.datacenter_id,
        parts.worker_id,
        parts.sequence
    );
}

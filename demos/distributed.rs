use flakeid::FlakeId;
use rand::{rng, Rng};
use std::collections::HashSet;
use std::thread;
use std::time::Duration;

fn main() {
    let mut handles = vec![];

    // One generator per simulated node, each with its own datacenter/worker pair
    for node in 0..4u8 {
        handles.push(thread::spawn(move || {
            let generator = FlakeId::new(node, node % 2).expect("node ids in range");
            let mut ids = HashSet::new();
            let mut rng = rng();

            for i in 0..5 {
                let id = generator.generate().expect("clock moved backwards");
                let parts = generator.extract.decompose(id);

                println!(
                    "Node {} generated ID {} (ts={}, dc={}, worker={}, seq={})",
                    node, i, parts.timestamp, parts.datacenter_id, parts.worker_id, parts.sequence
                );

                assert!(ids.insert(id), "Duplicate ID generated!");

                // Random delay to simulate work
                let delay = rng.random_range(0..=9);
                thread::sleep(Duration::from_millis(delay));
            }
            ids
        }));
    }

    let mut all_ids = HashSet::new();
    for handle in handles {
        all_ids.extend(handle.join().expect("node thread panicked"));
    }

    println!("\nTotal unique IDs generated: {}", all_ids.len());
    assert_eq!(all_ids.len(), 20, "IDs collided across nodes!");
    println!("All IDs are unique across nodes!");
}

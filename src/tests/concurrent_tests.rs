#[cfg(test)]
mod tests {
    use crate::tests::test_utils::{assert_unique_and_monotonic, assert_unique_ids, MockClock};
    use crate::*;
    use std::sync::{Arc, Barrier};
    use std::thread;

    #[test]
    fn test_concurrent_generation() {
        let generator = Arc::new(FlakeId::new(7, 3).unwrap());
        let num_threads = 8;
        let ids_per_thread = 500;
        let mut handles = Vec::with_capacity(num_threads);

        for _ in 0..num_threads {
            let generator_clone = Arc::clone(&generator);
            handles.push(thread::spawn(move || {
                let mut v = Vec::with_capacity(ids_per_thread);
                for _ in 0..ids_per_thread {
                    v.push(generator_clone.generate().unwrap());
                }
                v
            }));
        }

        let mut all_ids = Vec::with_capacity(num_threads * ids_per_thread);
        for h in handles {
            all_ids.extend(h.join().expect("thread panicked"));
        }

        assert_unique_and_monotonic(all_ids, num_threads * ids_per_thread);
    }

    #[test]
    fn test_per_thread_order_is_preserved() {
        let generator = Arc::new(FlakeId::new(1, 1).unwrap());
        let barrier = Arc::new(Barrier::new(4));
        let mut handles = vec![];

        for _ in 0..4 {
            let g = Arc::clone(&generator);
            let b = Arc::clone(&barrier);
            handles.push(thread::spawn(move || {
                b.wait();
                (0..250).map(|_| g.generate().unwrap()).collect::<Vec<_>>()
            }));
        }

        for h in handles {
            let ids = h.join().unwrap();
            assert!(ids.windows(2).all(|w| w[1] > w[0]));
        }
    }

    #[test]
    fn test_contention_across_exhausted_millisecond() {
        let clock = MockClock::new(1704067200000 + 42);
        let g = Arc::new(
            FlakeId::with_time_source(2, 2, FlakeIdConfig::default(), clock.clone()).unwrap(),
        );
        let barrier = Arc::new(Barrier::new(4));
        let mut handles = vec![];

        // 4 x 1500 ids overflow one millisecond of sequence space
        for _ in 0..4 {
            let g = Arc::clone(&g);
            let b = Arc::clone(&barrier);
            handles.push(thread::spawn(move || {
                b.wait();
                (0..1500).map(|_| g.generate().unwrap()).collect::<Vec<_>>()
            }));
        }

        let ticker = {
            let clock = clock.clone();
            thread::spawn(move || {
                for _ in 0..5 {
                    thread::sleep(std::time::Duration::from_millis(20));
                    clock.advance(1);
                }
            })
        };

        let mut all_ids = Vec::new();
        for h in handles {
            all_ids.extend(h.join().unwrap());
        }
        ticker.join().unwrap();

        assert_unique_ids(&all_ids, 6000);
    }

    #[test]
    fn test_default_instance_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                thread::spawn(|| {
                    (0..100)
                        .map(|_| generate_default_id().unwrap().parse::<u64>().unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut all_ids = Vec::new();
        for h in handles {
            all_ids.extend(h.join().unwrap());
        }

        assert_unique_ids(&all_ids, 400);
    }
}

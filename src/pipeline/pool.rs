//! Bounded worker pool.
//!
//! A fixed number of scoped threads pull items from a shared queue. The
//! first failure stops workers from taking new items and is returned once
//! every worker has finished its current item.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use anyhow::{Error, Result};
use crossbeam::channel;
use parking_lot::Mutex;

/// Run `f` over `items` with at most `limit` calls in flight.
///
/// `limit` is clamped to at least one worker and never exceeds the item count.
pub fn try_for_each_bounded<T, F>(items: Vec<T>, limit: usize, f: F) -> Result<()>
where
    T: Send,
    F: Fn(T) -> Result<()> + Sync,
{
    if items.is_empty() {
        return Ok(());
    }

    let workers = limit.max(1).min(items.len());
    let (tx, rx) = channel::unbounded();
    for item in items {
        // Receiver is alive, send cannot fail.
        let _ = tx.send(item);
    }
    drop(tx);

    let aborted = AtomicBool::new(false);
    let first_error: Mutex<Option<Error>> = Mutex::new(None);

    thread::scope(|scope| {
        for _ in 0..workers {
            let rx = rx.clone();
            let f = &f;
            let aborted = &aborted;
            let first_error = &first_error;
            scope.spawn(move || {
                while !aborted.load(Ordering::Relaxed) {
                    let Ok(item) = rx.recv() else {
                        break;
                    };
                    if let Err(e) = f(item) {
                        aborted.store(true, Ordering::Relaxed);
                        first_error.lock().get_or_insert(e);
                        break;
                    }
                }
            });
        }
    });

    match first_error.into_inner() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;

    #[test]
    fn test_processes_every_item() {
        let seen = AtomicUsize::new(0);
        try_for_each_bounded((0..20).collect::<Vec<u32>>(), 3, |_| {
            seen.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
        .unwrap();
        assert_eq!(seen.load(Ordering::SeqCst), 20);
    }

    #[test]
    fn test_never_exceeds_limit() {
        let active = AtomicUsize::new(0);
        let peak = AtomicUsize::new(0);
        try_for_each_bounded((0..12).collect::<Vec<u32>>(), 3, |_| {
            let now = active.fetch_add(1, Ordering::SeqCst) + 1;
            peak.fetch_max(now, Ordering::SeqCst);
            thread::sleep(Duration::from_millis(5));
            active.fetch_sub(1, Ordering::SeqCst);
            Ok(())
        })
        .unwrap();
        assert!(peak.load(Ordering::SeqCst) <= 3);
        assert!(peak.load(Ordering::SeqCst) >= 1);
    }

    #[test]
    fn test_first_failure_stops_queue() {
        let started = AtomicUsize::new(0);
        let result = try_for_each_bounded((0..100).collect::<Vec<u32>>(), 1, |n| {
            started.fetch_add(1, Ordering::SeqCst);
            if n == 2 {
                anyhow::bail!("item {n} failed");
            }
            Ok(())
        });
        assert_eq!(result.unwrap_err().to_string(), "item 2 failed");
        // Single worker: nothing runs after the failing item.
        assert_eq!(started.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_empty_input() {
        try_for_each_bounded(Vec::<u8>::new(), 3, |_| unreachable!()).unwrap();
    }
}

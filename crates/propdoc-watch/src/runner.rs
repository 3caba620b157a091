//! Watch loop: one full regeneration pass per batch of change events.

use std::sync::mpsc::Receiver;

use propdoc_catalog::{CatalogGenerator, Reporter};

use crate::watcher::WatchEvent;

/// Counters for a finished watch loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WatchStats {
    /// Change events received
    pub events: usize,

    /// Passes run
    pub passes: usize,
}

/// Run `pass` once per batch of events until the channel closes.
///
/// Passes never overlap: the loop is the only consumer and each pass runs to
/// completion before the next event is taken. Events already queued when a
/// pass starts are drained into it, so K queued events cost between 1 and K
/// passes. Events that arrive while a pass runs trigger the next one.
pub fn run_passes<F>(events: &Receiver<WatchEvent>, mut pass: F) -> WatchStats
where
    F: FnMut(&WatchEvent),
{
    let mut stats = WatchStats::default();

    while let Ok(event) = events.recv() {
        let coalesced = events.try_iter().count();
        stats.events += 1 + coalesced;

        tracing::info!("Change detected: {}", event.path().display());
        if coalesced > 0 {
            tracing::debug!("Coalesced {} queued events", coalesced);
        }

        pass(&event);
        stats.passes += 1;
    }

    stats
}

/// Regenerate the catalog on every batch of change events.
pub fn watch(
    generator: &CatalogGenerator,
    reporter: &dyn Reporter,
    events: &Receiver<WatchEvent>,
) -> WatchStats {
    run_passes(events, |_| {
        let report = generator.run(reporter);
        tracing::debug!("Pass finished in {}ms", report.duration_ms);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use propdoc_catalog::{parse_module, CatalogConfig, MemoryReporter};
    use std::fs;
    use std::path::PathBuf;
    use std::sync::mpsc;
    use tempfile::tempdir;

    fn modified(name: &str) -> WatchEvent {
        WatchEvent::Modified(PathBuf::from(name))
    }

    #[test]
    fn runs_one_pass_per_event() {
        let (tx, rx) = mpsc::channel();
        let mut seen = Vec::new();

        let handle = std::thread::spawn(move || {
            run_passes(&rx, |event| seen.push(event.clone()));
            seen
        });

        tx.send(modified("Button.js")).unwrap();
        drop(tx);

        let seen = handle.join().unwrap();
        assert_eq!(seen, vec![modified("Button.js")]);
    }

    #[test]
    fn coalesces_queued_events() {
        let (tx, rx) = mpsc::channel();
        for name in ["a.js", "b.js", "c.js"] {
            tx.send(modified(name)).unwrap();
        }
        drop(tx);

        let stats = run_passes(&rx, |_| {});

        assert_eq!(stats, WatchStats { events: 3, passes: 1 });
    }

    #[test]
    fn events_during_a_pass_trigger_another() {
        let (tx, rx) = mpsc::channel();
        tx.send(modified("a.js")).unwrap();

        let mut pending = Some(tx);
        let stats = run_passes(&rx, |_| {
            // The first pass sees a change arrive mid-run, then the source goes away.
            if let Some(tx) = pending.take() {
                tx.send(modified("b.js")).unwrap();
            }
        });

        assert_eq!(stats, WatchStats { events: 2, passes: 2 });
    }

    #[test]
    fn stops_when_channel_closes() {
        let (tx, rx) = mpsc::channel::<WatchEvent>();
        drop(tx);

        assert_eq!(run_passes(&rx, |_| {}), WatchStats::default());
    }

    #[test]
    fn change_event_overwrites_artifact() {
        let temp = tempdir().unwrap();
        let components = temp.path().join("components");
        fs::create_dir_all(components.join("Button")).unwrap();
        fs::write(
            components.join("Button/Button.js"),
            "/** First. */\nexport default function Button() { return null; }",
        )
        .unwrap();

        let config = CatalogConfig {
            components_dir: components.clone(),
            examples_dir: temp.path().join("examples"),
            output_path: temp.path().join("componentData.js"),
            ..Default::default()
        };
        let generator = CatalogGenerator::new(config.clone());
        let reporter = MemoryReporter::new();
        generator.run(&reporter);

        fs::write(
            components.join("Button/Button.js"),
            "/** Second. */\nexport default function Button() { return null; }",
        )
        .unwrap();

        let (tx, rx) = mpsc::channel();
        tx.send(modified("Button/Button.js")).unwrap();
        drop(tx);
        let stats = watch(&generator, &reporter, &rx);

        assert_eq!(stats.passes, 1);
        let catalog = parse_module(&fs::read_to_string(&config.output_path).unwrap()).unwrap();
        assert_eq!(catalog[0]["description"], "Second.");
    }
}

// In crates/strategies/src/crossover.rs

use core_types::{CrossoverEvent, CrossoverKind, MovingAveragePoint};
use std::cmp::Ordering;

/// Sign of `short - long` at a bar, or `None` during warm-up.
fn relation(point: &MovingAveragePoint) -> Option<Ordering> {
    let (short, long) = point.pair()?;
    Some(short.cmp(&long))
}

/// Scans aligned averages for crossovers.
///
/// A golden event fires where the short average goes from at-or-below the
/// long average to strictly above it; a death event is the mirror image.
/// Equality never fires on its own. Bars where either neighbour is still in
/// warm-up are skipped. Repeated events of the same kind are all returned.
pub fn detect_crossovers(points: &[MovingAveragePoint]) -> Vec<CrossoverEvent> {
    let events: Vec<CrossoverEvent> = points
        .windows(2)
        .filter_map(|pair| {
            let (previous, current) = (&pair[0], &pair[1]);
            let kind = match (relation(previous)?, relation(current)?) {
                (Ordering::Less | Ordering::Equal, Ordering::Greater) => CrossoverKind::Golden,
                (Ordering::Greater | Ordering::Equal, Ordering::Less) => CrossoverKind::Death,
                _ => return None,
            };
            Some(CrossoverEvent {
                timestamp: current.timestamp,
                kind,
                close: current.close,
            })
        })
        .collect();

    tracing::info!(
        golden = events.iter().filter(|e| e.kind == CrossoverKind::Golden).count(),
        death = events.iter().filter(|e| e.kind == CrossoverKind::Death).count(),
        "Crossover scan complete."
    );

    events
}

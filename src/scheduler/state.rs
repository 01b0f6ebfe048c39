//! Per-run mutable simulation state.
//!
//! Owned by exactly one run and discarded once the report is assembled.
//! Slots are indexed by position in the process slice (id - 1).

use log::trace;

use crate::models::{GanttSegment, Process, Timeline};

/// Bookkeeping for one process during a run.
#[derive(Debug, Clone)]
pub(crate) struct ProcessSlot {
    /// Service still owed. Never increases.
    pub remaining: i64,
    /// Whether `remaining` reached zero.
    pub completed: bool,
    /// First instant the process ever ran.
    pub first_dispatch: Option<i64>,
    /// Instant `remaining` reached zero.
    pub completion: Option<i64>,
}

/// Mutable state of a single simulation run.
#[derive(Debug)]
pub(crate) struct SimulationState<'a> {
    processes: &'a [Process],
    slots: Vec<ProcessSlot>,
    timeline: Timeline,
    horizon: i64,
    policy: &'static str,
}

impl<'a> SimulationState<'a> {
    /// Creates fresh state. `horizon` bounds the clock of a correct run.
    pub fn new(processes: &'a [Process], horizon: i64, policy: &'static str) -> Self {
        let slots = processes
            .iter()
            .map(|p| ProcessSlot {
                remaining: p.burst_time,
                completed: false,
                first_dispatch: None,
                completion: None,
            })
            .collect();

        Self {
            processes,
            slots,
            timeline: Timeline::new(),
            horizon,
            policy,
        }
    }

    pub fn processes(&self) -> &'a [Process] {
        self.processes
    }

    pub fn slot(&self, index: usize) -> &ProcessSlot {
        &self.slots[index]
    }

    pub fn all_completed(&self) -> bool {
        self.slots.iter().all(|s| s.completed)
    }

    /// Arrived by `now` and not yet completed.
    pub fn is_ready(&self, index: usize, now: i64) -> bool {
        self.processes[index].arrival_time <= now && !self.slots[index].completed
    }

    /// Ready process with the smallest remaining time.
    ///
    /// Scans in ascending id order keeping the first strictly-smaller
    /// candidate, so the lowest id wins ties.
    pub fn shortest_remaining(&self, now: i64) -> Option<usize> {
        let mut best: Option<usize> = None;
        for i in 0..self.slots.len() {
            if !self.is_ready(i, now) {
                continue;
            }
            match best {
                Some(b) if self.slots[i].remaining >= self.slots[b].remaining => {}
                _ => best = Some(i),
            }
        }
        best
    }

    /// Like [`shortest_remaining`](Self::shortest_remaining), but a ready
    /// `incumbent` keeps the processor against candidates with equal
    /// remaining time.
    pub fn shortest_remaining_keeping(&self, now: i64, incumbent: Option<usize>) -> Option<usize> {
        let best = self.shortest_remaining(now)?;
        match incumbent {
            Some(i)
                if self.is_ready(i, now)
                    && self.slots[i].remaining == self.slots[best].remaining =>
            {
                Some(i)
            }
            _ => Some(best),
        }
    }

    /// Earliest arrival strictly after `now` among incomplete processes.
    pub fn next_arrival_after(&self, now: i64) -> Option<i64> {
        self.processes
            .iter()
            .zip(&self.slots)
            .filter(|(p, s)| !s.completed && p.arrival_time > now)
            .map(|(p, _)| p.arrival_time)
            .min()
    }

    /// Clock value to resume at when nothing is ready at `now`.
    ///
    /// Aborts the run if no process will ever become ready.
    pub fn idle_until_next_arrival(&self, now: i64) -> i64 {
        match self.next_arrival_after(now) {
            Some(next) => {
                trace!("{}: cpu idle [{now}, {next})", self.policy);
                self.check_clock(next);
                next
            }
            None => self.fail(now, "no ready process and no pending arrival"),
        }
    }

    /// Runs process `index` for `duration` units starting at `start`.
    ///
    /// With `merge`, a run that continues the immediately preceding segment
    /// of the same process extends that segment instead of opening a new one.
    /// Returns the end instant.
    pub fn run(&mut self, index: usize, start: i64, duration: i64, merge: bool) -> i64 {
        let slot = &self.slots[index];
        if duration <= 0 || duration > slot.remaining || slot.completed {
            self.fail(
                start,
                &format!(
                    "invalid run of process {} for {duration} (remaining {})",
                    self.processes[index].id, slot.remaining
                ),
            );
        }
        if start < self.processes[index].arrival_time {
            self.fail(
                start,
                &format!("process {} dispatched before arrival", self.processes[index].id),
            );
        }

        let end = start
            .checked_add(duration)
            .unwrap_or_else(|| self.fail(start, "clock overflowed i64"));
        self.check_clock(end);

        let process_id = self.processes[index].id;
        let extended = match self.timeline.segments.last_mut() {
            Some(last) if merge && last.process_id == process_id && last.end == start => {
                last.end = end;
                true
            }
            _ => false,
        };
        if !extended {
            self.timeline.push(GanttSegment::new(process_id, start, end));
        }
        trace!("{}: process {process_id} runs [{start}, {end})", self.policy);

        let slot = &mut self.slots[index];
        slot.first_dispatch.get_or_insert(start);
        slot.remaining -= duration;
        if slot.remaining == 0 {
            slot.completed = true;
            slot.completion = Some(end);
        }
        end
    }

    /// Consumes the state, yielding per-process slots and the timeline.
    pub fn into_parts(self) -> (Vec<ProcessSlot>, Timeline) {
        (self.slots, self.timeline)
    }

    fn check_clock(&self, clock: i64) {
        if clock > self.horizon {
            self.fail(clock, &format!("clock passed horizon {}", self.horizon));
        }
    }

    /// Scheduler defect: the run cannot be trusted, so it is aborted.
    fn fail(&self, clock: i64, reason: &str) -> ! {
        panic!("{} scheduler defect at t={clock}: {reason}", self.policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn procs() -> Vec<Process> {
        vec![
            Process::new(1, 0, 4),
            Process::new(2, 1, 3),
            Process::new(3, 1, 3),
            Process::new(4, 6, 1),
        ]
    }

    #[test]
    fn test_shortest_remaining_lowest_id_wins_ties() {
        let p = procs();
        let state = SimulationState::new(&p, 100, "TEST");
        assert_eq!(state.shortest_remaining(0), Some(0));
        // P2 and P3 tie at 3; P2 scanned first
        assert_eq!(state.shortest_remaining(1), Some(1));
    }

    #[test]
    fn test_incumbent_wins_ties() {
        let p = procs();
        let mut state = SimulationState::new(&p, 100, "TEST");
        state.run(2, 1, 1, true);
        // P2 has 3, P3 has 2 left: P3 is strictly shorter
        assert_eq!(state.shortest_remaining_keeping(2, Some(1)), Some(2));
        state.run(1, 2, 1, true);
        // P2 and P3 both have 2: the incumbent P2 keeps the processor
        assert_eq!(state.shortest_remaining_keeping(3, Some(1)), Some(1));
        assert_eq!(state.shortest_remaining_keeping(3, None), Some(1));
        assert_eq!(state.shortest_remaining_keeping(3, Some(2)), Some(2));
    }

    #[test]
    fn test_next_arrival_after() {
        let p = procs();
        let state = SimulationState::new(&p, 100, "TEST");
        assert_eq!(state.next_arrival_after(0), Some(1));
        assert_eq!(state.next_arrival_after(1), Some(6));
        assert_eq!(state.next_arrival_after(6), None);
    }

    #[test]
    fn test_run_records_dispatch_and_completion() {
        let p = procs();
        let mut state = SimulationState::new(&p, 100, "TEST");
        assert_eq!(state.run(0, 0, 2, false), 2);
        assert_eq!(state.slot(0).first_dispatch, Some(0));
        assert_eq!(state.slot(0).remaining, 2);
        assert!(!state.slot(0).completed);

        state.run(0, 5, 2, false);
        assert_eq!(state.slot(0).first_dispatch, Some(0));
        assert!(state.slot(0).completed);
        assert_eq!(state.slot(0).completion, Some(7));

        let (_, timeline) = state.into_parts();
        assert_eq!(timeline.len(), 2);
    }

    #[test]
    fn test_run_merges_contiguous_segments() {
        let p = procs();
        let mut state = SimulationState::new(&p, 100, "TEST");
        state.run(0, 0, 1, true);
        state.run(0, 1, 1, true);
        state.run(1, 2, 1, true);
        state.run(0, 3, 1, true);
        let (_, timeline) = state.into_parts();
        assert_eq!(
            timeline.segments,
            vec![
                GanttSegment::new(1, 0, 2),
                GanttSegment::new(2, 2, 3),
                GanttSegment::new(1, 3, 4),
            ]
        );
    }

    #[test]
    #[should_panic(expected = "scheduler defect")]
    fn test_overrun_is_fatal() {
        let p = procs();
        let mut state = SimulationState::new(&p, 100, "TEST");
        state.run(0, 0, 5, false);
    }

    #[test]
    #[should_panic(expected = "clock passed horizon")]
    fn test_horizon_is_fatal() {
        let p = procs();
        let mut state = SimulationState::new(&p, 3, "TEST");
        state.run(0, 0, 4, false);
    }

    #[test]
    #[should_panic(expected = "clock overflowed")]
    fn test_clock_overflow_is_fatal() {
        let p = vec![Process::new(1, 0, 10)];
        let mut state = SimulationState::new(&p, i64::MAX, "TEST");
        state.run(0, i64::MAX - 5, 10, false);
    }

    #[test]
    #[should_panic(expected = "no pending arrival")]
    fn test_idle_without_arrivals_is_fatal() {
        let p = vec![Process::new(1, 0, 1)];
        let state = SimulationState::new(&p, 10, "TEST");
        state.idle_until_next_arrival(0);
    }
}

//! Non-preemptive policies: FCFS, SJF, Priority.
//!
//! Every process is dispatched exactly once and runs to completion, so each
//! contributes one Gantt segment `[start, start + burst)`.
//!
//! # Complexity
//! - FCFS: O(n log n)
//! - SJF: O(n²), one O(n) selection scan per dispatch or idle jump
//! - Priority: O(n²)

use super::state::SimulationState;

/// First-Come-First-Served.
///
/// Processes run in arrival order; ties keep id order (stable sort).
/// Each starts at `max(previous completion, arrival)`.
pub(crate) fn fcfs(state: &mut SimulationState<'_>) {
    let processes = state.processes();
    let mut order: Vec<usize> = (0..processes.len()).collect();
    order.sort_by_key(|&i| processes[i].arrival_time);

    let mut clock = 0;
    for i in order {
        let start = clock.max(processes[i].arrival_time);
        clock = state.run(i, start, processes[i].burst_time, false);
    }
}

/// Shortest-Job-First.
///
/// Whenever the processor is free, picks the arrived, incomplete process
/// with the smallest burst (lowest id on ties) and runs it to completion.
/// With nothing ready the clock jumps to the next arrival, which selects
/// exactly what single-tick idling would.
pub(crate) fn sjf(state: &mut SimulationState<'_>) {
    let mut clock = 0;
    while !state.all_completed() {
        match state.shortest_remaining(clock) {
            Some(i) => {
                let burst = state.slot(i).remaining;
                clock = state.run(i, clock, burst, false);
            }
            None => clock = state.idle_until_next_arrival(clock),
        }
    }
}

/// Non-preemptive Priority (higher value = more urgent).
///
/// Processes are sorted by priority descending (stable, so ties keep id
/// order). Each dispatch scans the sorted list from the top and takes the
/// first arrived, undispatched process. If none has arrived the clock jumps
/// to the earliest pending arrival.
pub(crate) fn priority(state: &mut SimulationState<'_>) {
    let processes = state.processes();
    let mut order: Vec<usize> = (0..processes.len()).collect();
    order.sort_by(|&a, &b| {
        processes[b]
            .effective_priority()
            .cmp(&processes[a].effective_priority())
    });

    let mut clock = 0;
    while !state.all_completed() {
        let pick = order.iter().copied().find(|&i| state.is_ready(i, clock));
        match pick {
            Some(i) => clock = state.run(i, clock, processes[i].burst_time, false),
            None => clock = state.idle_until_next_arrival(clock),
        }
    }
}

//! Preemptive policies: SRTF and Round-Robin.
//!
//! A process's service may be split across several Gantt segments. Its
//! externally visible start time is the first dispatch ever, not the most
//! recent resumption.

use std::collections::VecDeque;

use super::state::SimulationState;

/// Shortest-Remaining-Time-First.
///
/// Selection is re-evaluated at every instant among arrived, incomplete
/// processes by remaining time. The running process keeps the processor on
/// ties; otherwise the lowest id wins.
///
/// # Stepping
/// Between two arrivals the selected process stays selected (its remaining
/// time only shrinks), so the clock advances straight to the next arrival or
/// the process's completion, whichever is first. Consecutive runs of the
/// same process are merged into one segment.
pub(crate) fn srtf(state: &mut SimulationState<'_>) {
    let mut clock = 0;
    let mut running: Option<usize> = None;
    while !state.all_completed() {
        let Some(i) = state.shortest_remaining_keeping(clock, running) else {
            clock = state.idle_until_next_arrival(clock);
            continue;
        };

        let remaining = state.slot(i).remaining;
        let slice = match state.next_arrival_after(clock) {
            Some(next) => remaining.min(next - clock),
            None => remaining,
        };
        clock = state.run(i, clock, slice, true);
        running = Some(i);
    }
}

/// Round-Robin with a fixed quantum.
///
/// Processes enter a FIFO ready queue in arrival order (ids on ties). The
/// head runs for `min(quantum, remaining)`. Processes that arrived up to and
/// including the end of that slice are queued before the preempted process
/// goes back to the tail.
pub(crate) fn round_robin(state: &mut SimulationState<'_>, quantum: i64) {
    let processes = state.processes();
    let mut arrivals: Vec<usize> = (0..processes.len()).collect();
    arrivals.sort_by_key(|&i| processes[i].arrival_time);

    let mut queue: VecDeque<usize> = VecDeque::with_capacity(processes.len());
    let mut admitted = 0;
    let mut clock = 0;

    let admit = |queue: &mut VecDeque<usize>, admitted: &mut usize, now: i64| {
        while let Some(&i) = arrivals.get(*admitted) {
            if processes[i].arrival_time > now {
                break;
            }
            queue.push_back(i);
            *admitted += 1;
        }
    };

    admit(&mut queue, &mut admitted, clock);

    while !state.all_completed() {
        let Some(i) = queue.pop_front() else {
            clock = state.idle_until_next_arrival(clock);
            admit(&mut queue, &mut admitted, clock);
            continue;
        };

        let slice = quantum.min(state.slot(i).remaining);
        clock = state.run(i, clock, slice, false);

        admit(&mut queue, &mut admitted, clock);
        if !state.slot(i).completed {
            queue.push_back(i);
        }
    }
}

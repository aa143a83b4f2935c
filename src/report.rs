use std::io::{self, Write};

use average::Estimate;

use crate::runner::PolicyRun;
use crate::workload::TaskRecord;

/// Write each policy's dispatch order: a policy heading, one line per
/// dispatched task, then a blank separator. With `stats` set, each non-empty
/// run also gets average turnaround and waiting lines.
pub fn render<W: Write>(
    w: &mut W,
    batch: &[TaskRecord],
    runs: &[PolicyRun],
    stats: bool,
) -> io::Result<()> {
    for run in runs {
        writeln!(w, "{} Scheduling:", run.policy)?;
        for dispatch in &run.dispatches {
            writeln!(w, "Executing task: {}", batch[dispatch.task].name)?;
        }

        if stats && !run.dispatches.is_empty() {
            let turnaround = avg(run.dispatches.iter().map(|d| d.completed_at as f64));
            let waiting = avg(run
                .dispatches
                .iter()
                .map(|d| (d.completed_at - batch[d.task].burst_time) as f64));
            writeln!(w, "Average turnaround: {turnaround:.2} work units")?;
            writeln!(w, "Average waiting: {waiting:.2} work units")?;
        }

        writeln!(w)?;
    }
    Ok(())
}

fn avg(iter: impl Iterator<Item = f64>) -> f64 {
    iter.collect::<average::Mean>().estimate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::PolicyRunner;
    use crate::workload::TaskRecord;
    use crate::DEFAULT_QUANTUM;

    fn reference_batch() -> Vec<TaskRecord> {
        vec![
            TaskRecord::new("A", 1, 5),
            TaskRecord::new("B", 2, 25),
            TaskRecord::new("C", 3, 8),
        ]
    }

    fn rendered(batch: &[TaskRecord], stats: bool) -> String {
        let runs = PolicyRunner::new(DEFAULT_QUANTUM).run_all(batch);
        let mut out = Vec::new();
        render(&mut out, batch, &runs, stats).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn matches_the_plain_output_contract() {
        let expected = "\
FCFS Scheduling:
Executing task: A
Executing task: B
Executing task: C

SJF Scheduling:
Executing task: A
Executing task: C
Executing task: B

Priority Scheduling:
Executing task: C
Executing task: B
Executing task: A

Round-Robin Scheduling:
Executing task: A
Executing task: C
Executing task: B

Priority with Round-Robin Scheduling:
Executing task: A
Executing task: C
Executing task: B

";
        assert_eq!(rendered(&reference_batch(), false), expected);
    }

    #[test]
    fn empty_batch_renders_headings_only() {
        let out = rendered(&[], false);
        assert!(out.starts_with("FCFS Scheduling:\n\n"));
        assert!(!out.contains("Executing task"));
        assert_eq!(out.matches("Scheduling:\n").count(), 5);
    }

    #[test]
    fn stats_lines_follow_the_dispatches() {
        let out = rendered(&reference_batch(), true);
        // FCFS completes A,B,C at 5, 30, 38
        assert!(out.contains("FCFS Scheduling:\nExecuting task: A\nExecuting task: B\nExecuting task: C\nAverage turnaround: 24.33 work units\nAverage waiting: 11.67 work units\n\n"));
        // Round-Robin completes A,C,B at 5, 23, 38
        assert!(out.contains("Round-Robin Scheduling:\nExecuting task: A\nExecuting task: C\nExecuting task: B\nAverage turnaround: 22.00 work units\nAverage waiting: 9.33 work units\n\n"));
    }

    #[test]
    fn stats_are_skipped_for_an_empty_batch() {
        let out = rendered(&[], true);
        assert!(!out.contains("Average"));
    }
}

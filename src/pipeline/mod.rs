//! Sequential task runner.
//!
//! Tasks run strictly in order. Each one either performs its work, skips
//! because its output already exists, or fails. The first failure stops the
//! pipeline; outputs of earlier tasks stay on disk.
//!
//! ```text
//! editor ─► highlight ─► math ─► locales ─► preinit ─► cache
//! (gated)   (gated)      (gated)
//! ```

mod gate;
mod pool;

pub use gate::{Existence, existence, gated};
pub use pool::try_for_each_bounded;

use anyhow::{Context, Result};

use crate::config::PrepConfig;
use crate::tasks;

/// How a task finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOutcome {
    Done,
    /// Output already present, nothing touched.
    Skipped,
}

/// A unit of work in the pipeline.
pub trait Task {
    /// Short name, used as the log prefix.
    fn name(&self) -> &'static str;

    fn run(&self, config: &PrepConfig) -> Result<TaskOutcome>;
}

/// Outcomes of the tasks that ran, in order.
#[derive(Debug, Default)]
pub struct RunReport {
    entries: Vec<(&'static str, TaskOutcome)>,
}

impl RunReport {
    pub fn entries(&self) -> &[(&'static str, TaskOutcome)] {
        &self.entries
    }

    pub fn done(&self) -> usize {
        self.count(TaskOutcome::Done)
    }

    pub fn skipped(&self) -> usize {
        self.count(TaskOutcome::Skipped)
    }

    fn count(&self, outcome: TaskOutcome) -> usize {
        self.entries.iter().filter(|(_, o)| *o == outcome).count()
    }
}

/// Ordered list of tasks.
#[derive(Default)]
pub struct Pipeline {
    tasks: Vec<Box<dyn Task>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed preparation order.
    pub fn standard() -> Self {
        Self::new()
            .with(tasks::CopyEditor)
            .with(tasks::BuildHighlight)
            .with(tasks::CopyMath)
            .with(tasks::BundleLocales)
            .with(tasks::BundlePreinit)
            .with(tasks::ClearCache)
    }

    pub fn with(mut self, task: impl Task + 'static) -> Self {
        self.tasks.push(Box::new(task));
        self
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.tasks.iter().map(|t| t.name()).collect()
    }

    /// Run every task front to back, stopping at the first error.
    pub fn run(&self, config: &PrepConfig) -> Result<RunReport> {
        let mut report = RunReport::default();
        for task in &self.tasks {
            let outcome = task
                .run(config)
                .with_context(|| format!("task `{}` failed", task.name()))?;
            report.entries.push((task.name(), outcome));
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::Path;
    use std::rc::Rc;

    type Journal = Rc<RefCell<Vec<&'static str>>>;

    struct Record {
        name: &'static str,
        outcome: Option<TaskOutcome>,
        journal: Journal,
    }

    impl Task for Record {
        fn name(&self) -> &'static str {
            self.name
        }

        fn run(&self, _config: &PrepConfig) -> Result<TaskOutcome> {
            self.journal.borrow_mut().push(self.name);
            self.outcome
                .ok_or_else(|| anyhow::anyhow!("{} exploded", self.name))
        }
    }

    fn record(name: &'static str, outcome: Option<TaskOutcome>, journal: &Journal) -> Record {
        Record {
            name,
            outcome,
            journal: Rc::clone(journal),
        }
    }

    #[test]
    fn test_runs_in_order() {
        let journal = Journal::default();
        let pipeline = Pipeline::new()
            .with(record("a", Some(TaskOutcome::Done), &journal))
            .with(record("b", Some(TaskOutcome::Skipped), &journal))
            .with(record("c", Some(TaskOutcome::Done), &journal));

        let report = pipeline
            .run(&PrepConfig::with_root(Path::new("/srv/app")))
            .unwrap();
        assert_eq!(*journal.borrow(), vec!["a", "b", "c"]);
        assert_eq!(report.done(), 2);
        assert_eq!(report.skipped(), 1);
    }

    #[test]
    fn test_failure_aborts_remaining() {
        let journal = Journal::default();
        let pipeline = Pipeline::new()
            .with(record("a", Some(TaskOutcome::Done), &journal))
            .with(record("b", None, &journal))
            .with(record("c", Some(TaskOutcome::Done), &journal));

        let err = pipeline
            .run(&PrepConfig::with_root(Path::new("/srv/app")))
            .unwrap_err();
        assert_eq!(*journal.borrow(), vec!["a", "b"]);
        assert!(format!("{err:#}").contains("task `b` failed"));
        assert!(format!("{err:#}").contains("b exploded"));
    }

    #[test]
    fn test_standard_order() {
        assert_eq!(
            Pipeline::standard().names(),
            vec!["editor", "highlight", "math", "locales", "preinit", "cache"]
        );
    }
}

use serde::{Deserialize, Serialize};
use time::{Date, macros::format_description};

use crate::{
    Budget,
    error::{ModelError, ModelResult},
};

/// Raw, compiled-in description of a milestone.
///
/// Dates are `YYYY-MM-DD` strings so catalogs can be declared as `const` tables.
/// Convert with [`Milestone::try_from`]; any failure is a startup error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MilestoneSpec<'a> {
    pub task: &'a str,
    pub start: &'a str,
    pub finish: &'a str,
    pub budget: &'a str,
}

/// A named project phase with inclusive start/finish dates and a budget figure.
///
/// Invariant: `start <= finish`. Deserialization goes through [`Milestone::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMilestone")]
pub struct Milestone {
    task: String,
    start: Date,
    finish: Date,
    budget: Budget,
}

impl Milestone {
    /// Create a milestone, rejecting an empty task name, a blank budget,
    /// or a finish date earlier than the start date.
    pub fn new(
        task: impl Into<String>,
        start: Date,
        finish: Date,
        budget: impl Into<Budget>,
    ) -> ModelResult<Self> {
        let task = task.into();
        let budget = budget.into();

        if task.trim().is_empty() {
            return Err(ModelError::EmptyTask);
        }
        if budget.is_blank() {
            return Err(ModelError::EmptyBudget(task));
        }
        if finish < start {
            return Err(ModelError::InvalidSpan {
                task,
                start: start.to_string(),
                finish: finish.to_string(),
            });
        }

        Ok(Self {
            task,
            start,
            finish,
            budget,
        })
    }

    pub fn task(&self) -> &str {
        &self.task
    }

    pub fn start(&self) -> Date {
        self.start
    }

    pub fn finish(&self) -> Date {
        self.finish
    }

    pub fn budget(&self) -> &Budget {
        &self.budget
    }

    /// Number of calendar days covered, counting both endpoints.
    ///
    /// A single-day milestone has duration 1.
    pub fn duration_days(&self) -> u32 {
        ((self.finish - self.start).whole_days() + 1) as u32
    }
}

#[derive(Deserialize)]
struct RawMilestone {
    task: String,
    start: Date,
    finish: Date,
    budget: Budget,
}

impl TryFrom<RawMilestone> for Milestone {
    type Error = ModelError;

    fn try_from(raw: RawMilestone) -> ModelResult<Self> {
        Milestone::new(raw.task, raw.start, raw.finish, raw.budget)
    }
}

impl TryFrom<&MilestoneSpec<'_>> for Milestone {
    type Error = ModelError;

    fn try_from(spec: &MilestoneSpec<'_>) -> ModelResult<Self> {
        let start = parse_date("start", spec.start)?;
        let finish = parse_date("finish", spec.finish)?;
        Milestone::new(spec.task, start, finish, spec.budget)
    }
}

fn parse_date(field: &'static str, value: &str) -> ModelResult<Date> {
    Date::parse(value.trim(), format_description!("[year]-[month]-[day]")).map_err(|e| {
        ModelError::InvalidDate {
            field,
            value: value.to_string(),
            reason: e.to_string(),
        }
    })
}

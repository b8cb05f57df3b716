//! Static milestone store.
//!
//! Milestones are compiled in as [`MilestoneSpec`] tables and parsed once at startup.
//! A parse failure is fatal: the catalog is never built half-valid.
use std::sync::Arc;

use creed_model::{Milestone, MilestoneSpec};
use tracing::debug;

use crate::error::CoreError;

/// Built-in CREED milestones, in display order.
pub const CREED_MILESTONES: [MilestoneSpec<'static>; 5] = [
    MilestoneSpec {
        task: "Day-of-Week Seasonality Module",
        start: "2025-07-10",
        finish: "2025-07-14",
        budget: "$80",
    },
    MilestoneSpec {
        task: "Mean-Reversion Engine (Déjà Vu)",
        start: "2025-07-15",
        finish: "2025-07-19",
        budget: "$120",
    },
    MilestoneSpec {
        task: "Regime Detection & Forecasting",
        start: "2025-07-20",
        finish: "2025-07-26",
        budget: "$150",
    },
    MilestoneSpec {
        task: "Portfolio Construction & Execution",
        start: "2025-07-27",
        finish: "2025-08-02",
        budget: "$170",
    },
    MilestoneSpec {
        task: "Monitoring & Reporting",
        start: "2025-08-03",
        finish: "2025-08-09",
        budget: "$130",
    },
];

/// Immutable, ordered milestone sequence shared by all requests.
#[derive(Debug, Clone)]
pub struct MilestoneCatalog {
    milestones: Arc<[Milestone]>,
}

impl MilestoneCatalog {
    /// Parse a spec table, failing on the first invalid entry.
    pub fn from_specs(specs: &[MilestoneSpec<'_>]) -> Result<Self, CoreError> {
        let milestones = specs
            .iter()
            .enumerate()
            .map(|(index, spec)| {
                Milestone::try_from(spec).map_err(|source| CoreError::Catalog { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = milestones.len(), "milestone catalog loaded");
        Ok(Self::new(milestones))
    }

    /// Wrap already-validated milestones.
    pub fn new(milestones: Vec<Milestone>) -> Self {
        Self {
            milestones: milestones.into(),
        }
    }

    /// The built-in CREED catalog.
    pub fn creed() -> Result<Self, CoreError> {
        Self::from_specs(&CREED_MILESTONES)
    }

    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }

    pub fn len(&self) -> usize {
        self.milestones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.milestones.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    #[test]
    fn creed_catalog_parses() {
        let catalog = MilestoneCatalog::creed().expect("built-in milestones must be valid");
        assert_eq!(catalog.len(), 5);

        let first = &catalog.milestones()[0];
        assert_eq!(first.task(), "Day-of-Week Seasonality Module");
        assert_eq!(first.start(), date!(2025 - 07 - 10));
        assert_eq!(first.finish(), date!(2025 - 07 - 14));
        assert_eq!(first.budget().as_str(), "$80");
    }

    #[test]
    fn creed_catalog_keeps_declaration_order() {
        let catalog = MilestoneCatalog::creed().unwrap();
        let tasks: Vec<_> = catalog.milestones().iter().map(|m| m.task()).collect();
        let expected: Vec<_> = CREED_MILESTONES.iter().map(|s| s.task).collect();

        assert_eq!(tasks, expected);
    }

    #[test]
    fn creed_durations() {
        let catalog = MilestoneCatalog::creed().unwrap();
        let durations: Vec<_> = catalog
            .milestones()
            .iter()
            .map(|m| m.duration_days())
            .collect();

        assert_eq!(durations, vec![5, 5, 7, 7, 7]);
    }

    #[test]
    fn reports_index_of_bad_entry() {
        let mut specs = CREED_MILESTONES;
        specs[3].finish = "2025-02-31";

        match MilestoneCatalog::from_specs(&specs) {
            Err(CoreError::Catalog { index, .. }) => assert_eq!(index, 3),
            other => panic!("expected catalog error, got {other:?}"),
        }
    }

    #[test]
    fn empty_table_is_allowed() {
        let catalog = MilestoneCatalog::from_specs(&[]).unwrap();
        assert!(catalog.is_empty());
    }
}

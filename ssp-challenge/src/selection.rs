use crate::{round_weight, Label, Population};
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Output of a selection search: the accepted labels in acceptance order and
/// their total weight, rounded to 3 decimals.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Selection {
    pub total_weight: f64,
    pub labels: Vec<Label>,
}

impl Population {
    /// Replays the acceptance rule against a selection and returns the
    /// recomputed total weight.
    ///
    /// The first label is treated as the seed; every later label must not be
    /// blacklisted by any earlier member's accumulated blacklist, and must
    /// not itself blacklist any earlier member. The check is asymmetric on
    /// purpose, matching the search.
    pub fn verify_selection(&self, selection: &Selection) -> Result<f64> {
        let mut labels = selection.labels.iter().copied();
        let seed = labels
            .next()
            .ok_or_else(|| anyhow!("Selection contains no suppliers"))?;
        let seed = self
            .supplier(seed)
            .ok_or_else(|| anyhow!("Label ({}) does not exist in the population", seed))?;

        let mut members = vec![seed.label];
        let mut interference: HashSet<Label> = seed.blacklist.iter().copied().collect();
        let mut total_weight = seed.weight;

        for label in labels {
            let candidate = self
                .supplier(label)
                .ok_or_else(|| anyhow!("Label ({}) does not exist in the population", label))?;
            if members.contains(&label) {
                return Err(anyhow!("Duplicate label ({}) selected", label));
            }
            if interference.contains(&label) {
                return Err(anyhow!(
                    "Label ({}) is blacklisted by an earlier member",
                    label
                ));
            }
            if let Some(&member) = members.iter().find(|&&m| candidate.blacklist.contains(&m)) {
                return Err(anyhow!(
                    "Supplier ({}) blacklists earlier member ({})",
                    label,
                    member
                ));
            }
            total_weight += candidate.weight;
            interference.extend(candidate.blacklist.iter().copied());
            members.push(label);
        }

        let total_weight = round_weight(total_weight);
        if (total_weight - selection.total_weight).abs() > 1e-3 {
            return Err(anyhow!(
                "Reported weight ({}) does not match recomputed weight ({})",
                selection.total_weight,
                total_weight
            ));
        }
        Ok(total_weight)
    }
}

use crate::{round_weight, Error, Label};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A supplier with its own view of the rest of the population: the labels it
/// cannot co-occur with (`blacklist`) and the complementary labels it can
/// extend a selection with (`interactions`).
///
/// Blacklists are drawn independently per supplier, so the relation is not
/// symmetric: supplier A may blacklist B while B does not blacklist A.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Supplier {
    pub label: Label,
    pub weight: f64,
    pub blacklist: HashSet<Label>,
    pub interactions: Vec<Label>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Population {
    pub num_suppliers: usize,
    pub suppliers: Vec<Supplier>,
}

impl Population {
    /// Generates `num_suppliers` suppliers with labels `1..=num_suppliers`.
    ///
    /// Each supplier gets a weight in `[0, 1)` rounded to 3 decimals and a
    /// blacklist of exactly `num_suppliers / 2` labels drawn uniformly
    /// without replacement from the other labels; the leftover labels form
    /// its interactions list.
    pub fn generate<R: Rng>(num_suppliers: usize, rng: &mut R) -> Result<Self, Error> {
        if num_suppliers < 1 {
            return Err(Error::InvalidArgument(num_suppliers));
        }
        let suppliers = (1..=num_suppliers)
            .map(|label| Supplier::generate(num_suppliers, label, rng))
            .collect();
        Ok(Self {
            num_suppliers,
            suppliers,
        })
    }

    pub fn generate_instance(seed: &[u8; 32], num_suppliers: usize) -> Result<Self, Error> {
        let mut rng = SmallRng::from_seed(seed.clone());
        Self::generate(num_suppliers, &mut rng)
    }

    pub fn supplier(&self, label: Label) -> Option<&Supplier> {
        if label < 1 {
            return None;
        }
        self.suppliers.get(label - 1)
    }
}

impl Supplier {
    fn generate<R: Rng>(num_suppliers: usize, label: Label, rng: &mut R) -> Self {
        let weight = round_weight(rng.gen::<f64>());

        // The candidate pool starts in ascending order and ordered removal
        // keeps the leftover ascending. The search scans interactions in
        // exactly this leftover order.
        let mut pool: Vec<Label> = (1..=num_suppliers).filter(|&m| m != label).collect();
        let mut blacklist = HashSet::with_capacity(num_suppliers / 2);
        for _ in 0..num_suppliers / 2 {
            let drawn = pool.remove(rng.gen_range(0..pool.len()));
            blacklist.insert(drawn);
        }

        Self {
            label,
            weight,
            blacklist,
            interactions: pool,
        }
    }
}

impl fmt::Display for Supplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut blacklist: Vec<Label> = self.blacklist.iter().copied().collect();
        blacklist.sort_unstable();
        write!(
            f,
            "Supplier {}\noffers grams: {}\ncompetes with suppliers: {:?}\ninteracts with: {:?}",
            self.label, self.weight, blacklist, self.interactions
        )
    }
}

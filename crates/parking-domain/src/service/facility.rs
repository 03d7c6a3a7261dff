//! Parking facility: owns the spots, answers queries, allocates vehicles

use serde::Serialize;
use tracing::debug;

use super::policy::{AllocationPolicy, AllocationStep};
use crate::model::{Spot, SpotId, SpotSize, Vehicle, VehicleCategory};
use crate::spec::{filter, free_of_size, Filter, Predicate};

/// Where a vehicle ended up
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub category: VehicleCategory,
    /// Index of the policy step that succeeded
    pub step: usize,
    pub size: SpotSize,
    pub spots: Vec<SpotId>,
}

#[derive(Debug, Clone, Default)]
pub struct Facility {
    spots: Vec<Spot>,
    policy: AllocationPolicy,
}

impl Facility {
    /// Build a facility from spot sizes in layout order. Every spot starts free.
    pub fn new<I>(sizes: I) -> Self
    where
        I: IntoIterator<Item = SpotSize>,
    {
        Self::with_policy(sizes, AllocationPolicy::standard())
    }

    pub fn with_policy<I>(sizes: I, policy: AllocationPolicy) -> Self
    where
        I: IntoIterator<Item = SpotSize>,
    {
        let spots = sizes
            .into_iter()
            .enumerate()
            .map(|(index, size)| Spot::new(SpotId(index), size))
            .collect();
        Self { spots, policy }
    }

    pub fn policy(&self) -> &AllocationPolicy {
        &self.policy
    }

    pub fn spots(&self) -> &[Spot] {
        &self.spots
    }

    pub fn spot(&self, id: SpotId) -> Option<&Spot> {
        self.spots.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.spots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    /// Spots satisfying `predicate`, in layout order
    pub fn query<'a, 'p, P>(
        &'a self,
        predicate: &'p P,
    ) -> Filter<'p, std::slice::Iter<'a, Spot>, P>
    where
        P: Predicate<Subject = Spot> + ?Sized,
    {
        filter(&self.spots, predicate)
    }

    pub fn count<P>(&self, predicate: &P) -> usize
    where
        P: Predicate<Subject = Spot> + ?Sized,
    {
        self.query(predicate).count()
    }

    /// Park `vehicle` if the policy finds room for it; otherwise leave it unplaced.
    pub fn allocate(&mut self, vehicle: &Vehicle) {
        let _ = self.place(vehicle);
    }

    /// Walk the category's fallback chain and occupy the first step that fits.
    ///
    /// Within a step the earliest free spots in layout order are taken. A step
    /// needing several spots commits only when all of them are free, so a van
    /// never ends up holding one or two car spots.
    pub fn place(&mut self, vehicle: &Vehicle) -> Option<Placement> {
        let category = vehicle.category();

        for (step, rule) in self.policy.chain(category).iter().enumerate() {
            if let Some(spots) = occupy_first_free(&mut self.spots, rule) {
                debug!(%category, step, size = %rule.size, ?spots, "vehicle placed");
                return Some(Placement {
                    category,
                    step,
                    size: rule.size,
                    spots,
                });
            }
        }

        debug!(%category, "no room for vehicle");
        None
    }
}

fn occupy_first_free(spots: &mut [Spot], rule: &AllocationStep) -> Option<Vec<SpotId>> {
    let free = free_of_size(rule.size);
    let candidates: Vec<&mut Spot> = filter(spots.iter_mut(), &free).take(rule.count).collect();
    if candidates.len() < rule.count {
        return None;
    }

    Some(
        candidates
            .into_iter()
            .map(|spot| {
                spot.occupy();
                spot.id()
            })
            .collect(),
    )
}

impl FromIterator<SpotSize> for Facility {
    fn from_iter<I: IntoIterator<Item = SpotSize>>(iter: I) -> Self {
        Self::new(iter)
    }
}

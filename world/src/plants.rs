//! Authoritative plant state management utilities.

use std::collections::BTreeMap;

use lawn_defence_core::{CellCoord, PlantId, PlantKind};

/// Plant stored inside the world.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PlantState {
    /// Identifier allocated by the world for the plant.
    pub(crate) id: PlantId,
    /// Kind of plant that was placed.
    pub(crate) kind: PlantKind,
    /// Cell occupied by the plant.
    pub(crate) cell: CellCoord,
}

/// Registry that stores plants and manages identifier allocation.
#[derive(Debug)]
pub(crate) struct PlantRegistry {
    entries: BTreeMap<PlantId, PlantState>,
    next_plant_id: PlantId,
}

impl PlantRegistry {
    /// Creates an empty plant registry with a reset identifier counter.
    pub(crate) fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            next_plant_id: PlantId::new(0),
        }
    }

    /// Stores a new plant, allocating the next identifier for it.
    ///
    /// Callers are responsible for checking occupancy first.
    pub(crate) fn insert(&mut self, kind: PlantKind, cell: CellCoord) -> PlantId {
        let id = self.next_plant_id;
        self.next_plant_id = PlantId::new(id.get().wrapping_add(1));
        let _ = self.entries.insert(id, PlantState { id, kind, cell });
        id
    }

    /// Returns the plant occupying the provided cell, if any.
    pub(crate) fn occupant(&self, cell: CellCoord) -> Option<PlantId> {
        self.entries
            .values()
            .find(|plant| plant.cell == cell)
            .map(|plant| plant.id)
    }

    pub(crate) fn get(&self, id: PlantId) -> Option<&PlantState> {
        self.entries.get(&id)
    }

    /// Iterates over stored plants in identifier order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &PlantState> {
        self.entries.values()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Removes every plant and restarts identifier allocation.
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.next_plant_id = PlantId::new(0);
    }
}

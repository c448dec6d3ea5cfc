// Copyright 2025 the Vizlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Retained mark set and keyed diffing.

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::{Mark, MarkId, MarkPayload};

/// A change to the retained mark set, to be applied by a rendering backend.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkDiff {
    /// A mark whose id was not previously retained.
    Enter {
        /// Stable identity.
        id: MarkId,
        /// Rendering order of the new mark.
        z_index: i32,
        /// Payload to draw.
        new: MarkPayload,
    },
    /// A retained mark whose payload or z-index changed.
    Update {
        /// Stable identity.
        id: MarkId,
        /// Rendering order after the update.
        new_z_index: i32,
        /// Replacement payload.
        new: MarkPayload,
    },
    /// A retained mark absent from the new set.
    Exit {
        /// Stable identity.
        id: MarkId,
        /// The payload that was retained before removal.
        old: MarkPayload,
    },
}

impl MarkDiff {
    /// Returns the id of the affected mark.
    pub fn id(&self) -> MarkId {
        match self {
            Self::Enter { id, .. } | Self::Update { id, .. } | Self::Exit { id, .. } => *id,
        }
    }
}

/// The retained mark set of one visual.
///
/// [`Scene::reconcile`] replaces the whole set with a freshly built one and reports the
/// difference. Marks are matched by [`MarkId`]; a mark present on both sides with an equal
/// payload and z-index produces no diff.
#[derive(Debug, Default)]
pub struct Scene {
    marks: HashMap<MarkId, (i32, MarkPayload)>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of retained marks.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns `true` when no marks are retained.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Returns `true` when a mark with this id is retained.
    pub fn contains(&self, id: MarkId) -> bool {
        self.marks.contains_key(&id)
    }

    /// Iterates over the retained marks in unspecified order.
    pub fn marks(&self) -> impl Iterator<Item = (MarkId, i32, &MarkPayload)> {
        self.marks.iter().map(|(id, (z, payload))| (*id, *z, payload))
    }

    /// Replaces the retained set with `marks` and returns the keyed difference.
    ///
    /// Diff order is deterministic: enters and updates in the order marks were supplied,
    /// then exits sorted by id. If the same id is supplied more than once, the last payload
    /// wins.
    pub fn reconcile(&mut self, marks: Vec<Mark>) -> Vec<MarkDiff> {
        let mut next: HashMap<MarkId, (i32, MarkPayload)> = HashMap::with_capacity(marks.len());
        let mut order: Vec<MarkId> = Vec::with_capacity(marks.len());
        for mark in marks {
            if next.insert(mark.id, (mark.z_index, mark.payload)).is_none() {
                order.push(mark.id);
            }
        }

        let mut diffs = Vec::new();
        for id in order {
            let Some((z_index, payload)) = next.get(&id) else {
                continue;
            };
            match self.marks.get(&id) {
                None => diffs.push(MarkDiff::Enter {
                    id,
                    z_index: *z_index,
                    new: payload.clone(),
                }),
                Some((old_z, old_payload)) => {
                    if old_z != z_index || old_payload != payload {
                        diffs.push(MarkDiff::Update {
                            id,
                            new_z_index: *z_index,
                            new: payload.clone(),
                        });
                    }
                }
            }
        }

        let mut exited: Vec<MarkId> = self
            .marks
            .keys()
            .filter(|id| !next.contains_key(*id))
            .copied()
            .collect();
        exited.sort_unstable();
        for id in exited {
            if let Some((_z, old)) = self.marks.get(&id) {
                diffs.push(MarkDiff::Exit {
                    id,
                    old: old.clone(),
                });
            }
        }

        self.marks = next;
        diffs
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;
    use alloc::vec::Vec;

    use kurbo::Rect;

    use super::*;
    use crate::RectPayload;

    fn rect_mark(id: u64, x0: f64) -> Mark {
        Mark::new(
            MarkId::from_raw(id),
            0,
            RectPayload::new(Rect::new(x0, 0.0, x0 + 10.0, 20.0)),
        )
    }

    #[test]
    fn first_reconcile_enters_everything() {
        let mut scene = Scene::new();
        let diffs = scene.reconcile(vec![rect_mark(1, 0.0), rect_mark(2, 10.0)]);
        assert_eq!(diffs.len(), 2, "both marks must enter");
        assert!(matches!(diffs[0], MarkDiff::Enter { id, .. } if id == MarkId::from_raw(1)));
        assert!(matches!(diffs[1], MarkDiff::Enter { id, .. } if id == MarkId::from_raw(2)));
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn unchanged_marks_are_silent() {
        let mut scene = Scene::new();
        scene.reconcile(vec![rect_mark(1, 0.0), rect_mark(2, 10.0)]);
        let diffs = scene.reconcile(vec![rect_mark(1, 0.0), rect_mark(2, 10.0)]);
        assert!(diffs.is_empty(), "identical sets must produce no diffs");
    }

    #[test]
    fn changed_payload_updates_in_place() {
        let mut scene = Scene::new();
        scene.reconcile(vec![rect_mark(1, 0.0), rect_mark(2, 10.0)]);
        let diffs = scene.reconcile(vec![rect_mark(1, 5.0), rect_mark(2, 10.0)]);
        assert_eq!(diffs.len(), 1, "only the moved mark may diff");
        assert!(matches!(diffs[0], MarkDiff::Update { id, .. } if id == MarkId::from_raw(1)));
    }

    #[test]
    fn z_index_change_is_an_update() {
        let mut scene = Scene::new();
        scene.reconcile(vec![rect_mark(1, 0.0)]);
        let mut raised = rect_mark(1, 0.0);
        raised.z_index = 5;
        let diffs = scene.reconcile(vec![raised]);
        assert!(
            matches!(diffs[0], MarkDiff::Update { new_z_index: 5, .. }),
            "z change must update"
        );
    }

    #[test]
    fn missing_marks_exit_sorted_by_id() {
        let mut scene = Scene::new();
        scene.reconcile(vec![rect_mark(3, 0.0), rect_mark(1, 10.0), rect_mark(2, 20.0)]);
        let diffs = scene.reconcile(vec![]);
        let ids: Vec<u64> = diffs.iter().map(|d| d.id().0).collect();
        assert_eq!(ids, vec![1, 2, 3], "exits must be sorted by id");
        assert!(diffs.iter().all(|d| matches!(d, MarkDiff::Exit { .. })));
        assert!(scene.is_empty());
    }

    #[test]
    fn retained_marks_are_observable() {
        let mut scene = Scene::new();
        scene.reconcile(vec![rect_mark(1, 0.0), rect_mark(2, 10.0)]);
        assert!(scene.contains(MarkId::from_raw(1)));
        assert!(!scene.contains(MarkId::from_raw(9)));
        let mut ids: Vec<u64> = scene.marks().map(|(id, _z, _payload)| id.0).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn duplicate_ids_last_payload_wins() {
        let mut scene = Scene::new();
        let diffs = scene.reconcile(vec![rect_mark(1, 0.0), rect_mark(1, 99.0)]);
        assert_eq!(diffs.len(), 1, "one id reconciles once");
        assert!(matches!(
            &diffs[0],
            MarkDiff::Enter { new: MarkPayload::Rect(r), .. } if r.rect.x0 == 99.0
        ));
    }

    #[test]
    fn enters_and_updates_precede_exits() {
        let mut scene = Scene::new();
        scene.reconcile(vec![rect_mark(1, 0.0), rect_mark(2, 10.0)]);
        let diffs = scene.reconcile(vec![rect_mark(1, 5.0), rect_mark(3, 30.0)]);
        assert_eq!(diffs.len(), 3, "update, enter and exit expected");
        assert!(matches!(diffs[0], MarkDiff::Update { .. }));
        assert!(matches!(diffs[1], MarkDiff::Enter { .. }));
        assert!(matches!(diffs[2], MarkDiff::Exit { id, .. } if id == MarkId::from_raw(2)));
    }
}

// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

/// Where content rests against the viewport on one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EdgeState {
    /// Content overhangs both viewport edges; it can scroll either way.
    #[default]
    None,
    /// The leading (left or top) content edge is at the viewport edge.
    Start,
    /// The trailing (right or bottom) content edge is at the viewport edge.
    End,
    /// Content fits inside the viewport and is pinned.
    Both,
}

/// Edge state of both axes, as classified by the last clamp pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct EdgeStates {
    /// Horizontal axis.
    pub horizontal: EdgeState,
    /// Vertical axis.
    pub vertical: EdgeState,
}

impl EdgeStates {
    /// Returns `true` if a drag by `delta` pushes content against a resting
    /// edge, so an enclosing container may take over the gesture.
    ///
    /// Pinned horizontal content always releases the drag. Otherwise the
    /// drag must move at least one unit towards the resting edge.
    #[must_use]
    pub fn releases_drag(&self, delta: Vec2) -> bool {
        self.horizontal == EdgeState::Both
            || (self.horizontal == EdgeState::Start && delta.x >= 1.0)
            || (self.horizontal == EdgeState::End && delta.x <= -1.0)
            || (self.vertical == EdgeState::Start && delta.y >= 1.0)
            || (self.vertical == EdgeState::End && delta.y <= -1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edges(horizontal: EdgeState, vertical: EdgeState) -> EdgeStates {
        EdgeStates {
            horizontal,
            vertical,
        }
    }

    #[test]
    fn free_content_keeps_drag() {
        let e = edges(EdgeState::None, EdgeState::None);
        assert!(!e.releases_drag(Vec2::new(50.0, 50.0)));
    }

    #[test]
    fn pulling_away_from_start_edge_releases() {
        let e = edges(EdgeState::Start, EdgeState::None);
        assert!(e.releases_drag(Vec2::new(2.0, 0.0)));
        assert!(!e.releases_drag(Vec2::new(-2.0, 0.0)));
        assert!(!e.releases_drag(Vec2::new(0.5, 0.0)));
    }

    #[test]
    fn vertical_edges_need_direction() {
        let e = edges(EdgeState::None, EdgeState::End);
        assert!(e.releases_drag(Vec2::new(0.0, -3.0)));
        assert!(!e.releases_drag(Vec2::new(0.0, 3.0)));
        // Pinned vertically alone does not release.
        let e = edges(EdgeState::None, EdgeState::Both);
        assert!(!e.releases_drag(Vec2::new(0.0, 3.0)));
    }

    #[test]
    fn pinned_horizontally_always_releases() {
        let e = edges(EdgeState::Both, EdgeState::None);
        assert!(e.releases_drag(Vec2::ZERO));
    }
}

//! Property tests: validator, overlay, grid and controller must agree.

use placement_core::prelude::*;
use placement_test_utils::strategies::{arb_drag_path, arb_footprint, arb_grid};
use proptest::prelude::*;

proptest! {
    /// `is_legal` and `can_accept` are the same verdict.
    #[test]
    fn prop_validator_matches_grid(grid in arb_grid(), footprint in arb_footprint()) {
        prop_assert_eq!(is_legal(&footprint, &grid), grid.can_accept(&footprint));
        prop_assert_eq!(
            validate_placement(&footprint, &grid).is_valid(),
            grid.can_accept(&footprint)
        );
    }

    /// Paint is all-valid iff legal and all-invalid iff illegal.
    #[test]
    fn prop_paint_is_uniform(grid in arb_grid(), footprint in arb_footprint()) {
        let mut overlay = PreviewOverlay::new();
        let legal = is_legal(&footprint, &grid);

        prop_assert_eq!(overlay.paint(&footprint, &grid), legal);

        let expected = if legal { PreviewTint::Valid } else { PreviewTint::Invalid };
        for cell in footprint.cells() {
            prop_assert_eq!(overlay.tint(cell), expected);
        }
        prop_assert_eq!(overlay.len() as u64, footprint.size.cell_count());
    }

    /// Commit succeeds exactly when legal, and only touches covered cells.
    #[test]
    fn prop_commit_agrees_with_validator(grid in arb_grid(), footprint in arb_footprint()) {
        let before = grid.clone();
        let mut after = grid.clone();
        let legal = is_legal(&footprint, &grid);

        let result = after.commit(&footprint);
        prop_assert_eq!(result.is_ok(), legal);

        if legal {
            for (cell, state) in before.iter() {
                let now = after.state(cell);
                if footprint.contains(cell) {
                    match state {
                        SurfaceState::Placeable(kind) => {
                            prop_assert_eq!(now, SurfaceState::Occupied(kind));
                        }
                        other => prop_assert!(false, "covered cell was {:?}", other),
                    }
                } else {
                    prop_assert_eq!(now, state);
                }
            }
        } else {
            prop_assert_eq!(&after, &before);
        }
    }

    /// Clear then paint leaves highlights only inside the new footprint.
    #[test]
    fn prop_clear_then_paint_no_residue(
        grid in arb_grid(),
        old in arb_footprint(),
        new in arb_footprint(),
    ) {
        let mut overlay = PreviewOverlay::new();
        overlay.paint(&old, &grid);
        overlay.clear(&old);
        overlay.paint(&new, &grid);

        for (cell, _) in overlay.highlighted() {
            prop_assert!(new.contains(cell), "residual highlight at {}", cell);
        }
    }

    /// Along any drag path, the overlay shows exactly the current footprint
    /// and its tint matches the validator.
    #[test]
    fn prop_drag_overlay_tracks_session(grid in arb_grid(), path in arb_drag_path(12)) {
        let mut controller = PlacementController::new(GridMapper::unit(), grid.clone());
        controller.begin_drag(BuildingTemplate::new("block", 2, 2)).unwrap();

        for cell in path {
            let position = Vec2Fixed::from_ints(cell.x, cell.y);
            controller.move_to(position).unwrap();

            let session = controller.session().unwrap();
            let footprint = session.footprint();
            let legal = is_legal(&footprint, controller.grid());
            prop_assert_eq!(session.is_valid(), legal);

            let expected = if legal { PreviewTint::Valid } else { PreviewTint::Invalid };
            prop_assert_eq!(controller.overlay().len(), 4);
            for cell in footprint.cells() {
                prop_assert_eq!(controller.overlay().tint(cell), expected);
            }
        }

        // Grid is never touched by previews
        prop_assert_eq!(controller.grid(), &grid);
    }

    /// Confirm places iff legal; otherwise the grid is unchanged.
    #[test]
    fn prop_confirm_matches_legality(grid in arb_grid(), path in arb_drag_path(6)) {
        let mut controller = PlacementController::new(GridMapper::unit(), grid.clone());
        controller.begin_drag(BuildingTemplate::new("farm", 2, 1)).unwrap();
        for cell in path {
            controller.move_to(Vec2Fixed::from_ints(cell.x, cell.y)).unwrap();
        }

        let footprint = controller.session().unwrap().footprint();
        let legal = is_legal(&footprint, &grid);
        let outcome = controller.confirm().unwrap();

        prop_assert_eq!(outcome.is_placed(), legal);
        if legal {
            prop_assert!(!controller.is_dragging());
            prop_assert!(controller.overlay().is_empty());
            prop_assert_eq!(controller.grid().occupied_count(), grid.occupied_count() + 2);
        } else {
            prop_assert!(controller.is_dragging());
            prop_assert_eq!(controller.grid(), &grid);
        }
    }

    /// Cancelling at any point leaves the grid untouched and the overlay empty.
    #[test]
    fn prop_cancel_restores_overlay(grid in arb_grid(), path in arb_drag_path(8)) {
        let mut controller = PlacementController::new(GridMapper::unit(), grid.clone());
        controller.begin_drag(BuildingTemplate::new("hut", 1, 1)).unwrap();
        for cell in path {
            controller.move_to(Vec2Fixed::from_ints(cell.x, cell.y)).unwrap();
        }

        controller.cancel().unwrap();

        prop_assert!(controller.overlay().is_empty());
        prop_assert_eq!(controller.grid(), &grid);
        prop_assert_eq!(controller.state(), ControllerState::Idle);
    }
}

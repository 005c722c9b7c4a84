// Secondary Pane Sizing
// Pure geometry: container rect + divider rect + pointer position -> secondary pane size
//
// Sizing Algorithm:
// - Read extent/origin of the container and the divider thickness on the active axis
// - Offset = pointer coordinate - container origin, minus half the divider when the
//   position marks the divider centre
// - Offset is clamped to [0, total - divider]
// - Secondary = offset (primary second) or total - divider - offset (primary first)
// - Percentage mode converts every quantity to a share of the container
// - Primary minimum is enforced after the secondary minimum, so the primary wins ties

use super::geometry::{Position, Rect, SizeUnit};
use super::options::{PrimaryIndex, SizingPolicy};

/// What the supplied position marks on the divider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAnchor {
    /// A pointer holding the divider; the split line sits half a divider before it
    DividerCenter,
    /// The divider's leading edge (mount-time split, resize reconciliation)
    DividerEdge,
}

/// Compute the secondary pane size in the policy's unit
///
/// Never negative and never larger than the container extent (100 in
/// percentage mode). A container with no extent yields 0.
pub fn secondary_pane_size(
    policy: &SizingPolicy,
    container: &Rect,
    divider: &Rect,
    position: Position,
    anchor: PointerAnchor,
) -> f64 {
    let axis = policy.orientation;
    let mut total_size = axis.extent(container);
    let mut divider_size = axis.extent(divider);

    if !(total_size > 0.0) {
        return 0.0;
    }

    let mut offset = axis.coordinate(position) - axis.origin(container);
    if anchor == PointerAnchor::DividerCenter {
        offset -= divider_size / 2.0;
    }

    // Upper bound first: a divider thicker than the container still floors at 0
    offset = offset.min(total_size - divider_size).max(0.0);

    let mut secondary_size = match policy.primary_index {
        PrimaryIndex::Second => offset,
        PrimaryIndex::First => total_size - divider_size - offset,
    };
    let mut primary_size = total_size - divider_size - secondary_size;

    if policy.size_unit == SizeUnit::Percentage {
        secondary_size = (secondary_size * 100.0) / total_size;
        primary_size = (primary_size * 100.0) / total_size;
        divider_size = (divider_size * 100.0) / total_size;
        total_size = 100.0;
    }

    let primary_min = policy.constraints.primary_min_size();
    let secondary_min = policy.constraints.secondary_min_size();

    if primary_size < primary_min {
        secondary_size = (secondary_size - (primary_min - primary_size)).max(0.0);
    } else if secondary_size < secondary_min {
        secondary_size = (total_size - divider_size - primary_min).min(secondary_min);
    }

    secondary_size.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::{Orientation, SizeUnit};
    use crate::core::options::SizeConstraints;
    use proptest::prelude::*;

    fn policy(orientation: Orientation, size_unit: SizeUnit, primary: i64) -> SizingPolicy {
        SizingPolicy {
            orientation,
            size_unit,
            primary_index: PrimaryIndex::from_index(primary),
            constraints: SizeConstraints::default(),
        }
    }

    fn with_mins(mut policy: SizingPolicy, primary: f64, secondary: f64) -> SizingPolicy {
        policy.constraints = SizeConstraints::new(primary, secondary).unwrap();
        policy
    }

    const CONTAINER: Rect = Rect::new(0.0, 0.0, 1024.0, 512.0);
    const H_DIVIDER: Rect = Rect::new(0.0, 40.0, 4.0, 512.0);
    const V_DIVIDER: Rect = Rect::new(40.0, 0.0, 1024.0, 4.0);
    const V_DIVIDER_NARROW: Rect = Rect::new(0.0, 40.0, 512.0, 4.0);

    fn size(p: &SizingPolicy, divider: &Rect, left: f64, top: f64, anchor: PointerAnchor) -> f64 {
        secondary_pane_size(p, &CONTAINER, divider, Position::new(left, top), anchor)
    }

    use PointerAnchor::{DividerCenter as Center, DividerEdge as Edge};

    #[test]
    fn test_horizontal_pixel_primary_first() {
        let p = policy(Orientation::Horizontal, SizeUnit::Pixel, 0);
        assert_eq!(size(&p, &H_DIVIDER, 50.0, 200.0, Center), 972.0);
        assert_eq!(size(&p, &H_DIVIDER, 50.0, 200.0, Edge), 970.0);
    }

    #[test]
    fn test_vertical_pixel_primary_first() {
        let p = policy(Orientation::Vertical, SizeUnit::Pixel, 0);
        assert_eq!(size(&p, &V_DIVIDER, 50.0, 200.0, Center), 310.0);
        assert_eq!(size(&p, &V_DIVIDER, 50.0, 200.0, Edge), 308.0);
    }

    #[test]
    fn test_horizontal_percentage_primary_first() {
        let p = policy(Orientation::Horizontal, SizeUnit::Percentage, 0);
        assert_eq!(size(&p, &H_DIVIDER, 512.0, 128.0, Center), 49.8046875);
        assert_eq!(size(&p, &H_DIVIDER, 512.0, 128.0, Edge), 49.609375);
    }

    #[test]
    fn test_vertical_percentage_primary_first() {
        let p = policy(Orientation::Vertical, SizeUnit::Percentage, 0);
        assert_eq!(size(&p, &V_DIVIDER_NARROW, 512.0, 128.0, Center), 74.609375);
        assert_eq!(size(&p, &V_DIVIDER_NARROW, 512.0, 128.0, Edge), 74.21875);
    }

    #[test]
    fn test_horizontal_pixel_primary_second() {
        let p = policy(Orientation::Horizontal, SizeUnit::Pixel, 1);
        assert_eq!(size(&p, &H_DIVIDER, 50.0, 200.0, Center), 48.0);
        assert_eq!(size(&p, &H_DIVIDER, 50.0, 200.0, Edge), 50.0);
    }

    #[test]
    fn test_vertical_pixel_primary_second() {
        let p = policy(Orientation::Vertical, SizeUnit::Pixel, 1);
        assert_eq!(size(&p, &V_DIVIDER, 50.0, 200.0, Center), 198.0);
        assert_eq!(size(&p, &V_DIVIDER, 50.0, 200.0, Edge), 200.0);
    }

    #[test]
    fn test_horizontal_percentage_primary_second() {
        let p = policy(Orientation::Horizontal, SizeUnit::Percentage, 1);
        assert_eq!(size(&p, &H_DIVIDER, 512.0, 128.0, Center), 49.8046875);
        assert_eq!(size(&p, &H_DIVIDER, 512.0, 128.0, Edge), 50.0);
    }

    #[test]
    fn test_vertical_percentage_primary_second() {
        let p = policy(Orientation::Vertical, SizeUnit::Percentage, 1);
        assert_eq!(size(&p, &V_DIVIDER_NARROW, 512.0, 128.0, Center), 24.609375);
        assert_eq!(size(&p, &V_DIVIDER_NARROW, 512.0, 128.0, Edge), 25.0);
    }

    #[test]
    fn test_pointer_outside_container_is_clamped() {
        let p = policy(Orientation::Horizontal, SizeUnit::Pixel, 0);
        assert_eq!(size(&p, &H_DIVIDER, -10.0, 200.0, Center), 1020.0);
        assert_eq!(size(&p, &H_DIVIDER, -10.0, 200.0, Edge), 1020.0);
        assert_eq!(size(&p, &H_DIVIDER, 1050.0, 200.0, Center), 0.0);
        assert_eq!(size(&p, &H_DIVIDER, 1050.0, 200.0, Edge), 0.0);
    }

    #[test]
    fn test_secondary_min_size_is_respected() {
        let p = with_mins(policy(Orientation::Horizontal, SizeUnit::Pixel, 0), 0.0, 200.0);
        assert_eq!(size(&p, &H_DIVIDER, 1024.0, 200.0, Center), 200.0);
        assert_eq!(size(&p, &H_DIVIDER, 1024.0, 200.0, Edge), 200.0);
    }

    #[test]
    fn test_primary_min_size_wins_over_secondary() {
        let p = with_mins(policy(Orientation::Horizontal, SizeUnit::Pixel, 0), 600.0, 600.0);
        for left in [500.0, 900.0] {
            assert_eq!(size(&p, &H_DIVIDER, left, 200.0, Center), 420.0);
            assert_eq!(size(&p, &H_DIVIDER, left, 200.0, Edge), 420.0);
        }
    }

    #[test]
    fn test_primary_min_larger_than_container_floors_secondary() {
        let p = with_mins(policy(Orientation::Horizontal, SizeUnit::Pixel, 0), 1200.0, 200.0);
        assert_eq!(size(&p, &H_DIVIDER, 200.0, 200.0, Center), 0.0);
        assert_eq!(size(&p, &H_DIVIDER, 200.0, 200.0, Edge), 0.0);
    }

    #[test]
    fn test_percentage_minimums_are_in_percent() {
        let p = with_mins(policy(Orientation::Horizontal, SizeUnit::Percentage, 0), 0.0, 25.0);
        // Pointer at the far edge leaves no room for the secondary pane
        assert_eq!(size(&p, &H_DIVIDER, 1024.0, 0.0, Edge), 25.0);
    }

    #[test]
    fn test_offset_container_origin() {
        let p = policy(Orientation::Horizontal, SizeUnit::Pixel, 1);
        let container = Rect::new(5.0, 100.0, 200.0, 50.0);
        let divider = Rect::new(5.0, 150.0, 1.0, 50.0);
        let result = secondary_pane_size(&p, &container, &divider, Position::new(160.0, 0.0), Edge);
        assert_eq!(result, 60.0);
    }

    #[test]
    fn test_empty_container_yields_zero() {
        let p = policy(Orientation::Horizontal, SizeUnit::Percentage, 0);
        let container = Rect::new(0.0, 0.0, 0.0, 10.0);
        let result = secondary_pane_size(&p, &container, &H_DIVIDER, Position::new(3.0, 3.0), Center);
        assert_eq!(result, 0.0);
    }

    #[test]
    fn test_divider_thicker_than_container() {
        let p = policy(Orientation::Horizontal, SizeUnit::Pixel, 0);
        let container = Rect::new(0.0, 0.0, 3.0, 10.0);
        let result = secondary_pane_size(&p, &container, &H_DIVIDER, Position::new(1.0, 0.0), Edge);
        assert_eq!(result, 0.0);
    }

    fn arb_anchor() -> impl Strategy<Value = PointerAnchor> {
        prop_oneof![Just(Center), Just(Edge)]
    }

    proptest! {
        #[test]
        fn result_stays_within_container(
            width in 1.0f64..4096.0,
            divider in 0.0f64..16.0,
            pointer in -500.0f64..5000.0,
            primary in 0i64..2,
            primary_min in 0.0f64..3000.0,
            secondary_min in 0.0f64..3000.0,
            anchor in arb_anchor(),
        ) {
            let p = with_mins(policy(Orientation::Horizontal, SizeUnit::Pixel, primary), primary_min, secondary_min);
            let container = Rect::new(0.0, 0.0, width, 100.0);
            let divider_rect = Rect::new(0.0, 0.0, divider, 100.0);
            let result = secondary_pane_size(&p, &container, &divider_rect, Position::new(pointer, 0.0), anchor);
            prop_assert!(result >= 0.0);
            prop_assert!(result <= width);
        }

        #[test]
        fn identical_inputs_give_identical_output(
            width in 1.0f64..4096.0,
            pointer in -100.0f64..4200.0,
            anchor in arb_anchor(),
        ) {
            let p = policy(Orientation::Horizontal, SizeUnit::Percentage, 0);
            let container = Rect::new(0.0, 0.0, width, 100.0);
            let first = secondary_pane_size(&p, &container, &H_DIVIDER, Position::new(pointer, 0.0), anchor);
            let second = secondary_pane_size(&p, &container, &H_DIVIDER, Position::new(pointer, 0.0), anchor);
            prop_assert_eq!(first.to_bits(), second.to_bits());
        }

        #[test]
        fn moving_away_from_secondary_never_grows_it(
            pointer in -100i32..1100,
            step in 0i32..300,
            primary_min in 0u32..700,
            secondary_min in 0u32..700,
            anchor in arb_anchor(),
        ) {
            let (pointer, step) = (f64::from(pointer), f64::from(step));
            let (primary_min, secondary_min) = (f64::from(primary_min), f64::from(secondary_min));

            // Primary first: the secondary pane is after the divider, moving right shrinks it
            let first = with_mins(policy(Orientation::Horizontal, SizeUnit::Pixel, 0), primary_min, secondary_min);
            let near = size(&first, &H_DIVIDER, pointer, 0.0, anchor);
            let far = size(&first, &H_DIVIDER, pointer + step, 0.0, anchor);
            prop_assert!(far <= near);

            // Primary second: the secondary pane is before the divider, moving left shrinks it
            let second = with_mins(policy(Orientation::Horizontal, SizeUnit::Pixel, 1), primary_min, secondary_min);
            let near = size(&second, &H_DIVIDER, pointer, 0.0, anchor);
            let far = size(&second, &H_DIVIDER, pointer - step, 0.0, anchor);
            prop_assert!(far <= near);
        }

        #[test]
        fn primary_minimum_wins_when_both_cannot_fit(
            primary_min in 0u32..1020,
            surplus in 1u32..1000,
            pointer in -100i32..1100,
            anchor in arb_anchor(),
        ) {
            let primary_min = f64::from(primary_min);
            let secondary_min = 1024.0 - primary_min + f64::from(surplus);
            let p = with_mins(policy(Orientation::Horizontal, SizeUnit::Pixel, 0), primary_min, secondary_min);
            let result = size(&p, &H_DIVIDER, f64::from(pointer), 0.0, anchor);
            prop_assert!(1024.0 - result >= primary_min);
        }

        #[test]
        fn percentage_matches_scaled_pixels(
            width in 8.0f64..4096.0,
            pointer in -100.0f64..4200.0,
            primary in 0i64..2,
            anchor in arb_anchor(),
        ) {
            let container = Rect::new(0.0, 0.0, width, 100.0);
            let position = Position::new(pointer, 0.0);
            let pixel = secondary_pane_size(
                &policy(Orientation::Horizontal, SizeUnit::Pixel, primary), &container, &H_DIVIDER, position, anchor,
            );
            let percent = secondary_pane_size(
                &policy(Orientation::Horizontal, SizeUnit::Percentage, primary), &container, &H_DIVIDER, position, anchor,
            );
            prop_assert_eq!(percent, (pixel * 100.0) / width);
        }
    }
}

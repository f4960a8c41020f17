/// Local axis naming and the axis order used by segmentation files
use nalgebra::Vector3;

/// One of the three local axes of a box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Component index of this axis in an `(x, y, z)` vector
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Which local axis each of the three axis vectors of a record describes,
/// in the order they appear in the file.
pub const FILE_AXIS_ORDER: [Axis; 3] = [Axis::X, Axis::Z, Axis::Y];

/// Which position component each of the three translation values describes,
/// in the order they appear in the file.
pub const FILE_POSITION_ORDER: [Axis; 3] = [Axis::X, Axis::Z, Axis::Y];

/// Position component whose sign is inverted when read from the file.
pub const FLIPPED_POSITION_AXIS: Axis = Axis::Y;

/// Reorder values given in `order` into `(x, y, z)` order.
pub fn unpermute<T: Copy>(values: [T; 3], order: [Axis; 3]) -> [T; 3] {
    let mut out = values;
    for (value, axis) in values.into_iter().zip(order) {
        out[axis.index()] = value;
    }
    out
}

/// Reorder the components of a vector given in `order` into `(x, y, z)` order.
pub fn unpermute_vector(v: &Vector3<f32>, order: [Axis; 3]) -> Vector3<f32> {
    let [x, y, z] = unpermute([v.x, v.y, v.z], order);
    Vector3::new(x, y, z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_order_is_a_permutation() {
        for order in [FILE_AXIS_ORDER, FILE_POSITION_ORDER] {
            let mut seen = [false; 3];
            for axis in order {
                seen[axis.index()] = true;
            }
            assert_eq!(seen, [true; 3]);
        }
    }

    #[test]
    fn test_unpermute_swaps_y_and_z() {
        assert_eq!(unpermute(['a', 'b', 'c'], FILE_AXIS_ORDER), ['a', 'c', 'b']);

        let v = unpermute_vector(&Vector3::new(1.0, 2.0, 3.0), FILE_POSITION_ORDER);
        assert_eq!(v, Vector3::new(1.0, 3.0, 2.0));
    }

    #[test]
    fn test_identity_order() {
        let order = [Axis::X, Axis::Y, Axis::Z];
        assert_eq!(unpermute([7, 8, 9], order), [7, 8, 9]);
    }
}

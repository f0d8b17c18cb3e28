use crate::error::{Error, Result};

/// Squared Euclidean distance between two points of equal length.
///
/// Fails with [`Error::DimensionMismatch`] when the lengths differ.
///
/// ```rust
/// use densityscore::cluster::squared_euclidean;
///
/// let d = squared_euclidean(&[0.0, 0.0], &[3.0, 4.0]).unwrap();
/// assert_eq!(d, 25.0);
/// ```
pub fn squared_euclidean(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(Error::DimensionMismatch {
            expected: a.len(),
            found: b.len(),
        });
    }
    Ok(squared_euclidean_unchecked(a, b))
}

/// Like [`squared_euclidean`], for callers that already validated the lengths.
#[inline]
pub(crate) fn squared_euclidean_unchecked(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

/// Check that every point has the dimensionality of the first one.
///
/// Returns that dimensionality, or `None` when there are no points.
pub(crate) fn common_dim<'a, I>(points: I) -> Result<Option<usize>>
where
    I: IntoIterator<Item = &'a Vec<f32>>,
{
    let mut dim = None;
    for p in points {
        match dim {
            None => dim = Some(p.len()),
            Some(expected) if expected != p.len() => {
                return Err(Error::DimensionMismatch {
                    expected,
                    found: p.len(),
                });
            }
            Some(_) => {}
        }
    }
    Ok(dim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squared_distance_is_sum_of_squares() {
        let d = squared_euclidean(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
        assert_eq!(d, 1.0 + 4.0 + 9.0);
    }

    #[test]
    fn squared_distance_to_self_is_zero() {
        let p = [0.3, -7.5, 12.0];
        assert_eq!(squared_euclidean(&p, &p).unwrap(), 0.0);
    }

    #[test]
    fn squared_distance_rejects_length_mismatch() {
        let err = squared_euclidean(&[0.0, 0.0], &[0.0]).unwrap_err();
        assert!(matches!(
            err,
            Error::DimensionMismatch {
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn common_dim_reports_first_mismatch() {
        let data = vec![vec![0.0, 0.0], vec![1.0, 1.0], vec![1.0, 1.0, 1.0]];
        let err = common_dim(&data).unwrap_err();
        assert!(matches!(
            err,
            Error::DimensionMismatch {
                expected: 2,
                found: 3
            }
        ));
    }

    #[test]
    fn common_dim_of_nothing_is_none() {
        let data: Vec<Vec<f32>> = vec![];
        assert_eq!(common_dim(&data).unwrap(), None);
    }
}

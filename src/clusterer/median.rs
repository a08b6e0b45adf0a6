use crate::clusterer::types::BoxSize;

/// Element-wise median of a non-empty set of boxes.
///
/// Width and height are taken independently. An even count averages the two middle
/// values with integer division, so centers stay integral.
pub fn median_box(members: &[BoxSize]) -> Option<BoxSize> {
    if members.is_empty() {
        return None;
    }

    let mut widths: Vec<u32> = members.iter().map(|b| b.width).collect();
    let mut heights: Vec<u32> = members.iter().map(|b| b.height).collect();

    Some(BoxSize {
        width: median(&mut widths),
        height: median(&mut heights),
    })
}

fn median(values: &mut [u32]) -> u32 {
    values.sort_unstable();
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        values[mid]
    } else {
        ((u64::from(values[mid - 1]) + u64::from(values[mid])) / 2) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_odd() {
        let members = [BoxSize::new(3, 30), BoxSize::new(1, 10), BoxSize::new(2, 20)];
        assert_eq!(median_box(&members), Some(BoxSize::new(2, 20)));
    }

    #[test]
    fn test_median_even_truncates() {
        let members = [BoxSize::new(10, 4), BoxSize::new(11, 7)];
        assert_eq!(median_box(&members), Some(BoxSize::new(10, 5)));
    }

    #[test]
    fn test_median_dimensions_independent() {
        let members = [BoxSize::new(1, 100), BoxSize::new(50, 2), BoxSize::new(99, 51)];
        assert_eq!(median_box(&members), Some(BoxSize::new(50, 51)));
    }

    #[test]
    fn test_median_empty() {
        assert_eq!(median_box(&[]), None);
    }
}

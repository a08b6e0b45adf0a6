use crate::clusterer::BoxSize;
use crate::error::AnchorError;
use std::fs;
use std::path::Path;

/// Render anchors as `"w,h, w,h, ...\n"`, the layout darknet-style configs expect.
pub fn format_anchors(anchors: &[BoxSize]) -> String {
    let mut out = anchors
        .iter()
        .map(BoxSize::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    out.push('\n');
    out
}

/// Write anchors to `path`, replacing any existing file.
///
/// Anchors are written in the order given; callers pass
/// [`ClusterResult::sorted_centers`](crate::ClusterResult::sorted_centers).
pub fn write_anchors(path: impl AsRef<Path>, anchors: &[BoxSize]) -> Result<(), AnchorError> {
    fs::write(path, format_anchors(anchors))?;
    Ok(())
}

/// Parse the output of [`format_anchors`] back into box sizes.
pub fn parse_anchors(text: &str) -> Result<Vec<BoxSize>, AnchorError> {
    let values = text
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| {
            v.parse::<u32>()
                .map_err(|e| AnchorError::MalformedAnchors(format!("{v:?}: {e}")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if values.len() % 2 != 0 {
        return Err(AnchorError::MalformedAnchors(format!(
            "odd number of values ({})",
            values.len()
        )));
    }

    Ok(values
        .chunks_exact(2)
        .map(|pair| BoxSize::new(pair[0], pair[1]))
        .collect())
}

pub fn read_anchors(path: impl AsRef<Path>) -> Result<Vec<BoxSize>, AnchorError> {
    parse_anchors(&fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_three_anchors() {
        let anchors = [BoxSize::new(10, 13), BoxSize::new(16, 30), BoxSize::new(33, 23)];
        assert_eq!(format_anchors(&anchors), "10,13, 16,30, 33,23\n");
    }

    #[test]
    fn test_format_single_anchor() {
        assert_eq!(format_anchors(&[BoxSize::new(7, 9)]), "7,9\n");
    }

    #[test]
    fn test_parse_reproduces_written_values() {
        let anchors = vec![
            BoxSize::new(12, 16),
            BoxSize::new(19, 36),
            BoxSize::new(40, 28),
            BoxSize::new(459, 401),
        ];
        assert_eq!(parse_anchors(&format_anchors(&anchors)).unwrap(), anchors);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_anchors("10,13, 16"),
            Err(AnchorError::MalformedAnchors(_))
        ));
        assert!(parse_anchors("10,abc\n").is_err());
    }

    #[test]
    fn test_write_then_read_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("anchors.txt");
        let anchors = vec![BoxSize::new(10, 13), BoxSize::new(62, 45)];

        write_anchors(&path, &anchors).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "10,13, 62,45\n");
        assert_eq!(read_anchors(&path).unwrap(), anchors);
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_anchors("/nonexistent/anchors.txt").unwrap_err();
        assert!(matches!(err, AnchorError::Io(_)));
    }
}

use crate::error::AnchorError;

/// One `x1,y1,x2,y2[,class]` group from an annotation line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawBox {
    pub x1: i64,
    pub y1: i64,
    pub x2: i64,
    pub y2: i64,
    pub class_id: Option<i64>,
}

impl RawBox {
    pub fn width(&self) -> i64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> i64 {
        self.y2 - self.y1
    }
}

/// A parsed annotation line: an image reference and its boxes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationLine {
    pub image: String,
    pub boxes: Vec<RawBox>,
}

/// Parse `"<image> x1,y1,x2,y2,class ..."`.
///
/// `line_no` is 1-based and only used for error messages. Returns `Ok(None)` for
/// blank lines.
pub fn parse_annotation_line(
    line: &str,
    line_no: usize,
) -> Result<Option<AnnotationLine>, AnchorError> {
    let mut tokens = line.split_ascii_whitespace();

    let Some(image) = tokens.next() else {
        return Ok(None);
    };

    let boxes = tokens
        .map(|token| parse_box(token, line_no))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Some(AnnotationLine {
        image: image.to_string(),
        boxes,
    }))
}

fn parse_box(token: &str, line_no: usize) -> Result<RawBox, AnchorError> {
    let malformed = |reason: String| AnchorError::MalformedAnnotation {
        line: line_no,
        reason,
    };

    let fields: Vec<&str> = token.split(',').collect();
    if fields.len() < 4 {
        return Err(malformed(format!(
            "{token:?}: expected x1,y1,x2,y2[,class] but found {} fields",
            fields.len()
        )));
    }

    let coord = |f: &str| {
        f.parse::<i64>()
            .map_err(|e| malformed(format!("{token:?}: {f:?} is not an integer ({e})")))
    };

    // class and anything after it do not affect the box size
    let raw = RawBox {
        x1: coord(fields[0])?,
        y1: coord(fields[1])?,
        x2: coord(fields[2])?,
        y2: coord(fields[3])?,
        class_id: fields.get(4).and_then(|f| f.parse().ok()),
    };

    if raw.width() < 0 || raw.height() < 0 {
        return Err(malformed(format!("{token:?}: corners are inverted")));
    }

    Ok(raw)
}

use tracing::{info, warn};

use crate::input::{IngestError, RowError};
use crate::model::schema::{self, FIELD_COUNT};

/// Outcome of ingesting one CSV upload: the rows that conform to the schema,
/// plus a record of every row that did not.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvIngest {
    pub vectors: Vec<Vec<f64>>,
    pub rejected: Vec<RowError>,
}

impl CsvIngest {
    pub fn accepted(&self) -> usize {
        self.vectors.len()
    }
}

#[derive(Debug, Clone)]
enum Layout {
    /// First non-empty line is already data; rows carry exactly the 17
    /// schema columns in schema order.
    Headerless,
    /// First non-empty line names columns. `map[i]` is the position within a
    /// data row of schema field `i`; `width` is the header's column count.
    Headered { map: Vec<usize>, width: usize },
}

/// Parse raw CSV text from the upload collaborator into schema-ordered
/// feature vectors.
///
/// The first non-empty line decides the layout: if every comma-separated
/// token on it parses as a number the file is headerless, otherwise it is a
/// header that must name all 17 schema fields (case-insensitive, any order,
/// extra columns allowed). Bad data rows are rejected and recorded, never
/// zero-filled.
pub fn ingest_csv(text: &str) -> Result<CsvIngest, IngestError> {
    let mut lines = text.lines().filter(|l| !l.trim().is_empty());
    let first = lines.next().ok_or(IngestError::EmptyInput)?;

    let layout = detect_layout(first)?;

    let mut vectors = Vec::new();
    let mut rejected = Vec::new();
    let mut row_idx = 0usize;

    let mut handle_line = |line: &str, row: usize| match parse_row(line, &layout) {
        Ok(values) => vectors.push(values),
        Err(reason) => {
            warn!("rejected data row {}: {}", row, reason);
            rejected.push(RowError { row, reason });
        }
    };

    if matches!(layout, Layout::Headerless) {
        handle_line(first, row_idx);
        row_idx += 1;
    }
    for line in lines {
        handle_line(line, row_idx);
        row_idx += 1;
    }

    if vectors.is_empty() {
        return Err(IngestError::NoValidRows);
    }

    info!(
        "ingested CSV: {} row(s) accepted, {} rejected",
        vectors.len(),
        rejected.len()
    );

    Ok(CsvIngest { vectors, rejected })
}

fn detect_layout(first_line: &str) -> Result<Layout, IngestError> {
    let tokens: Vec<&str> = first_line.split(',').map(str::trim).collect();

    let all_numeric = tokens.iter().all(|t| t.parse::<f64>().is_ok());
    if all_numeric {
        return Ok(Layout::Headerless);
    }

    let mut map = vec![0usize; FIELD_COUNT];
    let mut missing = Vec::new();
    for (schema_idx, field) in schema::FIELDS.iter().enumerate() {
        match tokens
            .iter()
            .position(|t| t.eq_ignore_ascii_case(field.name))
        {
            Some(col) => map[schema_idx] = col,
            None => missing.push(field.name.to_string()),
        }
    }
    if !missing.is_empty() {
        return Err(IngestError::MissingColumns(missing));
    }

    Ok(Layout::Headered {
        map,
        width: tokens.len(),
    })
}

fn parse_row(line: &str, layout: &Layout) -> Result<Vec<f64>, String> {
    let tokens: Vec<&str> = line.split(',').map(str::trim).collect();

    let expected_width = match layout {
        Layout::Headerless => FIELD_COUNT,
        Layout::Headered { width, .. } => *width,
    };
    if tokens.len() != expected_width {
        return Err(format!(
            "expected {} columns, found {}",
            expected_width,
            tokens.len()
        ));
    }

    let mut values = Vec::with_capacity(FIELD_COUNT);
    for (schema_idx, field) in schema::FIELDS.iter().enumerate() {
        let col = match layout {
            Layout::Headerless => schema_idx,
            Layout::Headered { map, .. } => map[schema_idx],
        };
        let token = tokens[col];
        let value: f64 = token
            .parse()
            .map_err(|_| format!("column '{}': invalid number '{}'", field.name, token))?;
        if !value.is_finite() {
            return Err(format!(
                "column '{}': non-finite value '{}'",
                field.name, token
            ));
        }
        if schema::is_flag(schema_idx) && value != 0.0 && value != 1.0 {
            return Err(format!(
                "column '{}': flag must be 0 or 1, got '{}'",
                field.name, token
            ));
        }
        values.push(value);
    }

    Ok(values)
}

//! Program import/export in the row-major JSON interchange form.
//!
//! Every non-null cell needs a string `type` and `next`. The cell starts from the registry
//! defaults of its `type`, supplied fields are laid over them, and fields the type does not
//! know are ignored. Values are not clamped.

use serde_json::{Map, Value};
use shared::{chip::Chip, error::ChipError};

use crate::{program::Program, registry::ChipRegistry};

pub fn parse_program(registry: &ChipRegistry, text: &str) -> Result<Program, ChipError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| ChipError::malformed_program(e.to_string()))?;
    import_program(registry, &value)
}

pub fn import_program(registry: &ChipRegistry, value: &Value) -> Result<Program, ChipError> {
    let rows = value
        .as_array()
        .ok_or_else(|| ChipError::malformed_program("expected an array of rows"))?;

    let mut grid = Vec::with_capacity(rows.len());
    for (y, row) in rows.iter().enumerate() {
        let cells = row
            .as_array()
            .ok_or_else(|| ChipError::malformed_program(format!("row {y} is not an array")))?;
        let mut line = Vec::with_capacity(cells.len());
        for (x, cell) in cells.iter().enumerate() {
            line.push(import_cell(registry, cell).map_err(|e| locate(e, x, y))?);
        }
        grid.push(line);
    }
    Ok(Program::from_rows(grid))
}

pub fn import_cell(registry: &ChipRegistry, cell: &Value) -> Result<Option<Chip>, ChipError> {
    if cell.is_null() {
        return Ok(None);
    }
    let fields = cell
        .as_object()
        .ok_or_else(|| ChipError::malformed_chip("cell must be an object or null"))?;
    let name = fields
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| ChipError::malformed_chip("missing string field 'type'"))?;
    if !fields.get("next").is_some_and(Value::is_string) {
        return Err(ChipError::malformed_chip("missing string field 'next'"));
    }

    let base = registry.create(name, None)?;
    let mut merged = match serde_json::to_value(&base) {
        Ok(Value::Object(map)) => map,
        Ok(_) | Err(_) => Map::new(),
    };
    for (key, value) in fields {
        if let Some(slot) = merged.get_mut(key) {
            *slot = value.clone();
        }
    }

    serde_json::from_value(Value::Object(merged))
        .map(Some)
        .map_err(|e| ChipError::malformed_chip(format!("{name}: {e}")))
}

pub fn export_program(program: &Program) -> serde_json::Result<String> {
    serde_json::to_string_pretty(program.rows())
}

fn locate(err: ChipError, x: usize, y: usize) -> ChipError {
    match err {
        ChipError::MalformedChip { reason } => {
            ChipError::malformed_chip(format!("cell ({x}, {y}): {reason}"))
        }
        other => other,
    }
}

#[cfg(test)]
#[path = "tests/interchange_tests.rs"]
mod tests;

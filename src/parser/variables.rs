//! Global-variable dump reader.
//!
//! Each declaration line looks like
//! `++D=<type>\tN=<name>\tNTP=<scope>\tIV=<init>\tCom=<comment>`; every
//! other line is a header and is ignored.

use indexmap::IndexMap;

use crate::base::constants::{
    DUMP_FIELD_ASSIGN, DUMP_FIELD_SEPARATOR, DUMP_LINE_MARKER, dump_keys,
};
use crate::syntax::GlobalVariable;

use super::error::ParseError;

/// Parse every declaration line of a dump.
pub fn parse_global_variables(text: &str) -> Result<Vec<GlobalVariable>, ParseError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut variables = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if let Some(variable) = parse_dump_line(line, index + 1)? {
            variables.push(variable);
        }
    }
    Ok(variables)
}

/// Parse one dump line. Returns `None` for non-declaration lines.
///
/// Fields without `=` are dropped. A line without a name is an error.
pub fn parse_dump_line(line: &str, line_no: usize) -> Result<Option<GlobalVariable>, ParseError> {
    let Some(body) = line.strip_prefix(DUMP_LINE_MARKER) else {
        return Ok(None);
    };

    let mut parts = body.trim().split(DUMP_FIELD_SEPARATOR);
    let mut fields = IndexMap::new();
    fields.insert(
        dump_keys::DATA_TYPE.to_string(),
        parts.next().unwrap_or_default().to_string(),
    );
    for part in parts {
        if let Some((key, value)) = part.split_once(DUMP_FIELD_ASSIGN) {
            fields.insert(key.to_string(), value.to_string());
        }
    }

    let name = fields
        .get(dump_keys::NAME)
        .cloned()
        .ok_or(ParseError::MissingField {
            line: line_no,
            key: dump_keys::NAME,
        })?;

    Ok(Some(GlobalVariable {
        name,
        data_type: fields[dump_keys::DATA_TYPE].clone(),
        comment: fields
            .get(dump_keys::COMMENT)
            .map(|raw| GlobalVariable::split_comment(raw).to_string())
            .unwrap_or_default(),
        initial_value: fields.get(dump_keys::INITIAL_VALUE).cloned(),
        network_publish: fields.get(dump_keys::NETWORK_PUBLISH).cloned(),
        fields,
    }))
}

//! `DataType` declaration files.
//!
//! ```xml
//! <DataType Name="sMotor" BaseType="STRUCT" Comment="" ...>
//!   <DataType Name="Speed" BaseType="REAL" Comment="rpm" ... />
//!   <DataType Name="Axis" BaseType="_sAXIS_REF_STA" Comment="" ... />
//! </DataType>
//! ```

use crate::base::constants::{ENUM_MARKER, STRUCT_MARKER};
use crate::syntax::{TypeDeclaration, TypeKind};

use super::error::ParseError;
use super::xml::XmlElement;

const DATA_TYPE_TAG: &str = "DataType";

/// Read every structure and enumeration declared anywhere in a data-type
/// document, in document order.
pub fn parse_data_types(
    input: &[u8],
    namespace: Option<&str>,
) -> Result<Vec<TypeDeclaration>, ParseError> {
    let root = XmlElement::parse(input)?;
    root.descendants()
        .filter(|e| e.name == DATA_TYPE_TAG)
        .filter(|e| {
            matches!(e.attr("BaseType"), Some(STRUCT_MARKER) | Some(ENUM_MARKER))
        })
        .map(|e| declaration_from_element(e, namespace))
        .collect()
}

/// Build a declaration from a `DataType` element.
///
/// Structure members are built eagerly so the result is a complete tree.
pub fn declaration_from_element(
    element: &XmlElement,
    namespace: Option<&str>,
) -> Result<TypeDeclaration, ParseError> {
    let name = element
        .attr("Name")
        .ok_or_else(|| ParseError::missing_attribute(format!("{DATA_TYPE_TAG}/@Name")))?;
    let base_type = element.attr("BaseType").unwrap_or_default();

    let declaration = TypeDeclaration::new(name, base_type)
        .with_comment(element.attr("Comment").unwrap_or_default())
        .with_initial_value(element.attr("InitialValue").map(String::from))
        .with_namespace(namespace.map(String::from));

    if declaration.kind() != TypeKind::Struct {
        return Ok(declaration);
    }

    let origin = declaration.qualified_name();
    let members = element
        .children_named(DATA_TYPE_TAG)
        .map(|child| declaration_from_element(child, None).map(|m| m.declared_in(&origin)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(declaration.with_members(members))
}

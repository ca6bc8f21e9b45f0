//! Fixed values of the Sysmac Studio project format.

/// Marker opening every declaration line of a global-variable dump.
pub const DUMP_LINE_MARKER: &str = "++D=";

/// Separator between a dump field key and its value.
pub const DUMP_FIELD_ASSIGN: char = '=';

/// Separator between dump fields.
pub const DUMP_FIELD_SEPARATOR: char = '\t';

/// Dump field keys.
pub mod dump_keys {
    /// Variable name.
    pub const NAME: &str = "N";
    /// Raw data type (also the first, unkeyed field).
    pub const DATA_TYPE: &str = "D";
    /// Network publication scope.
    pub const NETWORK_PUBLISH: &str = "NTP";
    /// Initial value.
    pub const INITIAL_VALUE: &str = "IV";
    /// Comment, possibly followed by a group label.
    pub const COMMENT: &str = "Com";
}

/// Only variables whose publication scope equals this value are exported.
pub const PUBLICATION_ONLY: &str = "PublicationOnly";

/// Escaped tab sequence separating a comment from its group label.
pub const COMMENT_GROUP_SEPARATOR: &str = "$t$t$t$t";

/// `BaseType` marker of a structure declaration.
pub const STRUCT_MARKER: &str = "STRUCT";

/// `BaseType` marker of an enumeration declaration.
pub const ENUM_MARKER: &str = "ENUM";

/// Prefix of an array type descriptor.
pub const ARRAY_PREFIX: &str = "ARRAY[";

/// Separator between namespace and type name in dictionary keys.
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Separator between a parent path and a member name.
pub const MEMBER_SEPARATOR: char = '.';

/// Extension of the per-project entity index.
pub const OEM_EXTENSION: &str = "oem";

/// Extension of project properties, data-type and variable files.
pub const XML_EXTENSION: &str = "xml";

/// Default Sysmac Studio solution directory.
pub const DEFAULT_SOLUTION_PATH: &str = r"C:\OMRON\Data\Solution";

/// Vendor motion-control structures that never appear in project files.
pub const INTERNAL_TYPE_NAMES: [&str; 4] = [
    "_sAXIS_REF_STA",
    "_sAXIS_REF_DET",
    "_sAXIS_REF_STA_DRV",
    "_sMC_REF_EVENT",
];

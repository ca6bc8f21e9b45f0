use std::fmt;

/// A scalar storage type that cannot be expanded further.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Primitive {
    Bool,
    Byte,
    Date,
    DateAndTime,
    Dint,
    Dword,
    Int,
    Lint,
    Lreal,
    Lword,
    Real,
    Sint,
    String,
    Time,
    TimeOfDay,
    Udint,
    Uint,
    Ulint,
    Usint,
    Word,
}

impl Primitive {
    /// Every primitive, in the order Sysmac Studio lists them.
    pub const ALL: [Primitive; 20] = [
        Primitive::Bool,
        Primitive::Byte,
        Primitive::Date,
        Primitive::DateAndTime,
        Primitive::Dint,
        Primitive::Dword,
        Primitive::Int,
        Primitive::Lint,
        Primitive::Lreal,
        Primitive::Lword,
        Primitive::Real,
        Primitive::Sint,
        Primitive::String,
        Primitive::Time,
        Primitive::TimeOfDay,
        Primitive::Udint,
        Primitive::Uint,
        Primitive::Ulint,
        Primitive::Usint,
        Primitive::Word,
    ];

    /// Storage type enumerations are exported as.
    pub const ENUM_STORAGE: Primitive = Primitive::Dint;

    /// Look up a primitive by its exact (upper-case) Sysmac name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Primitive::Bool => "BOOL",
            Primitive::Byte => "BYTE",
            Primitive::Date => "DATE",
            Primitive::DateAndTime => "DATE_AND_TIME",
            Primitive::Dint => "DINT",
            Primitive::Dword => "DWORD",
            Primitive::Int => "INT",
            Primitive::Lint => "LINT",
            Primitive::Lreal => "LREAL",
            Primitive::Lword => "LWORD",
            Primitive::Real => "REAL",
            Primitive::Sint => "SINT",
            Primitive::String => "STRING",
            Primitive::Time => "TIME",
            Primitive::TimeOfDay => "TIME_OF_DAY",
            Primitive::Udint => "UDINT",
            Primitive::Uint => "UINT",
            Primitive::Ulint => "ULINT",
            Primitive::Usint => "USINT",
            Primitive::Word => "WORD",
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! HMI tag-file writer.
//!
//! ```text
//! HOST<TAB>NAME<TAB>DATATYPE<TAB>ADDRESS<TAB>COMMENT<TAB>TAGLINK<TAB>RW<TAB>POU<CRLF>
//! <TAB>motor.Speed<TAB>REAL<TAB><TAB>rpm<TAB>TRUE<TAB>RW<TAB><CRLF>
//! ```
//!
//! `HOST`, `ADDRESS` and `POU` stay empty. Fields holding a tab, a quote or
//! a line break are quoted with inner quotes doubled. The file is encoded
//! as Windows-1252.

use std::borrow::Cow;
use std::io::Write;
use std::path::Path;

use encoding_rs::WINDOWS_1252;

use super::error::InterchangeError;
use crate::syntax::ResolvedSymbol;

/// Column order of the tag file.
pub const HEADER: [&str; 8] = [
    "HOST", "NAME", "DATATYPE", "ADDRESS", "COMMENT", "TAGLINK", "RW", "POU",
];

const DELIMITER: char = '\t';
const LINE_ENDING: &str = "\r\n";
const QUOTE: char = '"';
const ACCESS: &str = "RW";

/// Content of the `TAGLINK` column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TagLink {
    /// Left blank.
    Empty,
    /// Literal `TRUE`.
    #[default]
    True,
}

impl TagLink {
    pub fn as_str(self) -> &'static str {
        match self {
            TagLink::Empty => "",
            TagLink::True => "TRUE",
        }
    }
}

/// Export options.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagFileOptions {
    pub tag_link: TagLink,
}

impl TagFileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tag_link(mut self, tag_link: TagLink) -> Self {
        self.tag_link = tag_link;
        self
    }
}

/// Tag-file writer.
#[derive(Clone, Debug, Default)]
pub struct TagFile {
    options: TagFileOptions,
}

impl TagFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: TagFileOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &TagFileOptions {
        &self.options
    }

    /// Render the file as text, one row per symbol in input order.
    pub fn render(&self, symbols: &[ResolvedSymbol]) -> String {
        let mut out = header_row();
        for symbol in symbols {
            out.push_str(&self.row(symbol));
        }
        out
    }

    /// Render and encode the file as Windows-1252.
    pub fn encode(&self, symbols: &[ResolvedSymbol]) -> Result<Vec<u8>, InterchangeError> {
        let mut bytes = header_row().into_bytes();
        for symbol in symbols {
            let row = self.row(symbol);
            let (encoded, _, had_errors) = WINDOWS_1252.encode(&row);
            if had_errors {
                return Err(InterchangeError::unencodable(
                    &symbol.name,
                    WINDOWS_1252.name(),
                ));
            }
            bytes.extend_from_slice(&encoded);
        }
        Ok(bytes)
    }

    /// Encode and write the file to `writer`.
    pub fn write_to<W: Write>(
        &self,
        mut writer: W,
        symbols: &[ResolvedSymbol],
    ) -> Result<(), InterchangeError> {
        let bytes = self.encode(symbols)?;
        writer.write_all(&bytes)?;
        writer.flush()?;
        Ok(())
    }

    /// Encode and write the file to `path`.
    ///
    /// Nothing is written when a symbol cannot be encoded.
    pub fn write_to_path(
        &self,
        path: impl AsRef<Path>,
        symbols: &[ResolvedSymbol],
    ) -> Result<(), InterchangeError> {
        let path = path.as_ref();
        let bytes = self.encode(symbols)?;
        std::fs::write(path, bytes)?;
        tracing::info!("Exported {} symbols to {}", symbols.len(), path.display());
        Ok(())
    }

    fn row(&self, symbol: &ResolvedSymbol) -> String {
        let data_type = symbol.base_type.to_string();
        let fields = [
            "",
            symbol.name.as_str(),
            data_type.as_str(),
            "",
            symbol.comment.as_str(),
            self.options.tag_link.as_str(),
            ACCESS,
            "",
        ];
        join_row(fields.iter().map(|f| quote(f)))
    }
}

fn header_row() -> String {
    join_row(HEADER.iter().map(|h| Cow::Borrowed(*h)))
}

fn join_row<'a>(fields: impl Iterator<Item = Cow<'a, str>>) -> String {
    let mut row = String::new();
    for (i, field) in fields.enumerate() {
        if i > 0 {
            row.push(DELIMITER);
        }
        row.push_str(&field);
    }
    row.push_str(LINE_ENDING);
    row
}

/// Quote a field when it holds the delimiter, a quote or a line break.
pub fn quote(field: &str) -> Cow<'_, str> {
    if field.contains([DELIMITER, QUOTE, '\r', '\n']) {
        let doubled = field.replace(QUOTE, "\"\"");
        Cow::Owned(format!("{QUOTE}{doubled}{QUOTE}"))
    } else {
        Cow::Borrowed(field)
    }
}

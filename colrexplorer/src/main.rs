//! Print the color glyph tables of a font.
//!
//! Only COLR version 0 layers and the first CPAL palette are shown.

use std::io::Write;

use read_colr::{types::GlyphId16, ColorTables, FontRef, ReadError};

mod json;
mod print;

fn main() -> Result<(), Error> {
    env_logger::init();
    let args = flags::Args::from_env().map_err(Error::new)?;
    let bytes = std::fs::read(&args.input)
        .map_err(|e| Error(format!("failed to read '{}': {e}", args.input.display())))?;
    let font = FontRef::new(&bytes)?;
    let mut stdout = std::io::stdout().lock();

    if args.list {
        return print::list_tables(&mut stdout, &font).map_err(Error::new);
    }

    let Some(tables) = ColorTables::from_font(&font)? else {
        return writeln!(stdout, "no color glyphs").map_err(Error::new);
    };
    let filter = GlyphFilter::from_args(&args, &tables)?;
    if args.json {
        json::print_json(&mut stdout, &tables, &filter).map_err(Error::new)
    } else {
        print::print_summary(&mut stdout, &tables, &filter).map_err(Error::new)
    }
}

/// Which base glyphs to print.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GlyphFilter {
    All,
    Only(GlyphId16),
}

impl GlyphFilter {
    fn from_args(args: &flags::Args, tables: &ColorTables) -> Result<Self, Error> {
        let Some(gid) = args.glyph.map(GlyphId16::new) else {
            return Ok(GlyphFilter::All);
        };
        if tables.base_glyph(gid).is_none() {
            return Err(Error(format!("{gid} is not a color glyph")));
        }
        Ok(GlyphFilter::Only(gid))
    }

    fn should_print(&self, gid: GlyphId16) -> bool {
        match self {
            GlyphFilter::All => true,
            GlyphFilter::Only(only) => *only == gid,
        }
    }
}

#[derive(Debug, Clone)]
struct Error(String);

impl Error {
    fn new(t: impl std::fmt::Display) -> Self {
        Self(t.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for Error {}

impl From<ReadError> for Error {
    fn from(err: ReadError) -> Self {
        Error::new(err)
    }
}

mod flags {
    use std::path::PathBuf;

    xflags::xflags! {
        /// Print the layers and palette of a COLR/CPAL color font
        cmd args {
            required input: PathBuf
                /// print the table directory
                optional -l, --list
                /// only print the base glyph with this id
                optional -g, --glyph gid: u16
                /// print the decoded tables as JSON
                optional --json
            }
    }
}

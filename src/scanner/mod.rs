/* Copyright (C) 2022 Antmicro
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     https://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

/* Pin maps are free-form text files (usually HDL sources) with annotations like:
 *
 *     // @MAP_IO LED_RED 5
 *
 * Everything else is ignored.
 */


use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use regex::Regex;

use crate::error::Error;
use crate::pcf::PcfWriter;
use crate::pin_table::PinTable;
#[allow(unused)]
use crate::log::*;

lazy_static! {
    static ref MAP_IO_RE: Regex =
        Regex::new(r"@MAP_IO[ \t]+([A-Za-z_][A-Za-z_0-9]*)[ \t]+([0-9]+)").unwrap();
}

/// A `@MAP_IO <NAME> <INDEX>` annotation. Borrows from the line it was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapDirective<'l> {
    pub name: &'l str,
    /* Kept as text so that absurdly long indices get reported instead of dropped */
    pub index: &'l str,
}

/// Finds the first directive in a line. The match is not anchored, so the annotation
/// can sit inside a comment.
pub fn parse_directive<'l>(line: &'l str) -> Option<MapDirective<'l>> {
    let caps = MAP_IO_RE.captures(line)?;
    Some(MapDirective {
        name: caps.get(1)?.as_str(),
        index: caps.get(2)?.as_str(),
    })
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConvertStats {
    pub aliases: usize,
    pub directives: usize,
    pub lines: usize,
}

impl ConvertStats {
    pub fn constraints(&self) -> usize {
        self.aliases + self.directives
    }
}

/// Writes the aliases of `table`, then one constraint for every directive in `input`,
/// in input order. The first out of range index aborts the conversion; whatever was
/// written before it stays in `output`.
pub fn convert<R, W>(table: &PinTable, input: R, output: W) -> Result<ConvertStats, Error>
where
    R: BufRead,
    W: Write,
{
    convert_streams(table, input, Path::new("<input>"), output, Path::new("<output>"))
}

/// Converts the pin map at `input` into a constraint file at `output`.
///
/// The input is opened before the output gets truncated, so a bad input path leaves
/// an existing constraint file untouched.
pub fn convert_file(table: &PinTable, input: &Path, output: &Path)
    -> Result<ConvertStats, Error>
{
    let pinmap = File::open(input).map_err(Error::file_access(input))?;
    let pcf = File::create(output).map_err(Error::file_access(output))?;

    dbg_log!(DBG_INFO, "Converting {} into {}", input.display(), output.display());

    convert_streams(table, BufReader::new(pinmap), input, pcf, output)
}

fn convert_streams<R, W>(
    table: &PinTable,
    input: R,
    input_path: &Path,
    output: W,
    output_path: &Path
) -> Result<ConvertStats, Error>
where
    R: BufRead,
    W: Write,
{
    let mut pcf = PcfWriter::new(output);
    let mut stats = ConvertStats::default();

    for alias in table.aliases() {
        pcf.write_constraint(alias.name, alias.pin)
            .map_err(Error::file_access(output_path))?;
        stats.aliases += 1;
    }

    for (line_idx, line) in input.lines().enumerate() {
        let line = line.map_err(Error::file_access(input_path))?;
        stats.lines += 1;

        let directive = match parse_directive(&line) {
            Some(directive) => directive,
            None => continue,
        };

        let pin = table.resolve(&directive, line_idx + 1)?;
        dbg_log!(
            DBG_EXTRA,
            "line {}: {} -> logical {} -> physical {}",
            line_idx + 1, directive.name, directive.index, pin
        );

        pcf.write_constraint(directive.name, pin)
            .map_err(Error::file_access(output_path))?;
        stats.directives += 1;
    }

    pcf.finish().map_err(Error::file_access(output_path))?;

    dbg_log!(
        DBG_INFO,
        "Scanned {} lines, wrote {} constraints",
        stats.lines, stats.constraints()
    );

    Ok(stats)
}

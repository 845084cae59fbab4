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

use std::io::{BufWriter, Write};

/// Name of the constraint file, created in the current working directory.
pub const PCF_FILE_NAME: &'static str = "pinmap.pcf";

/// Streams `set_io` constraints. Nothing is accumulated besides the write buffer.
pub struct PcfWriter<W> where W: Write {
    out: BufWriter<W>,
}

impl<W> PcfWriter<W> where W: Write {
    pub fn new(out: W) -> Self {
        Self { out: BufWriter::new(out) }
    }

    pub fn write_constraint(&mut self, name: &str, pin: u32) -> std::io::Result<()> {
        writeln!(self.out, "set_io --warn-no-port {} {}", name, pin)
    }

    /* Dropping the writer also flushes, but swallows the error. */
    pub fn finish(self) -> std::io::Result<W> {
        self.out.into_inner().map_err(|e| e.into_error())
    }
}

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

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /* Not fatal: reported on stdout, no output is produced */
    #[error("Missing input file")]
    MissingInput,
    #[error("cannot access {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(
        "line {line}: logical pin {index} of port {name} is out of range \
         (pin table has {len} entries)"
    )]
    IndexOutOfRange {
        line: usize,
        name: String,
        index: String,
        len: usize,
    },
}

impl Error {
    pub fn file_access<P>(path: P) -> impl FnOnce(std::io::Error) -> Self
        where P: Into<PathBuf>
    {
        move |source| Self::FileAccess { path: path.into(), source }
    }
}

// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fs;
use std::fs::File;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::Error;
use crate::sink::Sink;

/// A sink that appends rendered records to a single file.
///
/// # Examples
///
/// ```no_run
/// use logward::sink::FileSink;
///
/// let sink = FileSink::builder("logs/app.log").build().unwrap();
/// ```
#[derive(Debug)]
pub struct FileSink {
    file: File,
}

impl FileSink {
    /// Returns a new builder for the given file path.
    pub fn builder(filepath: impl Into<PathBuf>) -> FileSinkBuilder {
        FileSinkBuilder {
            filepath: filepath.into(),
        }
    }
}

impl Sink for FileSink {
    fn write(&self, bytes: &[u8]) -> Result<(), Error> {
        (&self.file).write_all(bytes).map_err(Error::from_io_error)
    }

    fn flush(&self) -> Result<(), Error> {
        (&self.file).flush().map_err(Error::from_io_error)
    }

    fn close(&self) -> Result<(), Error> {
        self.file.sync_all().map_err(Error::from_io_error)
    }
}

/// A builder for configuring [`FileSink`].
#[derive(Debug)]
pub struct FileSinkBuilder {
    // required
    filepath: PathBuf,
}

impl FileSinkBuilder {
    /// Open the file and build the [`FileSink`].
    ///
    /// Missing parent directories are created; the file is opened in
    /// append-or-create mode.
    pub fn build(self) -> Result<FileSink, Error> {
        if let Some(dir) = self.filepath.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir).map_err(|err| {
                    Error::new("failed to create log directory").with_source(err)
                })?;
            }
        }
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.filepath)
            .map_err(|err| Error::new("failed to open log file").with_source(err))?;
        Ok(FileSink { file })
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;
    use rand::distr::Alphanumeric;
    use tempfile::NamedTempFile;
    use tempfile::tempdir;

    use super::*;

    fn generate_random_string() -> String {
        let mut rng = rand::rng();
        let len = rng.random_range(50..=100);
        std::iter::repeat(())
            .map(|()| rng.sample(Alphanumeric))
            .map(char::from)
            .take(len)
            .collect()
    }

    #[test]
    fn test_append_to_file() {
        let temp_file = NamedTempFile::new().expect("failed to create a temporary file");
        let sink = FileSink::builder(temp_file.path()).build().unwrap();

        let rand_str = generate_random_string();
        sink.write(rand_str.as_bytes()).unwrap();
        sink.write(b"\n").unwrap();
        sink.close().unwrap();

        let written = fs::read_to_string(temp_file.path()).unwrap();
        assert_eq!(written, format!("{rand_str}\n"));
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = tempdir().expect("failed to create a temporary directory");
        let path = dir.path().join("nested/deeper/app.log");

        let sink = FileSink::builder(&path).build().unwrap();
        sink.write(b"hello\n").unwrap();
        sink.close().unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "hello\n");
    }
}

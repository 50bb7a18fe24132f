//! # Line Sources
//!
//! A [`LineSource`] hands the parser one line at a time, without its
//! terminator, and can be rewound so a counting pass and a parse pass see the
//! same input.
//!
//! - [`StrSource`] walks text that is already in memory
//! - [`ReaderSource`] reads incrementally from any buffered, seekable reader;
//!   [`FileSource`] is the file-backed flavour

use std::fs::File;
use std::io::{self, BufRead, BufReader, Seek, SeekFrom};
use std::path::Path;

/// Sequential, rewindable access to lines of text.
pub trait LineSource {
    /// Next line with `\n` / `\r\n` stripped, or `None` at end of input.
    fn next_line(&mut self) -> Option<io::Result<&str>>;

    /// Restart iteration from the first line.
    fn rewind(&mut self) -> io::Result<()>;
}

impl<S: LineSource + ?Sized> LineSource for &mut S {
    fn next_line(&mut self) -> Option<io::Result<&str>> {
        (**self).next_line()
    }

    fn rewind(&mut self) -> io::Result<()> {
        (**self).rewind()
    }
}

fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Lines of a string held in memory.
#[derive(Debug, Clone)]
pub struct StrSource<'a> {
    text: &'a str,
    offset: usize,
}

impl<'a> StrSource<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, offset: 0 }
    }
}

impl<'a> LineSource for StrSource<'a> {
    fn next_line(&mut self) -> Option<io::Result<&str>> {
        let rest = self.text.get(self.offset..).filter(|r| !r.is_empty())?;
        let end = rest.find('\n').map_or(rest.len(), |i| i + 1);
        self.offset += end;
        Some(Ok(strip_terminator(&rest[..end])))
    }

    fn rewind(&mut self) -> io::Result<()> {
        self.offset = 0;
        Ok(())
    }
}

/// Lines read incrementally from a buffered reader that can seek back to the start.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
    buffer: String,
}

/// A [`ReaderSource`] over a file on disk.
pub type FileSource = ReaderSource<BufReader<File>>;

impl FileSource {
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead + Seek> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: String::new(),
        }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead + Seek> LineSource for ReaderSource<R> {
    fn next_line(&mut self) -> Option<io::Result<&str>> {
        self.buffer.clear();
        match self.reader.read_line(&mut self.buffer) {
            Ok(0) => None,
            Ok(_) => Some(Ok(strip_terminator(&self.buffer))),
            Err(e) => Some(Err(e)),
        }
    }

    fn rewind(&mut self) -> io::Result<()> {
        self.reader.seek(SeekFrom::Start(0))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collect(source: &mut impl LineSource) -> Vec<String> {
        let mut lines = Vec::new();
        while let Some(line) = source.next_line() {
            lines.push(line.unwrap().to_string());
        }
        lines
    }

    const TEXT: &str = "v 1 2 3\r\nvn 0 1 0\n\no Roof\nf 1 1 1";

    #[test]
    fn test_str_source_strips_terminators() {
        let mut source = StrSource::new(TEXT);
        assert_eq!(
            collect(&mut source),
            vec!["v 1 2 3", "vn 0 1 0", "", "o Roof", "f 1 1 1"]
        );
    }

    #[test]
    fn test_str_source_trailing_newline() {
        let mut source = StrSource::new("a\nb\n");
        assert_eq!(collect(&mut source), vec!["a", "b"]);
        assert!(StrSource::new("").next_line().is_none());
    }

    #[test]
    fn test_rewind_replays_identical_lines() {
        let mut source = StrSource::new(TEXT);
        let first = collect(&mut source);
        source.rewind().unwrap();
        assert_eq!(collect(&mut source), first);

        let mut reader = ReaderSource::new(Cursor::new(TEXT.as_bytes()));
        let first_reader = collect(&mut reader);
        reader.rewind().unwrap();
        assert_eq!(collect(&mut reader), first_reader);
        assert_eq!(first_reader, first);
    }

    #[test]
    fn test_rewind_mid_iteration() {
        let mut reader = ReaderSource::new(Cursor::new(TEXT.as_bytes()));
        reader.next_line();
        reader.next_line();
        reader.rewind().unwrap();
        assert_eq!(reader.next_line().unwrap().unwrap(), "v 1 2 3");
    }

    #[test]
    fn test_reader_source_reports_invalid_utf8() {
        let mut reader = ReaderSource::new(Cursor::new(vec![b'v', b' ', 0xff, b'\n']));
        assert!(matches!(reader.next_line(), Some(Err(_))));
    }
}

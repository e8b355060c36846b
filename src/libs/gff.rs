//! Line-oriented GFF input and output.
//!
//! Only the columns needed for scheduling are parsed; the record itself is kept verbatim
//! so that selected features are written back unchanged.

use std::io::{BufRead, Write};

use crate::libs::interval::{GroupKey, Interval};
use crate::libs::schedule::ResolveError;

/// One feature line of a GFF file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub key: GroupKey,
    pub start: u64,
    pub finish: u64,
    pub weight: i64,
    /// The original line, terminator included when the input had one
    pub line: String,
}

impl Region {
    /// Parses a feature line. `line_no` is 1-based and only used for error reporting.
    ///
    /// ```
    /// # use gor::libs::gff::Region;
    /// let reg = Region::from_line("chr1\tsrc\tgene\t3\t8\t12\t-\t.\tID=b", 1).unwrap();
    /// assert_eq!(reg.key.to_string(), "chr1gene-");
    /// assert_eq!((reg.start, reg.finish, reg.weight), (3, 8, 12));
    ///
    /// assert!(Region::from_line("chr1\tsrc\tgene\t3\t8\t.\t-", 1).is_err());
    /// ```
    pub fn from_line(line: &str, line_no: usize) -> Result<Self, ResolveError> {
        let malformed = |reason: String| ResolveError::Malformed {
            line: line_no,
            record: line.trim_end_matches(['\n', '\r']).to_string(),
            reason,
        };

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 7 {
            return Err(malformed(format!(
                "expected at least 7 fields, found {}",
                fields.len()
            )));
        }

        let start: u64 = fields[3]
            .parse()
            .map_err(|_| malformed(format!("start '{}' is not a coordinate", fields[3])))?;
        let finish: u64 = fields[4]
            .parse()
            .map_err(|_| malformed(format!("end '{}' is not a coordinate", fields[4])))?;
        let weight: i64 = fields[5]
            .parse()
            .map_err(|_| malformed(format!("score '{}' is not an integer", fields[5])))?;

        if start > finish {
            return Err(malformed(format!("start {} is after end {}", start, finish)));
        }

        Ok(Self {
            key: GroupKey::new(fields[0], fields[2], fields[6]),
            start,
            finish,
            weight,
            line: line.to_string(),
        })
    }
}

impl Interval for Region {
    fn start(&self) -> u64 {
        self.start
    }
    fn finish(&self) -> u64 {
        self.finish
    }
    fn weight(&self) -> i64 {
        self.weight
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.line.ends_with('\n') {
            write!(f, "{}", self.line)
        } else {
            writeln!(f, "{}", self.line)
        }
    }
}

/// Iterates over the feature lines of a GFF stream.
///
/// Blank lines and lines starting with `#` (directives and comments) are skipped.
pub struct GffReader<R> {
    reader: R,
    line_no: usize,
}

impl<R: BufRead> GffReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, line_no: 0 }
    }
}

impl<R: BufRead> Iterator for GffReader<R> {
    type Item = Result<Region, ResolveError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut buf = String::new();
        loop {
            buf.clear();
            match self.reader.read_line(&mut buf) {
                Ok(0) => return None,
                Ok(_) => self.line_no += 1,
                Err(e) => return Some(Err(e.into())),
            }

            if buf.trim().is_empty() || buf.starts_with('#') {
                continue;
            }

            return Some(Region::from_line(&buf, self.line_no));
        }
    }
}

/// Reads every feature of a GFF stream, stopping at the first bad record.
pub fn read_regions<R: BufRead>(reader: R) -> Result<Vec<Region>, ResolveError> {
    GffReader::new(reader).collect()
}

/// Writes the `##gff-version` and `##date` directives that open a resolved file.
pub fn write_header<W: Write>(writer: &mut W, date: chrono::NaiveDate) -> std::io::Result<()> {
    writeln!(writer, "##gff-version 3")?;
    writeln!(writer, "##date {}", date.format("%Y-%m-%d"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_regions() {
        let input = "\
##gff-version 3
# a comment
chr1\tsrc\tgene\t1\t5\t10\t+\t.\tID=a

chr1  src  gene  3  8  12  +  .  ID=b\r
";
        let regions = read_regions(input.as_bytes()).unwrap();
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].line, "chr1\tsrc\tgene\t1\t5\t10\t+\t.\tID=a\n");
        assert_eq!(regions[1].line, "chr1  src  gene  3  8  12  +  .  ID=b\r\n");
        assert_eq!(regions[0].key, regions[1].key);
        assert_eq!(regions[1].weight, 12);
        // Written back byte for byte
        assert_eq!(regions[1].to_string(), "chr1  src  gene  3  8  12  +  .  ID=b\r\n");
    }

    #[test]
    fn test_last_line_without_terminator() {
        let input = "chr1\tsrc\tgene\t1\t5\t10\t+\t.\tID=a";
        let regions = read_regions(input.as_bytes()).unwrap();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].to_string(), format!("{}\n", input));
    }

    #[test]
    fn test_malformed_line_number() {
        let input = "\
# header
chr1\tsrc\tgene\t1\t5\t10\t+
chr1\tsrc\tgene\t1\tfive\t10\t+
";
        let err = read_regions(input.as_bytes()).unwrap_err();
        match err {
            ResolveError::Malformed { line, record, reason } => {
                assert_eq!(line, 3);
                assert!(record.contains("five"));
                assert!(!record.ends_with('\n'));
                assert!(reason.contains("end"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_malformed_records() {
        assert!(Region::from_line("chr1\tsrc\tgene\t1\t5\t10", 1).is_err());
        assert!(Region::from_line("chr1\tsrc\tgene\t-1\t5\t10\t+", 1).is_err());
        assert!(Region::from_line("chr1\tsrc\tgene\t9\t5\t10\t+", 1).is_err());
        assert!(Region::from_line("chr1\tsrc\tgene\t1\t5\t1.5\t+", 1).is_err());
        assert!(Region::from_line("chr1\tsrc\tgene\t1\t5\t-3\t+", 1).is_ok());
    }

    #[test]
    fn test_write_header() {
        let mut out = Vec::new();
        let date = chrono::NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        write_header(&mut out, date).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "##gff-version 3\n##date 2024-03-09\n"
        );
    }
}

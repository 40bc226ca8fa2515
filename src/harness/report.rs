//! Tab-separated report written to any `io::Write`.
//!
//! Each call flushes, so when a later benchmark fails the lines for the
//! earlier ones are already out.

use std::io::Write;

use super::timing::Measurement;
use crate::diagnostics::Diagnostics;
use crate::error::HarnessResult;

pub const HEADER: &str = "benchmark\titerations\taverage time";

const DIAGNOSTICS_PREAMBLE: &str = "This was obtained using the following ndarray configuration:";

/// `name\titerations\tavg ms/op`, average to two decimals.
pub fn format_line(measurement: &Measurement) -> String {
    format!(
        "{}\t{}\t{:.2} ms/op",
        measurement.name,
        measurement.iterations,
        measurement.average_ms()
    )
}

pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn header(&mut self) -> HarnessResult<()> {
        writeln!(self.out, "{HEADER}")?;
        self.out.flush()?;
        Ok(())
    }

    pub fn line(&mut self, measurement: &Measurement) -> HarnessResult<()> {
        writeln!(self.out, "{}", format_line(measurement))?;
        self.out.flush()?;
        Ok(())
    }

    /// Blank line, a one-sentence preamble, then the library's own text
    /// untouched.
    pub fn diagnostics(&mut self, diagnostics: &dyn Diagnostics) -> HarnessResult<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{DIAGNOSTICS_PREAMBLE}")?;
        write!(self.out, "{}", diagnostics.describe())?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    struct Fixed;

    impl Diagnostics for Fixed {
        fn describe(&self) -> String {
            "opaque: yes\n".to_string()
        }
    }

    fn measurement(name: &str, iterations: u32, millis: u64) -> Measurement {
        Measurement {
            name: name.to_string(),
            iterations,
            elapsed: Duration::from_millis(millis),
        }
    }

    #[test]
    fn test_line_format() {
        assert_eq!(
            format_line(&measurement("add(A, B)", 100, 1234)),
            "add(A, B)\t100\t12.34 ms/op"
        );
        assert_eq!(
            format_line(&measurement("dot(A, B)", 3, 1)),
            "dot(A, B)\t3\t0.33 ms/op"
        );
    }

    #[test]
    fn test_line_has_three_fields() {
        let line = format_line(&measurement("sigmoid(A)", 50, 500));
        let fields: Vec<&str> = line.split('\t').collect();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[1].parse::<u32>().unwrap(), 50);
        assert_eq!(fields[2], "10.00 ms/op");
    }

    #[test]
    fn test_full_report_layout() {
        let mut reporter = Reporter::new(Vec::new());
        reporter.header().unwrap();
        reporter.line(&measurement("a", 2, 4)).unwrap();
        reporter.diagnostics(&Fixed).unwrap();
        let text = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(
            text,
            "benchmark\titerations\taverage time\n\
             a\t2\t2.00 ms/op\n\
             \n\
             This was obtained using the following ndarray configuration:\n\
             opaque: yes\n"
        );
    }
}

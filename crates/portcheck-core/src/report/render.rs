//! Text rendering of diagnostics.
//!
//! Entries are separated by one empty line. Each starts with
//! `<os>/<arch> using <tool>` followed by the tool's message verbatim.

use std::io::{self, Write};

use crate::report::model::{Diagnostic, Report};

/// Write the `index`-th diagnostic of a run.
pub fn write_diagnostic<W: Write + ?Sized>(
    out: &mut W,
    index: usize,
    diagnostic: &Diagnostic,
    verifier: &str,
) -> io::Result<()> {
    if index > 0 {
        out.write_all(b"\n")?;
    }
    writeln!(out, "{} using {}", diagnostic.platform, verifier)?;
    out.write_all(&diagnostic.message)?;
    out.write_all(b"\n")
}

pub fn render_text(report: &Report) -> Vec<u8> {
    let mut out = Vec::new();
    for (i, d) in report.diagnostics.iter().enumerate() {
        // Writing into a Vec cannot fail.
        let _ = write_diagnostic(&mut out, i, d, &report.tool.verifier);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::model::ToolInfo;
    use crate::rules::catalog::RuleId;
    use crate::verify::mode::Mode;

    fn diag(p: &str, msg: &str) -> Diagnostic {
        Diagnostic {
            platform: p.parse().unwrap(),
            rule: RuleId::PackageDiagnostic,
            message: msg.as_bytes().to_vec(),
        }
    }

    #[test]
    fn renders_entries_with_blank_line_separator() {
        let report = Report::new(
            ToolInfo {
                name: "portcheck".into(),
                version: "0.1.0".into(),
                verifier: "go".into(),
            },
            Mode::Analyze,
            false,
            3,
            vec![
                diag("linux/amd64", "# pkg\nfoo.go:3: bad\n"),
                diag("windows/386", "# pkg\nbar.go:9: worse\n"),
            ],
        );

        let text = String::from_utf8(render_text(&report)).unwrap();
        assert_eq!(
            text,
            "linux/amd64 using go\n# pkg\nfoo.go:3: bad\n\n\
             \n\
             windows/386 using go\n# pkg\nbar.go:9: worse\n\n"
        );
    }

    #[test]
    fn clean_report_renders_nothing() {
        let report = Report::new(
            ToolInfo {
                name: "portcheck".into(),
                version: "0.1.0".into(),
                verifier: "go".into(),
            },
            Mode::Analyze,
            false,
            0,
            vec![],
        );
        assert!(render_text(&report).is_empty());
    }
}

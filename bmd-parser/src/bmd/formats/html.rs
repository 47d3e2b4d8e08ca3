//! HTML output
//!
//!     Every node renders itself through [`ToHtml::write_html`], writing into a shared
//!     [`HtmlWriter`]. Composite nodes write their opening markup, let their children write
//!     theirs and close. The output is a fragment: no `<html>` or `<body>` wrapper.
//!
//! Line numbers
//!
//!     The writer knows the source line of the node currently writing (nodes call
//!     [`HtmlWriter::at_line`] before writing). In line numbered mode, each output line is
//!     prefixed with that line, zero padded to four digits, and a tab:
//!
//!         0001	<H1 id="title">Title</H1>
//!         0003	<p>Some text.</p>
//!
//!     The prefix is always four digits: from line 10000 on only the last four are kept.
//!
//!     In plain mode the line bookkeeping is ignored and the output is exactly the HTML.

const LINE_PREFIX_MODULUS: usize = 10_000;

/// Something that renders itself as an HTML fragment.
pub trait ToHtml {
    fn write_html(&self, out: &mut HtmlWriter);

    fn to_html(&self) -> String {
        let mut out = HtmlWriter::new();
        self.write_html(&mut out);
        out.finish()
    }
}

/// Output buffer for HTML rendering, optionally prefixing lines with source line numbers.
#[derive(Debug)]
pub struct HtmlWriter {
    buffer: String,
    line_numbers: bool,
    source_line: usize,
    at_line_start: bool,
}

impl HtmlWriter {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            line_numbers: false,
            source_line: 0,
            at_line_start: true,
        }
    }

    /// A writer that prefixes every output line with `NNNN\t`, the source line of the node
    /// that started the output line.
    pub fn with_line_numbers() -> Self {
        Self {
            line_numbers: true,
            ..Self::new()
        }
    }

    /// Attribute the following output to source line `line`.
    pub fn at_line(&mut self, line: usize) -> &mut Self {
        self.source_line = line;
        self
    }

    pub fn source_line(&self) -> usize {
        self.source_line
    }

    pub fn write(&mut self, text: &str) -> &mut Self {
        if !self.line_numbers {
            self.buffer.push_str(text);
            return self;
        }
        for segment in text.split_inclusive('\n') {
            if self.at_line_start {
                self.buffer
                    .push_str(&format!("{:04}\t", self.source_line % LINE_PREFIX_MODULUS));
            }
            self.buffer.push_str(segment);
            self.at_line_start = segment.ends_with('\n');
        }
        self
    }

    /// Write multi line text whose lines map one to one onto source lines, starting at
    /// `first_line`.
    pub fn write_lines(&mut self, text: &str, first_line: usize) -> &mut Self {
        for (offset, segment) in text.split_inclusive('\n').enumerate() {
            self.at_line(first_line + offset);
            self.write(segment);
        }
        self
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn finish(self) -> String {
        self.buffer
    }
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

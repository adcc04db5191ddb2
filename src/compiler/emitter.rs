//! Two-section output accumulator
//!
//! The parser appends generated C text as it recognises productions. Global
//! declarations may be discovered at any point during the body, so they go
//! to a separate header section which always precedes the body in the
//! finished output.

#[derive(Debug, Default)]
pub struct Emitter {
    header: String,
    code: String,
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append to the body without a newline.
    pub fn emit(&mut self, text: &str) {
        self.code.push_str(text);
    }

    /// Append to the body, then end the line.
    pub fn emit_line(&mut self, text: &str) {
        self.code.push_str(text);
        self.code.push('\n');
    }

    /// Append a full line to the header section.
    pub fn header_line(&mut self, text: &str) {
        self.header.push_str(text);
        self.header.push('\n');
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Header followed by body.
    pub fn finalize(self) -> String {
        let mut output = self.header;
        output.push_str(&self.code);
        output
    }
}

/// C spelling of a BASIC variable.
///
/// BASIC names never contain `_`, so the prefix keeps every variable clear
/// of C keywords and of the names `<stdio.h>` declares.
pub fn variable(name: &str) -> String {
    format!("v_{}", name)
}

/// C spelling of a BASIC label, prefixed for the same reason as variables.
pub fn label(name: &str) -> String {
    format!("l_{}", name)
}

/// C spelling of a NUMBER token: always a decimal floating constant.
///
/// `7` would be an `int` in C and `010` an octal one, so digits without a
/// point get `.0` appended.
pub fn number(text: &str) -> String {
    if text.contains('.') {
        text.to_string()
    } else {
        format!("{}.0", text)
    }
}

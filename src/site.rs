use std::fmt;

/// Source provenance for a call site or a definition.
///
/// Generated code embeds one of these per fallible operation so thrown
/// payloads can name the source file and line that raised them. The runtime
/// uses sentinel sites for its own origins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Site {
    pub file: &'static str,
    pub line: u32,
}

impl Site {
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Marks an operation raised from inside the runtime itself.
    pub const fn internal() -> Self {
        Self::new("<runtime>", 0)
    }

    /// Marks the driver's outermost invocation boundary.
    pub const fn entry() -> Self {
        Self::new("<entry>", 0)
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

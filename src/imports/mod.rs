//! Habit 1: polluting a function (or a whole file) with glob imports.
//!
//! `use std::io::*;` drags every public name of the module into scope, including
//! innocent-looking ones like `Result` and `Error` that shadow the prelude's. Qualify the
//! paths, or import exactly the handful of names the code calls for.


/// Glob-imports the whole of [`std::io`] inside the function body.
pub mod bad {
    pub fn greet() -> std::io::Result<()> {
        use std::io::*;

        // `Result` and `Error` in this scope are now `std::io`'s, not the prelude's.
        let s = String::from("hello, world!");
        let mut out = stdout();
        out.write_all(s.as_bytes())?;
        out.write_all(b"\n")?;
        out.flush()
    }
}

/// No imports at all: every path spelled out, trait methods in fully-qualified form.
pub mod good {
    pub fn greet() -> std::io::Result<()> {
        let s = String::from("hello, world!");
        let mut out = std::io::stdout();
        std::io::Write::write_all(&mut out, s.as_bytes())?;
        std::io::Write::write_all(&mut out, b"\n")?;
        std::io::Write::flush(&mut out)
    }
}

/// Selective imports: just the names the function actually uses.
pub mod better {
    use std::io::{self, Write};

    pub fn greet() -> io::Result<()> {
        let s = String::from("hello, world!");
        let mut out = io::stdout();
        out.write_all(s.as_bytes())?;
        out.write_all(b"\n")?;
        out.flush()
    }
}

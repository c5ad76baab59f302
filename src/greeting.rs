//! The greeting behind `hello <name>`

use std::io::{self, Write};

/// Build the greeting for `name`.
pub fn greet(name: &str) -> String {
    format!("Hello, {}!", name)
}

/// Write the greeting for `name`, newline terminated.
pub fn say_hello<W: Write + ?Sized>(name: &str, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", greet(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("World", "Hello, World!")]
    #[case("Ada Lovelace", "Hello, Ada Lovelace!")]
    #[case("ünïcödé", "Hello, ünïcödé!")]
    fn greets(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(greet(name), expected);
    }

    #[test]
    fn say_hello_writes_one_line() {
        let mut out = Vec::new();
        say_hello("World", &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Hello, World!\n");
    }
}

//! Demonstration driver for the `copse` search trees.
//!
//! Reads whitespace-separated keys from standard input, inserts each with its zero-based input
//! position as the value, and prints the shape of the resulting tree: the keys in level order
//! and in ascending order (each with the height of its subtree), then the leaf keys.

use std::io::{self, Write};

use copse::StringMap;

fn run(input: &str, out: &mut impl Write) -> io::Result<()> {
    let mut tree = StringMap::new();
    for (index, token) in input.split_whitespace().enumerate() {
        tree.set(token, index);
    }

    writeln!(out, "Tree printed in level order, showing keys and heights:")?;
    for key in tree.level_order() {
        writeln!(out, "{} {}", key, tree.height_of(key))?;
    }
    writeln!(out)?;

    writeln!(out, "Tree printed in order, showing keys and heights:")?;
    for key in tree.keys() {
        writeln!(out, "{} {}", key, tree.height_of(key))?;
    }
    writeln!(out)?;

    writeln!(out, "Leaf keys printed in order:")?;
    for key in tree.leaves() {
        write!(out, "{} ", key)?;
    }
    writeln!(out)?;

    Ok(())
}

fn main() -> io::Result<()> {
    let input = io::read_to_string(io::stdin())?;
    run(&input, &mut io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn reports_tree_shape() {
        let mut out = Vec::new();
        run("S E A R C H", &mut out).unwrap();

        let expected = "\
Tree printed in level order, showing keys and heights:
S 3
E 2
A 1
R 1
C 0
H 0

Tree printed in order, showing keys and heights:
A 1
C 0
E 2
H 0
R 1
S 3

Leaf keys printed in order:
C H \n";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn empty_input_reports_empty_tree() {
        let mut out = Vec::new();
        run("", &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Tree printed in level order"));
        assert!(text.ends_with("Leaf keys printed in order:\n\n"));
    }
}

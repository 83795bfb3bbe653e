#![no_main]

use libfuzzer_sys::fuzz_target;
use treezip_core::tree::node_count;
use treezip_core::{Direction, Term, ZipTree, Zipper, zip};

fn leaf_for(tag: u8, value: u8) -> Term {
    match tag % 4 {
        0 => Term::int(i64::from(value)),
        1 => Term::atom(format!("a{value}")),
        2 => Term::text(format!("süß-{value}")),
        _ => Term::list(vec![]),
    }
}

fn seed() -> Term {
    Term::call(
        "Add",
        vec![
            Term::int(1),
            Term::call("Mul", vec![Term::int(2), Term::int(3)]),
            Term::pair(Term::atom("k"), Term::block(vec![Term::int(4)])),
        ],
    )
}

/// Nodes added by giving `node` one more leaf child. A leaf turns into a
/// block holding itself and the new child.
fn child_growth(node: &Term) -> usize {
    if node.is_branch() { 1 } else { 2 }
}

fn check(z: &Zipper<Term>, expected_nodes: usize) {
    let tree = z.root();
    assert_eq!(node_count(&tree), expected_nodes, "node count drifted");

    let mut climbed = z.clone();
    let mut steps = 0;
    while let Some(parent) = climbed.up() {
        climbed = parent;
        steps += 1;
        assert!(steps <= z.depth(), "up chain longer than depth");
    }
    assert!(climbed.is_root());
    assert_eq!(steps, z.depth());
    assert_eq!(z.route().len(), z.depth());

    if let Some(child) = z.down() {
        assert_eq!(&child.up().expect("child has parent"), z);
    }
}

fuzz_target!(|data: &[u8]| {
    if data.len() > 16_384 {
        return;
    }

    let mut z = zip(seed());
    let mut nodes = node_count(z.node());

    for chunk in data.chunks(3) {
        let [op, tag, value] = match chunk {
            [a, b, c] => [*a, *b, *c],
            _ => break,
        };

        z = match op % 14 {
            0 => z.down().unwrap_or(z),
            1 => z.up().unwrap_or(z),
            2 => z.left().unwrap_or(z),
            3 => z.right().unwrap_or(z),
            4 => z.next().unwrap_or_else(|| z.top()),
            5 => z.prev().unwrap_or(z),
            6 => z.skip(Direction::Next).unwrap_or_else(|| z.top()),
            7 => {
                let leaf = leaf_for(tag, value);
                nodes = nodes - node_count(z.node()) + 1;
                z.replace(leaf)
            }
            8 => match z.remove() {
                Ok(next) => {
                    nodes -= node_count(z.node());
                    next
                }
                Err(_) => {
                    assert!(z.is_root());
                    z
                }
            },
            9 => match z.insert_left(leaf_for(tag, value)) {
                Ok(next) => {
                    nodes += 1;
                    next
                }
                Err(_) => z,
            },
            10 => match z.insert_right(leaf_for(tag, value)) {
                Ok(next) => {
                    nodes += 1;
                    next
                }
                Err(_) => z,
            },
            11 => {
                nodes += child_growth(z.node());
                z.append_child(leaf_for(tag, value))
            }
            12 => {
                nodes += child_growth(z.node());
                z.insert_child(leaf_for(tag, value))
            }
            _ => {
                let (out, visited) = z.traverse_with(0_usize, |z, n| (z, n + 1));
                assert_eq!(visited, node_count(z.node()));
                out
            }
        };

        check(&z, nodes);
    }

    let rebuilt = z.root();
    assert_eq!(zip(rebuilt.clone()).iter().count(), nodes);
    assert_eq!(z.top().into_node(), rebuilt);
});
